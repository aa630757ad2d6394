//! Identity and access management schema: realms, clients, users, roles, groups, sessions,
//! identity brokering, user federation and fine-grained authorization.
//!
//! Ids are opaque strings generated by the owning application. Times are epoch integers.

// Realms.

crate::table! {
    pub struct Realm in "realm" at "realm" {
        key: ["id"],
        id: String => Text,
        access_code_lifespan: Option<i32> => Int,
        user_action_lifespan: Option<i32> => Int,
        access_token_lifespan: Option<i32> => Int,
        account_theme: Option<String> => Text,
        admin_theme: Option<String> => Text,
        email_theme: Option<String> => Text,
        enabled: bool => Bool,
        events_enabled: bool => Bool,
        events_expiration: Option<i64> => BigInt,
        login_theme: Option<String> => Text,
        name: Option<String> => Text,
        not_before: Option<i32> => Int,
        password_policy: Option<String> => Text,
        registration_allowed: bool => Bool,
        remember_me: bool => Bool,
        reset_password_allowed: bool => Bool,
        social: bool => Bool,
        ssl_required: Option<String> => Text,
        sso_idle_timeout: Option<i32> => Int,
        sso_max_lifespan: Option<i32> => Int,
        update_profile_on_soc_login: bool => Bool,
        verify_email: bool => Bool,
        master_admin_client: Option<String> => Text,
        login_lifespan: Option<i32> => Int,
        internationalization_enabled: bool => Bool,
        default_locale: Option<String> => Text,
        reg_email_as_username: bool => Bool,
        admin_events_enabled: bool => Bool,
        admin_events_details_enabled: bool => Bool,
        edit_username_allowed: bool => Bool,
        otp_policy_counter: Option<i32> => Int,
        otp_policy_window: Option<i32> => Int,
        otp_policy_period: Option<i32> => Int,
        otp_policy_digits: Option<i32> => Int,
        otp_policy_alg: Option<String> => Text,
        otp_policy_type: Option<String> => Text,
        browser_flow: Option<String> => Text,
        registration_flow: Option<String> => Text,
        direct_grant_flow: Option<String> => Text,
        reset_credentials_flow: Option<String> => Text,
        client_auth_flow: Option<String> => Text,
        offline_session_idle_timeout: Option<i32> => Int,
        revoke_refresh_token: bool => Bool,
        access_token_life_implicit: Option<i32> => Int,
        login_with_email_allowed: bool => Bool,
        duplicate_emails_allowed: bool => Bool,
        docker_auth_flow: Option<String> => Text,
        refresh_token_max_reuse: Option<i32> => Int,
        allow_user_managed_access: bool => Bool,
        sso_max_lifespan_remember_me: i32 => Int,
        sso_idle_timeout_remember_me: i32 => Int,
        default_role: Option<String> => Text,
    }
}

crate::table! {
    pub struct RealmAttribute in "realm_attribute" at "realm_attribute" {
        key: ["name", "realm_id"],
        name: String => Text,
        realm_id: String => Text,
        value: Option<String> => Text,
    }
}

crate::table! {
    pub struct RealmRequiredCredential in "realm_required_credential" at "realm_required_credential" {
        key: ["realm_id", "type"],
        kind as "type": String => Text,
        form_label: Option<String> => Text,
        input: bool => Bool,
        secret: bool => Bool,
        realm_id: String => Text,
    }
}

crate::table! {
    pub struct RealmSmtpConfig in "realm_smtp_config" at "realm_smtp_config" {
        key: ["realm_id", "name"],
        realm_id: String => Text,
        value: Option<String> => Text,
        name: String => Text,
    }
}

crate::table! {
    pub struct RealmEnabledEventType in "realm_enabled_event_types" at "realm_enabled_event_types" {
        key: ["realm_id", "value"],
        realm_id: String => Text,
        value: String => Text,
    }
}

crate::table! {
    pub struct RealmEventsListener in "realm_events_listeners" at "realm_events_listeners" {
        key: ["realm_id", "value"],
        realm_id: String => Text,
        value: String => Text,
    }
}

crate::table! {
    pub struct RealmSupportedLocale in "realm_supported_locales" at "realm_supported_locales" {
        key: ["realm_id", "value"],
        realm_id: String => Text,
        value: String => Text,
    }
}

crate::table! {
    pub struct RealmDefaultGroup in "realm_default_groups" at "realm_default_groups" {
        key: ["realm_id", "group_id"],
        realm_id: String => Text,
        group_id: String => Text,
    }
}

crate::table! {
    pub struct RealmLocalization in "realm_localizations" at "realm_localizations" {
        key: ["realm_id", "locale"],
        realm_id: String => Text,
        locale: String => Text,
        texts: String => Text,
    }
}

// Clients and client scopes.

crate::table! {
    pub struct Client in "client" at "client" {
        key: ["id"],
        id: String => Text,
        enabled: bool => Bool,
        full_scope_allowed: bool => Bool,
        client_id: Option<String> => Text,
        not_before: Option<i32> => Int,
        public_client: bool => Bool,
        secret: Option<String> => Text,
        base_url: Option<String> => Text,
        bearer_only: bool => Bool,
        management_url: Option<String> => Text,
        surrogate_auth_required: bool => Bool,
        realm_id: Option<String> => Text,
        protocol: Option<String> => Text,
        node_rereg_timeout: Option<i32> => Int,
        frontchannel_logout: bool => Bool,
        consent_required: bool => Bool,
        name: Option<String> => Text,
        service_accounts_enabled: bool => Bool,
        client_authenticator_type: Option<String> => Text,
        root_url: Option<String> => Text,
        description: Option<String> => Text,
        registration_token: Option<String> => Text,
        standard_flow_enabled: bool => Bool,
        implicit_flow_enabled: bool => Bool,
        direct_access_grants_enabled: bool => Bool,
        always_display_in_console: bool => Bool,
    }
}

crate::table! {
    pub struct ClientAttribute in "client_attributes" at "client_attributes" {
        key: ["client_id", "name"],
        client_id: String => Text,
        name: String => Text,
        value: Option<String> => Text,
    }
}

crate::table! {
    pub struct ClientAuthFlowBinding in "client_auth_flow_bindings" at "client_auth_flow_bindings" {
        key: ["client_id", "binding_name"],
        client_id: String => Text,
        flow_id: Option<String> => Text,
        binding_name: String => Text,
    }
}

crate::table! {
    pub struct ClientInitialAccess in "client_initial_access" at "client_initial_access" {
        key: ["id"],
        id: String => Text,
        realm_id: String => Text,
        timestamp: Option<i32> => Int,
        expiration: Option<i32> => Int,
        count: Option<i32> => Int,
        remaining_count: Option<i32> => Int,
    }
}

crate::table! {
    pub struct ClientNodeRegistration in "client_node_registrations" at "client_node_registrations" {
        key: ["client_id", "name"],
        client_id: String => Text,
        value: Option<i32> => Int,
        name: String => Text,
    }
}

crate::table! {
    pub struct ClientScope in "client_scope" at "client_scope" {
        key: ["id"],
        id: String => Text,
        name: Option<String> => Text,
        realm_id: Option<String> => Text,
        description: Option<String> => Text,
        protocol: Option<String> => Text,
    }
}

crate::table! {
    pub struct ClientScopeAttribute in "client_scope_attributes" at "client_scope_attributes" {
        key: ["scope_id", "name"],
        scope_id: String => Text,
        value: Option<String> => Text,
        name: String => Text,
    }
}

crate::table! {
    pub struct ClientScopeClient in "client_scope_client" at "client_scope_client" {
        key: ["client_id", "scope_id"],
        client_id: String => Text,
        scope_id: String => Text,
        default_scope: bool => Bool,
    }
}

crate::table! {
    pub struct ClientScopeRoleMapping in "client_scope_role_mapping" at "client_scope_role_mapping" {
        key: ["scope_id", "role_id"],
        scope_id: String => Text,
        role_id: String => Text,
    }
}

crate::table! {
    pub struct DefaultClientScope in "default_client_scope" at "default_client_scope" {
        key: ["realm_id", "scope_id"],
        realm_id: String => Text,
        scope_id: String => Text,
        default_scope: bool => Bool,
    }
}

crate::table! {
    pub struct RedirectUri in "redirect_uris" at "redirect_uris" {
        key: ["client_id", "value"],
        client_id: String => Text,
        value: String => Text,
    }
}

crate::table! {
    pub struct WebOrigin in "web_origins" at "web_origins" {
        key: ["client_id", "value"],
        client_id: String => Text,
        value: String => Text,
    }
}

crate::table! {
    pub struct ScopeMapping in "scope_mapping" at "scope_mapping" {
        key: ["client_id", "role_id"],
        client_id: String => Text,
        role_id: String => Text,
    }
}

crate::table! {
    pub struct ProtocolMapper in "protocol_mapper" at "protocol_mapper" {
        key: ["id"],
        id: String => Text,
        name: String => Text,
        protocol: String => Text,
        protocol_mapper_name: String => Text,
        client_id: Option<String> => Text,
        client_scope_id: Option<String> => Text,
    }
}

crate::table! {
    pub struct ProtocolMapperConfig in "protocol_mapper_config" at "protocol_mapper_config" {
        key: ["protocol_mapper_id", "name"],
        protocol_mapper_id: String => Text,
        value: Option<String> => Text,
        name: String => Text,
    }
}

// Users, credentials and consents.

crate::table! {
    pub struct UserEntity in "user_entity" at "user_entity" {
        key: ["id"],
        id: String => Text,
        email: Option<String> => Text,
        email_constraint: Option<String> => Text,
        email_verified: bool => Bool,
        enabled: bool => Bool,
        federation_link: Option<String> => Text,
        first_name: Option<String> => Text,
        last_name: Option<String> => Text,
        realm_id: Option<String> => Text,
        username: Option<String> => Text,
        created_timestamp: Option<i64> => BigInt,
        service_account_client_link: Option<String> => Text,
        not_before: i32 => Int,
    }
}

crate::table! {
    pub struct UserAttribute in "user_attribute" at "user_attribute" {
        key: ["id"],
        name: String => Text,
        value: Option<String> => Text,
        user_id: String => Text,
        id: String => Text,
    }
}

crate::table! {
    pub struct UserRequiredAction in "user_required_action" at "user_required_action" {
        key: ["required_action", "user_id"],
        user_id: String => Text,
        required_action: String => Text,
    }
}

crate::table! {
    pub struct UserRoleMapping in "user_role_mapping" at "user_role_mapping" {
        key: ["role_id", "user_id"],
        role_id: String => Text,
        user_id: String => Text,
    }
}

crate::table! {
    pub struct UserGroupMembership in "user_group_membership" at "user_group_membership" {
        key: ["group_id", "user_id"],
        group_id: String => Text,
        user_id: String => Text,
    }
}

crate::table! {
    pub struct UserConsent in "user_consent" at "user_consent" {
        key: ["id"],
        id: String => Text,
        client_id: Option<String> => Text,
        user_id: String => Text,
        created_date: Option<i64> => BigInt,
        last_updated_date: Option<i64> => BigInt,
        client_storage_provider: Option<String> => Text,
        external_client_id: Option<String> => Text,
    }
}

crate::table! {
    pub struct UserConsentClientScope in "user_consent_client_scope" at "user_consent_client_scope" {
        key: ["user_consent_id", "scope_id"],
        user_consent_id: String => Text,
        scope_id: String => Text,
    }
}

crate::table! {
    pub struct Credential in "credential" at "credential" {
        key: ["id"],
        id: String => Text,
        kind as "type": Option<String> => Text,
        user_id: Option<String> => Text,
        created_date: Option<i64> => BigInt,
        user_label: Option<String> => Text,
        secret_data: Option<String> => Text,
        credential_data: Option<String> => Text,
        priority: Option<i32> => Int,
    }
}

crate::table! {
    pub struct UsernameLoginFailure in "username_login_failure" at "username_login_failure" {
        key: ["realm_id", "username"],
        realm_id: String => Text,
        username: String => Text,
        failed_login_not_before: Option<i32> => Int,
        last_failure: Option<i64> => BigInt,
        last_ip_failure: Option<String> => Text,
        num_failures: Option<i32> => Int,
    }
}

// Roles and groups.

crate::table! {
    pub struct KeycloakRole in "keycloak_role" at "keycloak_role" {
        key: ["id"],
        id: String => Text,
        client_realm_constraint: Option<String> => Text,
        client_role: bool => Bool,
        description: Option<String> => Text,
        name: Option<String> => Text,
        realm_id: Option<String> => Text,
        client: Option<String> => Text,
        realm: Option<String> => Text,
    }
}

crate::table! {
    pub struct CompositeRole in "composite_role" at "composite_role" {
        key: ["composite", "child_role"],
        composite: String => Text,
        child_role: String => Text,
    }
}

crate::table! {
    pub struct RoleAttribute in "role_attribute" at "role_attribute" {
        key: ["id"],
        id: String => Text,
        role_id: String => Text,
        name: String => Text,
        value: Option<String> => Text,
    }
}

crate::table! {
    pub struct KeycloakGroup in "keycloak_group" at "keycloak_group" {
        key: ["id"],
        id: String => Text,
        name: Option<String> => Text,
        parent_group: String => Text,
        realm_id: Option<String> => Text,
    }
}

crate::table! {
    pub struct GroupAttribute in "group_attribute" at "group_attribute" {
        key: ["id"],
        id: String => Text,
        name: String => Text,
        value: Option<String> => Text,
        group_id: String => Text,
    }
}

crate::table! {
    pub struct GroupRoleMapping in "group_role_mapping" at "group_role_mapping" {
        key: ["role_id", "group_id"],
        role_id: String => Text,
        group_id: String => Text,
    }
}

// Identity brokering.

crate::table! {
    pub struct IdentityProvider in "identity_provider" at "identity_provider" {
        key: ["internal_id"],
        internal_id: String => Text,
        enabled: bool => Bool,
        provider_alias: Option<String> => Text,
        provider_id: Option<String> => Text,
        store_token: bool => Bool,
        authenticate_by_default: bool => Bool,
        realm_id: Option<String> => Text,
        add_token_role: bool => Bool,
        trust_email: bool => Bool,
        first_broker_login_flow_id: Option<String> => Text,
        post_broker_login_flow_id: Option<String> => Text,
        provider_display_name: Option<String> => Text,
        link_only: bool => Bool,
    }
}

crate::table! {
    pub struct IdentityProviderConfig in "identity_provider_config" at "identity_provider_config" {
        key: ["identity_provider_id", "name"],
        identity_provider_id: String => Text,
        value: Option<String> => Text,
        name: String => Text,
    }
}

crate::table! {
    pub struct IdentityProviderMapper in "identity_provider_mapper" at "identity_provider_mapper" {
        key: ["id"],
        id: String => Text,
        name: String => Text,
        idp_alias: String => Text,
        idp_mapper_name: String => Text,
        realm_id: String => Text,
    }
}

crate::table! {
    pub struct IdpMapperConfig in "idp_mapper_config" at "idp_mapper_config" {
        key: ["idp_mapper_id", "name"],
        idp_mapper_id: String => Text,
        value: Option<String> => Text,
        name: String => Text,
    }
}

crate::table! {
    pub struct FederatedIdentity in "federated_identity" at "federated_identity" {
        key: ["identity_provider", "user_id"],
        identity_provider: String => Text,
        realm_id: Option<String> => Text,
        federated_user_id: Option<String> => Text,
        federated_username: Option<String> => Text,
        token: Option<String> => Text,
        user_id: String => Text,
    }
}

crate::table! {
    pub struct BrokerLink in "broker_link" at "broker_link" {
        key: ["identity_provider", "user_id"],
        identity_provider: String => Text,
        storage_provider_id: Option<String> => Text,
        realm_id: String => Text,
        broker_user_id: Option<String> => Text,
        broker_username: Option<String> => Text,
        token: Option<String> => Text,
        user_id: String => Text,
    }
}

// Sessions.

crate::table! {
    pub struct UserSession in "user_session" at "user_session" {
        key: ["id"],
        id: String => Text,
        auth_method: Option<String> => Text,
        ip_address: Option<String> => Text,
        last_session_refresh: Option<i32> => Int,
        login_username: Option<String> => Text,
        realm_id: Option<String> => Text,
        remember_me: bool => Bool,
        started: Option<i32> => Int,
        user_id: Option<String> => Text,
        user_session_state: Option<i32> => Int,
        broker_session_id: Option<String> => Text,
        broker_user_id: Option<String> => Text,
    }
}

crate::table! {
    pub struct UserSessionNote in "user_session_note" at "user_session_note" {
        key: ["user_session", "name"],
        user_session: String => Text,
        name: String => Text,
        value: Option<String> => Text,
    }
}

crate::table! {
    pub struct OfflineUserSession in "offline_user_session" at "offline_user_session" {
        key: ["user_session_id", "offline_flag"],
        user_session_id: String => Text,
        user_id: String => Text,
        realm_id: String => Text,
        created_on: i32 => Int,
        offline_flag: String => Text,
        data: Option<String> => Text,
        last_session_refresh: i32 => Int,
    }
}

crate::table! {
    pub struct OfflineClientSession in "offline_client_session" at "offline_client_session" {
        key: [
            "user_session_id",
            "client_id",
            "offline_flag",
            "client_storage_provider",
            "external_client_id",
        ],
        user_session_id: String => Text,
        client_id: String => Text,
        offline_flag: String => Text,
        timestamp: Option<i32> => Int,
        data: Option<String> => Text,
        client_storage_provider: String => Text,
        external_client_id: String => Text,
    }
}

// Events.

crate::table! {
    pub struct EventEntity in "event_entity" at "event_entity" {
        key: ["id"],
        id: String => Text,
        client_id: Option<String> => Text,
        details_json: Option<String> => Text,
        error: Option<String> => Text,
        ip_address: Option<String> => Text,
        realm_id: Option<String> => Text,
        session_id: Option<String> => Text,
        event_time: Option<i64> => BigInt,
        kind as "type": Option<String> => Text,
        user_id: Option<String> => Text,
    }
}

crate::table! {
    pub struct AdminEventEntity in "admin_event_entity" at "admin_event_entity" {
        key: ["id"],
        id: String => Text,
        admin_event_time: Option<i64> => BigInt,
        realm_id: Option<String> => Text,
        operation_type: Option<String> => Text,
        auth_realm_id: Option<String> => Text,
        auth_client_id: Option<String> => Text,
        auth_user_id: Option<String> => Text,
        ip_address: Option<String> => Text,
        resource_path: Option<String> => Text,
        representation: Option<String> => Text,
        error: Option<String> => Text,
        resource_type: Option<String> => Text,
    }
}

// Authentication flows and required actions.

crate::table! {
    pub struct AuthenticationFlow in "authentication_flow" at "authentication_flow" {
        key: ["id"],
        id: String => Text,
        alias: Option<String> => Text,
        description: Option<String> => Text,
        realm_id: Option<String> => Text,
        provider_id: String => Text,
        top_level: bool => Bool,
        built_in: bool => Bool,
    }
}

crate::table! {
    pub struct AuthenticationExecution in "authentication_execution" at "authentication_execution" {
        key: ["id"],
        id: String => Text,
        alias: Option<String> => Text,
        authenticator: Option<String> => Text,
        realm_id: Option<String> => Text,
        flow_id: Option<String> => Text,
        requirement: Option<i32> => Int,
        priority: Option<i32> => Int,
        authenticator_flow: bool => Bool,
        auth_flow_id: Option<String> => Text,
        auth_config: Option<String> => Text,
    }
}

crate::table! {
    pub struct AuthenticatorConfig in "authenticator_config" at "authenticator_config" {
        key: ["id"],
        id: String => Text,
        alias: Option<String> => Text,
        realm_id: Option<String> => Text,
    }
}

crate::table! {
    pub struct AuthenticatorConfigEntry in "authenticator_config_entry" at "authenticator_config_entry" {
        key: ["authenticator_id", "name"],
        authenticator_id: String => Text,
        value: Option<String> => Text,
        name: String => Text,
    }
}

crate::table! {
    pub struct RequiredActionProvider in "required_action_provider" at "required_action_provider" {
        key: ["id"],
        id: String => Text,
        alias: Option<String> => Text,
        name: Option<String> => Text,
        realm_id: Option<String> => Text,
        enabled: bool => Bool,
        default_action: bool => Bool,
        provider_id: Option<String> => Text,
        priority: Option<i32> => Int,
    }
}

crate::table! {
    pub struct RequiredActionConfig in "required_action_config" at "required_action_config" {
        key: ["required_action_id", "name"],
        required_action_id: String => Text,
        value: Option<String> => Text,
        name: String => Text,
    }
}

// Components.

crate::table! {
    pub struct Component in "component" at "component" {
        key: ["id"],
        id: String => Text,
        name: Option<String> => Text,
        parent_id: Option<String> => Text,
        provider_id: Option<String> => Text,
        provider_type: Option<String> => Text,
        realm_id: Option<String> => Text,
        sub_type: Option<String> => Text,
    }
}

crate::table! {
    pub struct ComponentConfig in "component_config" at "component_config" {
        key: ["id"],
        id: String => Text,
        component_id: String => Text,
        name: String => Text,
        value: Option<String> => Text,
    }
}

// Fine-grained authorization.

crate::table! {
    pub struct ResourceServer in "resource_server" at "resource_server" {
        key: ["id"],
        id: String => Text,
        allow_rs_remote_mgmt: bool => Bool,
        policy_enforce_mode: i16 => SmallInt,
        decision_strategy: i16 => SmallInt,
    }
}

crate::table! {
    pub struct ResourceServerResource in "resource_server_resource" at "resource_server_resource" {
        key: ["id"],
        id: String => Text,
        name: String => Text,
        kind as "type": Option<String> => Text,
        icon_uri: Option<String> => Text,
        owner: String => Text,
        resource_server_id: Option<String> => Text,
        owner_managed_access: bool => Bool,
        display_name: Option<String> => Text,
    }
}

crate::table! {
    pub struct ResourceServerScope in "resource_server_scope" at "resource_server_scope" {
        key: ["id"],
        id: String => Text,
        name: String => Text,
        icon_uri: Option<String> => Text,
        resource_server_id: Option<String> => Text,
        display_name: Option<String> => Text,
    }
}

crate::table! {
    pub struct ResourceServerPolicy in "resource_server_policy" at "resource_server_policy" {
        key: ["id"],
        id: String => Text,
        name: String => Text,
        description: Option<String> => Text,
        kind as "type": String => Text,
        decision_strategy: Option<i16> => SmallInt,
        logic: Option<i16> => SmallInt,
        resource_server_id: Option<String> => Text,
        owner: Option<String> => Text,
    }
}

crate::table! {
    pub struct ResourceServerPermTicket in "resource_server_perm_ticket" at "resource_server_perm_ticket" {
        key: ["id"],
        id: String => Text,
        owner: String => Text,
        requester: String => Text,
        created_timestamp: i64 => BigInt,
        granted_timestamp: Option<i64> => BigInt,
        resource_id: String => Text,
        scope_id: Option<String> => Text,
        resource_server_id: String => Text,
        policy_id: Option<String> => Text,
    }
}

crate::table! {
    pub struct ResourcePolicy in "resource_policy" at "resource_policy" {
        key: ["resource_id", "policy_id"],
        resource_id: String => Text,
        policy_id: String => Text,
    }
}

crate::table! {
    pub struct ResourceScope in "resource_scope" at "resource_scope" {
        key: ["resource_id", "scope_id"],
        resource_id: String => Text,
        scope_id: String => Text,
    }
}

crate::table! {
    pub struct ResourceUri in "resource_uris" at "resource_uris" {
        key: ["resource_id", "value"],
        resource_id: String => Text,
        value: String => Text,
    }
}

crate::table! {
    pub struct ResourceAttribute in "resource_attribute" at "resource_attribute" {
        key: ["id"],
        id: String => Text,
        name: String => Text,
        value: Option<String> => Text,
        resource_id: String => Text,
    }
}

crate::table! {
    pub struct ScopePolicy in "scope_policy" at "scope_policy" {
        key: ["scope_id", "policy_id"],
        scope_id: String => Text,
        policy_id: String => Text,
    }
}

crate::table! {
    pub struct AssociatedPolicy in "associated_policy" at "associated_policy" {
        key: ["policy_id", "associated_policy_id"],
        policy_id: String => Text,
        associated_policy_id: String => Text,
    }
}

crate::table! {
    pub struct PolicyConfig in "policy_config" at "policy_config" {
        key: ["policy_id", "name"],
        policy_id: String => Text,
        name: String => Text,
        value: Option<String> => Text,
    }
}

// User federation.

crate::table! {
    pub struct UserFederationProvider in "user_federation_provider" at "user_federation_provider" {
        key: ["id"],
        id: String => Text,
        changed_sync_period: Option<i32> => Int,
        display_name: Option<String> => Text,
        full_sync_period: Option<i32> => Int,
        last_sync: Option<i32> => Int,
        priority: Option<i32> => Int,
        provider_name: Option<String> => Text,
        realm_id: Option<String> => Text,
    }
}

crate::table! {
    pub struct UserFederationConfig in "user_federation_config" at "user_federation_config" {
        key: ["user_federation_provider_id", "name"],
        user_federation_provider_id: String => Text,
        value: Option<String> => Text,
        name: String => Text,
    }
}

crate::table! {
    pub struct UserFederationMapper in "user_federation_mapper" at "user_federation_mapper" {
        key: ["id"],
        id: String => Text,
        name: String => Text,
        federation_provider_id: String => Text,
        federation_mapper_type: String => Text,
        realm_id: String => Text,
    }
}

crate::table! {
    pub struct UserFederationMapperConfig in "user_federation_mapper_config" at "user_federation_mapper_config" {
        key: ["user_federation_mapper_id", "name"],
        user_federation_mapper_id: String => Text,
        value: Option<String> => Text,
        name: String => Text,
    }
}

crate::table! {
    pub struct FederatedUser in "federated_user" at "federated_user" {
        key: ["id"],
        id: String => Text,
        storage_provider_id: Option<String> => Text,
        realm_id: String => Text,
    }
}

crate::table! {
    pub struct FedUserAttribute in "fed_user_attribute" at "fed_user_attribute" {
        key: ["id"],
        id: String => Text,
        name: String => Text,
        user_id: String => Text,
        realm_id: String => Text,
        storage_provider_id: Option<String> => Text,
        value: Option<String> => Text,
    }
}

crate::table! {
    pub struct FedUserRequiredAction in "fed_user_required_action" at "fed_user_required_action" {
        key: ["required_action", "user_id"],
        required_action: String => Text,
        user_id: String => Text,
        realm_id: String => Text,
        storage_provider_id: Option<String> => Text,
    }
}

crate::table! {
    pub struct FedUserRoleMapping in "fed_user_role_mapping" at "fed_user_role_mapping" {
        key: ["role_id", "user_id"],
        role_id: String => Text,
        user_id: String => Text,
        realm_id: String => Text,
        storage_provider_id: Option<String> => Text,
    }
}

crate::table! {
    pub struct FedUserGroupMembership in "fed_user_group_membership" at "fed_user_group_membership" {
        key: ["group_id", "user_id"],
        group_id: String => Text,
        user_id: String => Text,
        realm_id: String => Text,
        storage_provider_id: Option<String> => Text,
    }
}

// Bookkeeping.

crate::table! {
    pub struct MigrationModel in "migration_model" at "migration_model" {
        key: ["id"],
        id: String => Text,
        version: Option<String> => Text,
        update_time: i64 => BigInt,
    }
}

mount_tables!(
    Realm,
    RealmAttribute,
    RealmRequiredCredential,
    RealmSmtpConfig,
    RealmEnabledEventType,
    RealmEventsListener,
    RealmSupportedLocale,
    RealmDefaultGroup,
    RealmLocalization,
    Client,
    ClientAttribute,
    ClientAuthFlowBinding,
    ClientInitialAccess,
    ClientNodeRegistration,
    ClientScope,
    ClientScopeAttribute,
    ClientScopeClient,
    ClientScopeRoleMapping,
    DefaultClientScope,
    RedirectUri,
    WebOrigin,
    ScopeMapping,
    ProtocolMapper,
    ProtocolMapperConfig,
    UserEntity,
    UserAttribute,
    UserRequiredAction,
    UserRoleMapping,
    UserGroupMembership,
    UserConsent,
    UserConsentClientScope,
    Credential,
    UsernameLoginFailure,
    KeycloakRole,
    CompositeRole,
    RoleAttribute,
    KeycloakGroup,
    GroupAttribute,
    GroupRoleMapping,
    IdentityProvider,
    IdentityProviderConfig,
    IdentityProviderMapper,
    IdpMapperConfig,
    FederatedIdentity,
    BrokerLink,
    UserSession,
    UserSessionNote,
    OfflineUserSession,
    OfflineClientSession,
    EventEntity,
    AdminEventEntity,
    AuthenticationFlow,
    AuthenticationExecution,
    AuthenticatorConfig,
    AuthenticatorConfigEntry,
    RequiredActionProvider,
    RequiredActionConfig,
    Component,
    ComponentConfig,
    ResourceServer,
    ResourceServerResource,
    ResourceServerScope,
    ResourceServerPolicy,
    ResourceServerPermTicket,
    ResourcePolicy,
    ResourceScope,
    ResourceUri,
    ResourceAttribute,
    ScopePolicy,
    AssociatedPolicy,
    PolicyConfig,
    UserFederationProvider,
    UserFederationConfig,
    UserFederationMapper,
    UserFederationMapperConfig,
    FederatedUser,
    FedUserAttribute,
    FedUserRequiredAction,
    FedUserRoleMapping,
    FedUserGroupMembership,
    MigrationModel,
);
