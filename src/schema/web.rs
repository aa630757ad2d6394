//! Generic web-app schema: users, tokens, jobs, password resets, migrations.

use chrono::NaiveDateTime;

crate::table! {
    /// Application users. Mounted at `/users_`.
    pub struct User in "users" at "users_" {
        key: ["id"],
        id: i64 => BigSerial,
        name: String => Text,
        email: String => Text,
        email_verified_at: Option<NaiveDateTime> => Timestamp,
        password: String => Text,
        remember_token: Option<String> => Text,
        created_at: Option<NaiveDateTime> => Timestamp,
        updated_at: Option<NaiveDateTime> => Timestamp,
    }
}

crate::table! {
    /// Queue jobs that exhausted their retries.
    pub struct FailedJob in "failed_jobs" at "failed_jobs" {
        key: ["id"],
        id: i64 => BigSerial,
        uuid: String => Text,
        connection: String => Text,
        queue: String => Text,
        payload: String => Text,
        exception: String => Text,
        failed_at: Option<NaiveDateTime> => TimestampNow,
    }
}

crate::table! {
    /// Outstanding password reset tokens. No surrogate key; a row is identified by email and token.
    pub struct PasswordReset in "password_resets" at "password_resets" {
        key: ["email", "token"],
        email: String => Text,
        token: String => Text,
        created_at: Option<NaiveDateTime> => Timestamp,
    }
}

crate::table! {
    pub struct PersonalAccessToken in "personal_access_tokens" at "personal_access_tokens" {
        key: ["id"],
        id: i64 => BigSerial,
        tokenable_type: String => Text,
        tokenable_id: i64 => BigInt,
        name: String => Text,
        token: String => Text,
        abilities: Option<String> => Text,
        last_used_at: Option<NaiveDateTime> => Timestamp,
        created_at: Option<NaiveDateTime> => Timestamp,
        updated_at: Option<NaiveDateTime> => Timestamp,
    }
}

crate::table! {
    /// Applied schema migrations.
    pub struct Migration in "migrations" at "migrations" {
        key: ["id"],
        id: i32 => Serial,
        migration: String => Text,
        batch: i32 => Int,
    }
}

mount_tables!(User, FailedJob, PasswordReset, PersonalAccessToken, Migration);
