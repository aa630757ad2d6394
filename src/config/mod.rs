//! Server configuration from environment variables.
//!
//! | variable             | default                    |
//! |----------------------|----------------------------|
//! | `DATABASE_URL`       | `postgres://localhost/crud`|
//! | `BIND_ADDR`          | `0.0.0.0:8080`             |
//! | `DB_MAX_CONNECTIONS` | `5`                        |
//! | `DB_SCHEMA`          | table's own schema         |
//! | `API_TOKEN`          | none (no token required)   |
//! | `READ_ONLY`          | `false`                    |
//! | `MOUNT_SCHEMAS`      | `iam,web`                  |
//! | `BODY_LIMIT_BYTES`   | `1048576`                  |
//! | `STORE`              | `postgres`                 |

use crate::auth::TokenPolicy;
use crate::error::ConfigError;
use crate::schema::SchemaSet;
use std::net::SocketAddr;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub schema: Option<String>,
    pub api_token: Option<String>,
    pub read_only: bool,
    pub schemas: Vec<SchemaSet>,
    pub body_limit: usize,
    pub store: StoreKind,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Build from any variable lookup. Unset and blank variables take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |k: &str| lookup(k).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(|| "postgres://localhost/crud".into());
        let bind_addr = parse_or::<SocketAddr>("BIND_ADDR", get("BIND_ADDR"), "0.0.0.0:8080".parse().ok())?;
        let max_connections = parse_or::<u32>("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), Some(5))?;
        let read_only = match get("READ_ONLY") {
            None => false,
            Some(v) => parse_bool(&v).ok_or_else(|| ConfigError::InvalidVar {
                var: "READ_ONLY",
                reason: format!("expected true or false, got {:?}", v),
            })?,
        };
        let schemas = match get("MOUNT_SCHEMAS") {
            None => SchemaSet::ALL.to_vec(),
            Some(v) => parse_schemas(&v)?,
        };
        let body_limit = parse_or::<usize>("BODY_LIMIT_BYTES", get("BODY_LIMIT_BYTES"), Some(1024 * 1024))?;
        let store = match get("STORE").map(|v| v.to_lowercase()).as_deref() {
            None | Some("postgres") => StoreKind::Postgres,
            Some("memory") => StoreKind::Memory,
            Some(other) => {
                return Err(ConfigError::InvalidVar {
                    var: "STORE",
                    reason: format!("expected postgres or memory, got {:?}", other),
                })
            }
        };

        Ok(ServerConfig {
            database_url,
            bind_addr,
            max_connections,
            schema: get("DB_SCHEMA"),
            api_token: get("API_TOKEN"),
            read_only,
            schemas,
            body_limit,
            store,
        })
    }

    pub fn policy(&self) -> TokenPolicy {
        TokenPolicy {
            token: self.api_token.clone(),
            read_only: self.read_only,
        }
    }
}

fn parse_or<T>(var: &'static str, raw: Option<String>, default: Option<T>) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(v) => v.parse().map_err(|e: T::Err| ConfigError::InvalidVar {
            var,
            reason: format!("{:?}: {}", v, e),
        }),
        None => default.ok_or_else(|| ConfigError::InvalidVar {
            var,
            reason: "no default".into(),
        }),
    }
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.to_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

/// Comma list of schema sets, duplicates dropped, order kept.
fn parse_schemas(v: &str) -> Result<Vec<SchemaSet>, ConfigError> {
    let mut out = Vec::new();
    for part in v.split(',').filter(|p| !p.trim().is_empty()) {
        let set = part.parse::<SchemaSet>()?;
        if !out.contains(&set) {
            out.push(set);
        }
    }
    if out.is_empty() {
        return Err(ConfigError::InvalidVar {
            var: "MOUNT_SCHEMAS",
            reason: "no schema named".into(),
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ServerConfig::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn test_defaults() {
        let c = config(&[]).unwrap();
        assert_eq!(c.database_url, "postgres://localhost/crud");
        assert_eq!(c.bind_addr.port(), 8080);
        assert_eq!(c.max_connections, 5);
        assert_eq!(c.schema, None);
        assert_eq!(c.api_token, None);
        assert!(!c.read_only);
        assert_eq!(c.schemas, vec![SchemaSet::Iam, SchemaSet::Web]);
        assert_eq!(c.body_limit, 1024 * 1024);
        assert_eq!(c.store, StoreKind::Postgres);
    }

    #[test]
    fn test_overrides() {
        let c = config(&[
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("DB_SCHEMA", "keycloak"),
            ("API_TOKEN", "s3cret"),
            ("READ_ONLY", "TRUE"),
            ("MOUNT_SCHEMAS", "web, web"),
            ("STORE", "memory"),
        ])
        .unwrap();
        assert_eq!(c.bind_addr.port(), 9000);
        assert_eq!(c.schema.as_deref(), Some("keycloak"));
        assert_eq!(c.schemas, vec![SchemaSet::Web]);
        assert_eq!(c.store, StoreKind::Memory);
        let policy = c.policy();
        assert_eq!(policy.token.as_deref(), Some("s3cret"));
        assert!(policy.read_only);
    }

    #[test]
    fn test_blank_values_take_defaults() {
        let c = config(&[("API_TOKEN", "  "), ("DB_SCHEMA", "")]).unwrap();
        assert_eq!(c.api_token, None);
        assert_eq!(c.schema, None);
    }

    #[test]
    fn test_malformed_values_are_errors() {
        assert!(matches!(
            config(&[("DB_MAX_CONNECTIONS", "many")]),
            Err(ConfigError::InvalidVar { var: "DB_MAX_CONNECTIONS", .. })
        ));
        assert!(matches!(
            config(&[("READ_ONLY", "maybe")]),
            Err(ConfigError::InvalidVar { var: "READ_ONLY", .. })
        ));
        assert!(matches!(
            config(&[("MOUNT_SCHEMAS", "iam,billing")]),
            Err(ConfigError::UnknownSchema(_))
        ));
        assert!(matches!(
            config(&[("STORE", "redis")]),
            Err(ConfigError::InvalidVar { var: "STORE", .. })
        ));
    }
}
