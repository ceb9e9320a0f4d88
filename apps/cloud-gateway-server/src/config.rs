//! Configuration management for Cloud Gateway Server

use serde::Deserialize;
use std::env;

/// Default upload limit for object bodies (30 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 30 * 1024 * 1024;

/// Table used by the item endpoints when none is configured
pub const DEFAULT_TABLE_NAME: &str = "MyTable";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub object_store: ObjectStoreConfig,
    pub key_value: KeyValueConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Largest request body accepted by `PUT /s3/objects/...`
    pub max_upload_bytes: usize,
}

/// Static credentials; when absent the AWS default chain is used.
#[derive(Clone, Deserialize)]
pub struct StaticCredentials {
    pub access_key: String,
    pub secret_key: String,
}

impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectStoreConfig {
    pub region: Option<String>,
    pub endpoint: Option<String>,
    pub credentials: Option<StaticCredentials>,
    /// Needed for MinIO, LocalStack and other S3-compatible services
    pub force_path_style: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeyValueConfig {
    pub region: Option<String>,
    pub endpoint: Option<String>,
    pub credentials: Option<StaticCredentials>,
    pub table_name: String,
}

impl Default for KeyValueConfig {
    fn default() -> Self {
        KeyValueConfig {
            region: None,
            endpoint: None,
            credentials: None,
            table_name: DEFAULT_TABLE_NAME.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            },
            object_store: ObjectStoreConfig::default(),
            key_value: KeyValueConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        let region = non_empty_var("AWS_REGION")?;
        let credentials = match (
            non_empty_var("AWS_ACCESS_KEY_ID")?,
            non_empty_var("AWS_SECRET_ACCESS_KEY")?,
        ) {
            (Some(access_key), Some(secret_key)) => Some(StaticCredentials {
                access_key,
                secret_key,
            }),
            _ => None,
        };

        Ok(Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .unwrap_or(3000),
                max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            },
            object_store: ObjectStoreConfig {
                region: region.clone(),
                endpoint: non_empty_var("S3_ENDPOINT")?,
                credentials: credentials.clone(),
                force_path_style: env::var("S3_FORCE_PATH_STYLE")
                    .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                    .unwrap_or(false),
            },
            key_value: KeyValueConfig {
                region,
                endpoint: non_empty_var("DYNAMODB_ENDPOINT")?,
                credentials,
                table_name: non_empty_var("DYNAMODB_TABLE")?
                    .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            },
        })
    }
}

/// Read an optional variable, treating an empty value as unset.
///
/// A value that is not valid unicode is reported rather than ignored.
fn non_empty_var(key: &str) -> Result<Option<String>, env::VarError> {
    match env::var(key) {
        Ok(v) if v.trim().is_empty() => Ok(None),
        Ok(v) => Ok(Some(v)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.max_upload_bytes, 30 * 1024 * 1024);
        assert_eq!(config.key_value.table_name, "MyTable");
        assert!(config.object_store.endpoint.is_none());
        assert!(!config.object_store.force_path_style);
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = StaticCredentials {
            access_key: "AKIDEXAMPLE".to_string(),
            secret_key: "very-secret".to_string(),
        };
        let printed = format!("{:?}", creds);
        assert!(printed.contains("AKIDEXAMPLE"));
        assert!(!printed.contains("very-secret"));
    }

    #[test]
    fn test_missing_optional_var_is_none() {
        let value = non_empty_var("CLOUD_GATEWAY_TEST_SURELY_UNSET_VARIABLE").unwrap();
        assert!(value.is_none());
    }
}
