/// Configuration management
///
/// Values are read from the process environment (after `.env` is loaded by
/// `main`). Field names map to upper-case variables, e.g. `database_url` is
/// read from `DATABASE_URL`.
use crypto_core::JwtSigner;
use s3_utils::S3Config;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_server_host")]
    pub server_host: String,
    #[serde(default = "default_server_port")]
    pub server_port: u16,

    pub database_url: String,
    #[serde(default = "default_database_max_connections")]
    pub database_max_connections: u32,

    /// Frontend origin used to build email links
    #[serde(default = "default_client_url")]
    pub client_url: String,

    /// HS256 secret for session tokens
    #[serde(default)]
    pub jwt_token: Option<String>,
    /// RS256 keys, preferred over `jwt_token` when both are set
    #[serde(default)]
    pub jwt_private_key_pem: Option<String>,
    #[serde(default)]
    pub jwt_public_key_pem: Option<String>,
    /// Shared secret of the api gateway; unset disables request verification
    #[serde(default)]
    pub gateway_jwt_token: Option<String>,

    #[serde(default = "default_kafka_brokers")]
    pub kafka_brokers: String,
    #[serde(default)]
    pub kafka_topic_prefix: Option<String>,

    #[serde(default = "default_s3_bucket")]
    pub s3_bucket: String,
    #[serde(default = "default_s3_base_url")]
    pub s3_base_url: String,
    #[serde(default = "default_s3_key_prefix")]
    pub s3_key_prefix: String,
    #[serde(default = "default_aws_region")]
    pub aws_region: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read environment: {0}")]
    Env(#[from] envy::Error),

    #[error("either JWT_TOKEN or JWT_PRIVATE_KEY_PEM/JWT_PUBLIC_KEY_PEM must be set")]
    MissingSigningKey,

    #[error("invalid signing key: {0}")]
    InvalidSigningKey(#[from] crypto_core::SignerError),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(envy::from_env()?)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Build the session token signer from the configured keys
    pub fn token_signer(&self) -> Result<JwtSigner, ConfigError> {
        match (
            non_empty(&self.jwt_private_key_pem),
            non_empty(&self.jwt_public_key_pem),
        ) {
            (Some(private_key), Some(public_key)) => {
                Ok(JwtSigner::from_rsa_pem(private_key, public_key)?)
            }
            _ => non_empty(&self.jwt_token)
                .map(JwtSigner::from_secret)
                .ok_or(ConfigError::MissingSigningKey),
        }
    }

    /// Signer for gateway tokens, `None` when verification is disabled
    pub fn gateway_signer(&self) -> Option<JwtSigner> {
        non_empty(&self.gateway_jwt_token).map(JwtSigner::from_secret)
    }

    pub fn topic_prefix(&self) -> Option<&str> {
        non_empty(&self.kafka_topic_prefix)
    }

    pub fn s3_config(&self) -> S3Config {
        S3Config::new(
            &self.s3_bucket,
            &self.aws_region,
            &self.s3_base_url,
            &self.s3_key_prefix,
        )
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    4002
}

fn default_database_max_connections() -> u32 {
    10
}

fn default_client_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_kafka_brokers() -> String {
    "localhost:9092".to_string()
}

fn default_s3_bucket() -> String {
    "marketplace-media".to_string()
}

fn default_s3_base_url() -> String {
    "https://marketplace-media.s3.amazonaws.com".to_string()
}

fn default_s3_key_prefix() -> String {
    "profile-pictures".to_string()
}

fn default_aws_region() -> String {
    "us-east-1".to_string()
}
