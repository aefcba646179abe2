use std::env;

use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Where the SDK gets its AWS credentials from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CredentialSource {
    Inline {
        access_key_id: String,
        secret_access_key: String,
    },
    DefaultChain,
}

/// User-pool configuration, loaded once at process start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CognitoConfig {
    pub region: String,
    pub credentials: CredentialSource,
    /// App client id, sent with every call.
    pub client_id: String,
    /// App client secret. Only ever used as the HMAC key for the
    /// secret hash; never logged.
    pub client_secret: String,
    pub pool_id: String,
}

impl CognitoConfig {
    /// Load from the process environment.
    ///
    /// `AWS_KEY` / `AWS_SECRET` select inline credentials; without them
    /// the SDK's default provider chain is used. `AWS_REGION` defaults
    /// to `us-east-1`. The three `AWS_COGNITO_*` variables are required.
    pub fn from_env() -> Result<Self, AuthError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Environment lookup is injected so config resolution stays a pure
    /// transform.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AuthError> {
        let require = |name: &str| {
            lookup(name).ok_or_else(|| AuthError::Config(format!("{name} is not set")))
        };

        let credentials = match (lookup("AWS_KEY"), lookup("AWS_SECRET")) {
            (Some(access_key_id), Some(secret_access_key)) => CredentialSource::Inline {
                access_key_id,
                secret_access_key,
            },
            _ => CredentialSource::DefaultChain,
        };

        Ok(Self {
            region: lookup("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
            credentials,
            client_id: require("AWS_COGNITO_CLIENT_ID")?,
            client_secret: require("AWS_COGNITO_CLIENT_SECRET")?,
            pool_id: require("AWS_COGNITO_USER_POOL_ID")?,
        })
    }
}
