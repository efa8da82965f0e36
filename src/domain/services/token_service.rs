use crate::config::Config;
use crate::error::AppError;
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

/// Claims carried by the login token. No expiry is set: the token is a
/// bare identity assertion, not a session.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub name: String,
    pub iat: usize,
}

pub struct TokenService {
    encoding_key: EncodingKey,
}

impl TokenService {
    pub fn new(config: &Config) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.access_token_secret.as_bytes()),
        }
    }

    /// Signs an HS256 access token for the given username.
    pub fn issue(&self, username: &str) -> Result<String, AppError> {
        let claims = Claims {
            name: username.to_string(),
            iat: Utc::now().timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("JWT encoding failed: {}", e);
            AppError::Internal
        })
    }
}
