//! Minimal client for the Cognito `CUSTOM_AUTH` flow.
//!
//! `InitiateAuth` and `RespondToAuthChallenge` are public app-client
//! operations of the Cognito Identity Provider JSON API, so requests are not
//! signed; the app client secret is proven with `SECRET_HASH` instead.

pub mod client;
pub use self::client::{AuthenticationTokens, ChallengeIssued, CognitoClient, CognitoConfig};

pub mod secret_hash;
pub use self::secret_hash::secret_hash;

use thiserror::Error;

pub const AUTH_FLOW_CUSTOM: &str = "CUSTOM_AUTH";

#[derive(Debug, Error)]
pub enum CognitoError {
    #[error("invalid region: {0}")]
    InvalidRegion(String),
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("failed to compute secret hash")]
    SecretHash,
    #[error("request encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("request to Cognito failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{kind} ({status}): {message}")]
    Service {
        status: u16,
        kind: String,
        message: String,
    },
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
    #[error("unexpected challenge: {0}")]
    UnexpectedChallenge(String),
}

impl CognitoError {
    /// Short exception name for provider errors, e.g. `NotAuthorizedException`.
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        match self {
            Self::Service { kind, .. } => Some(kind.as_str()),
            _ => None,
        }
    }
}
