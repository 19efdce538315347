pub mod health;
pub use self::health::health;

pub mod trigger;
pub use self::trigger::define_auth_challenge;

pub mod initiate_auth;
pub use self::initiate_auth::initiate_auth;

pub mod respond_challenge;
pub use self::respond_challenge::respond_challenge;

pub mod types;

// common functions for the handlers
use crate::cognito::CognitoError;
use axum::http::StatusCode;
use tracing::{error, warn};

/// Whether the Cognito gateway routes are mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayStatus {
    Enabled,
    Disabled,
}

impl GatewayStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }
}

/// Non-empty after trimming.
pub fn valid_field(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Map a gateway failure to a status and a client-safe message.
pub fn gateway_error_response(err: &CognitoError) -> (StatusCode, String) {
    match err.kind() {
        Some("NotAuthorizedException" | "UserNotFoundException") => {
            warn!("Authentication rejected: {err}");
            (StatusCode::UNAUTHORIZED, "Authentication failed".to_string())
        }
        Some("InvalidParameterException" | "CodeMismatchException") => {
            warn!("Invalid request: {err}");
            (StatusCode::BAD_REQUEST, "Invalid request".to_string())
        }
        Some("TooManyRequestsException" | "LimitExceededException") => {
            warn!("Rate limited: {err}");
            (StatusCode::TOO_MANY_REQUESTS, "Rate limited".to_string())
        }
        _ => {
            error!("Cognito request failed: {err}");
            (
                StatusCode::BAD_GATEWAY,
                "Identity provider unavailable".to_string(),
            )
        }
    }
}
