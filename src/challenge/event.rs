//! Wire model of the define-auth-challenge trigger event.
//!
//! Field names follow the provider's camelCase JSON. Only `request.session` is
//! consulted and only `response` is written. Every other member stays raw JSON
//! so it goes back out exactly as it came in, `null`s included.

use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Name of the single challenge type this flow presents.
pub const CUSTOM_CHALLENGE: &str = "CUSTOM_CHALLENGE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChallengeName {
    #[serde(rename = "CUSTOM_CHALLENGE")]
    CustomChallenge,
}

impl ChallengeName {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CustomChallenge => CUSTOM_CHALLENGE,
        }
    }
}

impl fmt::Display for ChallengeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One event per sign-in step, built by the provider.
///
/// `version`, `userName`, `triggerSource`, `callerContext` and the rest of the
/// envelope live in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthenticationEvent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub request: ChallengeRequest,
    /// Whatever the provider left here is discarded; the decision replaces it.
    #[serde(default, deserialize_with = "discard")]
    pub response: DecisionResponse,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChallengeRequest {
    /// Prior rounds in chronological order. Absent and `null` both mean empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub session: Vec<ChallengeAttempt>,
    /// `userAttributes`, `clientMetadata`, `userNotFound`, ...
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A challenge already presented in this flow, with the verifier's verdict.
///
/// `challengeResult` is required: an entry without it is rejected while
/// parsing rather than guessed at. `challengeName` and `challengeMetadata`
/// are carried in `extra`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeAttempt {
    pub challenge_result: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChallengeAttempt {
    #[must_use]
    pub fn custom(challenge_result: bool) -> Self {
        let mut extra = Map::new();
        extra.insert("challengeName".to_string(), CUSTOM_CHALLENGE.into());
        Self {
            challenge_result,
            extra,
        }
    }

    #[must_use]
    pub fn challenge_name(&self) -> Option<&str> {
        self.extra.get("challengeName").and_then(Value::as_str)
    }

    #[must_use]
    pub fn challenge_metadata(&self) -> Option<&str> {
        self.extra.get("challengeMetadata").and_then(Value::as_str)
    }
}

/// The three fields the provider reads back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub issue_tokens: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fail_authentication: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge_name: Option<ChallengeName>,
}

impl AuthenticationEvent {
    /// Parse an event, rejecting malformed session entries.
    ///
    /// # Errors
    /// Returns an error if the payload is not valid JSON or does not match the event shape.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    #[must_use]
    pub fn user_name(&self) -> Option<&str> {
        self.extra.get("userName").and_then(Value::as_str)
    }

    #[must_use]
    pub fn trigger_source(&self) -> Option<&str> {
        self.extra.get("triggerSource").and_then(Value::as_str)
    }
}

impl ChallengeRequest {
    #[must_use]
    pub fn user_not_found(&self) -> Option<bool> {
        self.extra.get("userNotFound").and_then(Value::as_bool)
    }
}

// The provider sends `null` for unset members, which serde's `default` alone does not cover.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn discard<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default,
{
    IgnoredAny::deserialize(deserializer)?;
    Ok(T::default())
}
