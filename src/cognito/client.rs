use super::{secret_hash, CognitoError, AUTH_FLOW_CUSTOM};
use crate::APP_USER_AGENT;
use reqwest::{header::CONTENT_TYPE, Client};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    collections::{BTreeMap, HashMap},
    time::Duration,
};
use tracing::{debug, instrument};
use url::Url;

const AMZ_JSON: &str = "application/x-amz-json-1.1";
const TARGET_PREFIX: &str = "AWSCognitoIdentityProviderService";

#[derive(Debug, Clone)]
pub struct CognitoConfig {
    pub client_id: String,
    pub client_secret: SecretString,
    pub endpoint: Url,
}

impl CognitoConfig {
    /// Regional endpoint, e.g. `https://cognito-idp.eu-west-1.amazonaws.com/`.
    ///
    /// # Errors
    /// Returns an error if the region is empty or contains characters other than
    /// lowercase letters, digits and `-`.
    pub fn endpoint_for_region(region: &str) -> Result<Url, CognitoError> {
        let valid = !region.is_empty()
            && region
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid {
            return Err(CognitoError::InvalidRegion(region.to_string()));
        }

        Ok(Url::parse(&format!(
            "https://cognito-idp.{region}.amazonaws.com/"
        ))?)
    }
}

/// First challenge of a `CUSTOM_AUTH` flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeIssued {
    pub challenge_name: String,
    pub session: String,
    pub challenge_parameters: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationTokens {
    pub access_token: String,
    pub id_token: String,
    pub refresh_token: Option<String>,
    pub token_type: String,
    pub expires_in: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct InitiateAuthInput<'a> {
    auth_flow: &'a str,
    client_id: &'a str,
    auth_parameters: BTreeMap<&'static str, String>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct RespondToAuthChallengeInput<'a> {
    challenge_name: &'a str,
    client_id: &'a str,
    session: &'a str,
    challenge_responses: BTreeMap<&'static str, String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AuthOutput {
    #[serde(default)]
    challenge_name: Option<String>,
    #[serde(default)]
    session: Option<String>,
    #[serde(default)]
    challenge_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    authentication_result: Option<AuthenticationResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AuthenticationResult {
    access_token: String,
    id_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    token_type: String,
    #[serde(default)]
    expires_in: i64,
}

#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    #[serde(rename = "__type", default)]
    kind: String,
    #[serde(alias = "Message", default)]
    message: String,
}

#[derive(Debug, Clone)]
pub struct CognitoClient {
    http: Client,
    config: CognitoConfig,
}

impl CognitoClient {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: CognitoConfig) -> Result<Self, CognitoError> {
        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { http, config })
    }

    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.config.client_id
    }

    fn secret_hash(&self, username: &str) -> Result<String, CognitoError> {
        secret_hash(
            username,
            &self.config.client_id,
            self.config.client_secret.expose_secret(),
        )
    }

    /// Start a `CUSTOM_AUTH` sign-in for `username`.
    ///
    /// # Errors
    /// Returns an error if Cognito rejects the request or answers without a challenge.
    #[instrument(skip(self))]
    pub async fn initiate_custom_auth(
        &self,
        username: &str,
    ) -> Result<ChallengeIssued, CognitoError> {
        let mut auth_parameters = BTreeMap::new();
        auth_parameters.insert("USERNAME", username.to_string());
        auth_parameters.insert("SECRET_HASH", self.secret_hash(username)?);

        let input = InitiateAuthInput {
            auth_flow: AUTH_FLOW_CUSTOM,
            client_id: &self.config.client_id,
            auth_parameters,
        };

        let output: AuthOutput = self.call("InitiateAuth", &input).await?;

        let challenge_name = output
            .challenge_name
            .ok_or_else(|| CognitoError::UnexpectedResponse("missing ChallengeName".to_string()))?;
        let session = output
            .session
            .ok_or_else(|| CognitoError::UnexpectedResponse("missing Session".to_string()))?;

        debug!("Challenge issued: {}", challenge_name);

        Ok(ChallengeIssued {
            challenge_name,
            session,
            challenge_parameters: output.challenge_parameters.unwrap_or_default(),
        })
    }

    /// Submit `answer` for the challenge identified by `session`.
    ///
    /// # Errors
    /// Returns an error if Cognito rejects the answer or presents a further challenge.
    #[instrument(skip(self, answer, session))]
    pub async fn respond_to_challenge(
        &self,
        username: &str,
        answer: &str,
        challenge_name: &str,
        session: &str,
    ) -> Result<AuthenticationTokens, CognitoError> {
        let mut challenge_responses = BTreeMap::new();
        challenge_responses.insert("USERNAME", username.to_string());
        challenge_responses.insert("ANSWER", answer.to_string());
        challenge_responses.insert("SECRET_HASH", self.secret_hash(username)?);

        let input = RespondToAuthChallengeInput {
            challenge_name,
            client_id: &self.config.client_id,
            session,
            challenge_responses,
        };

        let output: AuthOutput = self.call("RespondToAuthChallenge", &input).await?;

        match output.authentication_result {
            Some(result) => Ok(AuthenticationTokens {
                access_token: result.access_token,
                id_token: result.id_token,
                refresh_token: result.refresh_token,
                token_type: result.token_type,
                expires_in: result.expires_in,
            }),
            None => Err(CognitoError::UnexpectedChallenge(
                output
                    .challenge_name
                    .unwrap_or_else(|| "unknown".to_string()),
            )),
        }
    }

    async fn call<I, O>(&self, operation: &str, input: &I) -> Result<O, CognitoError>
    where
        I: Serialize + Sync,
        O: DeserializeOwned,
    {
        let body = serde_json::to_vec(input)?;

        let response = self
            .http
            .post(self.config.endpoint.as_str())
            .header(CONTENT_TYPE, AMZ_JSON)
            .header("X-Amz-Target", format!("{TARGET_PREFIX}.{operation}"))
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let error: ServiceErrorBody = serde_json::from_slice(&bytes).map_err(|_| {
                CognitoError::UnexpectedResponse(format!("{operation} - {status}"))
            })?;

            return Err(CognitoError::Service {
                status: status.as_u16(),
                kind: short_kind(&error.kind).to_string(),
                message: error.message,
            });
        }

        serde_json::from_slice(&bytes)
            .map_err(|err| CognitoError::UnexpectedResponse(format!("{operation}: {err}")))
    }
}

// `__type` may be fully qualified: `com.amazonaws...#NotAuthorizedException`.
fn short_kind(kind: &str) -> &str {
    kind.rsplit('#').next().unwrap_or(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_endpoint_for_region() {
        let url = CognitoConfig::endpoint_for_region("eu-west-1").unwrap();
        assert_eq!(url.as_str(), "https://cognito-idp.eu-west-1.amazonaws.com/");
    }

    #[test]
    fn test_endpoint_for_region_rejects_garbage() {
        for region in ["", "EU-WEST-1", "eu-west-1.evil.com/", "us east"] {
            assert!(
                matches!(
                    CognitoConfig::endpoint_for_region(region),
                    Err(CognitoError::InvalidRegion(_))
                ),
                "region {region:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_short_kind() {
        assert_eq!(
            short_kind("com.amazonaws.cognito.identity.idp.model#NotAuthorizedException"),
            "NotAuthorizedException"
        );
        assert_eq!(short_kind("UserNotFoundException"), "UserNotFoundException");
        assert_eq!(short_kind(""), "");
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_initiate_auth_wire_format() {
        let mut auth_parameters = BTreeMap::new();
        auth_parameters.insert("USERNAME", "alice".to_string());
        auth_parameters.insert("SECRET_HASH", "hash".to_string());
        let input = InitiateAuthInput {
            auth_flow: AUTH_FLOW_CUSTOM,
            client_id: "client-id",
            auth_parameters,
        };

        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "AuthFlow": "CUSTOM_AUTH",
                "ClientId": "client-id",
                "AuthParameters": {"USERNAME": "alice", "SECRET_HASH": "hash"}
            })
        );
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_auth_output_with_tokens() {
        let output: AuthOutput = serde_json::from_str(
            r#"{
                "ChallengeParameters": {},
                "AuthenticationResult": {
                    "AccessToken": "access",
                    "ExpiresIn": 3600,
                    "IdToken": "id",
                    "RefreshToken": "refresh",
                    "TokenType": "Bearer"
                }
            }"#,
        )
        .unwrap();

        let result = output.authentication_result.unwrap();
        assert_eq!(result.access_token, "access");
        assert_eq!(result.refresh_token.as_deref(), Some("refresh"));
        assert_eq!(result.expires_in, 3600);
        assert!(output.challenge_name.is_none());
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_client_id() {
        let client = CognitoClient::new(CognitoConfig {
            client_id: "client-id".to_string(),
            client_secret: SecretString::from("secret".to_string()),
            endpoint: Url::parse("http://127.0.0.1:9229/").unwrap(),
        })
        .unwrap();
        assert_eq!(client.client_id(), "client-id");
    }
}
