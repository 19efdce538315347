use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct InitiateAuthRequest {
    pub username: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct InitiateAuthResponse {
    pub challenge_name: String,
    pub session: String,
    /// Public parameters set by the create-auth-challenge trigger.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub challenge_parameters: HashMap<String, String>,
}

#[derive(ToSchema, Serialize, Deserialize)]
pub struct RespondChallengeRequest {
    pub username: String,
    pub otp: String,
    pub challenge_name: String,
    pub session: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct RespondChallengeResponse {
    pub access_token: String,
    pub id_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub token_type: String,
    pub expires_in: i64,
}
