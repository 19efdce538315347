use super::{
    gateway_error_response,
    types::{RespondChallengeRequest, RespondChallengeResponse},
    valid_field,
};
use crate::cognito::CognitoClient;
use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;
use tracing::{debug, instrument};

#[utoipa::path(
    post,
    path = "/v1/auth/respond",
    request_body = RespondChallengeRequest,
    responses(
        (status = 200, description = "Challenge answered, tokens issued", body = RespondChallengeResponse),
        (status = 400, description = "Validation error", body = String),
        (status = 401, description = "Authentication failed", body = String),
        (status = 429, description = "Rate limited", body = String),
        (status = 502, description = "Identity provider unavailable", body = String)
    ),
    tag = "auth"
)]
// axum handler for answering the custom challenge
#[instrument(skip_all)]
pub async fn respond_challenge(
    cognito: Extension<Arc<CognitoClient>>,
    payload: Option<Json<RespondChallengeRequest>>,
) -> impl IntoResponse {
    let request: RespondChallengeRequest = match payload {
        Some(Json(payload)) => payload,
        None => return (StatusCode::BAD_REQUEST, "Missing payload".to_string()).into_response(),
    };

    let username = request.username.trim();
    if !valid_field(username) {
        return (StatusCode::BAD_REQUEST, "Invalid username".to_string()).into_response();
    }
    if !valid_field(&request.otp) {
        return (StatusCode::BAD_REQUEST, "Invalid otp".to_string()).into_response();
    }
    if !valid_field(&request.challenge_name) || !valid_field(&request.session) {
        return (StatusCode::BAD_REQUEST, "Invalid session".to_string()).into_response();
    }

    match cognito
        .respond_to_challenge(
            username,
            request.otp.trim(),
            &request.challenge_name,
            &request.session,
        )
        .await
    {
        Ok(tokens) => {
            debug!("Tokens issued");
            let response = RespondChallengeResponse {
                access_token: tokens.access_token,
                id_token: tokens.id_token,
                refresh_token: tokens.refresh_token,
                token_type: tokens.token_type,
                expires_in: tokens.expires_in,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => gateway_error_response(&err).into_response(),
    }
}
