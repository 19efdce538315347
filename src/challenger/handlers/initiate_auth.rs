use super::{
    gateway_error_response,
    types::{InitiateAuthRequest, InitiateAuthResponse},
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
    path = "/v1/auth/initiate",
    request_body = InitiateAuthRequest,
    responses(
        (status = 200, description = "Custom challenge issued", body = InitiateAuthResponse),
        (status = 400, description = "Validation error", body = String),
        (status = 401, description = "Authentication failed", body = String),
        (status = 429, description = "Rate limited", body = String),
        (status = 502, description = "Identity provider unavailable", body = String)
    ),
    tag = "auth"
)]
// axum handler for starting a CUSTOM_AUTH sign-in
#[instrument(skip_all)]
pub async fn initiate_auth(
    cognito: Extension<Arc<CognitoClient>>,
    payload: Option<Json<InitiateAuthRequest>>,
) -> impl IntoResponse {
    let request: InitiateAuthRequest = match payload {
        Some(Json(payload)) => payload,
        None => return (StatusCode::BAD_REQUEST, "Missing payload".to_string()).into_response(),
    };

    let username = request.username.trim();
    if !valid_field(username) {
        return (StatusCode::BAD_REQUEST, "Invalid username".to_string()).into_response();
    }

    match cognito.initiate_custom_auth(username).await {
        Ok(issued) => {
            debug!("Challenge {} issued", issued.challenge_name);
            let response = InitiateAuthResponse {
                challenge_name: issued.challenge_name,
                session: issued.session,
                challenge_parameters: issued.challenge_parameters,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => gateway_error_response(&err).into_response(),
    }
}
