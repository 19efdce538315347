use crate::challenge::{self, AuthenticationEvent};
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::{field::Empty, instrument, warn, Span};

// axum handler for the define-auth-challenge trigger
#[instrument(skip_all, fields(user_name = Empty, trigger_source = Empty))]
pub async fn define_auth_challenge(
    payload: Result<Json<AuthenticationEvent>, JsonRejection>,
) -> impl IntoResponse {
    let event = match payload {
        Ok(Json(event)) => event,
        Err(rejection) => {
            warn!("Rejected authentication event: {}", rejection.body_text());
            return (rejection.status(), rejection.body_text()).into_response();
        }
    };

    let span = Span::current();
    if let Some(user_name) = event.user_name() {
        span.record("user_name", user_name);
    }
    if let Some(trigger_source) = event.trigger_source() {
        span.record("trigger_source", trigger_source);
    }

    (StatusCode::OK, Json(challenge::define_auth_challenge(event))).into_response()
}
