//! # Challenger (Custom Challenge Authentication)
//!
//! `challenger` decides the next step of a custom, challenge-based sign-in flow.
//! The identity provider calls it before the first challenge and again after
//! every answer. It replies with exactly one of: issue tokens, fail the
//! authentication, or present the `CUSTOM_CHALLENGE`.
//!
//! ## Decision
//!
//! The decision is a pure function of the session history carried in the
//! event (see [`challenge::decide`]):
//!
//! - **Empty session:** present `CUSTOM_CHALLENGE`.
//! - **Last answer correct:** issue tokens.
//! - **Last answer wrong:** fail authentication.
//!
//! Only the most recent attempt is consulted. Generating challenges, verifying
//! answers and persisting the session belong to the provider and its sibling
//! triggers.
//!
//! ## Gateway
//!
//! When configured with an app client, the server also exposes a small
//! gateway that starts a `CUSTOM_AUTH` sign-in and submits answers to
//! Cognito on behalf of a frontend, computing the `SECRET_HASH` server side.

pub mod challenge;
pub mod challenger;
pub mod cli;
pub mod cognito;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }

    #[test]
    fn test_app_user_agent_format() {
        assert!(APP_USER_AGENT.starts_with(env!("CARGO_PKG_NAME")));
        assert!(APP_USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
