//! Define-auth-challenge decision.
//!
//! The provider calls this before the first challenge and after each answer.
//! Every call moves the flow one step through
//! `NoChallengeYet -> ChallengePresented -> Issued | Failed`; the history
//! lives in the provider's session, so the decision itself is stateless.

use super::event::{AuthenticationEvent, ChallengeAttempt, ChallengeName, DecisionResponse};
use std::fmt;
use tracing::debug;

/// What the provider must do next. Exactly one per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    IssueTokens,
    FailAuthentication,
    PresentChallenge(ChallengeName),
}

/// Position of a sign-in flow after an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    NoChallengeYet,
    ChallengePresented,
    Issued,
    Failed,
}

impl FlowState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Issued | Self::Failed)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoChallengeYet => "no_challenge_yet",
            Self::ChallengePresented => "challenge_presented",
            Self::Issued => "issued",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Outcome {
    /// State the flow is in once the provider acts on this outcome.
    #[must_use]
    pub const fn next_state(self) -> FlowState {
        match self {
            Self::IssueTokens => FlowState::Issued,
            Self::FailAuthentication => FlowState::Failed,
            Self::PresentChallenge(_) => FlowState::ChallengePresented,
        }
    }
}

impl From<Outcome> for DecisionResponse {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::IssueTokens => Self {
                issue_tokens: true,
                fail_authentication: false,
                challenge_name: None,
            },
            Outcome::FailAuthentication => Self {
                issue_tokens: false,
                fail_authentication: true,
                challenge_name: None,
            },
            Outcome::PresentChallenge(name) => Self {
                issue_tokens: false,
                fail_authentication: false,
                challenge_name: Some(name),
            },
        }
    }
}

impl DecisionResponse {
    /// Recover the outcome a response encodes, or `None` if the fields contradict each other.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match (self.issue_tokens, self.fail_authentication, self.challenge_name) {
            (true, false, None) => Some(Outcome::IssueTokens),
            (false, true, None) => Some(Outcome::FailAuthentication),
            (false, false, Some(name)) => Some(Outcome::PresentChallenge(name)),
            _ => None,
        }
    }
}

/// Decide from the session history. Only the last attempt counts.
#[must_use]
pub fn decide(session: &[ChallengeAttempt]) -> Outcome {
    match session.last() {
        None => Outcome::PresentChallenge(ChallengeName::CustomChallenge),
        Some(attempt) if attempt.challenge_result => Outcome::IssueTokens,
        Some(_) => Outcome::FailAuthentication,
    }
}

/// Populate `event.response` with the decision and hand the event back.
#[must_use]
pub fn define_auth_challenge(mut event: AuthenticationEvent) -> AuthenticationEvent {
    let outcome = decide(&event.request.session);
    let state = outcome.next_state();

    debug!(
        attempts = event.request.session.len(),
        ?outcome,
        %state,
        terminal = state.is_terminal(),
        "define auth challenge"
    );

    event.response = outcome.into();
    event
}
