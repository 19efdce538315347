pub mod decider;
pub use self::decider::{decide, define_auth_challenge, FlowState, Outcome};

pub mod event;
pub use self::event::{
    AuthenticationEvent, ChallengeAttempt, ChallengeName, ChallengeRequest, DecisionResponse,
    CUSTOM_CHALLENGE,
};
