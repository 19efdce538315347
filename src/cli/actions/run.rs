use crate::cli::{
    actions::{decide, server, Action},
    telemetry,
};
use anyhow::Result;

/// Execute the provided action.
// Single dispatch point: every `Action::*` variant gets its `*::execute` call here.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    let result = match action {
        Action::Server(args) => server::execute(args).await,
        Action::Decide(args) => decide::execute(args).await,
    };

    // flush batched spans before the runtime goes away
    telemetry::shutdown_tracer();

    result
}
