use crate::challenge::{define_auth_challenge, AuthenticationEvent};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    /// `None` reads stdin.
    pub event: Option<PathBuf>,
}

/// Read one event, decide it and print the augmented event on stdout.
/// # Errors
/// Returns an error if the event cannot be read or is malformed.
pub async fn execute(args: Args) -> Result<()> {
    let bytes = match &args.event {
        Some(path) => tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read event file: {}", path.display()))?,
        None => {
            let mut buffer = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut buffer)
                .await
                .context("Failed to read event from stdin")?;
            buffer
        }
    };

    let json = decide_json(&bytes)?;
    println!("{json}");

    Ok(())
}

/// # Errors
/// Returns an error if `bytes` is not a well-formed authentication event.
pub fn decide_json(bytes: &[u8]) -> Result<String> {
    let event = AuthenticationEvent::from_slice(bytes).context("Invalid authentication event")?;

    debug!("Session attempts: {}", event.request.session.len());

    let event = define_auth_challenge(event);

    serde_json::to_string(&event).context("Failed to encode authentication event")
}
