use crate::{
    challenger,
    cognito::{CognitoClient, CognitoConfig},
};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub cognito: Option<CognitoConfig>,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the Cognito client cannot be built or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    let gateway = match args.cognito {
        Some(config) => {
            debug!("Cognito endpoint: {}", config.endpoint);
            let client = CognitoClient::new(config).context("Failed to build Cognito client")?;
            Some(Arc::new(client))
        }
        None => {
            info!("Cognito gateway disabled, no app client configured");
            None
        }
    };

    challenger::new(args.port, gateway).await
}
