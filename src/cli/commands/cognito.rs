use crate::cognito::CognitoConfig;
use anyhow::{anyhow, Context, Result};
use clap::{Arg, ArgMatches, Command};
use secrecy::SecretString;
use url::Url;

pub const ARG_COGNITO_CLIENT_ID: &str = "cognito-client-id";
pub const ARG_COGNITO_CLIENT_SECRET: &str = "cognito-client-secret";
pub const ARG_COGNITO_REGION: &str = "cognito-region";
pub const ARG_COGNITO_ENDPOINT: &str = "cognito-endpoint";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_COGNITO_CLIENT_ID)
                .long(ARG_COGNITO_CLIENT_ID)
                .help("Cognito app client id, enables the /v1/auth gateway")
                .env("CHALLENGER_COGNITO_CLIENT_ID"),
        )
        .arg(
            Arg::new(ARG_COGNITO_CLIENT_SECRET)
                .long(ARG_COGNITO_CLIENT_SECRET)
                .help("Cognito app client secret, used to compute SECRET_HASH")
                .env("CHALLENGER_COGNITO_CLIENT_SECRET")
                .hide_env_values(true),
        )
        .arg(
            Arg::new(ARG_COGNITO_REGION)
                .long(ARG_COGNITO_REGION)
                .help("AWS region of the user pool, example: eu-west-1")
                .env("CHALLENGER_COGNITO_REGION"),
        )
        .arg(
            Arg::new(ARG_COGNITO_ENDPOINT)
                .long(ARG_COGNITO_ENDPOINT)
                .help("Override the Cognito endpoint URL (takes precedence over --cognito-region)")
                .env("CHALLENGER_COGNITO_ENDPOINT"),
        )
}

/// Gateway configuration, or `None` when no client id is set.
///
/// # Errors
/// Returns an error if a client id is given without its secret, or without a region or endpoint.
pub fn parse(matches: &ArgMatches) -> Result<Option<CognitoConfig>> {
    let Some(client_id) = matches.get_one::<String>(ARG_COGNITO_CLIENT_ID).cloned() else {
        return Ok(None);
    };

    let client_secret = matches
        .get_one::<String>(ARG_COGNITO_CLIENT_SECRET)
        .cloned()
        .context("missing required argument: --cognito-client-secret")?;

    let endpoint = match (
        matches.get_one::<String>(ARG_COGNITO_ENDPOINT),
        matches.get_one::<String>(ARG_COGNITO_REGION),
    ) {
        (Some(endpoint), _) => {
            Url::parse(endpoint).with_context(|| format!("invalid Cognito endpoint: {endpoint}"))?
        }
        (None, Some(region)) => CognitoConfig::endpoint_for_region(region)?,
        (None, None) => {
            return Err(anyhow!(
                "missing required argument: --{ARG_COGNITO_REGION} or --{ARG_COGNITO_ENDPOINT}"
            ))
        }
    };

    Ok(Some(CognitoConfig {
        client_id,
        client_secret: SecretString::from(client_secret),
        endpoint,
    }))
}
