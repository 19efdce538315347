//! Map validated CLI matches to an action.

use crate::cli::actions::{decide, server, Action};
use crate::cli::commands::{cognito, CMD_DECIDE, CMD_SERVER};
use anyhow::{anyhow, Result};

/// # Errors
/// Returns an error if the subcommand is unknown or its arguments are inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some((CMD_SERVER, sub_m)) => Ok(Action::Server(server::Args {
            port: sub_m.get_one::<u16>("port").copied().unwrap_or(8080),
            cognito: cognito::parse(sub_m)?,
        })),
        Some((CMD_DECIDE, sub_m)) => Ok(Action::Decide(decide::Args {
            event: sub_m
                .get_one::<std::path::PathBuf>("event")
                .filter(|path| path.as_os_str() != "-")
                .cloned(),
        })),
        Some((name, _)) => Err(anyhow!("unknown subcommand: {name}")),
        None => Err(anyhow!("missing subcommand")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;

    fn matches_from(args: &[&str]) -> clap::ArgMatches {
        temp_env::with_vars(
            [
                ("CHALLENGER_COGNITO_CLIENT_ID", None::<&str>),
                ("CHALLENGER_COGNITO_CLIENT_SECRET", None),
                ("CHALLENGER_COGNITO_REGION", None),
                ("CHALLENGER_COGNITO_ENDPOINT", None),
                ("CHALLENGER_PORT", None),
            ],
            || commands::new().get_matches_from(args),
        )
    }

    #[test]
    fn server_without_gateway() {
        let action = handler(&matches_from(&["challenger", "server", "-p", "3000"]));
        match action {
            Ok(Action::Server(args)) => {
                assert_eq!(args.port, 3000);
                assert!(args.cognito.is_none());
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn server_with_gateway() {
        let action = handler(&matches_from(&[
            "challenger",
            "server",
            "--cognito-client-id",
            "client-id",
            "--cognito-client-secret",
            "client-secret",
            "--cognito-region",
            "ap-southeast-2",
        ]));
        match action {
            Ok(Action::Server(args)) => {
                let cognito = args.cognito.expect("gateway should be configured");
                assert_eq!(cognito.client_id, "client-id");
                assert_eq!(
                    cognito.endpoint.as_str(),
                    "https://cognito-idp.ap-southeast-2.amazonaws.com/"
                );
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn server_with_invalid_region() {
        let result = handler(&matches_from(&[
            "challenger",
            "server",
            "--cognito-client-id",
            "client-id",
            "--cognito-client-secret",
            "client-secret",
            "--cognito-region",
            "not a region",
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn decide_reads_stdin_by_default() {
        match handler(&matches_from(&["challenger", "decide"])) {
            Ok(Action::Decide(args)) => assert!(args.event.is_none()),
            other => panic!("unexpected action: {other:?}"),
        }

        match handler(&matches_from(&["challenger", "decide", "--event", "-"])) {
            Ok(Action::Decide(args)) => assert!(args.event.is_none()),
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn decide_with_path() {
        match handler(&matches_from(&["challenger", "decide", "-e", "/tmp/event.json"])) {
            Ok(Action::Decide(args)) => assert_eq!(
                args.event,
                Some(std::path::PathBuf::from("/tmp/event.json"))
            ),
            other => panic!("unexpected action: {other:?}"),
        }
    }
}
