pub mod cognito;
pub mod logging;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const CMD_SERVER: &str = "server";
pub const CMD_DECIDE: &str = "decide";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("challenger")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(server())
        .subcommand(decide());

    logging::with_args(command)
}

fn server() -> Command {
    let command = Command::new(CMD_SERVER)
        .about("Serve the define-auth-challenge trigger over HTTP")
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("CHALLENGER_PORT")
                .value_parser(clap::value_parser!(u16)),
        );

    cognito::with_args(command)
}

fn decide() -> Command {
    Command::new(CMD_DECIDE)
        .about("Decide a single event read from a file or stdin and print it")
        .arg(
            Arg::new("event")
                .short('e')
                .long("event")
                .help("Path to the event JSON, `-` or omitted reads stdin")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
}
