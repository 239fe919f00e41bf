use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ArgAction, ColorChoice, Command,
};

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("easypanel-auth")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .help("Base URL of the Easypanel instance, example: https://panel.example")
                .env("EASYPANEL_BASE_URL")
                .global(true),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: -v (WARN), -vv (INFO), -vvv (DEBUG), -vvvv (TRACE)")
                .global(true)
                .action(ArgAction::Count),
        )
        .subcommand(
            Command::new("login")
                .about("Exchange credentials for a token")
                .arg(
                    Arg::new("email")
                        .short('e')
                        .long("email")
                        .help("Account email")
                        .env("EASYPANEL_EMAIL")
                        .required(true),
                )
                .arg(
                    Arg::new("password")
                        .short('p')
                        .long("password")
                        .help("Account password")
                        .env("EASYPANEL_PASSWORD")
                        .hide_env_values(true)
                        .required(true),
                )
                .arg(
                    Arg::new("remember")
                        .short('r')
                        .long("remember")
                        .help("Ask the panel for a long-lived token")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("code")
                        .short('c')
                        .long("code")
                        .help("One-time 2FA code, required for accounts with 2FA enabled"),
                ),
        )
        .subcommand(
            Command::new("validate")
                .about("Resolve a bearer token to its user")
                .arg(
                    Arg::new("token")
                        .short('t')
                        .long("token")
                        .help("Bearer token to validate")
                        .env("EASYPANEL_TOKEN")
                        .hide_env_values(true)
                        .required(true),
                ),
        )
}
