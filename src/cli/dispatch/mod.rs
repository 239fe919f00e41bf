use crate::cli::actions::Action;
use crate::Credentials;
use anyhow::{anyhow, Context, Result};
use secrecy::SecretString;

/// # Errors
/// Returns an error if required arguments are missing or no subcommand was
/// given.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let base_url = matches
        .get_one::<String>("base-url")
        .cloned()
        .context("missing required argument: --base-url (or EASYPANEL_BASE_URL)")?;

    match matches.subcommand() {
        Some(("login", sub)) => {
            let credentials = Credentials {
                email: sub
                    .get_one::<String>("email")
                    .cloned()
                    .context("missing required argument: --email")?,
                password: SecretString::from(
                    sub.get_one::<String>("password")
                        .cloned()
                        .context("missing required argument: --password")?,
                ),
                remember_me: sub.get_flag("remember"),
                code: sub.get_one::<String>("code").cloned(),
            };

            Ok(Action::Login {
                base_url,
                credentials,
            })
        }
        Some(("validate", sub)) => Ok(Action::Validate {
            base_url,
            token: sub
                .get_one::<String>("token")
                .cloned()
                .context("missing required argument: --token")?,
        }),
        _ => Err(anyhow!("missing subcommand")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;
    use secrecy::ExposeSecret;

    #[test]
    fn handler_builds_a_login_action() -> Result<()> {
        let matches = commands::new().try_get_matches_from([
            "easypanel-auth",
            "--base-url",
            "https://panel.example",
            "login",
            "--email",
            "a@b.com",
            "--password",
            "pw",
            "--code",
            "123456",
        ])?;

        let action = handler(&matches)?;
        match action {
            Action::Login {
                base_url,
                credentials,
            } => {
                assert_eq!(base_url, "https://panel.example");
                assert_eq!(credentials.email, "a@b.com");
                assert_eq!(credentials.password.expose_secret(), "pw");
                assert!(!credentials.remember_me);
                assert_eq!(credentials.code.as_deref(), Some("123456"));
            }
            Action::Validate { .. } => return Err(anyhow!("expected login action")),
        }
        Ok(())
    }

    #[test]
    fn handler_builds_a_validate_action() -> Result<()> {
        let matches = commands::new().try_get_matches_from([
            "easypanel-auth",
            "--base-url",
            "https://panel.example",
            "validate",
            "--token",
            "tok-1",
        ])?;

        let action = handler(&matches)?;
        match action {
            Action::Validate { base_url, token } => {
                assert_eq!(base_url, "https://panel.example");
                assert_eq!(token, "tok-1");
            }
            Action::Login { .. } => return Err(anyhow!("expected validate action")),
        }
        Ok(())
    }

    #[test]
    fn handler_requires_a_base_url() -> Result<()> {
        temp_env::with_var_unset("EASYPANEL_BASE_URL", || {
            let matches = commands::new().try_get_matches_from([
                "easypanel-auth",
                "validate",
                "--token",
                "tok-1",
            ])?;

            let err = handler(&matches).err().context("expected error")?;
            assert!(err.to_string().contains("--base-url"));
            assert!(err.to_string().contains("EASYPANEL_BASE_URL"));
            Ok(())
        })
    }
}
