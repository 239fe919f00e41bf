use crate::cli::actions::Action;
use crate::{login, validate};
use anyhow::Result;

pub(super) async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Login {
            base_url,
            credentials,
        } => {
            let token = login(&base_url, &credentials).await?;
            println!("{token}");
        }
        Action::Validate { base_url, token } => {
            let user = validate(&token, &base_url).await?;
            println!("{}", serde_json::to_string_pretty(&user)?);
        }
    }

    Ok(())
}
