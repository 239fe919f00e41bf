use crate::Credentials;

mod run;

#[derive(Debug)]
pub enum Action {
    Login {
        base_url: String,
        credentials: Credentials,
    },
    Validate {
        base_url: String,
        token: String,
    },
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
