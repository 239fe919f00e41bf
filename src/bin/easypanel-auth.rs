use anyhow::Result;
use easypanel_auth::cli::start;

#[tokio::main]
async fn main() -> Result<()> {
    let action = start()?;

    action.execute().await
}
