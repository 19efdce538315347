use anyhow::Result;
use challenger::cli;

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Start the program
    let action = cli::start()?;

    // Handle the action
    action.execute().await?;

    Ok(())
}
