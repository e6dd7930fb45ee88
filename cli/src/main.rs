use clap::Parser;
use presentation::cli::{ChatApp, Cli};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    ChatApp::run(cli).await?;
    Ok(())
}
