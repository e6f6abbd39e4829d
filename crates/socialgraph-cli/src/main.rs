use anyhow::Result;
use clap::Parser;

use socialgraph_cli::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    socialgraph_cli::run(cli).await
}
