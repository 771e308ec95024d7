mod server;
mod translate;

use std::net::SocketAddr;

use clap::Parser;
use tracing::info;

/// Habit-preserving search redirector: accepts queries in the old SearXNG
/// colon-bang syntax and redirects them, translated, to Kagi.
#[derive(Parser, Debug)]
#[command(name = "rebang", version)]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8084")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rebang=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    info!("starting rebang redirector");

    server::serve(cli.bind).await?;
    Ok(())
}
