//! Mock Cloud CLI

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Local stand-in for the Snowflake and Databricks SQL statement APIs
#[derive(Parser, Debug)]
#[command(name = "mock-cloud")]
#[command(author, version, about)]
struct Args {
    /// Address to bind
    #[arg(long, env = "MOCK_CLOUD_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "MOCK_CLOUD_PORT", default_value_t = 8443)]
    port: u16,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "server=info,engine=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    server::run(&args.host, args.port).await
}
