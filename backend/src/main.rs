use std::path::PathBuf;

use clap::Parser;
use mergington::{config::Config, error::ServerError};

#[derive(Parser, Debug)]
#[command(author, version, about = "Mergington High School activities API")]
struct Args {
    /// Overrides RUST_PORT
    #[arg(long)]
    port: Option<u16>,

    /// Overrides STATIC_DIR
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let args = Args::parse();

    mergington::init_tracing();

    let mut config = Config::load()?;
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(static_dir) = args.static_dir {
        config.static_dir = static_dir;
    }

    mergington::start_server(config).await
}
