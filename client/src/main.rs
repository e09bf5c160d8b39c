mod game;
mod input;
mod network;
mod rendering;

use clap::Parser;
use log::info;
use shared::POLL_INTERVAL_MS;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server address to connect to
    #[arg(short = 's', long, default_value = "127.0.0.1:8080")]
    server: String,

    /// State polling interval in milliseconds
    #[arg(short = 'p', long, default_value_t = POLL_INTERVAL_MS)]
    poll_interval: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    if std::env::var("RUST_LOG").is_err() {
        eprintln!("Set RUST_LOG=info for detailed logging");
    }

    let args = Args::parse();

    info!("Starting client...");
    info!("Connecting to: {}", args.server);
    info!("Enter grid points as x,y; two distinct points claim an edge");

    let mut client = network::Client::new(&args.server, args.poll_interval).await?;

    client.run().await?;

    Ok(())
}
