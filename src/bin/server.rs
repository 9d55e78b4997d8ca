use boarding_sequencer::server::app;
use clap::Parser;
use log::{error, info};
use std::net::SocketAddr;

#[derive(Parser, Debug)]
#[command(name = "boarding-sequencer-server")]
#[command(about = "HTTP service turning uploaded CSV manifests into boarding sequences")]
struct Args {
    /// Address to bind
    #[arg(long, env = "BOARDING_HOST", default_value = "127.0.0.1")]
    host: std::net::IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "BOARDING_PORT", default_value_t = 5000)]
    port: u16,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = Args::parse();
    let addr = SocketAddr::new(args.host, args.port);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    info!("Boarding sequencer listening at http://{}", addr);

    if let Err(e) = axum::serve(listener, app()).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
