use std::time::Duration;

use chromify_server::server::{self, ServerConfig};
use clap::Parser;

/// Mock colorization backend for the chromify web front-end.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// Artificial processing delay in milliseconds.
    #[arg(long, default_value_t = 2000)]
    delay_ms: u64,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    server::startup(ServerConfig {
        host: args.host,
        port: args.port,
        delay: Duration::from_millis(args.delay_ms),
    })
    .await
}
