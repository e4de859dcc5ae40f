use clap::Parser;
use std::net::SocketAddr;
use sqlbench_common::SEED_ROW_COUNT;
use sqlbench_server::{seed_customers, Server, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "sqlbench-server")]
struct Args {
    /// Address to bind the query endpoint to.
    #[arg(long, default_value = "127.0.0.1:8080")]
    listen: SocketAddr,

    /// Number of customer rows to seed before serving.
    #[arg(long, default_value_t = SEED_ROW_COUNT)]
    rows: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let dataset = seed_customers(args.rows);
    let config = ServerConfig { address: args.listen };

    let (ready_tx, ready_rx) = tokio::sync::oneshot::channel();

    // Print "Listening on <addr>" once the server signals it is bound.
    tokio::spawn(async move {
        if let Ok(addr) = ready_rx.await {
            println!("Listening on {}", addr);
        }
    });

    Server::new(config, dataset).run(ready_tx).await?;
    Ok(())
}
