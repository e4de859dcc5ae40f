use clap::Parser;
use std::net::SocketAddr;
use std::process;
use std::time::Duration;
use sqlbench_bench::orchestrator::{BenchConfig, Benchmark};

#[derive(Parser)]
#[command(name = "sqlbench", about = "SQL query latency benchmark harness")]
struct Args {
    /// Address the in-process workload server binds to
    #[arg(long, default_value = "127.0.0.1:0")]
    listen: SocketAddr,

    /// Drive load against this base URL instead of the in-process server
    #[arg(long)]
    target_url: Option<String>,

    /// Seconds to wait after server readiness before issuing load
    #[arg(long, default_value_t = 1)]
    grace_secs: u64,

    /// Warm-up phase duration (seconds)
    #[arg(long, default_value_t = 30)]
    warmup_secs: u64,

    /// Measurement phase duration (seconds)
    #[arg(long, default_value_t = 120)]
    measurement_secs: u64,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = BenchConfig {
        listen: args.listen,
        target_url: args.target_url,
        grace_period: Duration::from_secs(args.grace_secs),
        warmup: Duration::from_secs(args.warmup_secs),
        measurement: Duration::from_secs(args.measurement_secs),
    };

    if let Err(e) = Benchmark::new(config).run().await {
        eprintln!("Benchmark failed: {e}");
        process::exit(1);
    }
}
