use std::net::SocketAddr;
use std::time::{Duration, Instant};

use sqlbench_client::{Client, ClientConfig};
use sqlbench_common::{Result, SEED_ROW_COUNT};
use sqlbench_server::{seed_customers, Server, ServerConfig};

use crate::repeater::repeat_for_duration;
use crate::report;
use crate::samples::SampleCollector;
use crate::stats::Summary;

/// Benchmark configuration. Defaults mirror the reference run: 1s grace
/// period, 30s warm-up, 120s measurement, in-process server on an ephemeral
/// loopback port.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Address the in-process workload server binds to.
    pub listen: SocketAddr,
    /// When set, drive load against this base URL instead of starting an
    /// in-process server.
    pub target_url: Option<String>,
    /// Delay between server readiness and the first request.
    pub grace_period: Duration,
    pub warmup: Duration,
    pub measurement: Duration,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            listen: "127.0.0.1:0".parse().expect("valid loopback address"),
            target_url: None,
            grace_period: Duration::from_secs(1),
            warmup: Duration::from_secs(30),
            measurement: Duration::from_secs(120),
        }
    }
}

/// The two load-driving phases of a run. Warm-up samples are discarded after
/// reporting; measurement samples are the run's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Warmup,
    Measurement,
}

impl Phase {
    /// Announcement line printed when the phase starts. Always derived from
    /// the configured duration so the text can never disagree with the
    /// actual phase length.
    pub fn announcement(&self, duration: Duration) -> String {
        match self {
            Phase::Warmup => format!("Running warm up for {} seconds..", duration.as_secs()),
            Phase::Measurement => {
                format!("Running measurement for {} seconds..", duration.as_secs())
            }
        }
    }

    fn duration(&self, config: &BenchConfig) -> Duration {
        match self {
            Phase::Warmup => config.warmup,
            Phase::Measurement => config.measurement,
        }
    }
}

/// Benchmark orchestrator: seeds the dataset, serves the workload target,
/// drives the warm-up and measurement phases, and prints the per-phase
/// latency reports.
///
/// Construction does no work; the run starts only when `run()` is invoked.
pub struct Benchmark {
    config: BenchConfig,
    collector: SampleCollector,
}

impl Benchmark {
    pub fn new(config: BenchConfig) -> Self {
        Self { config, collector: SampleCollector::new() }
    }

    /// Another handle to the shared sample collector.
    pub fn collector(&self) -> SampleCollector {
        self.collector.clone()
    }

    /// Run the full benchmark: seed, serve, warm up, measure, report.
    ///
    /// Fail-fast: any error while seeding, serving, or driving load aborts
    /// the run immediately and propagates; no partial report is printed for
    /// the failed phase.
    pub async fn run(&self) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let (base_url, serve_task) = match &self.config.target_url {
            Some(url) => (url.clone(), None),
            None => {
                let dataset = seed_customers(SEED_ROW_COUNT);
                let server = Server::new(ServerConfig { address: self.config.listen }, dataset);

                let (ready_tx, ready_rx) = tokio::sync::oneshot::channel();
                let task = tokio::spawn(server.run(ready_tx));

                let addr = match ready_rx.await {
                    Ok(addr) => addr,
                    // The server dropped the ready signal without binding;
                    // surface its error instead of the channel's.
                    Err(_) => {
                        return Err(match task.await {
                            Ok(Err(e)) => e.into(),
                            _ => "server exited before signalling readiness".into(),
                        });
                    }
                };
                (format!("http://{addr}"), Some(task))
            }
        };

        tokio::time::sleep(self.config.grace_period).await;

        let client = Client::new(ClientConfig { base_url });

        self.drive_phase(Phase::Warmup, &client).await?;
        self.collector.reset();
        self.drive_phase(Phase::Measurement, &client).await?;

        if let Some(task) = serve_task {
            task.abort();
        }
        Ok(())
    }

    /// Announce the phase, repeat the timed unit of work for its configured
    /// duration, then print the summary of every sample recorded so far.
    async fn drive_phase(&self, phase: Phase, client: &Client) -> Result<()> {
        let duration = phase.duration(&self.config);
        println!("{}", phase.announcement(duration));

        repeat_for_duration(duration, || {
            let collector = self.collector.clone();
            async move {
                let start = Instant::now();
                client.run_queries().await?;
                collector.record(start.elapsed().as_secs_f64() * 1_000.0);
                Ok::<(), sqlbench_common::SqlBenchError>(())
            }
        })
        .await?;

        report::print(&Summary::from_samples(&self.collector.snapshot()));
        Ok(())
    }
}
