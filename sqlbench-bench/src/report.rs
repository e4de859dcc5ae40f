use crate::stats::Summary;

/// Render `summary` as the fixed-order report lines printed at each phase
/// boundary. The statistics lines are omitted entirely when no samples were
/// recorded.
pub fn render(summary: &Summary) -> Vec<String> {
    let mut lines = vec![format!("Num Executions: {}", summary.count)];
    if let Some(stats) = &summary.stats {
        lines.push(format!("Avg: {}, std-dev: {}", stats.mean, stats.stddev));
        lines.push(format!("p50: {}", stats.p50));
        lines.push(format!("p90: {}", stats.p90));
        lines.push(format!("p95: {}", stats.p95));
        lines.push(format!("p99: {}", stats.p99));
    }
    lines
}

/// Render and print `summary` to stdout.
pub fn print(summary: &Summary) {
    for line in render(summary) {
        println!("{line}");
    }
}
