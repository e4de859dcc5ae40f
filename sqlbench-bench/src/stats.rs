/// Statistics computed over a non-empty sample set.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub mean: f64,
    /// Sample standard deviation (N−1 denominator), matching what common
    /// statistics libraries report. 0.0 for a single sample.
    pub stddev: f64,
    pub p50: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
}

/// Descriptive summary of one snapshot of latency samples.
///
/// `stats` is `None` when no samples were recorded; no arithmetic is
/// attempted on empty input.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub stats: Option<Stats>,
}

impl Summary {
    /// Summarize `samples` (elapsed milliseconds, any order). Pure function
    /// of its input: the same samples always produce the same summary.
    pub fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self { count: 0, stats: None };
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).expect("latency samples are never NaN"));

        let n = sorted.len();
        let mean = sorted.iter().sum::<f64>() / n as f64;

        Self {
            count: n,
            stats: Some(Stats {
                mean,
                stddev: sample_stddev(&sorted, mean),
                p50: percentile(&sorted, 0.50),
                p90: percentile(&sorted, 0.90),
                p95: percentile(&sorted, 0.95),
                p99: percentile(&sorted, 0.99),
            }),
        }
    }
}

/// Sample standard deviation: sqrt(Σ(x−mean)² / (n−1)).
fn sample_stddev(samples: &[f64], mean: f64) -> f64 {
    let n = samples.len();
    if n < 2 {
        return 0.0;
    }
    let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    variance.sqrt()
}

/// R-7 ("linear", the Excel/NumPy default) percentile over pre-sorted values:
/// rank h = p·(n−1), linearly interpolated between the neighbouring order
/// statistics. `p` must be in [0, 1] and `sorted` non-empty.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    let h = p * (n - 1) as f64;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}
