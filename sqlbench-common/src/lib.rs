use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of rows seeded into the workload dataset.
pub const SEED_ROW_COUNT: u32 = 100;

/// Number of parameterized count queries executed per `/queries` batch.
pub const QUERIES_PER_BATCH: u32 = 1_000;

/// Substring matched against customer names by every query in a batch.
/// Exactly one seeded name (`username42`) contains it, so a batch over the
/// default dataset sums to `QUERIES_PER_BATCH`.
pub const NAME_MATCH_PATTERN: &str = "42";

/// Error types for SQLBench operations
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SqlBenchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {0}: {1}")]
    Http(u16, String),

    #[error("Malformed query result: {0}")]
    BadResponse(String),
}

/// JSON error envelope returned by the server for all error responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Result type for SQLBench operations
pub type Result<T> = std::result::Result<T, SqlBenchError>;
