use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use sqlbench_common::{ErrorResponse, NAME_MATCH_PATTERN, QUERIES_PER_BATCH};

/// One row of the seeded workload dataset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Customer {
    pub id: u32,
    pub name: String,
    pub email: String,
}

/// Build the deterministic customer fixture: `id = i`, `name = "username{i}"`,
/// `email = "user.{i}@mail.com"` for `i` in `1..=n`.
pub fn seed_customers(n: u32) -> Vec<Customer> {
    (1..=n)
        .map(|i| Customer {
            id: i,
            name: format!("username{i}"),
            email: format!("user.{i}@mail.com"),
        })
        .collect()
}

/// A parameterized count query: how many customers carry `pattern` as a
/// substring of their name. `cache_buster` varies the query's identity
/// between batches without affecting its result, so no layer can answer a
/// batch from a previous batch's result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountQuery {
    pub pattern: String,
    pub cache_buster: u64,
}

impl CountQuery {
    /// Count the dataset rows whose name matches this query's pattern.
    pub fn evaluate(&self, dataset: &[Customer]) -> u64 {
        dataset.iter().filter(|c| c.name.contains(&self.pattern)).count() as u64
    }
}

#[derive(Clone)]
pub struct AppState {
    /// Seeded once before serving; read-only thereafter.
    pub dataset: Arc<Vec<Customer>>,
    /// Monotonic per-process counter, one increment per `/queries` batch.
    /// Unbounded u64; wraparound is not a practical concern.
    pub batch_counter: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(dataset: Vec<Customer>) -> Self {
        Self {
            dataset: Arc::new(dataset),
            batch_counter: Arc::new(AtomicU64::new(0)),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub address: SocketAddr,
}

/// SQLBench workload target server
pub struct Server {
    config: ServerConfig,
    dataset: Vec<Customer>,
}

impl Server {
    /// Create a new server over an already-seeded dataset
    pub fn new(config: ServerConfig, dataset: Vec<Customer>) -> Self {
        Self { config, dataset }
    }

    /// Get the server's configured address
    pub fn address(&self) -> SocketAddr {
        self.config.address
    }

    /// Create the application router with the given state
    pub fn create_router(state: AppState) -> Router {
        Router::new()
            .route("/queries", get(handle_queries))
            .fallback(handle_unknown)
            .with_state(state)
    }

    /// Run the server, signalling `ready_tx` with the bound address once accepting connections
    pub async fn run(self, ready_tx: tokio::sync::oneshot::Sender<SocketAddr>) -> std::io::Result<()> {
        let state = AppState::new(self.dataset);
        let app = Self::create_router(state);
        let listener = tokio::net::TcpListener::bind(self.config.address).await?;
        let local_addr = listener.local_addr()?;
        ready_tx.send(local_addr).ok();
        axum::serve(listener, app).await?;
        Ok(())
    }
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse { error: message.into() })).into_response()
}

/// Fallback for unmatched paths so callers always receive the JSON error envelope.
pub async fn handle_unknown(uri: Uri) -> Response {
    error_response(StatusCode::NOT_FOUND, format!("Unknown path: {}", uri.path()))
}

/// Handler for GET /queries — executes one batch of `QUERIES_PER_BATCH`
/// parameterized count queries against the seeded dataset and returns the
/// sum of their per-query counts as plain text.
pub async fn handle_queries(State(state): State<AppState>) -> Response {
    let cache_buster = state.batch_counter.fetch_add(1, Ordering::Relaxed) + 1;
    let mut sum: u64 = 0;
    for _ in 0..QUERIES_PER_BATCH {
        let query = CountQuery {
            pattern: NAME_MATCH_PATTERN.to_string(),
            cache_buster,
        };
        sum += query.evaluate(&state.dataset);
    }
    (StatusCode::OK, sum.to_string()).into_response()
}
