use sqlbench_common::{ErrorResponse, Result, SqlBenchError};

/// SQLBench client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the workload target, e.g. `http://127.0.0.1:8080`.
    /// A trailing slash is tolerated.
    pub base_url: String,
}

/// SQLBench workload target client
pub struct Client {
    pub config: ClientConfig,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Build the URL of the query-batch endpoint.
    pub fn queries_url(&self) -> String {
        format!("{}/queries", self.config.base_url.trim_end_matches('/'))
    }

    /// Execute one query batch against the target and return the summed
    /// result count reported by the server.
    pub async fn run_queries(&self) -> Result<u64> {
        let response = self
            .http_client
            .get(self.queries_url())
            .send()
            .await
            .map_err(|e| SqlBenchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(parse_error_response(status, response).await);
        }

        let body = response
            .text()
            .await
            .map_err(|e| SqlBenchError::Network(e.to_string()))?;

        body.trim()
            .parse::<u64>()
            .map_err(|_| SqlBenchError::BadResponse(body))
    }
}

async fn parse_error_response(
    status: reqwest::StatusCode,
    response: reqwest::Response,
) -> SqlBenchError {
    let error_msg = response
        .json::<ErrorResponse>()
        .await
        .map(|r| r.error)
        .unwrap_or_else(|_| format!("Server returned status: {}", status));

    SqlBenchError::Http(status.as_u16(), error_msg)
}
