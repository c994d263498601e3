use std::time::Duration;

use anyhow::Context;
use tracing::{info, warn};

/// Characters of the fetched body handed back to the caller.
pub const MAX_CONTENT_CHARS: usize = 1000;

/// Result of an outbound fetch, already shaped for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Fetched { status_code: u16, content: String },
    Failed { message: String },
}

/// Build the client used for `/search`. Any scheme, host or address is accepted.
pub fn build_client(timeout_secs: u64) -> anyhow::Result<reqwest::Client> {
    // Requests leave from this host directly, never through an env-configured proxy.
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .no_proxy()
        .build()
        .context("Failed to create HTTP client")
}

/// GET `url` and return its status with the first [`MAX_CONTENT_CHARS`]
/// characters of the body. Errors are folded into [`FetchOutcome::Failed`].
pub async fn fetch_external(client: &reqwest::Client, url: &str) -> FetchOutcome {
    match fetch(client, url).await {
        Ok((status_code, body)) => {
            info!(%url, status_code, "external fetch done");
            FetchOutcome::Fetched {
                status_code,
                content: truncate_chars(&body, MAX_CONTENT_CHARS),
            }
        }
        Err(e) => {
            warn!(%url, error = %e, "external fetch failed");
            FetchOutcome::Failed {
                message: format!("Error: {e}"),
            }
        }
    }
}

async fn fetch(client: &reqwest::Client, url: &str) -> Result<(u16, String), reqwest::Error> {
    let response = client.get(url).send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    Ok((status, body))
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
