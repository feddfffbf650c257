//! Fetches the source table.

use crate::error::{DictError, Result};
use tracing::debug;

/// Downloads `url` with a single GET and returns the whole body as text.
/// No retries and no timeout: one attempt either succeeds or aborts the run.
pub async fn fetch_text(url: &str) -> Result<String> {
    debug!("Fetching: {}", url);

    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(DictError::Http {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    debug!("Fetched {} bytes from {}", body.len(), url);
    Ok(body)
}
