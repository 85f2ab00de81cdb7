use std::time::Duration;

use log::debug;
use reqwest::Client;

use crate::interfaces::ConvertError;

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_TIMEOUT: u64 = 15;

/// Identifies us to subscription providers, which often gate the share-link
/// format on a Clash-like user agent.
pub const DEFAULT_USER_AGENT: &str = "clash.meta";

/// Fetches a subscription body.
///
/// # Arguments
/// * `url` - The subscription locator
/// * `user_agent` - Value sent as the `User-Agent` header
/// * `timeout` - Whole-request timeout in seconds
///
/// # Returns
/// * `Ok(String)` - The response body
/// * `Err(ConvertError::Fetch)` - Transport failure or non-2xx status
pub async fn web_get_async(
    url: &str,
    user_agent: &str,
    timeout: u64,
) -> Result<String, ConvertError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout))
        .user_agent(user_agent)
        .build()
        .map_err(|e| ConvertError::Internal(format!("failed to build HTTP client: {}", e)))?;

    debug!("Fetching subscription from {}", url);
    let response = client.get(url).send().await.map_err(|e| ConvertError::Fetch {
        status: e.status().map(|s| s.as_u16()),
        reason: e.to_string(),
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ConvertError::Fetch {
            status: Some(status.as_u16()),
            reason: status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string(),
        });
    }

    response.text().await.map_err(|e| ConvertError::Fetch {
        status: Some(status.as_u16()),
        reason: format!("failed to read response body: {}", e),
    })
}
