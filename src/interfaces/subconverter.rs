use std::collections::HashSet;

use log::info;
use thiserror::Error;

use crate::generator::config::group::reserved_names;
use crate::generator::proxy_to_clash_yaml;
use crate::parser::{decode_subscription, dedup_names, parse_nodes, DecodeError};
use crate::settings::{Settings, TemplateSettings};
use crate::utils::http::web_get_async;

/// Request-level failures, each mapped to one HTTP status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("no subscription url given and no default configured")]
    MissingUrl,

    #[error("failed to fetch subscription ({}): {reason}", describe_status(.status))]
    Fetch { status: Option<u16>, reason: String },

    #[error("failed to decode subscription: {0}")]
    Decode(#[from] DecodeError),

    #[error("no valid proxy found in subscription")]
    EmptyBatch,

    #[error("internal error: {0}")]
    Internal(String),
}

fn describe_status(status: &Option<u16>) -> String {
    status.map_or_else(|| "no response".to_string(), |s| s.to_string())
}

impl ConvertError {
    pub fn status_code(&self) -> u16 {
        match self {
            ConvertError::MissingUrl | ConvertError::EmptyBatch => 400,
            ConvertError::Fetch { .. } => 502,
            ConvertError::Decode(_) | ConvertError::Internal(_) => 500,
        }
    }
}

/// Convert a raw subscription body into a Clash document.
///
/// Lines that fail to parse are skipped; only a decode failure or an empty
/// result aborts the conversion.
pub fn convert(raw: &str, template: &TemplateSettings) -> Result<String, ConvertError> {
    let content = decode_subscription(raw)?;

    let nodes = parse_nodes(&content);
    if nodes.is_empty() {
        return Err(ConvertError::EmptyBatch);
    }

    let seen: HashSet<String> = reserved_names(template).into_iter().collect();
    let (nodes, _) = dedup_names(nodes, seen);
    info!("Parsed {} proxies", nodes.len());

    proxy_to_clash_yaml(&nodes, template)
}

/// Fetch the subscription at `url` and convert it.
pub async fn subconverter(url: &str, settings: &Settings) -> Result<String, ConvertError> {
    let raw = web_get_async(url, &settings.user_agent, settings.fetch_timeout).await?;
    let document = convert(&raw, &settings.template)?;
    info!("Converted subscription from {}", url);
    Ok(document)
}
