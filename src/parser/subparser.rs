use log::{debug, warn};

use crate::models::ProxyRecord;
use crate::parser::explodes::{explode_conf_line, SchemeKind};
use crate::parser::DecodeError;
use crate::utils::base64::base64_decode;

const HTML_MARKERS: &[&str] = &["<!doctype html", "<html"];

/// Turn a fetched subscription body into newline-separated share links.
///
/// In priority order:
/// 1. an HTML document is rejected
/// 2. text already containing a share-link prefix is returned untouched
/// 3. anything else is treated as one base64 blob
pub fn decode_subscription(raw: &str) -> Result<String, DecodeError> {
    let head = raw.trim_start();
    if HTML_MARKERS.iter().any(|marker| {
        head.get(..marker.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(marker))
    }) {
        return Err(DecodeError::HtmlPage);
    }

    if SchemeKind::prefixes().any(|prefix| raw.contains(prefix)) {
        return Ok(raw.to_string());
    }

    base64_decode(raw)
}

/// Explode every line, in order.
///
/// Lines of unknown schemes are skipped silently, lines that fail to parse
/// are logged and skipped. Neither aborts the batch.
pub fn parse_nodes(content: &str) -> Vec<ProxyRecord> {
    let mut nodes = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match explode_conf_line(line) {
            Some(Ok(node)) => {
                debug!("Parsed {} node {}", node.proxy_type(), node.name);
                nodes.push(node);
            }
            Some(Err(e)) => warn!("Skipping line {}: {}", index + 1, e),
            None => debug!("Skipping line {}: unsupported scheme", index + 1),
        }
    }
    nodes
}
