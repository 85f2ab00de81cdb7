//! VLESS share links
//!
//! Format: `vless://uuid@host:port?params#name`

use crate::models::{ProxyKind, ProxyRecord, ProxyType, RealityOptions, VlessSecurity};
use crate::parser::ParseError;

use super::common::ShareLink;

const INSECURE_KEYS: &[&str] = &["allowInsecure", "insecure"];

/// Parse a VLESS link into a ProxyRecord
pub fn explode_vless(vless: &str) -> Result<ProxyRecord, ParseError> {
    let link = ShareLink::parse(vless)?;

    let uuid = link.require_username("uuid")?;
    let port = link.require_port()?;

    let security = match link.param("security") {
        Some("tls") | Some("xtls") => VlessSecurity::Tls(link.tls_options(&["sni"], INSECURE_KEYS)),
        Some("reality") => VlessSecurity::Reality {
            tls: link.tls_options(&["sni"], INSECURE_KEYS),
            reality: RealityOptions {
                public_key: link
                    .param("pbk")
                    .ok_or(ParseError::MissingField("pbk"))?
                    .to_string(),
                short_id: link.param("sid").map(str::to_string),
                client_fingerprint: link.param("fp").map(str::to_string),
            },
        },
        _ => VlessSecurity::None,
    };

    Ok(ProxyRecord {
        name: link
            .name
            .clone()
            .unwrap_or_else(|| ProxyType::Vless.default_name().to_string()),
        server: link.host.clone(),
        port,
        kind: ProxyKind::Vless {
            uuid,
            flow: link.param("flow").map(str::to_string),
            security,
            transport: link.transport(),
        },
    })
}
