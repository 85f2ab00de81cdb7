use serde::Deserialize;

use crate::models::{ProxyKind, ProxyRecord, ProxyType, TlsOptions, Transport};
use crate::parser::ParseError;
use crate::utils::base64::base64_decode;
use crate::utils::url::split_fragment;

/// Numbers in vmess JSON show up both quoted and bare.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Number(u64),
    Text(String),
}

impl Scalar {
    fn as_text(&self) -> String {
        match self {
            Scalar::Number(n) => n.to_string(),
            Scalar::Text(s) => s.trim().to_string(),
        }
    }
}

/// The v2rayN JSON document carried inside a `vmess://` link.
///
/// `add`, `port` and `id` are mandatory. Everything else defaults: `aid` 0,
/// `scy` auto, `net` tcp, no TLS.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VmessConfig {
    ps: Option<String>,
    add: Option<String>,
    port: Option<Scalar>,
    id: Option<String>,
    aid: Option<Scalar>,
    scy: Option<String>,
    net: Option<String>,
    /// Camouflage header type; `http` over tcp means an HTTP/1.1 header
    #[serde(rename = "type")]
    header_type: Option<String>,
    host: Option<String>,
    path: Option<String>,
    tls: Option<String>,
    sni: Option<String>,
    alpn: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse a VMess link into a ProxyRecord
pub fn explode_vmess(vmess: &str) -> Result<ProxyRecord, ParseError> {
    let body = vmess
        .strip_prefix("vmess://")
        .ok_or_else(|| ParseError::InvalidUri("missing vmess:// prefix".to_string()))?;
    let (encoded, fragment) = split_fragment(body);

    let decoded =
        base64_decode(encoded).map_err(|e| ParseError::InvalidPayload(e.to_string()))?;
    let config: VmessConfig = serde_json::from_str(decoded.trim())
        .map_err(|e| ParseError::InvalidPayload(format!("vmess json: {}", e)))?;

    let server = non_empty(config.add).ok_or(ParseError::MissingField("add"))?;
    let port_text = config
        .port
        .as_ref()
        .map(Scalar::as_text)
        .ok_or(ParseError::MissingField("port"))?;
    let port = match port_text.parse::<u16>() {
        Ok(p) if p != 0 => p,
        _ => return Err(ParseError::InvalidPort(port_text)),
    };
    let uuid = non_empty(config.id).ok_or(ParseError::MissingField("id"))?;
    let alter_id = config
        .aid
        .as_ref()
        .map(Scalar::as_text)
        .and_then(|aid| aid.parse::<u16>().ok())
        .unwrap_or(0);

    let host = non_empty(config.host);
    let path = non_empty(config.path);
    let transport = match non_empty(config.net).as_deref() {
        Some("ws") => Transport::Ws { path, host: host.clone() },
        Some("grpc") => Transport::Grpc { service_name: path },
        Some("h2") => Transport::H2 { path, host: host.clone() },
        Some("http") => Transport::Http { path, host: host.clone() },
        _ if config.header_type.as_deref() == Some("http") => Transport::Http {
            path,
            host: host.clone(),
        },
        _ => Transport::Tcp,
    };

    let tls = config
        .tls
        .as_deref()
        .is_some_and(|t| t.eq_ignore_ascii_case("tls"))
        .then(|| TlsOptions {
            server_name: non_empty(config.sni).or(host),
            skip_cert_verify: false,
            alpn: super::common::split_list(config.alpn.as_deref()),
        });

    let name = non_empty(config.ps)
        .or(fragment)
        .unwrap_or_else(|| ProxyType::VMess.default_name().to_string());

    Ok(ProxyRecord {
        name,
        server,
        port,
        kind: ProxyKind::VMess {
            uuid,
            alter_id,
            cipher: non_empty(config.scy).unwrap_or_else(|| "auto".to_string()),
            tls,
            transport,
        },
    })
}
