use crate::models::{ProxyKind, ProxyRecord, ProxyType};
use crate::parser::ParseError;

use super::common::ShareLink;

/// Parse a Trojan link into a ProxyRecord
///
/// Trojan always runs over TLS. The SNI comes from `sni`, falling back to
/// the older `peer` parameter; a missing port means 443.
pub fn explode_trojan(trojan: &str) -> Result<ProxyRecord, ParseError> {
    let link = ShareLink::parse(trojan)?;
    let password = link.require_userinfo("password")?;

    Ok(ProxyRecord {
        name: link
            .name
            .clone()
            .unwrap_or_else(|| ProxyType::Trojan.default_name().to_string()),
        server: link.host.clone(),
        port: link.port.unwrap_or(443),
        kind: ProxyKind::Trojan {
            password,
            tls: link.tls_options(&["sni", "peer"], &["allowInsecure", "insecure"]),
            transport: link.transport(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TlsOptions, Transport};

    #[test]
    fn test_explode_trojan() {
        let node = explode_trojan(
            "trojan://p%40ss@example.com:8443?peer=peer.example.com&allowInsecure=1&type=grpc&serviceName=tj#Trojan%20JP",
        )
        .unwrap();

        assert_eq!(node.name, "Trojan JP");
        assert_eq!(node.server, "example.com");
        assert_eq!(node.port, 8443);
        assert_eq!(
            node.kind,
            ProxyKind::Trojan {
                password: "p@ss".to_string(),
                tls: TlsOptions {
                    server_name: Some("peer.example.com".to_string()),
                    skip_cert_verify: true,
                    alpn: vec![],
                },
                transport: Transport::Grpc {
                    service_name: Some("tj".to_string())
                },
            }
        );
    }

    #[test]
    fn test_explode_trojan_defaults() {
        let node = explode_trojan("trojan://secret@example.com?sni=a.com&peer=b.com").unwrap();
        assert_eq!(node.name, "trojan-node");
        assert_eq!(node.port, 443);
        match node.kind {
            ProxyKind::Trojan { tls, transport, .. } => {
                assert_eq!(tls.server_name.as_deref(), Some("a.com"));
                assert_eq!(transport, Transport::Tcp);
            }
            _ => panic!("Expected Trojan"),
        }
    }

    #[test]
    fn test_explode_trojan_password_with_colon() {
        let node = explode_trojan("trojan://pa:ss@a.com:443#T").unwrap();
        match node.kind {
            ProxyKind::Trojan { password, .. } => assert_eq!(password, "pa:ss"),
            _ => panic!("Expected Trojan"),
        }
    }

    #[test]
    fn test_explode_trojan_missing_password() {
        assert_eq!(
            explode_trojan("trojan://example.com:443"),
            Err(ParseError::MissingField("password"))
        );
    }
}
