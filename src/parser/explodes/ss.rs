use crate::models::{ProxyKind, ProxyRecord, ProxyType};
use crate::parser::ParseError;
use crate::utils::base64::base64_decode;
use crate::utils::url::{split_fragment, url_decode};

use super::common::split_host_port;

/// Parse a Shadowsocks link into a ProxyRecord
///
/// Two layouts are accepted:
/// * SIP002: `ss://base64(method:password)@host:port#name`, where the
///   userinfo may also be plain percent-encoded text
/// * legacy: `ss://base64(method:password@host:port)#name`
///
/// Plugin query strings are dropped.
pub fn explode_ss(ss: &str) -> Result<ProxyRecord, ParseError> {
    let body = ss
        .strip_prefix("ss://")
        .ok_or_else(|| ParseError::InvalidUri("missing ss:// prefix".to_string()))?;
    let (body, name) = split_fragment(body);
    let body = body.split('?').next().unwrap_or_default().trim_end_matches('/');

    let (userinfo, authority) = match body.rsplit_once('@') {
        Some((userinfo, authority)) => (decode_userinfo(userinfo)?, authority.to_string()),
        None => {
            let decoded =
                base64_decode(body).map_err(|e| ParseError::InvalidPayload(e.to_string()))?;
            let (userinfo, authority) = decoded
                .trim()
                .rsplit_once('@')
                .ok_or_else(|| ParseError::InvalidPayload("missing `@` in payload".to_string()))?;
            (userinfo.to_string(), authority.to_string())
        }
    };

    let (cipher, password) = userinfo
        .split_once(':')
        .ok_or(ParseError::MissingField("password"))?;
    if cipher.is_empty() {
        return Err(ParseError::MissingField("cipher"));
    }
    let (server, port) = split_host_port(&authority)?;

    Ok(ProxyRecord {
        name: name.unwrap_or_else(|| ProxyType::Shadowsocks.default_name().to_string()),
        server,
        port,
        kind: ProxyKind::Shadowsocks {
            cipher: cipher.to_string(),
            password: password.to_string(),
        },
    })
}

/// `method:password`, either base64-encoded or percent-encoded.
fn decode_userinfo(userinfo: &str) -> Result<String, ParseError> {
    if let Ok(decoded) = base64_decode(userinfo) {
        let decoded = decoded.trim();
        if decoded.contains(':') {
            return Ok(decoded.to_string());
        }
    }
    let plain = url_decode(userinfo);
    if plain.contains(':') {
        Ok(plain)
    } else {
        Err(ParseError::InvalidPayload(
            "userinfo is neither base64 nor method:password".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cipher_and_password(node: &ProxyRecord) -> (&str, &str) {
        match &node.kind {
            ProxyKind::Shadowsocks { cipher, password } => (cipher, password),
            _ => panic!("Expected Shadowsocks"),
        }
    }

    #[test]
    fn test_explode_ss_legacy_format() {
        // Legacy format: ss://base64(method:password@server:port)
        let node =
            explode_ss("ss://Y2hhY2hhMjAtaWV0Zi1wb2x5MTMwNTpwYXNzd29yZEAxMjcuMC4wLjE6ODA4MA==")
                .unwrap();

        assert_eq!(node.name, "ss-node");
        assert_eq!(node.server, "127.0.0.1");
        assert_eq!(node.port, 8080);
        assert_eq!(
            cipher_and_password(&node),
            ("chacha20-ietf-poly1305", "password")
        );
    }

    #[test]
    fn test_explode_ss_sip002_format() {
        // SIP002 format: ss://base64(method:password)@server:port
        let node = explode_ss(
            "ss://Y2hhY2hhMjAtaWV0Zi1wb2x5MTMwNTpwYXNzd29yZA==@example.com:8388#Example%20Server",
        )
        .unwrap();

        assert_eq!(node.name, "Example Server");
        assert_eq!(node.server, "example.com");
        assert_eq!(node.port, 8388);
        assert_eq!(
            cipher_and_password(&node),
            ("chacha20-ietf-poly1305", "password")
        );
    }

    #[test]
    fn test_explode_ss_unpadded_userinfo_with_plugin() {
        let node = explode_ss(
            "ss://YWVzLTI1Ni1nY206c2VjcmV0@example.com:8388/?plugin=obfs-local%3Bobfs%3Dhttp#Plugin",
        )
        .unwrap();
        assert_eq!(node.port, 8388);
        assert_eq!(cipher_and_password(&node), ("aes-256-gcm", "secret"));
    }

    #[test]
    fn test_explode_ss_plain_userinfo() {
        let node = explode_ss("ss://2022-blake3-aes-128-gcm:abc%2Bdef@[::1]:443#2022").unwrap();
        assert_eq!(node.server, "::1");
        assert_eq!(
            cipher_and_password(&node),
            ("2022-blake3-aes-128-gcm", "abc+def")
        );
    }

    #[test]
    fn test_explode_ss_invalid() {
        assert!(matches!(
            explode_ss("ss://YWVzLTI1Ni1nY206c2VjcmV0@example.com:notaport"),
            Err(ParseError::InvalidPort(_))
        ));
        assert!(matches!(
            explode_ss("ss://!!!!"),
            Err(ParseError::InvalidPayload(_))
        ));
        // base64("aes-256-gcm") has no password separator
        assert!(explode_ss("ss://YWVzLTI1Ni1nY20@example.com:8388").is_err());
    }
}
