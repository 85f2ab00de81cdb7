//! Proxy model definitions
//!
//! A [`ProxyRecord`] is one parsed share link. Everything that only makes sense
//! for a particular protocol, transport or security mode lives inside an enum
//! variant, so a record can never carry fields that belong to another type.

use std::fmt;

/// The six protocols a share link may describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProxyType {
    VMess,
    Vless,
    Trojan,
    Shadowsocks,
    Hysteria2,
    Tuic,
}

impl ProxyType {
    /// Name used for `type:` in the emitted document.
    pub fn as_str(self) -> &'static str {
        match self {
            ProxyType::VMess => "vmess",
            ProxyType::Vless => "vless",
            ProxyType::Trojan => "trojan",
            ProxyType::Shadowsocks => "ss",
            ProxyType::Hysteria2 => "hysteria2",
            ProxyType::Tuic => "tuic",
        }
    }

    /// Display name given to a node whose link carries none.
    pub fn default_name(self) -> &'static str {
        match self {
            ProxyType::VMess => "vmess-node",
            ProxyType::Vless => "vless-node",
            ProxyType::Trojan => "trojan-node",
            ProxyType::Shadowsocks => "ss-node",
            ProxyType::Hysteria2 => "hysteria2-node",
            ProxyType::Tuic => "tuic-node",
        }
    }
}

impl fmt::Display for ProxyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a proxy parsed from a single share link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyRecord {
    pub name: String,
    pub server: String,
    pub port: u16,
    pub kind: ProxyKind,
}

impl ProxyRecord {
    pub fn proxy_type(&self) -> ProxyType {
        match self.kind {
            ProxyKind::VMess { .. } => ProxyType::VMess,
            ProxyKind::Vless { .. } => ProxyType::Vless,
            ProxyKind::Trojan { .. } => ProxyType::Trojan,
            ProxyKind::Shadowsocks { .. } => ProxyType::Shadowsocks,
            ProxyKind::Hysteria2 { .. } => ProxyType::Hysteria2,
            ProxyKind::Tuic { .. } => ProxyType::Tuic,
        }
    }
}

/// Protocol-specific identity, security and transport settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProxyKind {
    VMess {
        uuid: String,
        alter_id: u16,
        cipher: String,
        /// `None` when the link does not ask for TLS
        tls: Option<TlsOptions>,
        transport: Transport,
    },
    Vless {
        uuid: String,
        flow: Option<String>,
        security: VlessSecurity,
        transport: Transport,
    },
    Trojan {
        password: String,
        tls: TlsOptions,
        transport: Transport,
    },
    Shadowsocks {
        cipher: String,
        password: String,
    },
    Hysteria2 {
        password: String,
        tls: TlsOptions,
        obfs: Option<Obfs>,
    },
    Tuic {
        uuid: String,
        password: String,
        tls: TlsOptions,
        disable_sni: bool,
        congestion_controller: String,
        udp_relay_mode: String,
    },
}

/// Generic TLS client settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlsOptions {
    pub server_name: Option<String>,
    pub skip_cert_verify: bool,
    pub alpn: Vec<String>,
}

/// How a vless connection is secured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VlessSecurity {
    None,
    Tls(TlsOptions),
    Reality {
        tls: TlsOptions,
        reality: RealityOptions,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealityOptions {
    pub public_key: String,
    pub short_id: Option<String>,
    pub client_fingerprint: Option<String>,
}

/// Hysteria2 packet obfuscation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Obfs {
    pub kind: String,
    pub password: Option<String>,
}

/// Stream transport. Each variant carries only the options it understands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Transport {
    #[default]
    Tcp,
    Ws {
        path: Option<String>,
        host: Option<String>,
    },
    Grpc {
        service_name: Option<String>,
    },
    H2 {
        path: Option<String>,
        host: Option<String>,
    },
    Http {
        path: Option<String>,
        host: Option<String>,
    },
}

impl Transport {
    /// Value of the `network:` key.
    pub fn network(&self) -> &'static str {
        match self {
            Transport::Tcp => "tcp",
            Transport::Ws { .. } => "ws",
            Transport::Grpc { .. } => "grpc",
            Transport::H2 { .. } => "h2",
            Transport::Http { .. } => "http",
        }
    }
}
