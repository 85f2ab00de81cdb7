pub mod common;
pub mod hysteria2;
pub mod ss;
pub mod trojan;
pub mod tuic;
pub mod vless;
pub mod vmess;

pub use hysteria2::explode_hysteria2;
pub use ss::explode_ss;
pub use trojan::explode_trojan;
pub use tuic::explode_tuic;
pub use vless::explode_vless;
pub use vmess::explode_vmess;

use crate::models::ProxyRecord;
use crate::parser::ParseError;

/// Share-link schemes we know how to explode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeKind {
    VMess,
    Vless,
    Trojan,
    Shadowsocks,
    Hysteria2,
    Tuic,
}

/// Prefixes in dispatch order; the first match wins.
const PREFIXES: &[(&str, SchemeKind)] = &[
    ("vmess://", SchemeKind::VMess),
    ("vless://", SchemeKind::Vless),
    ("trojan://", SchemeKind::Trojan),
    ("ss://", SchemeKind::Shadowsocks),
    ("hy2://", SchemeKind::Hysteria2),
    ("hysteria2://", SchemeKind::Hysteria2),
    ("tuic://", SchemeKind::Tuic),
];

impl SchemeKind {
    /// Case-sensitive prefix detection. `None` means the line is skipped.
    pub fn detect(link: &str) -> Option<Self> {
        PREFIXES
            .iter()
            .find(|(prefix, _)| link.starts_with(*prefix))
            .map(|&(_, kind)| kind)
    }

    /// Every prefix that marks text as already-plain share links.
    pub fn prefixes() -> impl Iterator<Item = &'static str> {
        PREFIXES.iter().map(|&(prefix, _)| prefix)
    }
}

/// Explode one share link of a known scheme.
pub fn explode(kind: SchemeKind, link: &str) -> Result<ProxyRecord, ParseError> {
    match kind {
        SchemeKind::VMess => explode_vmess(link),
        SchemeKind::Vless => explode_vless(link),
        SchemeKind::Trojan => explode_trojan(link),
        SchemeKind::Shadowsocks => explode_ss(link),
        SchemeKind::Hysteria2 => explode_hysteria2(link),
        SchemeKind::Tuic => explode_tuic(link),
    }
}

/// Detect the scheme and explode. `None` for unsupported schemes.
pub fn explode_conf_line(link: &str) -> Option<Result<ProxyRecord, ParseError>> {
    SchemeKind::detect(link).map(|kind| explode(kind, link))
}
