//! Core data models for the application
//!
//! ```rust
//! use clash_sub::models::{ProxyKind, ProxyRecord, ProxyType};
//!
//! let proxy = ProxyRecord {
//!     name: "example".to_string(),
//!     server: "example.com".to_string(),
//!     port: 8388,
//!     kind: ProxyKind::Shadowsocks {
//!         cipher: "aes-256-gcm".to_string(),
//!         password: "secret".to_string(),
//!     },
//! };
//! assert_eq!(proxy.proxy_type(), ProxyType::Shadowsocks);
//! ```

pub mod app_state;
mod proxy;

pub use app_state::AppState;
pub use proxy::*;
