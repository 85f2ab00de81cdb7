pub mod base64;
pub mod http;
pub mod url;

// Re-export common utilities
pub use self::url::{is_truthy, url_decode};
