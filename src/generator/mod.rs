pub mod config;
pub mod exports;
pub mod yaml;

// Re-export format converters
pub use exports::{proxy_to_clash, proxy_to_clash_yaml};
