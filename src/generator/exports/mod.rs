pub mod clash;
pub mod proxy_to_clash;

pub use clash::{proxy_to_clash, proxy_to_clash_yaml};
