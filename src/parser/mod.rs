pub mod explodes;
pub mod node_manip;
pub mod subparser;
pub mod types;

pub use node_manip::dedup_names;
pub use subparser::{decode_subscription, parse_nodes};
pub use types::{DecodeError, ParseError};
