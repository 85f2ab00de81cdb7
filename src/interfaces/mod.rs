pub mod subconverter;

pub use subconverter::{convert, subconverter, ConvertError};
