mod base;
mod error;
mod interface;
mod middleware;
mod printer;

pub(crate) use base::*;
pub use base::ConfigError;
pub use error::*;
pub(crate) use interface::*;
pub use middleware::{GeneralParser, Parsed};
pub(crate) use printer::*;

