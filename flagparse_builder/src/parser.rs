mod base;
mod interface;
mod middleware;
mod printer;

pub use base::{ConfigError, ParseError, Parsed, ParsedOption};
pub(crate) use base::*;
pub(crate) use interface::*;
pub use middleware::*;
pub(crate) use printer::*;
