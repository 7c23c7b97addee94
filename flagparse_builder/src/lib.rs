//! Builder module for `flagparse`.
//! See [documentation root](https://docs.rs/flagparse/latest/flagparse/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod model;
mod parser;

pub use api::*;
pub use model::*;
pub use parser::{ConfigError, GeneralParser, ParseError, Parsed, ParsedOption};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
