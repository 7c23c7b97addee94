mod core;
mod option;

pub use self::core::*;
pub use option::*;
