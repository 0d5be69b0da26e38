//! Protocol-level utilities: header names and grammar.

pub mod constants;
pub mod headers;

pub use constants::{defaults, status};
pub use headers::*;
