//! Hash algorithms exposed by the crate.
//!
//! Currently includes SM3 with a pure-Rust implementation.

pub mod sm3;

/// Re-export of the SM3 convenience function and streaming context.
pub use sm3::{Sm3, sm3};
