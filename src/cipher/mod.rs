//! Symmetric ciphers exposed by the crate.
//!
//! Currently includes SM4 with ECB, CBC and GCM modes.

pub mod sm4;

pub use sm4::Sm4;
