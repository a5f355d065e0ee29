//! The SM2 elliptic-curve public-key algorithm family (GB/T 32918).
//!
//! This module ties together the curve group, key material and the two
//! GM/T protocols:
//!
//! - **Signatures** ([`sign`] / [`verify`]): 64-byte `r ‖ s` signatures
//!   over the SM3 digest of the user-identity hash Z and the message.
//! - **Public-key encryption** ([`encrypt`] / [`decrypt`]): the
//!   C1‖C3‖C2 ciphertext layout with the SM3-based KDF.
//!
//! Key encodings are byte-exact with the GM/T conventions: 32-byte
//! big-endian private scalars, 64-byte raw or 65-byte `0x04`-prefixed
//! public points.

pub mod curve;
pub mod encrypt;
pub mod key;
pub mod sign;

pub use curve::{GENERATOR, Point};
pub use encrypt::{decrypt, encrypt, kdf};
pub use key::{PrivateKey, PublicKey, generate_keypair};
pub use sign::{DEFAULT_ID, Signature, compute_z, sign, verify};
