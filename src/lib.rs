//! From-scratch implementation of the Chinese national cryptographic
//! standards SM2, SM3 and SM4.
//!
//! This crate provides the GB/T 32918 (SM2 elliptic-curve public-key
//! algorithm), GB/T 32905 (SM3 hash) and GB/T 32907 (SM4 block cipher)
//! primitives, together with the constructions built on them: the SM3
//! counter-mode KDF, SM4 in ECB/CBC/GCM modes, and the GM/T signature and
//! public-key encryption protocols.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. All components
//! are explicit in their semantics and suitable for security-critical code.
//!
//! # Module overview
//!
//! - `primitives`  
//!   Fixed-size integer types (`U256`, `U512`) and the modular arithmetic
//!   built on them, including the fast reduction specific to the SM2 prime
//!   and the generic reduction used for the curve order.
//!
//! - `hash`  
//!   The SM3 hash function: a streaming context and a one-shot convenience
//!   function. SM3 is also consumed internally by the SM2 protocols and by
//!   the key-derivation function.
//!
//! - `sm2`  
//!   The SM2 elliptic-curve group (curve parameters, affine point
//!   arithmetic, scalar multiplication), key material types, digital
//!   signatures with the GM/T user-identity hash, and public-key
//!   encryption in the C1‖C3‖C2 layout.
//!
//! - `cipher`  
//!   The SM4 block cipher and its modes of operation: ECB and CBC with
//!   PKCS#7 padding, and GCM with GHASH over GF(2¹²⁸).
//!
//! - `rng`  
//!   Random byte strings drawn from the operating system CSPRNG, and the
//!   rejection sampling of curve scalars used by key generation, signing
//!   and encryption.
//!
//! - `codec`  
//!   Hex and Base64 transcoding helpers for keys, signatures and
//!   ciphertexts.
//!
//! # Design goals
//!
//! - No heap allocations in core primitives
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - No global mutable state: curve parameters are compile-time constants,
//!   every context is owned by its caller
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries. It is a small, controlled implementation of the
//! GM/T algorithm family with byte-exact external contracts: raw 64-byte
//! r‖s signatures, 64/65-byte public-key points, and the C1‖C3‖C2
//! ciphertext layout.
//!
//! The implementation is **not** hardened against timing side channels;
//! scalar multiplication and modular arithmetic take data-dependent paths.

mod os;

pub mod cipher;
pub mod codec;
pub mod error;
pub mod hash;
pub mod primitives;
pub mod rng;
pub mod sm2;

pub use error::{Error, Result};
