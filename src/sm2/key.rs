//! SM2 key material.
//!
//! This module defines the private- and public-key types and their
//! derivation, serialization and validation. It provides a clear
//! separation between **key material** and the protocols that operate on
//! it (signatures, encryption); no signing or encryption logic lives
//! here.
//!
//! Either half of a keypair is usable on its own: a [`PublicKey`] alone
//! supports verification and encryption, a [`PrivateKey`] alone supports
//! signing and decryption (its public half is re-derivable at any time).

use crate::error::{Error, Result};
use crate::primitives::{Modulus, U256};
use crate::rng;
use crate::sm2::curve::{GENERATOR, Point, encode_coordinates};

/// An SM2 private key: a scalar `d ∈ [1, n−2]`.
#[derive(Clone)]
pub struct PrivateKey {
    d: U256,
}

impl PrivateKey {
    /// Validates and imports a private key from its 32-byte big-endian
    /// encoding.
    ///
    /// The accepted range is `[1, n−2]`. The value `n−1` is excluded
    /// deliberately: signing computes `(1 + d)⁻¹ mod n`, and `1 + (n−1)`
    /// vanishes, so a key of `n−1` could never produce a signature.
    ///
    /// # Errors
    /// `ScalarOutOfRange` for zero, `n−1`, or anything not below the
    /// curve order.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self> {
        let d = U256::from_be_bytes(bytes);

        let limit = Modulus::N.value().sbb(&U256::ONE).0;
        if d.is_zero() || d >= limit {
            return Err(Error::ScalarOutOfRange);
        }

        Ok(Self { d })
    }

    /// Returns the 32-byte big-endian encoding of the scalar.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.d.to_be_bytes()
    }

    /// Derives the public key `P = [d]G`.
    ///
    /// # Errors
    /// `ScalarOutOfRange` if the multiplication degenerates to the
    /// identity, which a scalar in `[1, n−2]` cannot produce.
    pub fn public_key(&self) -> Result<PublicKey> {
        match GENERATOR.scalar_mul(&self.d).coordinates() {
            Some((x, y)) => Ok(PublicKey { x, y }),
            None => Err(Error::ScalarOutOfRange),
        }
    }

    /// The scalar itself, for the protocol modules.
    pub(crate) fn scalar(&self) -> &U256 {
        &self.d
    }
}

/// An SM2 public key: a validated, non-identity curve point.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    x: U256,
    y: U256,
}

impl PublicKey {
    /// Validates and imports a public key from its 64-byte (`X‖Y`) or
    /// 65-byte (`0x04‖X‖Y`) encoding.
    ///
    /// # Errors
    /// `InvalidEncoding` for a malformed length or prefix,
    /// `PointNotOnCurve` if the coordinates fail the curve equation.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        match Point::decode(bytes)?.coordinates() {
            Some((x, y)) => Ok(Self { x, y }),
            None => Err(Error::PointNotOnCurve),
        }
    }

    /// Returns the raw 64-byte `X ‖ Y` encoding.
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];

        out[..32].copy_from_slice(&self.x.to_be_bytes());
        out[32..].copy_from_slice(&self.y.to_be_bytes());

        out
    }

    /// Returns the 65-byte uncompressed encoding `0x04 ‖ X ‖ Y`.
    pub fn to_encoded(&self) -> [u8; 65] {
        encode_coordinates(&self.x, &self.y)
    }

    /// The key as a group element.
    pub(crate) fn as_point(&self) -> Point {
        Point::Affine {
            x: self.x,
            y: self.y,
        }
    }

    /// The affine coordinates.
    pub(crate) fn coordinates(&self) -> (&U256, &U256) {
        (&self.x, &self.y)
    }
}

/// Generates a fresh SM2 keypair from the OS CSPRNG.
///
/// The private scalar is rejection-sampled into `[1, n−2]` and the public
/// point computed as `[d]G`.
///
/// # Errors
/// `RetryBudgetExhausted` only under a pathological entropy source.
pub fn generate_keypair() -> Result<(PrivateKey, PublicKey)> {
    let d = rng::random_scalar()?;

    let private = PrivateKey { d };
    let public = private.public_key()?;

    Ok((private, public))
}
