//! 256-bit unsigned integer primitive
//!
//! This module defines the fixed-size 256-bit unsigned integer type (`U256`)
//! that underlies all SM2 field and scalar arithmetic.
//!
//! It is designed as a **simple, explicit value type**, not as a full
//! big-integer arithmetic library. Its primary use cases are:
//! - field elements modulo the SM2 prime p
//! - scalars modulo the curve order n
//! - big-endian serialization of keys, coordinates and signature halves
//!
//! ## Representation
//!
//! The value is stored as eight 32-bit limbs in **little-endian limb
//! order** (limb 0 is least significant). Byte-level I/O is big-endian,
//! which aligns with the GM/T wire formats. Intermediate arithmetic is
//! promoted to 64 bits so carries and borrows never overflow.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result};

use crate::primitives::U512;

/// Fixed-size 256-bit unsigned integer.
///
/// Stored as eight `u32` limbs, least significant first. All byte-level
/// conversions are big-endian.
///
/// This type intentionally exposes only the functionality required by the
/// SM2 engine, favoring clarity and correctness over completeness.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct U256(pub(crate) [u32; 8]);

impl U256 {
    /// The value zero.
    pub const ZERO: Self = Self([0u32; 8]);

    /// The value one.
    pub const ONE: Self = Self([1, 0, 0, 0, 0, 0, 0, 0]);

    /// Constructs a value directly from little-endian limbs.
    ///
    /// This is a `const` constructor used for the curve parameter
    /// constants.
    pub(crate) const fn from_limbs(limbs: [u32; 8]) -> Self {
        Self(limbs)
    }

    /// Decodes a value from 32 big-endian bytes.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Self {
        let mut limbs = [0u32; 8];

        for (i, chunk) in bytes.chunks_exact(4).enumerate() {
            limbs[7 - i] = u32::from_be_bytes(chunk.try_into().unwrap());
        }

        Self(limbs)
    }

    /// Encodes the value as 32 big-endian bytes.
    pub fn to_be_bytes(self) -> [u8; 32] {
        let mut out = [0u8; 32];

        for (i, chunk) in out.chunks_exact_mut(4).enumerate() {
            chunk.copy_from_slice(&self.0[7 - i].to_be_bytes());
        }

        out
    }

    /// Returns `true` if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&limb| limb == 0)
    }

    /// Returns `true` if the least significant bit is clear.
    #[inline]
    pub(crate) fn is_even(&self) -> bool {
        self.0[0] & 1 == 0
    }

    /// Returns bit `index` (0 = least significant) as a boolean.
    #[inline]
    pub(crate) fn bit(&self, index: usize) -> bool {
        (self.0[index / 32] >> (index % 32)) & 1 == 1
    }

    /// Addition with carry out.
    ///
    /// Computes `self + rhs` modulo 2²⁵⁶ and returns the overflow carry
    /// (0 or 1). Callers preserve the carry for conditional corrections
    /// in modular arithmetic.
    pub(crate) fn adc(&self, rhs: &Self) -> (Self, u32) {
        let mut out = [0u32; 8];
        let mut carry = 0u64;

        for i in 0..8 {
            carry += u64::from(self.0[i]) + u64::from(rhs.0[i]);
            out[i] = carry as u32;
            carry >>= 32;
        }

        (Self(out), carry as u32)
    }

    /// Subtraction with borrow out.
    ///
    /// Computes `self - rhs` modulo 2²⁵⁶ and returns the borrow (0 or 1).
    pub(crate) fn sbb(&self, rhs: &Self) -> (Self, u32) {
        let mut out = [0u32; 8];
        let mut borrow = 0i64;

        for i in 0..8 {
            let diff = i64::from(self.0[i]) - i64::from(rhs.0[i]) - borrow;
            out[i] = diff as u32;
            borrow = i64::from(diff < 0);
        }

        (Self(out), borrow as u32)
    }

    /// Halves the value, shifting `carry` (0 or 1) into the top bit.
    ///
    /// The extra bit is what makes `(x + m) / 2` exact when the addition
    /// of the modulus overflowed 256 bits; the binary extended GCD
    /// inverse relies on this.
    pub(crate) fn shr1_with_carry(&self, carry: u32) -> Self {
        let mut out = [0u32; 8];

        for i in 0..7 {
            out[i] = (self.0[i] >> 1) | (self.0[i + 1] << 31);
        }
        out[7] = (self.0[7] >> 1) | (carry << 31);

        Self(out)
    }

    /// Schoolbook multiplication to a full 512-bit product.
    ///
    /// Partial products are accumulated in 64 bits, so no intermediate
    /// overflow is possible.
    pub fn widening_mul(&self, rhs: &Self) -> U512 {
        let mut out = [0u32; 16];

        for i in 0..8 {
            let mut carry = 0u64;

            for j in 0..8 {
                carry += u64::from(out[i + j]) + u64::from(self.0[i]) * u64::from(rhs.0[j]);
                out[i + j] = carry as u32;
                carry >>= 32;
            }

            out[i + 8] = carry as u32;
        }

        U512(out)
    }
}

impl Ord for U256 {
    /// Numeric comparison, scanning from the most significant limb down.
    fn cmp(&self, other: &Self) -> Ordering {
        for i in (0..8).rev() {
            match self.0[i].cmp(&other.0[i]) {
                Ordering::Equal => continue,
                order => return order,
            }
        }

        Ordering::Equal
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for U256 {
    /// Formats the value as lowercase hexadecimal, most significant digit
    /// first.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for byte in self.to_be_bytes() {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}
