//! 512-bit unsigned integer primitive
//!
//! Companion type to [`U256`](crate::primitives::U256), holding the full
//! product of a 256×256-bit multiplication before modular reduction.
//!
//! The goal is **not** to provide a full big-integer library, but to supply
//! only the operations the two reduction paths need: limb access for the
//! fast SM2-prime reduction, and halving/subtraction for the generic
//! quotient-estimation reduction.
//!
//! The representation matches `U256`: 32-bit limbs, least significant
//! first.

use crate::primitives::U256;

/// Fixed-size 512-bit unsigned integer, sixteen `u32` limbs little-endian.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct U512(pub(crate) [u32; 16]);

impl U512 {
    /// Assembles a value from its 256-bit halves.
    pub fn from_halves(high: U256, low: U256) -> Self {
        let mut limbs = [0u32; 16];

        limbs[..8].copy_from_slice(&low.0);
        limbs[8..].copy_from_slice(&high.0);

        Self(limbs)
    }

    /// The low 256 bits.
    pub(crate) fn low_half(&self) -> U256 {
        U256(self.0[..8].try_into().unwrap())
    }

    /// The high 256 bits.
    pub(crate) fn high_half(&self) -> U256 {
        U256(self.0[8..].try_into().unwrap())
    }

    /// Full-width subtraction.
    ///
    /// The caller must guarantee `self >= rhs`; the reduction loop only
    /// subtracts multiples of the modulus that it has already bounded.
    pub(crate) fn sub(&self, rhs: &Self) -> Self {
        let mut out = [0u32; 16];
        let mut borrow = 0i64;

        for i in 0..16 {
            let diff = i64::from(self.0[i]) - i64::from(rhs.0[i]) - borrow;
            out[i] = diff as u32;
            borrow = i64::from(diff < 0);
        }

        Self(out)
    }
}
