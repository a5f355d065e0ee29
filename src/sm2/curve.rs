//! The SM2 elliptic-curve group (GB/T 32918.5 parameters).
//!
//! The curve is `y² = x³ + ax + b` over 𝔽ₚ with `a = p − 3`, operated on
//! in affine coordinates. The group element is a proper sum type: either
//! an affine point or the identity. Keeping the identity out of the
//! coordinate representation means no operation ever reads an
//! uninitialized coordinate, and the special cases of the addition law
//! are exact pattern matches.
//!
//! All parameters are compile-time constants; there is no runtime
//! initialization and no mutable global state.

use crate::error::{Error, Result};
use crate::primitives::{Modulus, U256};

/// Curve coefficient `a = p − 3`.
pub(crate) const A: U256 = U256::from_limbs([
    0xFFFFFFFC, 0xFFFFFFFF, 0x00000000, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFE,
]);

/// Curve coefficient `b`.
pub(crate) const B: U256 = U256::from_limbs([
    0x4D940E93, 0xDDBCBD41, 0x15AB8F92, 0xF39789F5, 0xCF6509A7, 0x4D5A9E4B, 0x9D9F5E34, 0x28E9FA9E,
]);

/// x-coordinate of the base point G.
pub(crate) const GX: U256 = U256::from_limbs([
    0x334C74C7, 0x715A4589, 0xF2660BE1, 0x8FE30BBF, 0x6A39C994, 0x5F990446, 0x1F198119, 0x32C4AE2C,
]);

/// y-coordinate of the base point G.
pub(crate) const GY: U256 = U256::from_limbs([
    0x2139F0A0, 0x02DF32E5, 0xC62A4740, 0xD0A9877C, 0x6B692153, 0x59BDCEE3, 0xF4F6779C, 0xBC3736A2,
]);

/// The base point G.
pub const GENERATOR: Point = Point::Affine { x: GX, y: GY };

/// An element of the SM2 curve group.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Point {
    /// The group identity (point at infinity).
    Identity,
    /// A finite point with coordinates in 𝔽ₚ.
    Affine { x: U256, y: U256 },
}

impl Point {
    /// Returns `true` for the group identity.
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// The affine coordinates, or `None` for the identity.
    pub fn coordinates(&self) -> Option<(U256, U256)> {
        match self {
            Point::Identity => None,
            Point::Affine { x, y } => Some((*x, *y)),
        }
    }

    /// Point doubling.
    ///
    /// `λ = (3x² + a) / (2y)`, `x' = λ² − 2x`, `y' = λ(x − x') − y`.
    /// Doubling the identity or a point with `y = 0` yields the identity.
    pub fn double(&self) -> Point {
        let fp = Modulus::P;

        let (x, y) = match self {
            Point::Identity => return Point::Identity,
            Point::Affine { x, y } => (x, y),
        };
        if y.is_zero() {
            return Point::Identity;
        }

        let x_sq = fp.mul(x, x);
        let mut num = fp.add(&x_sq, &x_sq);
        num = fp.add(&num, &x_sq);
        num = fp.add(&num, &A);

        let two_y = fp.add(y, y);
        let den = match fp.invert(&two_y) {
            Ok(inv) => inv,
            Err(_) => return Point::Identity,
        };

        let lambda = fp.mul(&num, &den);

        let mut new_x = fp.mul(&lambda, &lambda);
        new_x = fp.sub(&new_x, x);
        new_x = fp.sub(&new_x, x);

        let mut new_y = fp.sub(x, &new_x);
        new_y = fp.mul(&lambda, &new_y);
        new_y = fp.sub(&new_y, y);

        Point::Affine { x: new_x, y: new_y }
    }

    /// Point addition.
    ///
    /// `λ = (y₂ − y₁) / (x₂ − x₁)`, `x' = λ² − x₁ − x₂`,
    /// `y' = λ(x₁ − x') − y₁`. Adding the identity is a no-op; equal
    /// points delegate to doubling; mirror-image points (`x₁ = x₂`,
    /// `y₂ = −y₁`) sum to the identity.
    pub fn add(&self, other: &Point) -> Point {
        let fp = Modulus::P;

        let (x1, y1) = match self {
            Point::Identity => return *other,
            Point::Affine { x, y } => (x, y),
        };
        let (x2, y2) = match other {
            Point::Identity => return *self,
            Point::Affine { x, y } => (x, y),
        };

        if x1 == x2 {
            if y1 == y2 {
                return self.double();
            }
            return Point::Identity;
        }

        let num = fp.sub(y2, y1);
        let den = fp.sub(x2, x1);
        let den = match fp.invert(&den) {
            Ok(inv) => inv,
            Err(_) => return Point::Identity,
        };

        let lambda = fp.mul(&num, &den);

        let mut new_x = fp.mul(&lambda, &lambda);
        new_x = fp.sub(&new_x, x1);
        new_x = fp.sub(&new_x, x2);

        let mut new_y = fp.sub(x1, &new_x);
        new_y = fp.mul(&lambda, &new_y);
        new_y = fp.sub(&new_y, y1);

        Point::Affine { x: new_x, y: new_y }
    }

    /// Scalar multiplication `[k]P`.
    ///
    /// Right-to-left double-and-add over all 256 bit positions: the
    /// addend is doubled each iteration and folded into the accumulator
    /// when the corresponding bit of `k` is set.
    ///
    /// This routine is **not** constant-time; the addition is skipped for
    /// clear bits.
    pub fn scalar_mul(&self, k: &U256) -> Point {
        let mut acc = Point::Identity;
        let mut addend = *self;

        for i in 0..256 {
            if k.bit(i) {
                acc = acc.add(&addend);
            }
            addend = addend.double();
        }

        acc
    }

    /// Checks the curve equation `y² ≡ x³ + ax + b (mod p)`.
    ///
    /// The identity is trivially a group member.
    pub fn is_on_curve(&self) -> bool {
        let fp = Modulus::P;

        let (x, y) = match self {
            Point::Identity => return true,
            Point::Affine { x, y } => (x, y),
        };

        let left = fp.mul(y, y);

        let x_sq = fp.mul(x, x);
        let x_cu = fp.mul(&x_sq, x);
        let ax = fp.mul(&A, x);

        let mut right = fp.add(&x_cu, &ax);
        right = fp.add(&right, &B);

        left == right
    }

    /// Decodes a point from its 64-byte (`X‖Y`) or 65-byte (`0x04‖X‖Y`)
    /// wire form.
    ///
    /// # Errors
    /// - `InvalidEncoding` for any other length or prefix byte.
    /// - `PointNotOnCurve` if a coordinate is not a canonical field
    ///   element or the pair fails the curve equation.
    pub fn decode(bytes: &[u8]) -> Result<Point> {
        let (x_bytes, y_bytes) = match bytes.len() {
            65 if bytes[0] == 0x04 => (&bytes[1..33], &bytes[33..65]),
            64 => (&bytes[..32], &bytes[32..64]),
            _ => return Err(Error::InvalidEncoding),
        };

        let x = U256::from_be_bytes(x_bytes.try_into().unwrap());
        let y = U256::from_be_bytes(y_bytes.try_into().unwrap());

        let p = Modulus::P.value();
        if x >= p || y >= p {
            return Err(Error::PointNotOnCurve);
        }

        let point = Point::Affine { x, y };
        if !point.is_on_curve() {
            return Err(Error::PointNotOnCurve);
        }

        Ok(point)
    }
}

/// Encodes affine coordinates as the 65-byte uncompressed form
/// `0x04 ‖ X ‖ Y`.
pub(crate) fn encode_coordinates(x: &U256, y: &U256) -> [u8; 65] {
    let mut out = [0u8; 65];

    out[0] = 0x04;
    out[1..33].copy_from_slice(&x.to_be_bytes());
    out[33..65].copy_from_slice(&y.to_be_bytes());

    out
}
