//! Modular arithmetic over the two SM2 moduli.
//!
//! The SM2 protocols work in two different rings:
//!
//! - the prime field 𝔽ₚ with `p = 2²⁵⁶ − 2²²⁴ − 2⁹⁶ + 2⁶⁴ − 1`, used for
//!   all curve-point coordinate arithmetic, and
//! - the scalar ring modulo the curve order `n`, used by signing and
//!   verification.
//!
//! The prime `p` admits a fast Solinas-style reduction that folds the high
//! half of a 512-bit product back into eight limb accumulators. The order
//! `n` has no such structure and is reduced generically, by repeated
//! quotient estimation from the high half of the product.
//!
//! Which path applies is carried explicitly by the [`Modulus`] tag, never
//! inferred by comparing values at runtime. Every [`U256`] handed to or
//! returned from these routines with a "mod m" meaning is fully reduced,
//! i.e. strictly less than `m`; the one exception is documented on
//! [`Modulus::add`], whose inputs only need to fit in 256 bits.

use crate::error::{Error, Result};
use crate::primitives::{U256, U512};

/// The SM2 prime p, little-endian limbs.
const P: U256 = U256::from_limbs([
    0xFFFFFFFF, 0xFFFFFFFF, 0x00000000, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFE,
]);

/// The SM2 curve order n, little-endian limbs.
const N: U256 = U256::from_limbs([
    0x39D54123, 0x53BBF409, 0x21C6052B, 0x7203DF6B, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0xFFFFFFFE,
]);

/// Tag selecting one of the two SM2 moduli.
///
/// The variant both names the modulus and selects the reduction strategy:
/// `P` takes the fast prime-specific path, `N` the generic one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Modulus {
    /// The field prime `p = 2²⁵⁶ − 2²²⁴ − 2⁹⁶ + 2⁶⁴ − 1`.
    P,
    /// The curve order `n`.
    N,
}

impl Modulus {
    /// Returns the modulus as a value.
    pub fn value(self) -> U256 {
        match self {
            Modulus::P => P,
            Modulus::N => N,
        }
    }

    /// Modular addition.
    ///
    /// Inputs may be any 256-bit values (the signature digest `e` is added
    /// modulo n without being reduced first); the result is fully reduced.
    pub fn add(self, a: &U256, b: &U256) -> U256 {
        let m = self.value();
        let (mut sum, mut carry) = a.adc(b);

        while carry != 0 {
            let (diff, borrow) = sum.sbb(&m);
            sum = diff;
            carry -= borrow;
        }
        while sum >= m {
            sum = sum.sbb(&m).0;
        }

        sum
    }

    /// Modular subtraction.
    ///
    /// Both inputs must already be reduced; a borrow is corrected by adding
    /// the modulus back once.
    pub fn sub(self, a: &U256, b: &U256) -> U256 {
        let (diff, borrow) = a.sbb(b);

        if borrow != 0 {
            diff.adc(&self.value()).0
        } else {
            diff
        }
    }

    /// Modular multiplication: full 512-bit product, then reduction along
    /// the path selected by the tag.
    pub fn mul(self, a: &U256, b: &U256) -> U256 {
        self.reduce(&a.widening_mul(b))
    }

    /// Reduces a 512-bit value.
    pub fn reduce(self, wide: &U512) -> U256 {
        match self {
            Modulus::P => reduce_p(wide),
            Modulus::N => reduce_generic(wide, &N),
        }
    }

    /// Modular inverse by binary extended GCD.
    ///
    /// Maintains `(u, v, x1, x2)` with the invariants `x1·a ≡ u (mod m)`
    /// and `x2·a ≡ v (mod m)`. Whichever of `u`, `v` reaches 1 first
    /// designates the inverse. Halving `x1`/`x2` first adds the modulus
    /// when they are odd; the carry of that addition is shifted back in as
    /// the top bit, so the division by two is exact over the integers.
    ///
    /// # Errors
    /// `InversionFailed` if `a` is zero or shares a factor with the
    /// modulus.
    pub fn invert(self, a: &U256) -> Result<U256> {
        if a.is_zero() {
            return Err(Error::InversionFailed);
        }

        let m = self.value();
        let mut u = *a;
        let mut v = m;
        let mut x1 = U256::ONE;
        let mut x2 = U256::ZERO;

        while !u.is_zero() && !v.is_zero() {
            while u.is_even() {
                u = u.shr1_with_carry(0);
                x1 = half_mod(&x1, &m);
            }

            while v.is_even() {
                v = v.shr1_with_carry(0);
                x2 = half_mod(&x2, &m);
            }

            if u >= v {
                u = u.sbb(&v).0;
                x1 = self.sub(&x1, &x2);
            } else {
                v = v.sbb(&u).0;
                x2 = self.sub(&x2, &x1);
            }
        }

        if u == U256::ONE {
            Ok(x1)
        } else if v == U256::ONE {
            Ok(x2)
        } else {
            Err(Error::InversionFailed)
        }
    }
}

/// Computes `x / 2 mod m` for `x < m`, adding `m` first when `x` is odd.
fn half_mod(x: &U256, m: &U256) -> U256 {
    if x.is_even() {
        x.shr1_with_carry(0)
    } else {
        let (sum, carry) = x.adc(m);
        sum.shr1_with_carry(carry)
    }
}

/// Fast reduction modulo the SM2 prime.
///
/// Exploits `2²⁵⁶ ≡ 2²²⁴ + 2⁹⁶ − 2⁶⁴ + 1 (mod p)`: each of the eight high
/// limbs `a8..a15` of the product folds into the low limbs with the small
/// signed coefficients tabulated below (derived by recursively expanding
/// the identity limb by limb):
///
/// ```text
///        t0  t1  t2  t3  t4  t5  t6  t7
/// a8:    +1   .  -1  +1   .   .   .  +1
/// a9:    +1  +1  -1   .  +1   .   .  +1
/// a10:   +1  +1   .   .   .  +1   .  +1
/// a11:   +1  +1   .  +1   .   .  +1  +1
/// a12:   +1  +1   .  +1  +1   .   .  +2
/// a13:   +2  +1  -1  +2  +1  +1   .  +2
/// a14:   +2  +2  -1  +1  +2  +1  +1  +2
/// a15:   +2  +2   .  +1  +1  +2  +1  +3
/// ```
///
/// The accumulators are signed 64-bit, so the at most sixteen terms per
/// limb cannot overflow. After carry propagation the residual lies within
/// a small multiple of p of the correct value; the trailing loops subtract
/// or add p until it lands in [0, p). At most a dozen correction steps are
/// ever needed.
fn reduce_p(wide: &U512) -> U256 {
    let a: [i64; 16] = std::array::from_fn(|i| i64::from(wide.0[i]));

    let mut t = [0i64; 8];
    t[..8].copy_from_slice(&a[..8]);

    t[0] += a[8] + a[9] + a[10] + a[11] + a[12] + 2 * (a[13] + a[14] + a[15]);
    t[1] += a[9] + a[10] + a[11] + a[12] + a[13] + 2 * (a[14] + a[15]);
    t[2] -= a[8] + a[9] + a[13] + a[14];
    t[3] += a[8] + a[11] + a[12] + 2 * a[13] + a[14] + a[15];
    t[4] += a[9] + a[12] + a[13] + 2 * a[14] + a[15];
    t[5] += a[10] + a[13] + a[14] + 2 * a[15];
    t[6] += a[11] + a[14] + a[15];
    t[7] += a[8] + a[9] + a[10] + a[11] + 2 * (a[12] + a[13] + a[14]) + 3 * a[15];

    let mut limbs = [0u32; 8];
    let mut carry = 0i64;

    for i in 0..8 {
        carry += t[i];
        limbs[i] = carry as u32;
        carry >>= 32;
    }

    let mut r = U256(limbs);

    // The pair (carry, r) is a signed 288-bit residual congruent to the
    // input; fold the carry away, then clamp into [0, p).
    while carry > 0 {
        let (diff, borrow) = r.sbb(&P);
        r = diff;
        carry -= i64::from(borrow);
    }
    while carry < 0 {
        let (sum, c) = r.adc(&P);
        r = sum;
        carry += i64::from(c);
    }
    while r >= P {
        r = r.sbb(&P).0;
    }

    r
}

/// Generic reduction by quotient estimation.
///
/// Uses the high 256 bits as a (lower-bound) quotient estimate, subtracts
/// that multiple of the modulus, and repeats until the high half is zero.
/// Because `m > 2²⁵⁵`, every round shrinks the value by a factor of about
/// `2³²`, so the loop runs at most nine times even for a maximal 512-bit
/// input. A final subtraction loop lands the result in [0, m).
fn reduce_generic(wide: &U512, m: &U256) -> U256 {
    let mut a = *wide;

    loop {
        let q = a.high_half();
        if q.is_zero() {
            break;
        }

        // q·m ≤ q·2²⁵⁶ ≤ a, so the subtraction cannot underflow.
        a = a.sub(&q.widening_mul(m));
    }

    let mut r = a.low_half();
    while r >= *m {
        r = r.sbb(m).0;
    }

    r
}
