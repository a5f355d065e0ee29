//! SM2 digital signatures (GB/T 32918.2).

use crate::error::{Error, Result};
use crate::hash::sm3::Sm3;
use crate::primitives::{Modulus, U256};
use crate::rng;
use crate::sm2::curve::{A, B, GENERATOR, GX, GY};
use crate::sm2::key::{PrivateKey, PublicKey};

/// Default user identity per the GM/T conventions: the ASCII bytes
/// `1234567812345678`.
pub const DEFAULT_ID: &[u8] = b"1234567812345678";

/// Attempt cap for the sign rejection loop.
const SIGN_BUDGET: usize = 100;

/// An SM2 signature: the 64-byte concatenation `r ‖ s`, each half a
/// 32-byte big-endian integer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Signature([u8; 64]);

impl Signature {
    /// Constructs a signature from its raw 64-byte representation.
    ///
    /// No validation is performed at construction time; range checks on
    /// `r` and `s` happen during verification.
    #[inline]
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Returns the raw byte encoding of this signature.
    #[inline]
    pub fn to_bytes(&self) -> [u8; 64] {
        self.0
    }

    fn r(&self) -> U256 {
        U256::from_be_bytes(self.0[..32].try_into().unwrap())
    }

    fn s(&self) -> U256 {
        U256::from_be_bytes(self.0[32..].try_into().unwrap())
    }
}

/// Computes the user-identity hash Z.
///
/// `Z = SM3(ENTL ‖ ID ‖ a ‖ b ‖ Gx ‖ Gy ‖ Px ‖ Py)`, where ENTL is the
/// bit length of the ID as a 16-bit big-endian value. Z binds the
/// signer's identity and public key into every digest this module
/// produces; both sides of a signature must agree on the ID.
///
/// # Errors
/// `InvalidInputLength` if the ID is 8192 bytes or longer, which ENTL
/// cannot represent.
pub fn compute_z(public: &PublicKey, id: &[u8]) -> Result<[u8; 32]> {
    let id_bits = id.len().checked_mul(8).filter(|&b| b <= u16::MAX as usize);
    let Some(id_bits) = id_bits else {
        return Err(Error::InvalidInputLength);
    };

    let (px, py) = public.coordinates();

    let mut ctx = Sm3::new();
    ctx.update(&(id_bits as u16).to_be_bytes());
    ctx.update(id);
    ctx.update(&A.to_be_bytes());
    ctx.update(&B.to_be_bytes());
    ctx.update(&GX.to_be_bytes());
    ctx.update(&GY.to_be_bytes());
    ctx.update(&px.to_be_bytes());
    ctx.update(&py.to_be_bytes());

    Ok(ctx.finalize())
}

/// Digest for signing: `e = SM3(Z ‖ M)` as a 256-bit big-endian integer.
///
/// No reduction into [0, n) is applied; the mod-n additions downstream
/// absorb the excess.
fn message_digest(z: &[u8; 32], msg: &[u8]) -> U256 {
    let mut ctx = Sm3::new();
    ctx.update(z);
    ctx.update(msg);

    U256::from_be_bytes(&ctx.finalize())
}

/// Signs a message.
///
/// An absent `id` means the [`DEFAULT_ID`]. The procedure follows
/// GB/T 32918.2: sample an ephemeral `k ∈ [1, n−2]`, compute
/// `(x₁, _) = [k]G`, `r = (e + x₁) mod n`,
/// `s = (1 + d)⁻¹ · (k − r·d) mod n`, and reject the attempt whenever
/// `r = 0`, `r + k = n` or `s = 0`.
///
/// # Errors
/// `RetryBudgetExhausted` after 100 rejected attempts (pathological RNG),
/// `InvalidInputLength` for an oversized ID.
pub fn sign(private: &PrivateKey, msg: &[u8], id: Option<&[u8]>) -> Result<Signature> {
    let scalar_order = Modulus::N;
    let d = private.scalar();

    let public = private.public_key()?;
    let z = compute_z(&public, id.unwrap_or(DEFAULT_ID))?;
    let e = message_digest(&z, msg);

    for _ in 0..SIGN_BUDGET {
        let k = rng::random_scalar()?;

        let Some((x1, _)) = GENERATOR.scalar_mul(&k).coordinates() else {
            continue;
        };

        let r = scalar_order.add(&e, &x1);
        if r.is_zero() || scalar_order.add(&r, &k).is_zero() {
            continue;
        }

        let one_plus_d = scalar_order.add(&U256::ONE, d);
        let Ok(inv) = scalar_order.invert(&one_plus_d) else {
            continue;
        };

        let rd = scalar_order.mul(&r, d);
        let k_minus_rd = scalar_order.sub(&k, &rd);
        let s = scalar_order.mul(&inv, &k_minus_rd);
        if s.is_zero() {
            continue;
        }

        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&r.to_be_bytes());
        out[32..].copy_from_slice(&s.to_be_bytes());

        return Ok(Signature(out));
    }

    Err(Error::RetryBudgetExhausted)
}

/// Verifies a signature.
///
/// An absent `id` means the [`DEFAULT_ID`]. Returns `true` iff
/// `r, s ∈ [1, n−1]`, `t = (r + s) mod n ≠ 0`, the point
/// `[s]G + [t]P` is finite, and `(e + x₁) mod n = r`.
///
/// Any malformed input or failed check yields `false`; no distinction is
/// made between the failure causes.
pub fn verify(public: &PublicKey, msg: &[u8], id: Option<&[u8]>, signature: &Signature) -> bool {
    let scalar_order = Modulus::N;
    let n = scalar_order.value();

    let r = signature.r();
    let s = signature.s();

    if r.is_zero() || r >= n || s.is_zero() || s >= n {
        return false;
    }

    let Ok(z) = compute_z(public, id.unwrap_or(DEFAULT_ID)) else {
        return false;
    };
    let e = message_digest(&z, msg);

    let t = scalar_order.add(&r, &s);
    if t.is_zero() {
        return false;
    }

    let sum = GENERATOR
        .scalar_mul(&s)
        .add(&public.as_point().scalar_mul(&t));
    let Some((x1, _)) = sum.coordinates() else {
        return false;
    };

    scalar_order.add(&e, &x1) == r
}
