//! SM2 public-key encryption (GB/T 32918.4), C1‖C3‖C2 layout.

use crate::error::{Error, Result};
use crate::hash::sm3::Sm3;
use crate::rng;
use crate::sm2::curve::{GENERATOR, Point, encode_coordinates};
use crate::sm2::key::{PrivateKey, PublicKey};

/// Attempt cap for the encryption rejection loop.
const ENCRYPT_BUDGET: usize = 100;

/// Ciphertext overhead: C1 (65 bytes) plus C3 (32 bytes).
const OVERHEAD: usize = 65 + 32;

/// Key-derivation function of GB/T 32918.4.
///
/// Concatenates `SM3(z ‖ ct)` for a 32-bit big-endian counter
/// `ct = 1, 2, …` and truncates to `klen` bytes.
///
/// Inside SM2 encryption the input is the shared-point coordinates
/// `x₂ ‖ y₂` and the output masks the message; those callers must reject
/// an all-zero result, a check that is mandatory on both the encrypt and
/// decrypt side.
pub fn kdf(z: &[u8], klen: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(klen.next_multiple_of(32));
    let mut counter = 1u32;

    while out.len() < klen {
        let mut ctx = Sm3::new();
        ctx.update(z);
        ctx.update(&counter.to_be_bytes());
        out.extend_from_slice(&ctx.finalize());
        counter += 1;
    }

    out.truncate(klen);
    out
}

/// Hash binding the shared point to the message: `SM3(x₂ ‖ M ‖ y₂)`.
fn c3_digest(x2: &[u8; 32], msg: &[u8], y2: &[u8; 32]) -> [u8; 32] {
    let mut ctx = Sm3::new();
    ctx.update(x2);
    ctx.update(msg);
    ctx.update(y2);
    ctx.finalize()
}

/// Encrypts a message to a public key.
///
/// Output layout: `C1 (65 bytes, 0x04‖X‖Y) ‖ C3 (32 bytes) ‖ C2 (|M|
/// bytes)`, i.e. `plaintext.len() + 97` bytes total. Each invocation
/// samples a fresh ephemeral scalar; an all-zero KDF mask restarts the
/// attempt.
///
/// # Errors
/// - `InvalidInputLength` for an empty plaintext.
/// - `RetryBudgetExhausted` after 100 rejected attempts.
pub fn encrypt(public: &PublicKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    if plaintext.is_empty() {
        return Err(Error::InvalidInputLength);
    }

    for _ in 0..ENCRYPT_BUDGET {
        let k = rng::random_scalar()?;

        let Some((c1x, c1y)) = GENERATOR.scalar_mul(&k).coordinates() else {
            continue;
        };
        let Some((x2, y2)) = public.as_point().scalar_mul(&k).coordinates() else {
            continue;
        };

        let x2_bytes = x2.to_be_bytes();
        let y2_bytes = y2.to_be_bytes();

        let mut shared = [0u8; 64];
        shared[..32].copy_from_slice(&x2_bytes);
        shared[32..].copy_from_slice(&y2_bytes);

        let mut mask = kdf(&shared, plaintext.len());
        if mask.iter().all(|&byte| byte == 0) {
            continue;
        }

        for (mask_byte, msg_byte) in mask.iter_mut().zip(plaintext) {
            *mask_byte ^= msg_byte;
        }
        let c2 = mask;

        let mut out = Vec::with_capacity(OVERHEAD + plaintext.len());
        out.extend_from_slice(&encode_coordinates(&c1x, &c1y));
        out.extend_from_slice(&c3_digest(&x2_bytes, plaintext, &y2_bytes));
        out.extend_from_slice(&c2);

        shared.fill(0);

        return Ok(out);
    }

    Err(Error::RetryBudgetExhausted)
}

/// Decrypts a C1‖C3‖C2 ciphertext.
///
/// C1 is decoded and checked to lie on the curve, the shared point
/// `[d]C1` feeds the KDF, and the recovered message is only released
/// after the C3 hash matches. On a mismatch the plaintext buffer is wiped
/// before the error is returned.
///
/// # Errors
/// - `InvalidInputLength` if the ciphertext is shorter than 98 bytes.
/// - `InvalidEncoding` / `PointNotOnCurve` for a malformed C1.
/// - `KdfAllZero` if the derived mask is all zeros.
/// - `AuthenticationFailed` on a C3 mismatch.
pub fn decrypt(private: &PrivateKey, ciphertext: &[u8]) -> Result<Vec<u8>> {
    if ciphertext.len() < OVERHEAD + 1 {
        return Err(Error::InvalidInputLength);
    }

    let c1 = Point::decode(&ciphertext[..65])?;
    let c3 = &ciphertext[65..OVERHEAD];
    let c2 = &ciphertext[OVERHEAD..];

    let Some((x2, y2)) = c1.scalar_mul(private.scalar()).coordinates() else {
        return Err(Error::PointNotOnCurve);
    };

    let x2_bytes = x2.to_be_bytes();
    let y2_bytes = y2.to_be_bytes();

    let mut shared = [0u8; 64];
    shared[..32].copy_from_slice(&x2_bytes);
    shared[32..].copy_from_slice(&y2_bytes);

    let mut mask = kdf(&shared, c2.len());
    shared.fill(0);

    if mask.iter().all(|&byte| byte == 0) {
        return Err(Error::KdfAllZero);
    }

    for (mask_byte, ct_byte) in mask.iter_mut().zip(c2) {
        *mask_byte ^= ct_byte;
    }
    let mut plaintext = mask;

    let expected = c3_digest(&x2_bytes, &plaintext, &y2_bytes);

    let mut diff = 0u8;
    for (a, b) in expected.iter().zip(c3) {
        diff |= a ^ b;
    }

    if diff != 0 {
        plaintext.fill(0);
        return Err(Error::AuthenticationFailed);
    }

    Ok(plaintext)
}
