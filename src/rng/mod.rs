//! Randomness for key generation and the SM2 protocols.
//!
//! The library draws all randomness directly from the operating system
//! CSPRNG (`getrandom` on Linux, `arc4random_buf` on macOS,
//! `BCryptGenRandom` on Windows) through the `os` abstraction layer.
//! There is no userspace generator state to seed, reuse or compromise.
//!
//! Three operations consume randomness: keypair generation, the
//! per-signature ephemeral scalar, and the per-encryption ephemeral
//! scalar. All three are served by one sampler producing a uniform value
//! in `[1, n−2]`: draw 32 bytes, interpret them as a big-endian integer,
//! and retry on the (≈2⁻³²-probability) values outside the range. The
//! top value `n−1` is excluded along with zero — a private scalar of
//! `n−1` makes `1 + d` vanish modulo n, leaving no signature that could
//! ever be produced for the key.

use crate::error::{Error, Result};
use crate::os::sys_random;
use crate::primitives::{Modulus, U256};

/// Attempt cap for rejection sampling.
///
/// A conforming OS CSPRNG makes even two consecutive rejections vanishingly
/// unlikely; hitting the cap indicates a broken entropy source.
pub(crate) const REJECTION_BUDGET: usize = 100;

/// Fills a buffer with cryptographically secure random bytes.
pub fn random_bytes(buf: &mut [u8]) {
    sys_random(buf);
}

/// Samples a uniform scalar in `[1, n−2]` from the OS CSPRNG.
///
/// # Errors
/// `RetryBudgetExhausted` if the rejection budget is exceeded, which only
/// a pathological byte source can cause.
pub fn random_scalar() -> Result<U256> {
    scalar_from(sys_random)
}

/// Samples a uniform scalar in `[1, n−2]` from a caller-supplied byte
/// source.
///
/// This is the deterministic entry point: property tests inject a fixed
/// source here to make sampling reproducible. Production callers use
/// [`random_scalar`].
pub fn scalar_from(mut fill: impl FnMut(&mut [u8])) -> Result<U256> {
    // Upper bound n−1 is itself rejected, keeping the draw within the
    // private-scalar range.
    let limit = Modulus::N.value().sbb(&U256::ONE).0;

    for _ in 0..REJECTION_BUDGET {
        let mut bytes = [0u8; 32];
        fill(&mut bytes);

        let candidate = U256::from_be_bytes(&bytes);
        bytes.fill(0);

        if !candidate.is_zero() && candidate < limit {
            return Ok(candidate);
        }
    }

    Err(Error::RetryBudgetExhausted)
}
