//! Kernel entropy on macOS.
//!
//! Randomness comes from `arc4random_buf`, which the system keeps seeded
//! from the kernel entropy source. Unlike `getrandom` on Linux it cannot
//! fail and never returns short, so no retry loop is needed: one call
//! fully covers the 32-byte draws made for SM2 private keys and the
//! ephemeral scalars of signing and encryption.

/// Fills `buf` with bytes from the system CSPRNG.
///
/// The underlying call always succeeds and always writes the entire
/// buffer, so this function has no failure path.
pub(crate) fn sys_random(buf: &mut [u8]) {
    unsafe {
        libc::arc4random_buf(buf.as_mut_ptr().cast(), buf.len());
    }
}
