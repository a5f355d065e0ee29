//! Kernel entropy on Windows.
//!
//! Randomness is requested from CNG via `BCryptGenRandom` with the
//! system-preferred RNG flag, so no algorithm provider handle has to be
//! opened or closed around the short 32-byte draws this crate makes for
//! SM2 key material and ephemeral scalars.
//!
//! The API takes a 32-bit length, so larger buffers are filled in
//! chunks; in practice every request here is far below that bound.

use windows_sys::Win32::Security::Cryptography::{
    BCRYPT_USE_SYSTEM_PREFERRED_RNG, BCryptGenRandom,
};

/// Fills `buf` with bytes from the system CSPRNG.
///
/// # Panics
/// Panics if CNG reports a non-success NTSTATUS. Without system entropy
/// there is no safe way to mint key material, and no caller of this
/// function can proceed meaningfully.
pub(crate) fn sys_random(buf: &mut [u8]) {
    for chunk in buf.chunks_mut(u32::MAX as usize) {
        let status = unsafe {
            BCryptGenRandom(
                std::ptr::null_mut(),
                chunk.as_mut_ptr(),
                chunk.len() as u32,
                BCRYPT_USE_SYSTEM_PREFERRED_RNG,
            )
        };

        if status != 0 {
            panic!("BCryptGenRandom failed with status {status}");
        }
    }
}
