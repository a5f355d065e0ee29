//! Kernel entropy on Linux.
//!
//! Randomness is read with the `getrandom(2)` system call, which draws
//! from the kernel entropy pool and blocks only until the pool is
//! initialized at early boot. That profile fits this crate exactly: the
//! requests are tiny (32 bytes per private key or ephemeral scalar) and
//! must be unpredictable, while throughput is irrelevant.
//!
//! `getrandom` is permitted to return fewer bytes than requested, for
//! example when interrupted by a signal, so the unfilled remainder is
//! re-requested until the buffer is complete.

use libc::c_void;

/// Fills `buf` with bytes from the kernel CSPRNG.
///
/// Short reads are retried over the remaining tail of the buffer; on
/// return every byte has been written by the kernel.
///
/// # Panics
/// Panics if the system call reports an error. Without kernel entropy
/// there is no safe way to mint key material, and no caller of this
/// function can proceed meaningfully.
pub(crate) fn sys_random(buf: &mut [u8]) {
    let mut filled = 0;

    while filled < buf.len() {
        let tail = &mut buf[filled..];

        let got = unsafe { libc::getrandom(tail.as_mut_ptr().cast::<c_void>(), tail.len(), 0) };

        if got < 0 {
            panic!("getrandom() failed while drawing key material");
        }

        filled += got as usize;
    }
}
