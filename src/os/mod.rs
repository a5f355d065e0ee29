//! Platform entropy sources.
//!
//! Each supported platform contributes a single function, `sys_random`,
//! that fills a caller-supplied buffer from the kernel CSPRNG. The `rng`
//! module is its only consumer: SM2 private scalars and the ephemeral
//! scalars drawn per signature and per encryption all bottom out in one
//! 32-byte request here.
//!
//! Failure policy: a platform backend that cannot deliver entropy panics
//! rather than returning an error. Every caller is about to mint key
//! material; degrading to weaker or absent randomness is never an
//! acceptable fallback.

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "linux")]
pub(crate) use linux::sys_random;

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
pub(crate) use macos::sys_random;

#[cfg(target_os = "windows")]
mod windows;
#[cfg(target_os = "windows")]
pub(crate) use windows::sys_random;
