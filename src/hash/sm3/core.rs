//! SM3 core hashing functions
//!
//! This module implements the core logic of the SM3 cryptographic hash
//! function as defined in GB/T 32905.
//!
//! It provides:
//! - a streaming context for incremental hashing
//! - a complete one-shot SM3 function for arbitrary-length input
//!
//! Both share the same compression function and agree byte-for-byte for
//! any chunking of the input. The SM2 protocols (Z-value, message digest,
//! KDF, C3 checksum) are all built on this module.

use crate::hash::sm3::SM3_IV;
use crate::hash::sm3::computations::all_rounds;

/// Compresses a single 512-bit message block.
///
/// # Parameters
/// - `block`: A 512-bit (64-byte) message block
/// - `state`: The current hash state (8 × 32-bit words)
///
/// # Notes
/// - Input words are interpreted as big-endian, as required by SM3.
pub fn compress(block: &[u8; 64], state: &mut [u32; 8]) {
    let mut w = [0u32; 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes(chunk.try_into().unwrap());
    }

    all_rounds(state, w);
}

/// Streaming SM3 context.
///
/// Lifecycle: [`Sm3::new`], any number of [`Sm3::update`] calls, one
/// [`Sm3::finalize`] producing the 32-byte digest. Finalization consumes
/// the context; the state is not reusable afterwards.
///
/// Partial-block tails are buffered internally; full blocks are compressed
/// as they become available.
#[derive(Clone)]
pub struct Sm3 {
    state: [u32; 8],
    buffer: [u8; 64],
    /// Total bytes absorbed so far. The low six bits double as the buffer
    /// fill level.
    total: u64,
}

impl Sm3 {
    /// Creates a fresh context initialized to the GB/T 32905 IV.
    pub fn new() -> Self {
        Self {
            state: SM3_IV,
            buffer: [0u8; 64],
            total: 0,
        }
    }

    /// Absorbs `data` into the hash state.
    pub fn update(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }

        let mut data = data;
        let left = (self.total & 0x3F) as usize;
        let fill = 64 - left;
        self.total += data.len() as u64;

        if left > 0 && data.len() >= fill {
            self.buffer[left..].copy_from_slice(&data[..fill]);
            let block = self.buffer;
            compress(&block, &mut self.state);
            data = &data[fill..];
        } else if left > 0 {
            self.buffer[left..left + data.len()].copy_from_slice(data);
            return;
        }

        let mut chunks = data.chunks_exact(64);
        for block in &mut chunks {
            compress(block.try_into().unwrap(), &mut self.state);
        }

        let tail = chunks.remainder();
        self.buffer[..tail.len()].copy_from_slice(tail);
    }

    /// Applies the Merkle–Damgård padding and returns the digest.
    ///
    /// Appends 0x80, zero-pads to 56 bytes mod 64, then appends the total
    /// message length in bits as a 64-bit big-endian integer.
    pub fn finalize(mut self) -> [u8; 32] {
        let bits = self.total * 8;
        let left = (self.total & 0x3F) as usize;

        let mut padding = [0u8; 64];
        padding[0] = 0x80;
        let pad_len = if left < 56 { 56 - left } else { 120 - left };
        self.update(&padding[..pad_len]);

        self.update(&bits.to_be_bytes());

        let mut digest = [0u8; 32];
        for (chunk, word) in digest.chunks_exact_mut(4).zip(self.state.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        digest
    }
}

impl Default for Sm3 {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the SM3 hash of the given input in one call.
///
/// # Parameters
/// - `input`: Arbitrary-length input message
///
/// # Returns
/// The 256-bit digest as 32 big-endian bytes.
pub fn sm3(input: &[u8]) -> [u8; 32] {
    let mut ctx = Sm3::new();
    ctx.update(input);
    ctx.finalize()
}
