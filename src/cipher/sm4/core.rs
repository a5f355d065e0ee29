//! SM4 key schedule and single-block transform.
//!
//! The cipher is a 32-round unbalanced Feistel network over four 32-bit
//! words. Both directions share one round function; decryption simply
//! consumes the round keys in reverse order. Words are big-endian on the
//! wire, and the output applies the reverse-order transform: the final
//! four state words are emitted newest first.

use crate::cipher::sm4::{CK, FK, SBOX};

/// Nonlinear transform τ: the S-box applied to each byte of the word.
#[inline(always)]
fn tau(x: u32) -> u32 {
    u32::from_be_bytes(x.to_be_bytes().map(|byte| SBOX[byte as usize]))
}

/// Linear transform L used in the round function:
/// L(x) = x ⊕ ROTL²(x) ⊕ ROTL¹⁰(x) ⊕ ROTL¹⁸(x) ⊕ ROTL²⁴(x)
#[inline(always)]
fn l(x: u32) -> u32 {
    x ^ x.rotate_left(2) ^ x.rotate_left(10) ^ x.rotate_left(18) ^ x.rotate_left(24)
}

/// Linear transform L′ used in the key schedule:
/// L′(x) = x ⊕ ROTL¹³(x) ⊕ ROTL²³(x)
#[inline(always)]
fn l_prime(x: u32) -> u32 {
    x ^ x.rotate_left(13) ^ x.rotate_left(23)
}

/// Composite transform T = L ∘ τ.
#[inline(always)]
fn t(x: u32) -> u32 {
    l(tau(x))
}

/// Composite transform T′ = L′ ∘ τ.
#[inline(always)]
fn t_prime(x: u32) -> u32 {
    l_prime(tau(x))
}

/// A keyed SM4 instance: the 32 expanded round keys.
///
/// The round keys are derived once per key and may be reused for any
/// number of blocks in either direction.
#[derive(Clone)]
pub struct Sm4 {
    rk: [u32; 32],
}

impl Sm4 {
    /// Expands a 16-byte user key into the 32 round keys.
    ///
    /// The key words are XORed with FK, then each round key is
    /// `k[i+4] = k[i] ⊕ T′(k[i+1] ⊕ k[i+2] ⊕ k[i+3] ⊕ CK[i])`.
    pub fn new(key: &[u8; 16]) -> Self {
        let mut k = [0u32; 36];

        for (i, chunk) in key.chunks_exact(4).enumerate() {
            k[i] = u32::from_be_bytes(chunk.try_into().unwrap()) ^ FK[i];
        }

        let mut rk = [0u32; 32];
        for i in 0..32 {
            k[i + 4] = k[i] ^ t_prime(k[i + 1] ^ k[i + 2] ^ k[i + 3] ^ CK[i]);
            rk[i] = k[i + 4];
        }

        Self { rk }
    }

    /// Encrypts a single 16-byte block.
    pub fn encrypt_block(&self, block: &[u8; 16]) -> [u8; 16] {
        self.crypt_block(block, false)
    }

    /// Decrypts a single 16-byte block.
    pub fn decrypt_block(&self, block: &[u8; 16]) -> [u8; 16] {
        self.crypt_block(block, true)
    }

    /// The 32-round iteration shared by both directions.
    fn crypt_block(&self, block: &[u8; 16], reverse_keys: bool) -> [u8; 16] {
        let mut x = [0u32; 36];

        for (i, chunk) in block.chunks_exact(4).enumerate() {
            x[i] = u32::from_be_bytes(chunk.try_into().unwrap());
        }

        for i in 0..32 {
            let rk = if reverse_keys {
                self.rk[31 - i]
            } else {
                self.rk[i]
            };
            x[i + 4] = x[i] ^ t(x[i + 1] ^ x[i + 2] ^ x[i + 3] ^ rk);
        }

        let mut out = [0u8; 16];
        for (i, word) in [x[35], x[34], x[33], x[32]].iter().enumerate() {
            out[i * 4..i * 4 + 4].copy_from_slice(&word.to_be_bytes());
        }

        out
    }
}
