//! SM4 in ECB and CBC modes with PKCS#7 padding.
//!
//! Both modes pad the plaintext to a whole number of 16-byte blocks by
//! appending N bytes of value N (N ∈ [1, 16]), so the ciphertext is always
//! at least one block long and a multiple of the block size.
//!
//! On decryption, **every** padding defect collapses to the single opaque
//! [`Error::PaddingInvalid`]: the error does not say which byte was wrong,
//! only that the padding was. Length preconditions, which an observer can
//! compute from the ciphertext alone, are reported separately.
//!
//! Neither mode authenticates; callers who need tamper detection should
//! use [GCM](crate::cipher::sm4::gcm). The CBC IV must be unpredictable
//! and unrelated to the key; that is the caller's responsibility.

use crate::cipher::sm4::Sm4;
use crate::error::{Error, Result};

/// SM4 block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Appends PKCS#7 padding, returning an owned padded buffer.
///
/// A full block of padding is added when the input already ends on a
/// block boundary, so the transformation is always reversible.
fn pkcs7_pad(input: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - input.len() % BLOCK_SIZE;

    let mut out = Vec::with_capacity(input.len() + pad_len);
    out.extend_from_slice(input);
    out.resize(input.len() + pad_len, pad_len as u8);

    out
}

/// Validates and strips PKCS#7 padding in place.
fn pkcs7_unpad(data: &mut Vec<u8>) -> Result<()> {
    let Some(&pad_len) = data.last() else {
        return Err(Error::PaddingInvalid);
    };

    if pad_len == 0 || pad_len as usize > BLOCK_SIZE || pad_len as usize > data.len() {
        return Err(Error::PaddingInvalid);
    }

    let body_len = data.len() - pad_len as usize;
    if data[body_len..].iter().any(|&byte| byte != pad_len) {
        return Err(Error::PaddingInvalid);
    }

    data.truncate(body_len);
    Ok(())
}

/// ECB encryption with PKCS#7 padding.
///
/// Each block is encrypted independently; identical plaintext blocks
/// produce identical ciphertext blocks.
pub fn ecb_encrypt(key: &[u8; 16], plaintext: &[u8]) -> Vec<u8> {
    let cipher = Sm4::new(key);
    let padded = pkcs7_pad(plaintext);

    let mut out = Vec::with_capacity(padded.len());
    for block in padded.chunks_exact(BLOCK_SIZE) {
        out.extend_from_slice(&cipher.encrypt_block(block.try_into().unwrap()));
    }

    out
}

/// ECB decryption with PKCS#7 padding removal.
///
/// # Errors
/// - `InvalidInputLength` if the ciphertext is empty or not a multiple of
///   the block size.
/// - `PaddingInvalid` for any malformed padding.
pub fn ecb_decrypt(key: &[u8; 16], ciphertext: &[u8]) -> Result<Vec<u8>> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(Error::InvalidInputLength);
    }

    let cipher = Sm4::new(key);

    let mut data = Vec::with_capacity(ciphertext.len());
    for block in ciphertext.chunks_exact(BLOCK_SIZE) {
        data.extend_from_slice(&cipher.decrypt_block(block.try_into().unwrap()));
    }

    pkcs7_unpad(&mut data)?;
    Ok(data)
}

/// CBC encryption with PKCS#7 padding.
///
/// Each plaintext block is XORed with the previous ciphertext block (the
/// IV for the first) before encryption.
pub fn cbc_encrypt(key: &[u8; 16], iv: &[u8; 16], plaintext: &[u8]) -> Vec<u8> {
    let cipher = Sm4::new(key);
    let padded = pkcs7_pad(plaintext);
    let mut prev = *iv;

    let mut out = Vec::with_capacity(padded.len());
    for block in padded.chunks_exact(BLOCK_SIZE) {
        let mut mixed: [u8; 16] = block.try_into().unwrap();
        for (byte, prev_byte) in mixed.iter_mut().zip(prev.iter()) {
            *byte ^= prev_byte;
        }

        prev = cipher.encrypt_block(&mixed);
        out.extend_from_slice(&prev);
    }

    out
}

/// CBC decryption with PKCS#7 padding removal.
///
/// Each block is raw-decrypted and XORed with the previous *ciphertext*
/// block (the IV for the first).
///
/// # Errors
/// - `InvalidInputLength` if the ciphertext is empty or not a multiple of
///   the block size.
/// - `PaddingInvalid` for any malformed padding.
pub fn cbc_decrypt(key: &[u8; 16], iv: &[u8; 16], ciphertext: &[u8]) -> Result<Vec<u8>> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(Error::InvalidInputLength);
    }

    let cipher = Sm4::new(key);
    let mut data = Vec::with_capacity(ciphertext.len());
    let mut prev: [u8; 16] = *iv;

    for block in ciphertext.chunks_exact(BLOCK_SIZE) {
        let mut decrypted = cipher.decrypt_block(block.try_into().unwrap());

        for (byte, prev_byte) in decrypted.iter_mut().zip(prev.iter()) {
            *byte ^= prev_byte;
        }

        data.extend_from_slice(&decrypted);
        prev = block.try_into().unwrap();
    }

    pkcs7_unpad(&mut data)?;
    Ok(data)
}
