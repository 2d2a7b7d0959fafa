//! ChaCha20 encryption over messages of any length. Defined in RFC 8439
//! Section 2.4.
//!
//! Block `j` of the message is XORed with the keystream block at
//! `counter + j` (modulo 2³²). A trailing partial block uses the leading
//! part of its keystream block and discards the rest. Empty messages are
//! accepted and left untouched.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use log::trace;

use crate::{
    block::{keystream_block, words_to_le_bytes},
    Result, State, BLOCK_SIZE, STATE_WORDS,
};

/// XOR the keystream into `data` in place, with key and nonce given as
/// 8 and 3 words.
///
/// Each message word is XORed with one keystream word, so a byte message
/// packed into words little-endian encrypts the same as with
/// [`apply_keystream_bytes`].
pub fn apply_keystream(key: &[u32], nonce: &[u32], counter: u32, data: &mut [u32]) -> Result<()> {
    let state = State::new(key, nonce, counter)?;
    xor_words(&state, data);
    Ok(())
}

/// XOR the keystream into `data` in place, with a 32-byte key and a
/// 12-byte nonce.
pub fn apply_keystream_bytes(
    key: &[u8],
    nonce: &[u8],
    counter: u32,
    data: &mut [u8],
) -> Result<()> {
    let state = State::from_bytes(key, nonce, counter)?;
    xor_bytes(&state, data);
    Ok(())
}

/// Encrypt or decrypt a word message, returning a new buffer of the same
/// length.
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub fn chacha20(key: &[u32], nonce: &[u32], counter: u32, data: &[u32]) -> Result<Vec<u32>> {
    let state = State::new(key, nonce, counter)?;
    let mut out = data.to_vec();
    xor_words(&state, &mut out);
    Ok(out)
}

/// Encrypt or decrypt a byte message, returning a new buffer of the same
/// length.
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub fn chacha20_bytes(key: &[u8], nonce: &[u8], counter: u32, data: &[u8]) -> Result<Vec<u8>> {
    let state = State::from_bytes(key, nonce, counter)?;
    let mut out = data.to_vec();
    xor_bytes(&state, &mut out);
    Ok(out)
}

/// Keystream starting at the counter held in `state`.
pub(crate) fn xor_words(state: &State, data: &mut [u32]) {
    trace!("xor {} words from block {}", data.len(), state.counter());
    let base = state.counter();
    for (j, chunk) in data.chunks_mut(STATE_WORDS).enumerate() {
        let ks = keystream_block(&state.with_counter(base.wrapping_add(j as u32)));
        for (val, k) in chunk.iter_mut().zip(ks.iter()) {
            *val ^= k;
        }
    }
}

/// Keystream starting at the counter held in `state`.
pub(crate) fn xor_bytes(state: &State, data: &mut [u8]) {
    trace!("xor {} bytes from block {}", data.len(), state.counter());
    let base = state.counter();
    for (j, chunk) in data.chunks_mut(BLOCK_SIZE).enumerate() {
        let ks = keystream_block(&state.with_counter(base.wrapping_add(j as u32)));
        let ks = words_to_le_bytes(&ks);
        for (val, k) in chunk.iter_mut().zip(ks.iter()) {
            *val ^= k;
        }
    }
}
