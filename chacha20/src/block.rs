//! The ChaCha20 block function. Defined in RFC 8439 Section 2.3.
//!
//! <https://tools.ietf.org/html/rfc8439#section-2.3>

use crate::{round::DOUBLE_ROUNDS, Result, State, BLOCK_SIZE, STATE_WORDS};

/// Keystream block for `key` (8 words), `nonce` (3 words) and `counter`.
pub fn block(key: &[u32], nonce: &[u32], counter: u32) -> Result<[u32; STATE_WORDS]> {
    Ok(keystream_block(&State::new(key, nonce, counter)?))
}

/// Serialized keystream block for a 32-byte `key` and 12-byte `nonce`.
pub fn block_bytes(key: &[u8], nonce: &[u8], counter: u32) -> Result<[u8; BLOCK_SIZE]> {
    let res = keystream_block(&State::from_bytes(key, nonce, counter)?);
    Ok(words_to_le_bytes(&res))
}

/// Run the 20 rounds (i.e. 10 double rounds) over a copy of `state`, then
/// add `state` back in.
#[inline(always)]
pub(crate) fn keystream_block(state: &State) -> [u32; STATE_WORDS] {
    let mut res = *state;
    for _ in 0..DOUBLE_ROUNDS {
        res = res.double_round();
    }
    res.add(state).into_words()
}

#[inline(always)]
pub(crate) fn words_to_le_bytes(words: &[u32; STATE_WORDS]) -> [u8; BLOCK_SIZE] {
    let mut block = [0u8; BLOCK_SIZE];
    for (chunk, val) in block.chunks_exact_mut(4).zip(words.iter()) {
        chunk.copy_from_slice(&val.to_le_bytes());
    }
    block
}
