//! Keystream application spread over the rayon thread pool.
//!
//! The message is cut into chunks of [`CHUNK_BLOCKS`] whole blocks. Every
//! worker starts its own keystream at the counter of its first block, so
//! chunks are independent and the output equals the sequential one.

use log::trace;
use rayon::prelude::*;

use crate::{
    stream::{xor_bytes, xor_words},
    Result, State, BLOCK_SIZE, STATE_WORDS,
};

/// Keystream blocks handled by one worker at a time.
pub const CHUNK_BLOCKS: usize = 16;

/// Parallel counterpart of [`crate::apply_keystream`].
pub fn apply_keystream(key: &[u32], nonce: &[u32], counter: u32, data: &mut [u32]) -> Result<()> {
    let state = State::new(key, nonce, counter)?;
    trace!("splitting {} words into chunks of {} blocks", data.len(), CHUNK_BLOCKS);
    data.par_chunks_mut(STATE_WORDS * CHUNK_BLOCKS)
        .enumerate()
        .for_each(|(i, chunk)| xor_words(&chunk_state(&state, i), chunk));
    Ok(())
}

/// Parallel counterpart of [`crate::apply_keystream_bytes`].
pub fn apply_keystream_bytes(
    key: &[u8],
    nonce: &[u8],
    counter: u32,
    data: &mut [u8],
) -> Result<()> {
    let state = State::from_bytes(key, nonce, counter)?;
    trace!("splitting {} bytes into chunks of {} blocks", data.len(), CHUNK_BLOCKS);
    data.par_chunks_mut(BLOCK_SIZE * CHUNK_BLOCKS)
        .enumerate()
        .for_each(|(i, chunk)| xor_bytes(&chunk_state(&state, i), chunk));
    Ok(())
}

fn chunk_state(state: &State, chunk: usize) -> State {
    let offset = (chunk * CHUNK_BLOCKS) as u32;
    state.with_counter(state.counter().wrapping_add(offset))
}
