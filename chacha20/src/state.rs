//! The 16-word ChaCha20 input block.

use core::fmt;

use log::debug;

use crate::{
    block::words_to_le_bytes,
    round::double_round,
    Error, Result, BLOCK_SIZE, CONSTANTS, KEY_SIZE, KEY_WORDS, NONCE_SIZE, NONCE_WORDS,
    STATE_WORDS,
};

/// Position of the block counter in the state.
const COUNTER_WORD: usize = 12;

/// ChaCha20 state: 4 constant words, 8 key words, the block counter and
/// 3 nonce words, in that order.
///
/// Every operation returns a new value; a `State` is never shared between
/// two keystream blocks.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct State([u32; STATE_WORDS]);

impl State {
    /// Build the state from a key of 8 words and a nonce of 3 words.
    ///
    /// Words are taken as-is; a byte key packs into them little-endian.
    pub fn new(key: &[u32], nonce: &[u32], counter: u32) -> Result<Self> {
        let key: &[u32; KEY_WORDS] = key.try_into().map_err(|_| {
            debug!("rejecting key of {} words", key.len());
            Error::InvalidKeyLength {
                expected: KEY_WORDS,
                actual: key.len(),
            }
        })?;
        let nonce: &[u32; NONCE_WORDS] = nonce.try_into().map_err(|_| {
            debug!("rejecting nonce of {} words", nonce.len());
            Error::InvalidNonceLength {
                expected: NONCE_WORDS,
                actual: nonce.len(),
            }
        })?;
        Ok(Self::from_arrays(key, nonce, counter))
    }

    /// Build the state from a 32-byte key and a 12-byte nonce.
    pub fn from_bytes(key: &[u8], nonce: &[u8], counter: u32) -> Result<Self> {
        if key.len() != KEY_SIZE {
            debug!("rejecting key of {} bytes", key.len());
            return Err(Error::InvalidKeyLength {
                expected: KEY_SIZE,
                actual: key.len(),
            });
        }
        if nonce.len() != NONCE_SIZE {
            debug!("rejecting nonce of {} bytes", nonce.len());
            return Err(Error::InvalidNonceLength {
                expected: NONCE_SIZE,
                actual: nonce.len(),
            });
        }
        Ok(Self::from_arrays(&le_words(key), &le_words(nonce), counter))
    }

    pub(crate) fn from_arrays(
        key: &[u32; KEY_WORDS],
        nonce: &[u32; NONCE_WORDS],
        counter: u32,
    ) -> Self {
        let mut state = [0u32; STATE_WORDS];
        state[..4].copy_from_slice(&CONSTANTS);
        state[4..COUNTER_WORD].copy_from_slice(key);
        state[COUNTER_WORD] = counter;
        state[COUNTER_WORD + 1..].copy_from_slice(nonce);
        Self(state)
    }

    /// The 16 state words.
    pub fn words(&self) -> &[u32; STATE_WORDS] {
        &self.0
    }

    /// Consume the state, returning its words.
    pub fn into_words(self) -> [u32; STATE_WORDS] {
        self.0
    }

    /// The block counter.
    pub fn counter(&self) -> u32 {
        self.0[COUNTER_WORD]
    }

    /// The same key and nonce at another block counter.
    #[must_use]
    pub fn with_counter(mut self, counter: u32) -> Self {
        self.0[COUNTER_WORD] = counter;
        self
    }

    /// One column round followed by one diagonal round.
    #[must_use]
    pub fn double_round(mut self) -> Self {
        double_round(&mut self.0);
        self
    }

    /// Word-wise addition modulo 2³².
    #[must_use]
    pub fn add(mut self, other: &Self) -> Self {
        for (s1, s0) in self.0.iter_mut().zip(other.0.iter()) {
            *s1 = s1.wrapping_add(*s0);
        }
        self
    }

    /// Serialize every word little-endian.
    pub fn to_le_bytes(&self) -> [u8; BLOCK_SIZE] {
        words_to_le_bytes(&self.0)
    }

    #[cfg(feature = "zeroize")]
    pub(crate) fn zeroize(&mut self) {
        use cipher::zeroize::Zeroize;
        self.0.zeroize();
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // key words stay out of debug output
        f.debug_struct("State")
            .field("counter", &self.counter())
            .finish_non_exhaustive()
    }
}

/// Pack bytes into little-endian words; `bytes` holds exactly `4 * N` bytes.
pub(crate) fn le_words<const N: usize>(bytes: &[u8]) -> [u32; N] {
    debug_assert_eq!(bytes.len(), 4 * N);
    let mut words = [0u32; N];
    for (val, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *val = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    words
}
