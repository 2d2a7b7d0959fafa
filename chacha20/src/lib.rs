//! Implementation of the [ChaCha20] stream cipher (RFC 8439, 96-bit nonce).
//!
//! ChaCha20 expands a 256-bit key, a 96-bit nonce and a 32-bit block counter
//! into a keystream which is XORed with the message. Encryption and
//! decryption are the same operation.
//!
//! The crate is layered the same way the algorithm is:
//!
//! - [`arith`]: addition modulo 2³², XOR and left rotation of 32-bit words
//! - [`quarter_round`] and the [`COLUMN_ROUND`] / [`DIAGONAL_ROUND`] schedule
//! - [`State`]: the 16-word input block (constants, key, counter, nonce)
//! - [`block`] / [`block_bytes`]: 20 rounds plus feed-forward, one 64-byte
//!   keystream block
//! - [`apply_keystream`] / [`apply_keystream_bytes`]: the stream cipher over
//!   messages of any length
//!
//! The [`ChaCha20`] type additionally plugs the cipher into the traits of
//! the re-exported [`cipher`] crate, which adds buffering across calls and
//! seeking.
//!
//! # ⚠️ Security Warning: Hazmat!
//!
//! This crate does not ensure ciphertexts are authentic, which can lead to
//! serious vulnerabilities if used incorrectly!
//!
//! Never reuse a (key, nonce, counter) triple. The functional API lets the
//! 32-bit block counter wrap around silently; keeping (nonce, counter) pairs
//! unique per key is up to the caller.
//!
//! **USE AT YOUR OWN RISK!**
//!
//! # Diagram
//!
//! This diagram illustrates the ChaCha quarter round function.
//! Each round consists of four quarter-rounds:
//!
//! <img src="https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/img/stream-ciphers/chacha20.png" width="300px">
//!
//! Legend:
//!
//! - ⊞ add
//! - ‹‹‹ rotate
//! - ⊕ xor
//!
//! # Example
//! ```
//! use chacha20::ChaCha20;
//! // Import relevant traits
//! use chacha20::cipher::{KeyIvInit, StreamCipher, StreamCipherSeek};
//! use hex_literal::hex;
//!
//! let key = [0x42; 32];
//! let nonce = [0x24; 12];
//! let plaintext = hex!("00010203 04050607 08090A0B 0C0D0E0F");
//! let ciphertext = hex!("e405626e 4f1236b3 670ee428 332ea20e");
//!
//! // Key and IV must be references to the `GenericArray` type.
//! // Here we use the `Into` trait to convert arrays into it.
//! let mut cipher = ChaCha20::new(&key.into(), &nonce.into());
//!
//! let mut buffer = plaintext.clone();
//!
//! // apply keystream (encrypt)
//! cipher.apply_keystream(&mut buffer);
//! assert_eq!(buffer, ciphertext);
//!
//! let ciphertext = buffer.clone();
//!
//! // ChaCha ciphers support seeking
//! cipher.seek(0u32);
//!
//! // decrypt ciphertext by applying keystream again
//! cipher.apply_keystream(&mut buffer);
//! assert_eq!(buffer, plaintext);
//!
//! // the same keystream is available without a cipher instance
//! let mut buffer = plaintext.clone();
//! chacha20::apply_keystream_bytes(&key, &nonce, 0, &mut buffer).unwrap();
//! assert_eq!(buffer, ciphertext);
//! ```
//!
//! # Configuration Flags
//!
//! You can modify crate using the following configuration flags:
//!
//! - `chacha20_force_soft`: force the single-block software backend instead
//!   of the four-blocks-at-a-time one.
//!
//! The flags can be enabled using `RUSTFLAGS` enviromental variable
//! (e.g. `RUSTFLAGS="--cfg chacha20_force_soft"`) or by modifying `.cargo/config`.
//!
//! # Cargo Features
//!
//! - `alloc` (default): [`chacha20()`] and [`chacha20_bytes`], which return
//!   owned output.
//! - `std`: implies `alloc`.
//! - `zeroize`: wipe the key material held by [`ChaChaCore`] on drop.
//! - `rayon`: the [`par`] module, which spreads blocks over a thread pool.
//!
//! [ChaCha20]: https://tools.ietf.org/html/rfc8439

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg"
)]
#![warn(missing_docs, rust_2018_idioms, trivial_casts, unused_qualifications)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use cipher;

pub mod arith;
mod backends;
mod block;
mod error;
#[cfg(feature = "rayon")]
#[cfg_attr(docsrs, doc(cfg(feature = "rayon")))]
pub mod par;
mod round;
mod state;
mod stream;

pub use block::{block, block_bytes};
pub use error::{Error, Result};
pub use round::{quarter_round, QuarterRoundIndices, COLUMN_ROUND, DIAGONAL_ROUND};
pub use state::State;
pub use stream::{apply_keystream, apply_keystream_bytes};
#[cfg(feature = "alloc")]
pub use stream::{chacha20, chacha20_bytes};

use cipher::{
    consts::{U12, U32, U64},
    generic_array::GenericArray,
    BlockSizeUser, IvSizeUser, KeyIvInit, KeySizeUser, StreamCipherCore, StreamCipherCoreWrapper,
    StreamCipherSeekCore, StreamClosure,
};

#[cfg(feature = "zeroize")]
use cipher::zeroize::ZeroizeOnDrop;

/// State initialization constant ("expand 32-byte k")
pub const CONSTANTS: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// Number of 32-bit words in the ChaCha state
pub const STATE_WORDS: usize = 16;

/// Number of 32-bit words in a key
pub const KEY_WORDS: usize = 8;

/// Number of 32-bit words in a nonce
pub const NONCE_WORDS: usize = 3;

/// Size of a keystream block in bytes
pub const BLOCK_SIZE: usize = STATE_WORDS * 4;

/// Size of a key in bytes
pub const KEY_SIZE: usize = KEY_WORDS * 4;

/// Size of a nonce in bytes
pub const NONCE_SIZE: usize = NONCE_WORDS * 4;

/// Block type used by the cipher backends.
type Block = GenericArray<u8, U64>;

/// Key type.
pub type Key = GenericArray<u8, U32>;

/// Nonce type.
pub type Nonce = GenericArray<u8, U12>;

/// ChaCha20 stream cipher (RFC 8439 version with 96-bit nonce)
pub type ChaCha20 = StreamCipherCoreWrapper<ChaChaCore>;

/// The ChaCha20 core function.
pub struct ChaChaCore {
    /// Internal state of the core function; word 12 is the next block position
    state: State,
}

impl KeySizeUser for ChaChaCore {
    type KeySize = U32;
}

impl IvSizeUser for ChaChaCore {
    type IvSize = U12;
}

impl BlockSizeUser for ChaChaCore {
    type BlockSize = U64;
}

impl KeyIvInit for ChaChaCore {
    #[inline]
    fn new(key: &Key, iv: &Nonce) -> Self {
        Self {
            state: State::from_arrays(&state::le_words(key), &state::le_words(iv), 0),
        }
    }
}

impl StreamCipherCore for ChaChaCore {
    #[inline(always)]
    fn remaining_blocks(&self) -> Option<usize> {
        let rem = u32::MAX - self.get_block_pos();
        rem.try_into().ok()
    }

    fn process_with_backend(&mut self, f: impl StreamClosure<BlockSize = Self::BlockSize>) {
        f.call(&mut backends::Backend(self));
    }
}

impl StreamCipherSeekCore for ChaChaCore {
    type Counter = u32;

    #[inline(always)]
    fn get_block_pos(&self) -> u32 {
        self.state.counter()
    }

    #[inline(always)]
    fn set_block_pos(&mut self, pos: u32) {
        self.state = self.state.with_counter(pos);
    }
}

#[cfg(feature = "zeroize")]
#[cfg_attr(docsrs, doc(cfg(feature = "zeroize")))]
impl Drop for ChaChaCore {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

#[cfg(feature = "zeroize")]
#[cfg_attr(docsrs, doc(cfg(feature = "zeroize")))]
impl ZeroizeOnDrop for ChaChaCore {}
