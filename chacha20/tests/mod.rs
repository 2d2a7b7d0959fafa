//! Tests for the ChaCha20 stream cipher (RFC 8439).

use chacha20::{
    apply_keystream, apply_keystream_bytes, block_bytes,
    cipher::{KeyIvInit, StreamCipher},
    ChaCha20, Error,
};
use hex_literal::hex;

cipher::stream_cipher_seek_test!(chacha20_seek, ChaCha20);

const KEY: [u8; 32] = hex!(
    "000102030405060708090a0b0c0d0e0f"
    "101112131415161718191a1b1c1d1e1f"
);

/// RFC 8439 §2.4.2
const SUNSCREEN_NONCE: [u8; 12] = hex!("000000000000004a00000000");

const SUNSCREEN_PLAINTEXT: &[u8] = b"Ladies and Gentlemen of the class of '99: \
If I could offer you only one tip for the future, sunscreen would be it.";

const SUNSCREEN_CIPHERTEXT: [u8; 114] = hex!(
    "6e2e359a2568f98041ba0728dd0d6981"
    "e97e7aec1d4360c20a27afccfd9fae0b"
    "f91b65c5524733ab8f593dabcd62b357"
    "1639d624e65152ab8f530c359f0861d8"
    "07ca0dbf500d6a6156a38e088a22b65e"
    "52bc514d16ccf806818ce91ab7793736"
    "5af90bbf74a35be6b40b8eedf2785e42"
    "874d"
);

fn le_words(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks(4)
        .map(|chunk| {
            let mut word = [0u8; 4];
            word[..chunk.len()].copy_from_slice(chunk);
            u32::from_le_bytes(word)
        })
        .collect()
}

#[test]
fn sunscreen_encrypt() {
    let ciphertext =
        chacha20::chacha20_bytes(&KEY, &SUNSCREEN_NONCE, 1, SUNSCREEN_PLAINTEXT).unwrap();
    assert_eq!(ciphertext, SUNSCREEN_CIPHERTEXT);
}

#[test]
fn sunscreen_decrypt() {
    let mut buf = SUNSCREEN_CIPHERTEXT;
    apply_keystream_bytes(&KEY, &SUNSCREEN_NONCE, 1, &mut buf).unwrap();
    assert_eq!(&buf[..], SUNSCREEN_PLAINTEXT);
}

#[test]
fn sunscreen_words() {
    // 114 bytes pack into 29 words, the last one zero-padded
    let key = le_words(&KEY);
    let nonce = le_words(&SUNSCREEN_NONCE);
    let plaintext = le_words(SUNSCREEN_PLAINTEXT);
    assert_eq!(plaintext.len(), 29);

    let ciphertext = chacha20::chacha20(&key, &nonce, 1, &plaintext).unwrap();
    let expected = le_words(&SUNSCREEN_CIPHERTEXT);
    assert_eq!(ciphertext[..28], expected[..28]);
    // only the two real bytes of the last word match the byte-level vector
    assert_eq!(ciphertext[28] & 0xffff, expected[28]);
}

#[test]
fn sunscreen_trait_cipher() {
    let mut cipher = ChaCha20::new(&KEY.into(), &SUNSCREEN_NONCE.into());
    // the trait cipher starts at block 0; skip it to line up with counter 1
    let mut skip = [0u8; 64];
    cipher.apply_keystream(&mut skip);
    let mut buf = SUNSCREEN_PLAINTEXT.to_vec();
    cipher.apply_keystream(&mut buf);
    assert_eq!(buf, SUNSCREEN_CIPHERTEXT);
}

#[test]
fn round_trip() {
    let nonce = [0xa7u8; 12];
    for len in [0usize, 1, 63, 64, 65, 128, 1000] {
        let msg: Vec<u8> = (0..len).map(|i| (i * 31 % 251) as u8).collect();
        for counter in [0, 1, u32::MAX] {
            let ct = chacha20::chacha20_bytes(&KEY, &nonce, counter, &msg).unwrap();
            assert_eq!(ct.len(), msg.len());
            let pt = chacha20::chacha20_bytes(&KEY, &nonce, counter, &ct).unwrap();
            assert_eq!(pt, msg);
        }
    }
}

#[test]
fn length_preserved_for_one_and_sixty_five_bytes() {
    let nonce = [0u8; 12];
    let one = chacha20::chacha20_bytes(&KEY, &nonce, 0, &[0]).unwrap();
    assert_eq!(one, [block_bytes(&KEY, &nonce, 0).unwrap()[0]]);

    let sixty_five = chacha20::chacha20_bytes(&KEY, &nonce, 0, &[0; 65]).unwrap();
    assert_eq!(sixty_five.len(), 65);
    assert_eq!(sixty_five[64], block_bytes(&KEY, &nonce, 1).unwrap()[0]);
}

#[test]
fn empty_message_returns_empty_output() {
    assert!(chacha20::chacha20_bytes(&KEY, &[0; 12], 1, &[]).unwrap().is_empty());
    assert!(chacha20::chacha20(&[0; 8], &[0; 3], 1, &[]).unwrap().is_empty());
}

#[test]
fn counter_offsets_are_independent() {
    let nonce = [5u8; 12];
    let mut whole = [0u8; 64 * 5];
    apply_keystream_bytes(&KEY, &nonce, 100, &mut whole).unwrap();

    // produce the same blocks one at a time, last block first
    for j in (0..5u32).rev() {
        let mut single = [0u8; 64];
        apply_keystream_bytes(&KEY, &nonce, 100 + j, &mut single).unwrap();
        let start = j as usize * 64;
        assert_eq!(single[..], whole[start..start + 64]);
    }
}

#[test]
fn invalid_lengths_fail_fast() {
    let mut data = [0u32; 4];
    for key_len in [0usize, 7, 9, 32] {
        let key = vec![0u32; key_len];
        assert_eq!(
            apply_keystream(&key, &[0; 3], 0, &mut data),
            Err(Error::InvalidKeyLength {
                expected: 8,
                actual: key_len
            })
        );
    }
    for nonce_len in [0usize, 2, 4, 12] {
        let nonce = vec![0u32; nonce_len];
        assert_eq!(
            apply_keystream(&[0; 8], &nonce, 0, &mut data),
            Err(Error::InvalidNonceLength {
                expected: 3,
                actual: nonce_len
            })
        );
    }
    assert_eq!(data, [0; 4]);
}

#[test]
fn error_messages() {
    let err = Error::InvalidKeyLength {
        expected: 32,
        actual: 16,
    };
    assert_eq!(err.to_string(), "invalid key length: expected 32, got 16");
    let err = Error::InvalidNonceLength {
        expected: 3,
        actual: 2,
    };
    assert_eq!(err.to_string(), "invalid nonce length: expected 3, got 2");
}
