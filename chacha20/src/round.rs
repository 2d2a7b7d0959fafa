//! The ChaCha quarter round and the double-round schedule.

use crate::{
    arith::{add, rotl, xor},
    STATE_WORDS,
};

/// Indices `(a, b, c, d)` of the state words a quarter round mixes.
pub type QuarterRoundIndices = (usize, usize, usize, usize);

/// Quarter rounds applied to the columns of the 4×4 state matrix.
pub const COLUMN_ROUND: [QuarterRoundIndices; 4] =
    [(0, 4, 8, 12), (1, 5, 9, 13), (2, 6, 10, 14), (3, 7, 11, 15)];

/// Quarter rounds applied to the diagonals of the 4×4 state matrix.
pub const DIAGONAL_ROUND: [QuarterRoundIndices; 4] =
    [(0, 5, 10, 15), (1, 6, 11, 12), (2, 7, 8, 13), (3, 4, 9, 14)];

/// Number of double rounds making up the 20 rounds of ChaCha20.
pub(crate) const DOUBLE_ROUNDS: usize = 10;

/// The ChaCha20 quarter round function
#[inline(always)]
pub const fn quarter_round(a: u32, b: u32, c: u32, d: u32) -> (u32, u32, u32, u32) {
    let a = add(a, b);
    let d = rotl(xor(d, a), 16);

    let c = add(c, d);
    let b = rotl(xor(b, c), 12);

    let a = add(a, b);
    let d = rotl(xor(d, a), 8);

    let c = add(c, d);
    let b = rotl(xor(b, c), 7);

    (a, b, c, d)
}

/// Column round followed by diagonal round, applied in place.
#[inline(always)]
pub(crate) fn double_round(state: &mut [u32; STATE_WORDS]) {
    for &(a, b, c, d) in COLUMN_ROUND.iter().chain(DIAGONAL_ROUND.iter()) {
        (state[a], state[b], state[c], state[d]) =
            quarter_round(state[a], state[b], state[c], state[d]);
    }
}
