//! 32-bit word operations the ChaCha20 core is built from.
//!
//! Every mixing step of the cipher reduces to these three operations. They
//! are exposed so that the exact operation sequence can be replayed outside
//! this crate (for example as constraints of an arithmetic circuit).

/// Addition modulo 2³².
#[inline(always)]
pub const fn add(a: u32, b: u32) -> u32 {
    a.wrapping_add(b)
}

/// Bitwise exclusive or.
#[inline(always)]
pub const fn xor(a: u32, b: u32) -> u32 {
    a ^ b
}

/// Left rotation by `n` bits.
#[inline(always)]
pub const fn rotl(x: u32, n: u32) -> u32 {
    x.rotate_left(n)
}
