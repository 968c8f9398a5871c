//! The LOKI97 round function and its building blocks.
//!
//! `f(a, b) = Sb(P(Sa(KP(a, b))), b >> 32)`: key-controlled bit mixing,
//! a first S-box column over irregular 11/13-bit chunks, a fixed 64-bit
//! permutation, and a second S-box column that folds in the upper half of
//! the key word.

use crate::sbox::{s1, s2, S1_MASK, S2_MASK};

/// Fixed permutation of the 64 bits of the `Sa` output. Bit `i` of the input
/// moves to bit `PERMUTATION_TABLE[63 - i]` of the output.
#[rustfmt::skip]
const PERMUTATION_TABLE: [u32; 64] = [
    56, 48, 40, 32, 24, 16,  8, 0,
    57, 49, 41, 33, 25, 17,  9, 1,
    58, 50, 42, 34, 26, 18, 10, 2,
    59, 51, 43, 35, 27, 19, 11, 3,
    60, 52, 44, 36, 28, 20, 12, 4,
    61, 53, 45, 37, 29, 21, 13, 5,
    62, 54, 46, 38, 30, 22, 14, 6,
    63, 55, 47, 39, 31, 23, 15, 7,
];

/// Key-controlled bit mixing.
///
/// Each bit of `b`'s low half selects, per position, whether the output
/// halves take their bit from `a`'s own half or from the opposite one — a
/// controlled blend, not a permutation.
fn kp(a: u64, b: u64) -> u64 {
    let a_left = a >> 32;
    let a_right = a & 0xFFFF_FFFF;
    let b_right = b & 0xFFFF_FFFF;

    let out_left = (a_left & !b_right) | (a_right & b_right);
    let out_right = (a_right & !b_right) | (a_left & b_right);

    (out_left << 32) | out_right
}

/// Splits a 64-bit word into one of 8 fixed irregular chunks sized for S1
/// (13 bits) or S2 (11 bits), 96 bits overall.
///
/// The bit ranges are part of the cipher definition and must not be changed:
/// chunk 0 wraps around the word boundary, the rest step down in 8-bit
/// increments.
fn extract_chunk(a: u64, chunk: usize) -> u32 {
    match chunk {
        // [4-0 | 63-56]
        0 => (((a & 0x1F) << 8) | ((a >> 56) & 0xFF)) as u32,
        // [58-48]
        1 => ((a >> 48) as u32) & S2_MASK,
        // [52-40]
        2 => ((a >> 40) as u32) & S1_MASK,
        // [42-32]
        3 => ((a >> 32) as u32) & S2_MASK,
        // [34-24]
        4 => ((a >> 24) as u32) & S2_MASK,
        // [28-16]
        5 => ((a >> 16) as u32) & S1_MASK,
        // [18-8]
        6 => ((a >> 8) as u32) & S2_MASK,
        // [12-0]
        7 => (a as u32) & S1_MASK,
        _ => 0,
    }
}

/// First S-box column `[S1, S2, S1, S2, S2, S1, S2, S1]` over the chunks of
/// `a`, packed most-significant chunk first.
fn sa(a: u64) -> u64 {
    s1(extract_chunk(a, 0)) << 56
        | s2(extract_chunk(a, 1)) << 48
        | s1(extract_chunk(a, 2)) << 40
        | s2(extract_chunk(a, 3)) << 32
        | s2(extract_chunk(a, 4)) << 24
        | s1(extract_chunk(a, 5)) << 16
        | s2(extract_chunk(a, 6)) << 8
        | s1(extract_chunk(a, 7))
}

/// Second S-box column `[S2, S2, S1, S1, S2, S2, S1, S1]`.
///
/// Each byte of `a` is widened to a full 11- or 13-bit S-box input with
/// fixed bits of the 32-bit word `b`; the shift and mask per chunk are part
/// of the cipher definition.
fn sb(a: u64, b: u64) -> u64 {
    s2((((b >> 21) & 0x700) | ((a >> 56) & 0xFF)) as u32) << 56
        | s2((((b >> 18) & 0x700) | ((a >> 48) & 0xFF)) as u32) << 48
        | s1((((b >> 13) & 0x1F00) | ((a >> 40) & 0xFF)) as u32) << 40
        | s1((((b >> 8) & 0x1F00) | ((a >> 32) & 0xFF)) as u32) << 32
        | s2((((b >> 5) & 0x700) | ((a >> 24) & 0xFF)) as u32) << 24
        | s2((((b >> 2) & 0x700) | ((a >> 16) & 0xFF)) as u32) << 16
        | s1((((b << 3) & 0x1F00) | ((a >> 8) & 0xFF)) as u32) << 8
        | s1((((b << 8) & 0x1F00) | (a & 0xFF)) as u32)
}

/// Applies the fixed 64-bit permutation to the `Sa` output.
fn permute(a: u64) -> u64 {
    let mut out = 0u64;
    for i in 0..64 {
        let bit = (a >> i) & 1;
        out |= bit << PERMUTATION_TABLE[63 - i];
    }
    out
}

/// The complete round function `f(a, b)`.
pub(crate) fn f(a: u64, b: u64) -> u64 {
    sb(permute(sa(kp(a, b))), b >> 32)
}
