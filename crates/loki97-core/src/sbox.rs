//! Galois-field cube S-boxes S1 and S2.
//!
//! Both S-boxes cube their input in a small binary field after XOR-ing it
//! with the field's all-ones mask, then keep the low 8 bits of the result.
//! S1 works in GF(2^13), S2 in GF(2^11). The values are computed on the fly
//! from the generator polynomials rather than read from stored tables.

/// Size of the S1 field, 2^13.
pub(crate) const S1_SIZE: u32 = 0x2000;
/// Irreducible generator polynomial for S1 in GF(2^13).
const S1_GEN: u32 = 0x2911;
/// Mask selecting a 13-bit S1 input.
pub(crate) const S1_MASK: u32 = S1_SIZE - 1;

/// Size of the S2 field, 2^11.
pub(crate) const S2_SIZE: u32 = 0x800;
/// Irreducible generator polynomial for S2 in GF(2^11).
const S2_GEN: u32 = 0xAA7;
/// Mask selecting an 11-bit S2 input.
pub(crate) const S2_MASK: u32 = S2_SIZE - 1;

/// Carry-less multiplication `a * b mod gen` in the field of size `field_size`.
///
/// Shift-and-XOR schoolbook multiply, reducing by the generator whenever the
/// accumulator for `a` grows past the field.
fn gf_mul(mut a: u32, mut b: u32, gen: u32, field_size: u32) -> u32 {
    let mut product = 0u32;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a <<= 1;
        if a >= field_size {
            a ^= gen;
        }
        b >>= 1;
    }
    product
}

/// Cubes `x` in the field: two chained multiplications, with zero mapped
/// straight to zero.
fn gf_cube(x: u32, gen: u32, field_size: u32) -> u32 {
    if x == 0 {
        return 0;
    }
    let square = gf_mul(x, x, gen, field_size);
    gf_mul(x, square, gen, field_size)
}

/// S1: cube `a ^ 0x1FFF` in GF(2^13), low 8 bits.
#[inline]
pub(crate) fn s1(a: u32) -> u64 {
    u64::from(gf_cube(a ^ S1_MASK, S1_GEN, S1_SIZE) & 0xFF)
}

/// S2: cube `a ^ 0x7FF` in GF(2^11), low 8 bits.
#[inline]
pub(crate) fn s2(a: u32) -> u64 {
    u64::from(gf_cube(a ^ S2_MASK, S2_GEN, S2_SIZE) & 0xFF)
}
