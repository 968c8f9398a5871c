//! Block representation helpers.

/// LOKI97 block of 16 bytes.
pub type Block = [u8; 16];

/// Splits a block into its two big-endian 64-bit halves.
#[inline]
pub(crate) fn split(block: &Block) -> (u64, u64) {
    let first = u64::from_be_bytes(block[..8].try_into().expect("half is eight bytes"));
    let second = u64::from_be_bytes(block[8..].try_into().expect("half is eight bytes"));
    (first, second)
}

/// Joins two 64-bit words into a block, `first` occupying bytes 0..8.
#[inline]
pub(crate) fn join(first: u64, second: u64) -> Block {
    let mut out = [0u8; 16];
    out[..8].copy_from_slice(&first.to_be_bytes());
    out[8..].copy_from_slice(&second.to_be_bytes());
    out
}
