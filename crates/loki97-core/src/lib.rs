//! LOKI97 block cipher core.
//!
//! LOKI97 is a 16-round Feistel cipher on 128-bit blocks with 128/192/256-bit
//! keys. This crate provides:
//! - Key schedule deriving the 48 session subkeys from a master key.
//! - Single-block encryption and decryption.
//! - Public types shared across the workspace.
//!
//! The round function combines key-controlled bit mixing, two Galois-field
//! cube S-boxes over GF(2^13) and GF(2^11), and a fixed 64-bit permutation;
//! rounds combine subkeys with wrapping 64-bit addition rather than XOR alone.
//!
//! The implementation aims for clarity and testability rather than
//! constant-time guarantees; it should not be treated as side-channel
//! hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod key;
mod round;
mod sbox;

pub use crate::block::Block;
pub use crate::cipher::{decrypt_block, encrypt_block};
pub use crate::error::Error;
pub use crate::key::{derive_schedule, KeySchedule};
