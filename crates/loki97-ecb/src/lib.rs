//! Multi-block convenience layer over the LOKI97 core.
//!
//! Splits a message whose length is a multiple of 16 bytes into blocks,
//! transforms each independently, and concatenates the results — raw ECB,
//! no IV and no padding. A hex-string front-end mirrors the byte API for
//! callers exchanging uppercase-hex fixtures: decoding is case-insensitive,
//! encoding is uppercase, two characters per byte.
//!
//! Blocks carry no chaining state, so callers needing throughput may split
//! a message and run the block calls on several threads.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use std::fmt;

use loki97_core::{decrypt_block, encrypt_block, Block, KeySchedule};

pub use loki97_core::{derive_schedule, Error};

/// Errors from the hex front-end: either the hex text itself is malformed
/// or the decoded bytes fail cipher validation.
///
/// Only `PartialEq`: `hex::FromHexError` does not implement `Eq`.
#[derive(Debug, Clone, PartialEq)]
pub enum HexError {
    /// Input is not valid hex (odd length or a non-hex character).
    InvalidHex(hex::FromHexError),
    /// Decoded key or message has an invalid length.
    Cipher(Error),
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexError::InvalidHex(err) => write!(f, "invalid hex input: {err}"),
            HexError::Cipher(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for HexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HexError::InvalidHex(err) => Some(err),
            HexError::Cipher(err) => Some(err),
        }
    }
}

impl From<hex::FromHexError> for HexError {
    fn from(err: hex::FromHexError) -> Self {
        HexError::InvalidHex(err)
    }
}

impl From<Error> for HexError {
    fn from(err: Error) -> Self {
        HexError::Cipher(err)
    }
}

fn check_length(message: &[u8]) -> Result<(), Error> {
    if message.len() % 16 != 0 {
        return Err(Error::InvalidMessageLength { len: message.len() });
    }
    Ok(())
}

fn transform(message: &[u8], per_block: impl Fn(&Block) -> Block) -> Result<Vec<u8>, Error> {
    check_length(message)?;
    let mut out = Vec::with_capacity(message.len());
    for chunk in message.chunks_exact(16) {
        let block: Block = chunk.try_into().expect("chunk length is sixteen");
        out.extend_from_slice(&per_block(&block));
    }
    Ok(out)
}

/// Encrypts a message block by block.
///
/// # Errors
///
/// Returns [`Error::InvalidMessageLength`] unless the message length is a
/// multiple of 16 bytes; nothing is encrypted in that case.
pub fn encrypt(message: &[u8], schedule: &KeySchedule) -> Result<Vec<u8>, Error> {
    transform(message, |block| encrypt_block(block, schedule))
}

/// Decrypts a ciphertext block by block.
///
/// # Errors
///
/// Returns [`Error::InvalidMessageLength`] unless the ciphertext length is a
/// multiple of 16 bytes.
pub fn decrypt(ciphertext: &[u8], schedule: &KeySchedule) -> Result<Vec<u8>, Error> {
    transform(ciphertext, |block| decrypt_block(block, schedule))
}

/// Encrypts a hex-string message under a hex-string key, returning uppercase
/// hex ciphertext.
///
/// # Errors
///
/// Returns [`HexError::InvalidHex`] for malformed hex, or wraps the
/// key/message length validation of the byte API.
pub fn encrypt_hex(message: &str, key: &str) -> Result<String, HexError> {
    let key_bytes = hex::decode(key)?;
    let schedule = derive_schedule(&key_bytes)?;
    let message_bytes = hex::decode(message)?;
    Ok(hex::encode_upper(encrypt(&message_bytes, &schedule)?))
}

/// Decrypts a hex-string ciphertext under a hex-string key, returning
/// uppercase hex plaintext.
///
/// # Errors
///
/// Same conditions as [`encrypt_hex`].
pub fn decrypt_hex(ciphertext: &str, key: &str) -> Result<String, HexError> {
    let key_bytes = hex::decode(key)?;
    let schedule = derive_schedule(&key_bytes)?;
    let cipher_bytes = hex::decode(ciphertext)?;
    Ok(hex::encode_upper(decrypt(&cipher_bytes, &schedule)?))
}
