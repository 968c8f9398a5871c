//! Demonstrates deriving a schedule and encrypting a two-block message.

use loki97_ecb::{decrypt, derive_schedule, encrypt};

fn main() {
    let key: Vec<u8> = (0..32).collect();
    let schedule = derive_schedule(&key).expect("32 bytes is a valid key length");

    let mut message = [0u8; 32];
    message[..16].copy_from_slice(b"first block here");
    message[16..].copy_from_slice(b"second blockhere");

    let ciphertext = encrypt(&message, &schedule).expect("length is a multiple of 16");
    let decrypted = decrypt(&ciphertext, &schedule).expect("length is a multiple of 16");
    assert_eq!(decrypted, message);

    println!("ciphertext: {}", hex::encode_upper(&ciphertext));
    println!("example succeeded; decryption matches the original message");
}
