//! Key schedule for LOKI97.

use crate::error::Error;
use crate::round::f;

/// Golden-ratio constant mixed into every subkey derivation step.
const DELTA: u64 = 0x9E3779B97F4A7C15;

/// Number of session subkeys: 16 rounds consuming 3 subkeys each.
const SUBKEY_COUNT: usize = 48;

/// The 48 session subkeys derived from a master key.
///
/// Immutable once derived; encryption and decryption both read the same
/// schedule, decryption simply consumes it in reverse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeySchedule([u64; SUBKEY_COUNT]);

impl KeySchedule {
    /// Returns the subkey at the requested index (0..=47).
    ///
    /// # Panics
    ///
    /// Panics if `index` is 48 or greater.
    #[inline]
    pub fn get(&self, index: usize) -> u64 {
        self.0[index]
    }
}

fn read_word(bytes: &[u8]) -> u64 {
    u64::from_be_bytes(bytes.try_into().expect("chunk length is eight"))
}

/// Derives the 48-subkey schedule from a 16-, 24-, or 32-byte master key.
///
/// The four initial key words come straight from the key bytes where the key
/// is long enough; missing words are derived with the round function, so the
/// three key lengths never produce coinciding schedules for a shared prefix.
///
/// # Errors
///
/// Returns [`Error::InvalidKeyLength`] for any other key length.
pub fn derive_schedule(key: &[u8]) -> Result<KeySchedule, Error> {
    let words: Vec<u64> = key.chunks_exact(8).map(read_word).collect();

    // s[3] holds the most significant key word, matching the order the
    // subkey recurrence consumes them.
    let mut s = match key.len() {
        16 => {
            let s3 = words[0];
            let s2 = words[1];
            [f(s3, s2), f(s2, s3), s2, s3]
        }
        24 => [f(words[0], words[1]), words[2], words[1], words[0]],
        32 => [words[3], words[2], words[1], words[0]],
        len => return Err(Error::InvalidKeyLength { len }),
    };

    let mut subkeys = [0u64; SUBKEY_COUNT];
    for (i, slot) in subkeys.iter_mut().enumerate() {
        let round = (i + 1) as u64;
        let sum = s[0].wrapping_add(s[2]).wrapping_add(DELTA.wrapping_mul(round));
        let subkey = s[3] ^ f(sum, s[1]);
        *slot = subkey;
        s = [subkey, s[0], s[1], s[2]];
    }

    Ok(KeySchedule(subkeys))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_key_lengths() {
        for len in [0usize, 1, 15, 17, 23, 25, 31, 33, 48] {
            let key = vec![0u8; len];
            assert_eq!(
                derive_schedule(&key),
                Err(Error::InvalidKeyLength { len }),
                "length {len}"
            );
        }
    }

    #[test]
    fn accepts_all_three_key_lengths() {
        for len in [16usize, 24, 32] {
            let key = vec![0x5Au8; len];
            assert!(derive_schedule(&key).is_ok(), "length {len}");
        }
    }

    #[test]
    fn subkeys_are_indexable_across_the_full_schedule() {
        let schedule = derive_schedule(&[0u8; 16]).unwrap();
        let _ = schedule.get(0);
        let _ = schedule.get(47);
    }

    #[test]
    #[should_panic]
    fn subkey_index_past_the_schedule_panics() {
        let schedule = derive_schedule(&[0u8; 16]).unwrap();
        let _ = schedule.get(48);
    }

    #[test]
    fn schedule_is_deterministic() {
        let key: Vec<u8> = (0..32).collect();
        let a = derive_schedule(&key).unwrap();
        let b = derive_schedule(&key).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn key_lengths_never_coincide_on_a_shared_prefix() {
        let key: Vec<u8> = (0..32).collect();
        let short = derive_schedule(&key[..16]).unwrap();
        let medium = derive_schedule(&key[..24]).unwrap();
        let long = derive_schedule(&key).unwrap();
        assert_ne!(short, medium);
        assert_ne!(short, long);
        assert_ne!(medium, long);
    }

    #[test]
    fn single_key_bit_changes_the_schedule() {
        let mut key: Vec<u8> = (0..32).collect();
        let base = derive_schedule(&key).unwrap();
        key[0] ^= 1;
        let flipped = derive_schedule(&key).unwrap();
        assert_ne!(base, flipped);
    }
}
