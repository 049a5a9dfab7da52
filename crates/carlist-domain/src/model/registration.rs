//! Registration number rules
//!
//! A registration number is 1 to 7 characters drawn from `0-9` and `A-Z`.

use rand::Rng;

/// Longest registration number accepted
pub const MAX_LEN: usize = 7;

/// Symbols a registration number may contain
pub const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn is_allowed(b: u8) -> bool {
    b.is_ascii_digit() || b.is_ascii_uppercase()
}

/// Check a registration number against the alphanumeric rule
pub fn is_valid(value: &str) -> bool {
    !value.is_empty() && value.len() <= MAX_LEN && value.bytes().all(is_allowed)
}

/// Generate a random registration number of exactly `MAX_LEN` characters
pub fn generate() -> String {
    generate_with(&mut rand::rng())
}

/// Generate using the given random source
pub fn generate_with<R: Rng>(rng: &mut R) -> String {
    (0..MAX_LEN)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
