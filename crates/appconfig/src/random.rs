//! Random fallbacks for answers the operator may leave empty.
//!
//! Every function takes the generator explicitly so callers can pass a
//! seeded one.

use rand::Rng;
use rand::seq::SliceRandom;

/// Default alphabet for generated short codes
pub const DEFAULT_SHORTCODE_CHARS: &str = "123456789bcdfghjkmnpqrstvwxyzBCDFGHJKLMNPQRSTVWXYZ";

/// Alphabet for generated application secrets
pub const SECRET_CHARS: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of generated application secrets
pub const SECRET_LENGTH: usize = 32;

/// Return a random permutation of `alphabet`.
pub fn shuffled<R: Rng>(rng: &mut R, alphabet: &str) -> String {
    let mut chars: Vec<char> = alphabet.chars().collect();
    chars.shuffle(rng);
    chars.into_iter().collect()
}

/// Build a string of `len` characters drawn uniformly from `alphabet`.
///
/// Returns an empty string when the alphabet is empty.
pub fn random_string<R: Rng>(rng: &mut R, alphabet: &str, len: usize) -> String {
    let chars: Vec<char> = alphabet.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    (0..len)
        .map(|_| chars[rng.random_range(0..chars.len())])
        .collect()
}

/// A fresh application secret.
pub fn generate_secret<R: Rng>(rng: &mut R) -> String {
    random_string(rng, SECRET_CHARS, SECRET_LENGTH)
}

/// A fresh short-code alphabet: the default one, permuted.
pub fn generate_shortcode_chars<R: Rng>(rng: &mut R) -> String {
    shuffled(rng, DEFAULT_SHORTCODE_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sorted(s: &str) -> Vec<char> {
        let mut chars: Vec<char> = s.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn test_shuffled_keeps_multiset() {
        let mut rng = StdRng::seed_from_u64(7);
        let out = generate_shortcode_chars(&mut rng);
        assert_eq!(out.len(), DEFAULT_SHORTCODE_CHARS.len());
        assert_eq!(sorted(&out), sorted(DEFAULT_SHORTCODE_CHARS));
    }

    #[test]
    fn test_seeded_generators_are_reproducible() {
        let a = generate_secret(&mut StdRng::seed_from_u64(42));
        let b = generate_secret(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);

        let c = generate_secret(&mut StdRng::seed_from_u64(43));
        assert_ne!(a, c);
    }

    #[test]
    fn test_secret_uses_alphabet() {
        let secret = generate_secret(&mut rand::rng());
        assert_eq!(secret.len(), SECRET_LENGTH);
        assert!(secret.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_random_string_empty_alphabet() {
        assert_eq!(random_string(&mut rand::rng(), "", 10), "");
        assert_eq!(random_string(&mut rand::rng(), "abc", 0), "");
    }
}
