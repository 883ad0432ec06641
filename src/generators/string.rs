//! String value helpers.

use rand::distr::Alphanumeric;
use rand::Rng;

const DIGITS: &[u8] = b"0123456789";

/// Build the alphanumeric seed pool: `size` independent uniform draws over
/// the 62-symbol alphabet (lowercase, uppercase, digits).
pub(crate) fn alphanumeric_pool<R: Rng>(rng: &mut R, size: usize) -> String {
    rng.sample_iter(Alphanumeric).take(size).map(char::from).collect()
}

/// Generate a string of exactly `len` random digits.
///
/// Digits are drawn per character rather than pool-backed; numeric strings
/// are rare enough in fixture data that they do not justify a dedicated
/// pool.
pub(crate) fn numeric_string<R: Rng>(rng: &mut R, len: usize) -> String {
    let mut result = String::with_capacity(len);
    for _ in 0..len {
        result.push(char::from(DIGITS[rng.random_range(0..DIGITS.len())]));
    }
    result
}
