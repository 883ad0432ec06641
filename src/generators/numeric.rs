//! Numeric value helpers.

use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Draw from a normal distribution and reject until the result is a
/// positive integer.
///
/// Models physical-measurement-like quantities (e.g. a byte size) that must
/// never be zero or negative. With a mean well above zero the loop almost
/// always terminates on the first draw.
pub(crate) fn positive_normal<R: Rng>(rng: &mut R, dist: &Normal<f64>) -> i32 {
    loop {
        let sample = dist.sample(rng) as i32;
        if sample > 0 {
            return sample;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_positive_normal_is_positive() {
        let mut rng = StdRng::seed_from_u64(42);
        let dist = Normal::new(3000.0, 2500.0).unwrap();

        for _ in 0..10_000 {
            assert!(positive_normal(&mut rng, &dist) > 0);
        }
    }

    #[test]
    fn test_positive_normal_tracks_mean() {
        let mut rng = StdRng::seed_from_u64(42);
        let dist = Normal::new(3000.0, 2500.0).unwrap();

        let n = 100_000;
        let sum: i64 = (0..n).map(|_| positive_normal(&mut rng, &dist) as i64).sum();
        let mean = sum / n;

        // Rejection of the negative tail pushes the mean above 3000.
        assert!(mean > 3000 && mean < 4000, "unexpected mean: {mean}");
    }
}
