//! The stateful random value generator.

use crate::error::GeneratorError;
use crate::generators::{numeric, string, timestamp};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;

/// Default number of characters in the alphanumeric seed pool.
pub const DEFAULT_POOL_SIZE: usize = 10_000;

/// Smallest allowed seed pool.
///
/// The composite [`random_id`](FastRandom::random_id) and
/// [`code`](FastRandom::code) generators slice up to 31 characters from the
/// pool, so anything smaller than this cannot serve them.
pub const MIN_POOL_SIZE: usize = 32;

/// Number of usable bits in one boolean cache refill.
const BOOL_CACHE_BITS: u32 = 63;

/// Parameters of the normal distribution behind [`FastRandom::size`].
const SIZE_MEAN: f64 = 3000.0;
const SIZE_STD_DEV: f64 = 2500.0;

/// Random-suffix length bounds for [`FastRandom::random_id`] and
/// [`FastRandom::code`], half-open.
const ID_SUFFIX_MIN: usize = 10;
const ID_SUFFIX_MAX: usize = 20;
const CODE_SUFFIX_MIN: usize = 10;
const CODE_SUFFIX_MAX: usize = 32;

/// How far back [`FastRandom::date`] reaches.
const RECENT_DATE_DAYS: i64 = 5;

/// Non-thread-safe random value generator for load-test data injection.
///
/// One instance belongs to exactly one execution context (thread or task);
/// every method takes `&mut self` and there is no internal synchronization.
/// Independent instances share no state, so separate contexts each owning
/// their own instance need no coordination.
///
/// Alphanumeric strings are served as slices of a pool drawn once at
/// construction. Returned strings therefore overlap in content across calls
/// and are not independent of each other, which is acceptable for fixture
/// data and disqualifying for anything security-sensitive.
pub struct FastRandom {
    /// Sole entropy source for this instance.
    rng: StdRng,
    /// Precomputed alphanumeric characters; immutable after construction.
    pool: String,
    /// Cached random bits for boolean generation.
    bool_bits: u64,
    /// Bits left unconsumed in `bool_bits`. Always in `0..=63`.
    bool_bits_remaining: u32,
    /// Distribution behind `size`, built once.
    size_dist: Normal<f64>,
}

impl FastRandom {
    /// Create a generator seeded from OS entropy with the default pool size.
    ///
    /// OS-entropy seeding means instances created in rapid succession (for
    /// example one per worker task at startup) never collide on a seed.
    pub fn new() -> Self {
        Self::with_pool_size(DEFAULT_POOL_SIZE)
    }

    /// Create a generator seeded from OS entropy with a custom pool size.
    ///
    /// Larger pools reduce content overlap between returned strings and
    /// raise the maximum length [`fixed_len_string`](Self::fixed_len_string)
    /// can serve.
    ///
    /// # Panics
    ///
    /// Panics if `pool_size < MIN_POOL_SIZE`.
    pub fn with_pool_size(pool_size: usize) -> Self {
        Self::with_rng(StdRng::from_os_rng(), pool_size)
    }

    /// Create a deterministic generator from a seed, with the default pool
    /// size.
    ///
    /// Two instances built from the same seed produce identical value
    /// streams. Intended for tests and reproducible fixture runs.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), DEFAULT_POOL_SIZE)
    }

    fn with_rng(mut rng: StdRng, pool_size: usize) -> Self {
        assert!(
            pool_size >= MIN_POOL_SIZE,
            "pool_size {pool_size} is below the minimum of {MIN_POOL_SIZE}"
        );

        let pool = string::alphanumeric_pool(&mut rng, pool_size);
        tracing::debug!(pool_size, "initialized alphanumeric seed pool");

        Self {
            rng,
            pool,
            bool_bits: 0,
            bool_bits_remaining: 0,
            // Constant, finite parameters with a positive deviation.
            size_dist: Normal::new(SIZE_MEAN, SIZE_STD_DEV)
                .expect("size distribution parameters are valid"),
        }
    }

    /// Generate a length between `min` (inclusive) and `max` (exclusive).
    ///
    /// Quirk preserved from the original injector: `min > max` silently
    /// returns `0` rather than failing. Callers must not lean on this as
    /// argument validation. `min == max` returns `min`.
    pub fn length(&mut self, min: usize, max: usize) -> usize {
        if min > max {
            return 0;
        }
        if min == max {
            return min;
        }
        self.rng.random_range(min..max)
    }

    /// Generate a uniform integer in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound <= 0`, per the underlying uniform-range contract.
    pub fn int(&mut self, bound: i32) -> i32 {
        self.rng.random_range(0..bound)
    }

    /// Generate a random boolean.
    ///
    /// Booleans are served from a cache of 63 random bits, refilled with a
    /// single draw from the underlying generator when exhausted. Bits are
    /// consumed low-to-high; each is independently uniform.
    pub fn bool(&mut self) -> bool {
        if self.bool_bits_remaining == 0 {
            self.bool_bits = self.rng.random::<u64>() >> 1;
            self.bool_bits_remaining = BOOL_CACHE_BITS;
        }

        let bit = self.bool_bits & 1 == 1;
        self.bool_bits >>= 1;
        self.bool_bits_remaining -= 1;

        bit
    }

    /// Return a random alphanumeric string of exactly `len` characters.
    ///
    /// The result is a slice of the internal pool at a uniform random
    /// offset: no per-character draws, no allocation. It borrows the
    /// generator; call `.to_owned()` to retain it past the next use of the
    /// generator.
    ///
    /// Fails with [`GeneratorError::StringTooLong`] if `len` does not fit
    /// inside the pool.
    pub fn fixed_len_string(&mut self, len: usize) -> Result<&str, GeneratorError> {
        if len >= self.pool.len() {
            return Err(GeneratorError::StringTooLong {
                requested: len,
                pool_size: self.pool.len(),
            });
        }
        Ok(self.pool_slice(len))
    }

    /// Return a random alphanumeric string of random length in `[min, max)`.
    ///
    /// Length selection follows [`length`](Self::length), including its
    /// `min > max` quirk (which yields the empty string). The result is a
    /// borrowed slice of the pool, as with
    /// [`fixed_len_string`](Self::fixed_len_string).
    pub fn string(&mut self, min: usize, max: usize) -> Result<&str, GeneratorError> {
        let len = self.length(min, max);
        self.fixed_len_string(len)
    }

    /// Generate a string of exactly `len` random digits.
    ///
    /// Unlike the alphanumeric string generators this allocates and draws
    /// each character independently; digit strings are not pool-backed.
    pub fn num_string(&mut self, len: usize) -> String {
        string::numeric_string(&mut self.rng, len)
    }

    /// Generate an optional boolean.
    ///
    /// One coin flip decides presence, a second supplies the payload, so
    /// half the calls are `None` like every other optional generator here.
    pub fn opt_bool(&mut self) -> Option<bool> {
        if !self.bool() {
            return None;
        }
        Some(self.bool())
    }

    /// Generate an optional uniform `i32` in `[0, bound)`.
    ///
    /// Absent half the time; panics if `bound <= 0` when present (see
    /// [`int`](Self::int)).
    pub fn opt_int32(&mut self, bound: i32) -> Option<i32> {
        if !self.bool() {
            return None;
        }
        Some(self.int(bound))
    }

    /// Generate an optional uniform `i64` in `[0, bound)`.
    ///
    /// Absent half the time; panics if `bound <= 0` when present.
    pub fn opt_int64(&mut self, bound: i64) -> Option<i64> {
        if !self.bool() {
            return None;
        }
        Some(self.rng.random_range(0..bound))
    }

    /// Generate an optional random alphanumeric string of length in
    /// `[min, max)`.
    ///
    /// Absent half the time. Present values borrow the pool, as with
    /// [`string`](Self::string).
    pub fn opt_string(&mut self, min: usize, max: usize) -> Result<Option<&str>, GeneratorError> {
        if !self.bool() {
            return Ok(None);
        }
        Ok(Some(self.string(min, max)?))
    }

    /// Generate an optional physical-measurement-like quantity (e.g. a byte
    /// size) from a normal distribution with mean 3000 and standard
    /// deviation 2500.
    ///
    /// Absent half the time. Present values are rejection-sampled until
    /// strictly positive, so `Some(v)` always satisfies `v > 0`.
    pub fn size(&mut self) -> Option<i32> {
        if !self.bool() {
            return None;
        }
        Some(numeric::positive_normal(&mut self.rng, &self.size_dist))
    }

    /// Generate an identifier of the form
    /// `{prefix}_{random alnum}_{nanosecond timestamp}`.
    ///
    /// The random segment is 10 to 19 characters; the timestamp is current
    /// wall-clock nanoseconds in decimal.
    pub fn random_id(&mut self, prefix: &str) -> String {
        let len = self.length(ID_SUFFIX_MIN, ID_SUFFIX_MAX);
        let nanos = timestamp::nanos_now();
        format!("{prefix}_{}_{nanos}", self.pool_slice(len))
    }

    /// Generate a code of the form `{prefix}_{index}_{random alnum}`.
    ///
    /// The random segment is 10 to 31 characters.
    pub fn code(&mut self, prefix: &str, index: u64) -> String {
        let len = self.length(CODE_SUFFIX_MIN, CODE_SUFFIX_MAX);
        format!("{prefix}_{index}_{}", self.pool_slice(len))
    }

    /// Generate an RFC 3339 timestamp drawn uniformly from the last 5 days
    /// up to now (at call time).
    pub fn date(&mut self) -> String {
        timestamp::recent_timestamp(&mut self.rng, RECENT_DATE_DAYS)
    }

    /// Slice `len` pool characters at a uniform random offset.
    ///
    /// Callers must have validated `len < pool.len()`; the public
    /// entry points and `MIN_POOL_SIZE` guarantee it.
    fn pool_slice(&mut self, len: usize) -> &str {
        debug_assert!(len < self.pool.len());
        let pos = self.rng.random_range(0..self.pool.len() - len);
        &self.pool[pos..pos + len]
    }
}

impl Default for FastRandom {
    fn default() -> Self {
        Self::new()
    }
}
