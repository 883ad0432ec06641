//! Fast random value generation for load-test data injection.
//!
//! This crate provides [`FastRandom`], a non-thread-safe random value
//! generator for single-threaded data-generation code. Load injectors that
//! build millions of fixture rows spend a surprising amount of time inside a
//! synchronized global random source; `FastRandom` avoids that contention by
//! giving each execution context its own generator with no locking at all.
//!
//! Two amortization tricks carry the throughput:
//!
//! - **Seed pool**: a buffer of random alphanumeric characters is drawn once
//!   at construction. Alphanumeric strings are then served as borrowed
//!   slices of that pool at a random offset, so producing a string costs one
//!   bounded integer draw instead of one draw per character.
//! - **Bit cache**: booleans consume single bits from a cached 63-bit draw,
//!   so the underlying generator runs once per 63 booleans.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────┐
//! │         FastRandom          │
//! │                             │
//! │  - rng (StdRng)             │
//! │  - pool  (10k alnum chars)  │──▶ string / fixed_len_string / opt_string
//! │  - bool bit cache (63 bits) │──▶ bool / opt_* presence coins
//! │  - Normal(3000, 2500)       │──▶ size
//! └─────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use loadtest_random::FastRandom;
//!
//! let mut random = FastRandom::new();
//!
//! let order_id = random.random_id("order");
//! assert!(order_id.starts_with("order_"));
//!
//! // Borrowed slice of the internal pool; copy it to retain it.
//! let name = random.string(8, 16).unwrap().to_owned();
//! assert!(name.len() >= 8 && name.len() < 16);
//!
//! if let Some(size) = random.size() {
//!     assert!(size > 0);
//! }
//! ```
//!
//! # Caveats
//!
//! Pooled strings returned by [`string`](FastRandom::string) and
//! [`fixed_len_string`](FastRandom::fixed_len_string) overlap in content
//! across calls and are not independent of each other. That trade-off is the
//! point of the pool and is fine for fixture data; it makes the generator
//! unsuitable for anything security-sensitive. Use one instance per thread
//! or task; the generator is intentionally `&mut self` everywhere and has no
//! internal synchronization.

pub mod error;
pub mod generator;
mod generators;

// Re-exports for convenience
pub use error::GeneratorError;
pub use generator::{FastRandom, DEFAULT_POOL_SIZE, MIN_POOL_SIZE};
