//! Time-bucketed rotating Bloom filter for tracking tokens until they expire.
//!
//! Tracks tokens (session ids, JWTs) whose validity ends at an expiration
//! timestamp, answering "have I seen this token and is it still within the
//! retention window?" with bounded memory, a tunable false-positive rate,
//! and no false negatives for tokens inserted before expiry.
//!
//! HowTo:
//!    * Slices: the filter owns a ring of `duration + 1` Bloom sub-filters,
//!      each covering one time unit (an hour or a day).
//!    * Placement: a token is inserted into the slice whose window contains
//!      its expiration timestamp, so it lives exactly as long as it should
//!      (to bucket granularity).
//!    * Rotation: on every `add` the ring first expires slices whose whole
//!      window has elapsed, lazily, no background timer. An idle gap
//!      longer than the ring span clears everything in one bounded pass.
//!
//! Query (`has`) scans all slices and short-circuits on the first hit; it
//! never rotates. Tokens expiring beyond the retention horizon are clamped
//! into the newest slice and logged at warn level; tokens with no usable
//! expiration are absorbed as a no-op.
//!
//! Token decoding and the wall clock are seams (`TokenDecoder`, `Clock`)
//! so callers plug in their JWT library and tests drive rotation with a
//! synthetic clock.

mod bloom;
mod clock;
mod config;
mod decoder;
mod error;
mod filter;
mod hash;

pub use bloom::{ApproximateSet, BitVectorBloom};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{
    ExpiryUnit, RotatingFilterConfig, RotatingFilterConfigBuilder,
    RotatingFilterConfigBuilderError,
};
pub use decoder::TokenDecoder;
pub use error::{FilterError, Result};
pub use filter::RotatingWindowFilter;
pub use hash::{
    HashFunction, default_hash_function, optimal_bit_vector_size,
    optimal_num_hashes,
};
