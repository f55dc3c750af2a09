use crate::error::{FilterError, Result};
use crate::hash::{HashFunction, default_hash_function};
use derive_builder::Builder;
use std::str::FromStr;

/// Granularity of one ring slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryUnit {
    Hour,
    Day,
}

impl ExpiryUnit {
    /// Duration covered by one slice, in seconds.
    pub fn seconds(&self) -> u64 {
        match self {
            ExpiryUnit::Hour => 3600,
            ExpiryUnit::Day => 86400,
        }
    }
}

impl FromStr for ExpiryUnit {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "h" | "hour" => Ok(ExpiryUnit::Hour),
            "d" | "day" => Ok(ExpiryUnit::Day),
            other => Err(FilterError::UnsupportedUnit(other.to_string())),
        }
    }
}

/// Configuration for the rotating filter.
#[derive(Clone, Debug, Builder)]
#[builder(pattern = "owned")]
pub struct RotatingFilterConfig {
    /// Expected number of distinct tokens over the whole retention window
    #[builder(default = "1_000_000")]
    pub capacity: usize,

    /// Target false positive rate (0.0 to 1.0)
    #[builder(default = "0.01")]
    pub false_positive_rate: f64,

    /// Granularity of one slice
    #[builder(default = "ExpiryUnit::Hour")]
    pub unit: ExpiryUnit,

    /// Units of retention beyond the current one; the ring holds
    /// `duration + 1` slices
    #[builder(default = "3")]
    pub duration: usize,

    /// Hash function used by the Bloom slices
    #[builder(default = "default_hash_function")]
    pub hash_function: HashFunction,
}

impl RotatingFilterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(FilterError::ZeroCapacity);
        }
        if self.false_positive_rate <= 0.0 || self.false_positive_rate >= 1.0 {
            return Err(FilterError::InvalidFalsePositiveRate {
                rate: self.false_positive_rate,
            });
        }
        Ok(())
    }

    /// Expected elements per slice. With `duration == 0` the ring is a
    /// single always-current slice sized for the full capacity.
    pub fn capacity_per_slice(&self) -> usize {
        (self.capacity / self.duration.max(1)).max(1)
    }
}
