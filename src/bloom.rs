//! Fixed-capacity approximate membership set backing each ring slice.

use crate::error::{FilterError, Result};
use crate::hash::{HashFunction, optimal_bit_vector_size, optimal_num_hashes};
use bitvec::{bitvec, order::Lsb0, vec::BitVec};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Approximate membership set: "possibly present" / "definitely absent",
/// no false negatives, tunable false-positive rate.
pub trait ApproximateSet {
    fn add(&mut self, item: &[u8]) -> Result<()>;
    fn contains(&self, item: &[u8]) -> Result<bool>;
    fn clear(&mut self) -> Result<()>;
}

/// Bit-vector Bloom filter, one per time slice.
#[derive(Debug)]
pub struct BitVectorBloom {
    capacity: usize,
    false_positive_rate: f64,
    hash_function: HashFunction,
    bit_vector_size: usize,
    num_hashes: usize,
    bits: BitVec<usize, Lsb0>,
    insert_count: AtomicUsize,
}

impl BitVectorBloom {
    pub fn new(
        capacity: usize,
        false_positive_rate: f64,
        hash_function: HashFunction,
    ) -> Result<Self> {
        if capacity == 0 {
            return Err(FilterError::ZeroCapacity);
        }
        if false_positive_rate <= 0.0 || false_positive_rate >= 1.0 {
            return Err(FilterError::InvalidFalsePositiveRate {
                rate: false_positive_rate,
            });
        }

        let bit_vector_size =
            optimal_bit_vector_size(capacity, false_positive_rate);
        let num_hashes = optimal_num_hashes(capacity, bit_vector_size);

        Ok(Self {
            capacity,
            false_positive_rate,
            hash_function,
            bit_vector_size,
            num_hashes,
            bits: bitvec![0; bit_vector_size],
            insert_count: AtomicUsize::new(0),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn false_positive_rate(&self) -> f64 {
        self.false_positive_rate
    }

    pub fn bit_vector_size(&self) -> usize {
        self.bit_vector_size
    }

    pub fn num_hashes(&self) -> usize {
        self.num_hashes
    }

    /// Number of inserts since creation or the last clear.
    pub fn estimated_count(&self) -> usize {
        self.insert_count.load(Ordering::Relaxed)
    }
}

impl ApproximateSet for BitVectorBloom {
    fn add(&mut self, item: &[u8]) -> Result<()> {
        let indices = (self.hash_function)(
            item,
            self.num_hashes,
            self.bit_vector_size,
        );

        for idx in indices {
            let idx = idx as usize;
            if idx >= self.bit_vector_size {
                return Err(FilterError::IndexOutOfBounds {
                    index: idx,
                    capacity: self.bit_vector_size,
                });
            }
            self.bits.set(idx, true);
        }

        self.insert_count.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn contains(&self, item: &[u8]) -> Result<bool> {
        let indices = (self.hash_function)(
            item,
            self.num_hashes,
            self.bit_vector_size,
        );

        for idx in indices {
            let idx = idx as usize;
            if idx >= self.bit_vector_size {
                return Err(FilterError::IndexOutOfBounds {
                    index: idx,
                    capacity: self.bit_vector_size,
                });
            }
            if !self.bits[idx] {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn clear(&mut self) -> Result<()> {
        self.bits.fill(false);
        self.insert_count.store(0, Ordering::Relaxed);
        Ok(())
    }
}
