use fnv::FnvHasher;
use murmur3::murmur3_32;
use std::hash::Hasher;
use std::io::Cursor;

/// A type alias for the hash function used by the Bloom slices.
///
/// Takes the item bytes, the number of hashes to compute, and the size of
/// the bit vector; returns one index per hash, each within `[0, capacity)`.
pub type HashFunction = fn(&[u8], usize, usize) -> Vec<u32>;

pub(crate) fn hash_murmur32(key: &[u8]) -> u32 {
    let mut cursor = Cursor::new(key);
    murmur3_32(&mut cursor, 0).expect("Failed to compute Murmur3 hash")
}

pub(crate) fn hash_fnv32(key: &[u8]) -> u32 {
    let mut hasher = FnvHasher::default();
    hasher.write(key);
    hasher.finish() as u32
}

/// Double hashing: h1 + i * h2, folded into the bit vector size.
pub fn default_hash_function(
    item: &[u8],
    num_hashes: usize,
    capacity: usize,
) -> Vec<u32> {
    let h1 = hash_murmur32(item);
    let h2 = hash_fnv32(item);
    (0..num_hashes)
        .map(|i| h1.wrapping_add((i as u32).wrapping_mul(h2)) % capacity as u32)
        .collect()
}

pub fn optimal_bit_vector_size(n: usize, fpr: f64) -> usize {
    let ln2 = std::f64::consts::LN_2;
    ((-(n as f64) * fpr.ln()) / (ln2 * ln2)).ceil() as usize
}

pub fn optimal_num_hashes(n: usize, m: usize) -> usize {
    ((m as f64 / n as f64) * std::f64::consts::LN_2).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_within_bounds() {
        let indices = default_hash_function(b"some token", 7, 1024);
        assert_eq!(indices.len(), 7);
        assert!(indices.iter().all(|&i| i < 1024));
    }

    #[test]
    fn test_hashing_is_deterministic() {
        let a = default_hash_function(b"token", 5, 4096);
        let b = default_hash_function(b"token", 5, 4096);
        assert_eq!(a, b);
    }

    #[test]
    fn test_optimal_sizing() {
        let m = optimal_bit_vector_size(1000, 0.01);
        // ~9.6 bits per element for 1% FPR
        assert!(m > 9000 && m < 10500);
        let k = optimal_num_hashes(1000, m);
        assert!((5..=8).contains(&k));
    }
}
