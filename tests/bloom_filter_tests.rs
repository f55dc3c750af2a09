use rotating_bloom_rs::{
    ApproximateSet, BitVectorBloom, default_hash_function,
};

mod common;
use common::random_token_body;

fn bloom(capacity: usize, fpr: f64) -> BitVectorBloom {
    BitVectorBloom::new(capacity, fpr, default_hash_function)
        .expect("Failed to create BitVectorBloom")
}

#[test]
fn test_no_false_negatives() {
    let mut filter = bloom(1000, 0.01);
    let items: Vec<String> = (0..500).map(|_| random_token_body(32)).collect();

    for item in &items {
        filter.add(item.as_bytes()).unwrap();
    }
    for item in &items {
        assert!(
            filter.contains(item.as_bytes()).unwrap(),
            "inserted item must be reported present"
        );
    }
}

#[test]
fn test_false_positive_rate_within_bounds() {
    const FPR: f64 = 0.05;
    let mut filter = bloom(10_000, FPR);

    let inserted: Vec<String> =
        (0..5_000).map(|_| random_token_body(24)).collect();
    for item in &inserted {
        filter.add(item.as_bytes()).unwrap();
    }

    let num_tests = 2_000;
    let false_positives = (0..num_tests)
        .filter(|_| {
            // 48-char probes virtually never collide with the 24-char inserts
            let probe = random_token_body(48);
            filter.contains(probe.as_bytes()).unwrap()
        })
        .count();

    let observed = false_positives as f64 / num_tests as f64;
    assert!(
        observed <= FPR * 1.5,
        "False positive rate is too high: observed {observed}, expected {FPR}"
    );
}

#[test]
fn test_saturation_raises_fpr() {
    const FPR: f64 = 0.1;
    let mut filter = bloom(100, FPR);

    // Double the capacity; the filter degrades but never lies negatively.
    let items: Vec<String> = (0..200).map(|_| random_token_body(16)).collect();
    for item in &items {
        filter.add(item.as_bytes()).unwrap();
        assert!(filter.contains(item.as_bytes()).unwrap());
    }

    let false_queries = (0..200)
        .filter(|_| {
            let probe = random_token_body(40);
            filter.contains(probe.as_bytes()).unwrap()
        })
        .count();
    let observed = false_queries as f64 / 200.0;
    assert!(
        observed >= FPR,
        "Saturated filter should exceed nominal FPR: observed {observed}"
    );
}

#[test]
fn test_clear_makes_fresh_filter() {
    let mut filter = bloom(1000, 0.01);
    for i in 0..100 {
        filter.add(format!("item_{i}").as_bytes()).unwrap();
    }
    assert_eq!(filter.estimated_count(), 100);

    filter.clear().unwrap();
    assert_eq!(filter.estimated_count(), 0);
    for i in 0..100 {
        assert!(!filter.contains(format!("item_{i}").as_bytes()).unwrap());
    }
}

#[test]
fn test_derived_parameters() {
    let filter = bloom(1000, 0.01);
    assert_eq!(filter.capacity(), 1000);
    assert_eq!(filter.false_positive_rate(), 0.01);
    // ~9.6 bits per element at 1% FPR
    assert!(filter.bit_vector_size() > 9000);
    assert!(filter.num_hashes() >= 5);
}
