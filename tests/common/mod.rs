use rand::Rng;
use rand::distr::Alphanumeric;

/// Generate a random token body for load-style tests
#[allow(dead_code)]
pub fn random_token_body(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Opt-in tracing output for debugging test runs (RUST_LOG=debug)
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Decoder for test tokens of the form "body:expiration"
#[allow(dead_code)]
pub fn suffix_decoder(token: &str) -> Option<u64> {
    token.rsplit(':').next()?.parse().ok()
}
