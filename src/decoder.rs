//! Token decoding seam.
//!
//! The filter never inspects tokens itself; the caller supplies a decoder
//! that extracts the expiration claim (unix seconds). Malformed tokens and
//! tokens without an expiration are represented as `None`, never as an
//! error, so `add` can absorb them as a no-op.

/// Extracts the expiration timestamp from an opaque token string.
pub trait TokenDecoder {
    /// Returns the expiration in unix seconds, or `None` when the token is
    /// malformed or carries no expiration.
    fn decode(&self, token: &str) -> Option<u64>;
}

/// Any `Fn(&str) -> Option<u64>` closure works as a decoder, e.g. an
/// unverified JWT `exp` claim lookup from the caller's JWT library.
impl<F> TokenDecoder for F
where
    F: Fn(&str) -> Option<u64>,
{
    fn decode(&self, token: &str) -> Option<u64> {
        self(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_a_decoder() {
        let decoder = |token: &str| token.rsplit(':').next()?.parse().ok();
        assert_eq!(decoder.decode("session-abc:1700000000"), Some(1700000000));
        assert_eq!(decoder.decode("no-expiration"), None);
    }
}
