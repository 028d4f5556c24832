//! Response selection trait

/// Picks one reply among an intent's candidate responses
///
/// Implementations must be safe to share across request handlers.
pub trait ResponseSelector: Send + Sync {
    /// Choose one of `responses`; `None` only when the slice is empty.
    fn select<'a>(&self, responses: &'a [String]) -> Option<&'a str>;
}
