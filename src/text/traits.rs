// Token normalizer trait.
//
// The aggregator only needs "message in, cleaned tokens out". Keeping that
// behind a trait lets tests and alternative tokenizers plug into the same
// aggregation pass.

use crate::dataset::Message;

/// Turns one message into its retained, normalized tokens.
pub trait TokenNormalizer {
    /// Normalize a message. Non-text messages yield no tokens.
    fn normalize(&self, message: &Message) -> Vec<String>;
}
