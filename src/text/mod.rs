// Text normalization: stop words and the message tokenizer.

pub mod normalize;
pub mod stopwords;
pub mod traits;

pub use normalize::Normalizer;
pub use stopwords::{StopWordSource, StopWords};
pub use traits::TokenNormalizer;
