// Dataset loading: the message column of a delimited file.

pub mod loader;
pub mod message;

pub use loader::{load_messages, read_messages, Dataset};
pub use message::Message;
