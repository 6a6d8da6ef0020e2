pub mod error;
pub mod message;
pub mod summary;
pub mod transcript;

pub use error::ParseError;
pub use message::*;
pub use summary::SummaryCounters;
pub use transcript::Transcript;
