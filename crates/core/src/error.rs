use thiserror::Error;

/// Terminal failures of a chat-dump processing pass.
///
/// Per-action anomalies (missing item payloads, unresolvable emoji images)
/// never surface here; they are absorbed by field fallbacks and reported
/// through skip counters instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    #[error("chat dump is empty")]
    EmptyInput,
    #[error("malformed chat dump JSON: {detail}")]
    MalformedJson { detail: String },
    #[error("unexpected shape: {context} is not a JSON array")]
    InternalShape { context: &'static str },
    #[error("failed to read chat dump: {0}")]
    Io(#[from] std::io::Error),
}
