//! Parsing and normalization pipeline for live-chat replay dumps.
//!
//! Turns the raw text of a chat-replay JSON dump into renderable messages
//! plus per-category skip counts. Three passes, each pure over its input:
//! payload normalization ([`payload::parse_payload`]), action flattening
//! ([`extract::extract_actions`]), and classification
//! ([`classify::classify_actions`]). [`parse_transcript`] runs all three and
//! assembles the [`Transcript`].

pub mod classify;
pub mod extract;
pub mod payload;
mod wire;

use std::path::Path;

use chatreplay_core::{ParseError, Transcript};

pub use payload::PayloadShape;

/// Run the full pipeline over raw dump text.
pub fn parse_transcript(raw: &str) -> Result<Transcript, ParseError> {
    let (items, shape) = payload::parse_payload(raw)?;
    tracing::debug!("Parsed chat payload: {} top-level items ({:?})", items.len(), shape);
    let actions = extract::extract_actions(items)?;
    let (messages, counters) = classify::classify_actions(actions);
    Ok(Transcript::new(messages, counters))
}

/// Run the full pipeline over a dump file. Read failures surface as
/// [`ParseError::Io`].
pub fn parse_transcript_file(path: &Path) -> Result<Transcript, ParseError> {
    let raw = std::fs::read_to_string(path)?;
    parse_transcript(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatreplay_core::MessageKind;

    #[test]
    fn test_pipeline_end_to_end() {
        let raw = r#"[
            {"replayChatItemAction": {"actions": [
                {"addChatItemAction": {"item": {"liveChatTextMessageRenderer": {
                    "authorName": {"simpleText": "viewer"},
                    "message": {"runs": [{"text": "hi"}]}
                }}}},
                {"addLiveChatTickerItemAction": {}},
                {"addChatItemAction": {"item": {"liveChatPlaceholderItemRenderer": {
                    "id": "placeholder"
                }}}}
            ]}}
        ]"#;
        let transcript = parse_transcript(raw).unwrap();
        assert_eq!(transcript.messages.len(), 1);
        assert_eq!(transcript.messages[0].kind, MessageKind::Plain);
        assert_eq!(transcript.counters.displayed, 1);
        assert_eq!(transcript.counters.skipped_ticker, 1);
        assert_eq!(transcript.counters.skipped_unhandled_item, 1);
        assert_eq!(
            transcript.summary,
            "Displayed 1 messages (Skipped: 1 ticker, 1 unhandled item types)"
        );
    }

    #[test]
    fn test_pipeline_empty_input() {
        assert!(matches!(
            parse_transcript("   "),
            Err(ParseError::EmptyInput)
        ));
    }

    #[test]
    fn test_pipeline_items_without_actions() {
        let transcript = parse_transcript(r#"{"unrelated": true}"#).unwrap();
        assert!(transcript.messages.is_empty());
        assert_eq!(transcript.counters.total_actions(), 0);
        assert_eq!(transcript.summary, "No chat actions found");
    }

    #[test]
    fn test_missing_file_surfaces_io_error() {
        let err = parse_transcript_file(Path::new("/nonexistent/replay.json")).unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
    }
}
