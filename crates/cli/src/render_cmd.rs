use std::io::Write;

use anyhow::Result;
use chatreplay_core::{DisplayMessage, MessageKind, MessageRun, Transcript};
use clap::Args;

use crate::source::DumpSource;

/// Output format for a rendered transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Path or URL of a live-chat replay dump
    pub source: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub async fn run(args: RenderArgs) -> Result<()> {
    let raw = DumpSource::detect(&args.source).load().await?;
    let transcript = chatreplay_parser::parse_transcript(&raw)?;
    let stdout = std::io::stdout();
    render_transcript(&transcript, args.format, &mut stdout.lock())
}

/// Render a transcript in the specified format.
pub fn render_transcript(
    transcript: &Transcript,
    format: OutputFormat,
    writer: &mut dyn Write,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let text = render_text(transcript);
            write!(writer, "{text}")?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(transcript)?;
            writeln!(writer, "{json}")?;
        }
    }
    Ok(())
}

fn render_text(transcript: &Transcript) -> String {
    let mut out = String::new();
    out.push_str(&transcript.summary);
    out.push('\n');
    for message in &transcript.messages {
        out.push('\n');
        render_message(message, &mut out);
    }
    out
}

fn render_message(message: &DisplayMessage, out: &mut String) {
    out.push_str(&format!(
        "[{}] {}",
        message.timestamp_text, message.author_name
    ));
    for badge in &message.badges {
        out.push_str(&format!(" [{}]", badge.tooltip));
    }
    match message.kind {
        MessageKind::Plain => {
            let body = render_runs(&message.body_runs);
            if !body.is_empty() {
                out.push_str(": ");
                out.push_str(&body);
            }
            out.push('\n');
        }
        MessageKind::Membership => {
            out.push('\n');
            for line in &message.header_lines {
                out.push_str("  ");
                out.push_str(&render_runs(line));
                out.push('\n');
            }
            let body = render_runs(&message.body_runs);
            if !body.is_empty() {
                out.push_str("  ");
                out.push_str(&body);
                out.push('\n');
            }
        }
    }
}

fn render_runs(runs: &[MessageRun]) -> String {
    runs.iter().map(run_text).collect()
}

/// Text projection of a single run. Emoji with a resolved image render as
/// their alt text; unresolved ones render as a `[:alt:]` token. Shortcut
/// alts carry their own colons, so the wrapper trims them first.
fn run_text(run: &MessageRun) -> String {
    match run {
        MessageRun::Text { text } => text.clone(),
        MessageRun::Emoji {
            alt,
            image_unavailable,
            ..
        } => {
            if *image_unavailable {
                format!("[:{}:]", alt.trim_matches(':'))
            } else {
                alt.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatreplay_core::{Badge, SummaryCounters};

    fn plain_message() -> DisplayMessage {
        DisplayMessage {
            author_photo_url: "https://example.com/a.jpg".to_string(),
            timestamp_text: "0:05".to_string(),
            author_name: "Nia".to_string(),
            badges: vec![Badge {
                icon_url: "https://example.com/b.png".to_string(),
                tooltip: "Member (6 months)".to_string(),
            }],
            kind: MessageKind::Plain,
            header_lines: Vec::new(),
            body_runs: vec![
                MessageRun::text("let's go "),
                MessageRun::emoji("https://example.com/fire.png", "fire"),
            ],
        }
    }

    fn membership_message() -> DisplayMessage {
        DisplayMessage {
            author_photo_url: "https://example.com/k.jpg".to_string(),
            timestamp_text: "1:02".to_string(),
            author_name: "Kenji".to_string(),
            badges: Vec::new(),
            kind: MessageKind::Membership,
            header_lines: vec![
                vec![
                    MessageRun::text("Member for "),
                    MessageRun::text("11 months"),
                ],
                vec![MessageRun::text("Welcome back!")],
            ],
            body_runs: vec![
                MessageRun::text("so hyped "),
                MessageRun::emoji_placeholder(":_hype:"),
            ],
        }
    }

    fn transcript_with(messages: Vec<DisplayMessage>) -> Transcript {
        let counters = SummaryCounters {
            displayed: messages.len() as u64,
            skipped_ticker: 1,
            ..Default::default()
        };
        Transcript::new(messages, counters)
    }

    #[test]
    fn test_text_output_starts_with_summary_line() {
        let transcript = transcript_with(vec![plain_message()]);
        let mut buf = Vec::new();
        render_transcript(&transcript, OutputFormat::Text, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Displayed 1 messages (Skipped: 1 ticker)\n"));
    }

    #[test]
    fn test_plain_message_renders_on_one_line() {
        let transcript = transcript_with(vec![plain_message()]);
        let mut buf = Vec::new();
        render_transcript(&transcript, OutputFormat::Text, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\n[0:05] Nia [Member (6 months)]: let's go fire\n"));
    }

    #[test]
    fn test_membership_message_indents_header_and_body() {
        let transcript = transcript_with(vec![membership_message()]);
        let mut buf = Vec::new();
        render_transcript(&transcript, OutputFormat::Text, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains(
            "[1:02] Kenji\n  Member for 11 months\n  Welcome back!\n  so hyped [:_hype:]\n"
        ));
    }

    #[test]
    fn test_unresolved_emoji_renders_bracketed_token() {
        let runs = vec![MessageRun::emoji_placeholder("chat")];
        assert_eq!(render_runs(&runs), "[:chat:]");

        // Shortcut alts keep their colons in the model; the token must not
        // double them.
        let runs = vec![MessageRun::emoji_placeholder(":_hype:")];
        assert_eq!(render_runs(&runs), "[:_hype:]");
    }

    #[test]
    fn test_plain_message_without_body_has_no_colon() {
        let mut message = plain_message();
        message.body_runs.clear();
        message.badges.clear();
        let mut out = String::new();
        render_message(&message, &mut out);
        assert_eq!(out, "[0:05] Nia\n");
    }

    #[test]
    fn test_json_output_is_the_serialized_transcript() {
        let transcript = transcript_with(vec![plain_message()]);
        let mut buf = Vec::new();
        render_transcript(&transcript, OutputFormat::Json, &mut buf).unwrap();
        let parsed: Transcript = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, transcript);
    }
}
