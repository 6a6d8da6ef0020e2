use chatreplay_core::{
    Badge, DisplayMessage, FALLBACK_AUTHOR_NAME, FALLBACK_AUTHOR_PHOTO, FALLBACK_BADGE_TOOLTIP,
    FALLBACK_EMOJI_ALT, FALLBACK_TIMESTAMP, MessageKind, MessageRun, SummaryCounters,
};
use serde_json::Value;

use crate::wire::{
    ChatAction, ChatItem, MessageRenderer, RawBadge, RawEmoji, RawImage, RawRun, RichText,
};

/// Classify a flat action sequence into renderable messages plus counters.
///
/// Pure pass over the input: each action increments exactly one counter, so
/// the counters always sum to the number of actions given. Recognized items
/// become messages in source order; everything else only counts.
pub fn classify_actions(actions: Vec<Value>) -> (Vec<DisplayMessage>, SummaryCounters) {
    let mut messages = Vec::new();
    let mut counters = SummaryCounters::default();

    for value in actions {
        let action = match serde_json::from_value::<ChatAction>(value) {
            Ok(action) => action,
            Err(e) => {
                tracing::debug!("Skipping undecodable chat action: {}", e);
                counters.skipped_unhandled_action += 1;
                continue;
            }
        };

        match action {
            ChatAction::AddChatItem { add } => match add.item {
                Some(ChatItem::Text { renderer }) => {
                    messages.push(build_message(MessageKind::Plain, renderer));
                    counters.displayed += 1;
                }
                Some(ChatItem::Membership { renderer }) => {
                    messages.push(build_message(MessageKind::Membership, renderer));
                    counters.displayed += 1;
                }
                Some(ChatItem::Unhandled(_)) => {
                    counters.skipped_unhandled_item += 1;
                }
                None => {
                    tracing::warn!("add-chat-item action without an item payload");
                    counters.skipped_unhandled_action += 1;
                }
            },
            ChatAction::AddTickerItem { .. } => {
                counters.skipped_ticker += 1;
            }
            ChatAction::Other(_) => {
                counters.skipped_unhandled_action += 1;
            }
        }
    }

    (messages, counters)
}

/// Project a renderer payload onto the display model.
///
/// Field fallbacks apply independently; a sparse payload still yields a
/// complete record.
fn build_message(kind: MessageKind, renderer: MessageRenderer) -> DisplayMessage {
    let author_photo_url = renderer
        .author_photo
        .and_then(RawImage::into_first_url)
        .unwrap_or_else(|| FALLBACK_AUTHOR_PHOTO.to_string());
    let timestamp_text = renderer
        .timestamp_text
        .and_then(|t| t.simple_text)
        .unwrap_or_else(|| FALLBACK_TIMESTAMP.to_string());
    let author_name = renderer
        .author_name
        .and_then(|n| n.simple_text)
        .unwrap_or_else(|| FALLBACK_AUTHOR_NAME.to_string());
    let badges = collect_badges(renderer.author_badges);

    let mut header_lines = Vec::new();
    if kind == MessageKind::Membership {
        if let Some(primary) = renderer.header_primary_text {
            if !primary.runs.is_empty() {
                header_lines.push(decompose_runs(primary));
            }
        }
        if let Some(subtext) = renderer.header_subtext.and_then(|s| s.simple_text) {
            header_lines.push(vec![MessageRun::text(subtext)]);
        }
    }

    let body_runs = renderer.message.map(decompose_runs).unwrap_or_default();

    DisplayMessage {
        author_photo_url,
        timestamp_text,
        author_name,
        badges,
        kind,
        header_lines,
        body_runs,
    }
}

/// Keep badges whose custom icon resolved to a non-empty URL.
fn collect_badges(badges: Vec<RawBadge>) -> Vec<Badge> {
    badges
        .into_iter()
        .filter_map(|badge| {
            let badge_renderer = badge.live_chat_author_badge_renderer?;
            let icon_url = badge_renderer
                .custom_thumbnail
                .and_then(RawImage::into_first_url)
                .filter(|url| !url.is_empty())?;
            Some(Badge {
                icon_url,
                tooltip: badge_renderer
                    .tooltip
                    .unwrap_or_else(|| FALLBACK_BADGE_TOOLTIP.to_string()),
            })
        })
        .collect()
}

/// Turn wire runs into display runs. Shared by message bodies and
/// membership headers. Unknown run kinds drop out silently.
fn decompose_runs(rich: RichText) -> Vec<MessageRun> {
    rich.runs
        .into_iter()
        .filter_map(|run| match run {
            RawRun::Text { text } => Some(MessageRun::text(text)),
            RawRun::Emoji { emoji } => Some(map_emoji(emoji)),
            RawRun::Unknown(_) => None,
        })
        .collect()
}

/// Resolve an emoji reference to an image run, degrading to a placeholder
/// run when no thumbnail URL exists.
///
/// Alt text preference: accessibility label, first shortcut alias, then the
/// literal `emoji`.
fn map_emoji(emoji: RawEmoji) -> MessageRun {
    let RawEmoji { shortcuts, image } = emoji;
    let (image_url, label) = match image {
        Some(RawImage {
            thumbnails,
            accessibility,
        }) => (
            thumbnails.into_iter().find_map(|t| t.url),
            accessibility
                .and_then(|a| a.accessibility_data)
                .and_then(|d| d.label),
        ),
        None => (None, None),
    };

    let alt = label
        .or_else(|| shortcuts.into_iter().next())
        .unwrap_or_else(|| FALLBACK_EMOJI_ALT.to_string());

    match image_url {
        Some(url) => MessageRun::emoji(url, alt),
        None => MessageRun::emoji_placeholder(alt),
    }
}
