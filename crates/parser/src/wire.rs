//! Raw shapes of the chat-dump wire format.
//!
//! The format is versionless and loosely specified, so every field is
//! optional and each tagged position carries a catch-all arm; decoding an
//! action can classify it as unhandled but never panics.

use serde::Deserialize;
use serde_json::Value;

// ── Action shapes ────────────────────────────────────────────────────────────

/// One chat-update action, keyed by which wrapper field carries a payload.
///
/// Variants are tried most-specific-first; anything unrecognized lands in
/// `Other`. Rendering new action kinds later means adding variants here, not
/// sniffing fields downstream.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ChatAction {
    AddChatItem {
        #[serde(rename = "addChatItemAction")]
        add: AddChatItemAction,
    },
    AddTickerItem {
        #[allow(dead_code)]
        #[serde(rename = "addLiveChatTickerItemAction")]
        ticker: TickerAction,
    },
    Other(#[allow(dead_code)] Value),
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddChatItemAction {
    #[serde(default)]
    pub(crate) item: Option<ChatItem>,
}

/// Ticker payload. Unread, but must be map-shaped: a null wrapper is not a
/// ticker item and falls through to `Other`.
#[derive(Debug, Deserialize)]
pub(crate) struct TickerAction {
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) item: Option<Value>,
}

/// One chat item, keyed by its renderer kind.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ChatItem {
    Text {
        #[serde(rename = "liveChatTextMessageRenderer")]
        renderer: MessageRenderer,
    },
    Membership {
        #[serde(rename = "liveChatMembershipItemRenderer")]
        renderer: MessageRenderer,
    },
    Unhandled(#[allow(dead_code)] Value),
}

// ── Renderer payload ─────────────────────────────────────────────────────────

/// Field set shared by the rendered item kinds.
///
/// Text messages use `message`; membership items add the two header fields.
/// Absent fields fall back at classification time, never here.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MessageRenderer {
    #[serde(default)]
    pub(crate) author_photo: Option<RawImage>,
    #[serde(default)]
    pub(crate) timestamp_text: Option<SimpleText>,
    #[serde(default)]
    pub(crate) author_name: Option<SimpleText>,
    #[serde(default)]
    pub(crate) author_badges: Vec<RawBadge>,
    #[serde(default)]
    pub(crate) message: Option<RichText>,
    #[serde(default)]
    pub(crate) header_primary_text: Option<RichText>,
    #[serde(default)]
    pub(crate) header_subtext: Option<SimpleText>,
}

/// `{"simpleText": "..."}` wrapper
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SimpleText {
    #[serde(default)]
    pub(crate) simple_text: Option<String>,
}

/// `{"runs": [...]}` wrapper
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RichText {
    #[serde(default)]
    pub(crate) runs: Vec<RawRun>,
}

// ── Rich-text runs ───────────────────────────────────────────────────────────

/// One wire run: literal text first, then emoji, then whatever newer clients
/// emit (dropped by the classifier).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawRun {
    Text { text: String },
    Emoji { emoji: RawEmoji },
    Unknown(#[allow(dead_code)] Value),
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawEmoji {
    #[serde(default)]
    pub(crate) shortcuts: Vec<String>,
    #[serde(default)]
    pub(crate) image: Option<RawImage>,
}

/// Thumbnail list plus optional accessibility metadata, ordered smallest
/// first on the wire.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawImage {
    #[serde(default)]
    pub(crate) thumbnails: Vec<RawThumbnail>,
    #[serde(default)]
    pub(crate) accessibility: Option<RawAccessibility>,
}

impl RawImage {
    /// First thumbnail that actually carries a URL.
    pub(crate) fn into_first_url(self) -> Option<String> {
        self.thumbnails.into_iter().find_map(|t| t.url)
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawThumbnail {
    #[serde(default)]
    pub(crate) url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawAccessibility {
    #[serde(default)]
    pub(crate) accessibility_data: Option<RawAccessibilityData>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawAccessibilityData {
    #[serde(default)]
    pub(crate) label: Option<String>,
}

// ── Badges ───────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawBadge {
    #[serde(default)]
    pub(crate) live_chat_author_badge_renderer: Option<BadgeRenderer>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BadgeRenderer {
    #[serde(default)]
    pub(crate) custom_thumbnail: Option<RawImage>,
    #[serde(default)]
    pub(crate) tooltip: Option<String>,
}
