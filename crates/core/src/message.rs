use serde::{Deserialize, Serialize};

/// Shown when an author has no resolvable photo thumbnail
pub const FALLBACK_AUTHOR_PHOTO: &str = "[no avatar]";
/// Shown when a renderer carries no timestamp text
pub const FALLBACK_TIMESTAMP: &str = "[no time]";
/// Shown when a renderer carries no author name
pub const FALLBACK_AUTHOR_NAME: &str = "[unknown author]";
/// Tooltip for a badge that provides none
pub const FALLBACK_BADGE_TOOLTIP: &str = "Badge";
/// Alt text for an emoji with no label and no shortcuts
pub const FALLBACK_EMOJI_ALT: &str = "emoji";

/// One renderable chat message - the output unit of a classification pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayMessage {
    /// Author avatar URL, or [`FALLBACK_AUTHOR_PHOTO`]
    pub author_photo_url: String,
    /// Timestamp display string, or [`FALLBACK_TIMESTAMP`]
    pub timestamp_text: String,
    /// Author display name, or [`FALLBACK_AUTHOR_NAME`]
    pub author_name: String,
    /// Badges that resolved a custom icon, in wire order
    #[serde(default)]
    pub badges: Vec<Badge>,
    /// Renderer family the message came from
    pub kind: MessageKind,
    /// Header lines shown above the body (membership messages only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub header_lines: Vec<Vec<MessageRun>>,
    /// Rich-text body runs
    #[serde(default)]
    pub body_runs: Vec<MessageRun>,
}

/// Which renderer family produced a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    /// Ordinary text chat message
    Plain,
    /// Channel-membership event (join, milestone)
    Membership,
}

/// Author badge whose custom icon resolved to a URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub icon_url: String,
    pub tooltip: String,
}

/// One fragment of rich text within a message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MessageRun {
    Text {
        text: String,
    },
    Emoji {
        /// Smallest thumbnail URL; `None` when no image resolved
        #[serde(skip_serializing_if = "Option::is_none")]
        image_url: Option<String>,
        alt: String,
        /// Set when no image URL resolved; renderers substitute `[:alt:]`
        #[serde(default)]
        image_unavailable: bool,
    },
}

impl MessageRun {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn emoji(image_url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::Emoji {
            image_url: Some(image_url.into()),
            alt: alt.into(),
            image_unavailable: false,
        }
    }

    /// Emoji run that failed to resolve an image URL.
    pub fn emoji_placeholder(alt: impl Into<String>) -> Self {
        Self::Emoji {
            image_url: None,
            alt: alt.into(),
            image_unavailable: true,
        }
    }
}
