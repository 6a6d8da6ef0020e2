use serde::{Deserialize, Serialize};

/// Per-category outcome counts for one classification pass.
///
/// Each action processed increments exactly one counter, so the four fields
/// always sum to the number of actions seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCounters {
    /// Actions rendered as a `DisplayMessage`
    pub displayed: u64,
    /// Ticker-item actions, dropped silently
    pub skipped_ticker: u64,
    /// Add-chat-item actions whose renderer kind is not rendered
    pub skipped_unhandled_item: u64,
    /// Actions of an unrecognized kind, or with a missing item payload
    pub skipped_unhandled_action: u64,
}

impl SummaryCounters {
    /// Total actions processed in the pass.
    pub fn total_actions(&self) -> u64 {
        self.displayed + self.total_skipped()
    }

    /// Actions that produced no message.
    pub fn total_skipped(&self) -> u64 {
        self.skipped_ticker + self.skipped_unhandled_item + self.skipped_unhandled_action
    }

    /// One-line human-readable account of the pass.
    ///
    /// Zero actions reads differently from actions-present-but-none-displayable,
    /// and the skip breakdown lists only nonzero categories.
    pub fn summary_line(&self) -> String {
        if self.total_actions() == 0 {
            return "No chat actions found".to_string();
        }

        let mut line = if self.displayed == 0 {
            "Processed chat data but found no displayable messages".to_string()
        } else {
            format!("Displayed {} messages", self.displayed)
        };

        let skipped = self.skip_breakdown();
        if !skipped.is_empty() {
            line.push_str(&format!(" (Skipped: {})", skipped.join(", ")));
        }
        line
    }

    fn skip_breakdown(&self) -> Vec<String> {
        [
            (self.skipped_ticker, "ticker"),
            (self.skipped_unhandled_item, "unhandled item types"),
            (self.skipped_unhandled_action, "unhandled action types"),
        ]
        .into_iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, label)| format!("{count} {label}"))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pass_summary() {
        let counters = SummaryCounters::default();
        assert_eq!(counters.total_actions(), 0);
        assert_eq!(counters.summary_line(), "No chat actions found");
    }

    #[test]
    fn test_displayed_with_skip_breakdown() {
        let counters = SummaryCounters {
            displayed: 1,
            skipped_ticker: 1,
            skipped_unhandled_item: 1,
            skipped_unhandled_action: 0,
        };
        assert_eq!(
            counters.summary_line(),
            "Displayed 1 messages (Skipped: 1 ticker, 1 unhandled item types)"
        );
    }

    #[test]
    fn test_no_breakdown_when_nothing_skipped() {
        let counters = SummaryCounters {
            displayed: 42,
            ..Default::default()
        };
        assert_eq!(counters.summary_line(), "Displayed 42 messages");
    }

    #[test]
    fn test_processed_but_nothing_displayable() {
        let counters = SummaryCounters {
            displayed: 0,
            skipped_ticker: 0,
            skipped_unhandled_item: 0,
            skipped_unhandled_action: 3,
        };
        assert_eq!(
            counters.summary_line(),
            "Processed chat data but found no displayable messages (Skipped: 3 unhandled action types)"
        );
    }

    #[test]
    fn test_breakdown_keeps_category_order() {
        let counters = SummaryCounters {
            displayed: 2,
            skipped_ticker: 4,
            skipped_unhandled_item: 5,
            skipped_unhandled_action: 6,
        };
        assert_eq!(
            counters.summary_line(),
            "Displayed 2 messages (Skipped: 4 ticker, 5 unhandled item types, 6 unhandled action types)"
        );
        assert_eq!(counters.total_actions(), 17);
        assert_eq!(counters.total_skipped(), 15);
    }
}
