use crate::message::DisplayMessage;
use crate::summary::SummaryCounters;
use serde::{Deserialize, Serialize};

/// Completed result of one pipeline pass over a chat dump
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    /// Renderable messages in source-action order
    pub messages: Vec<DisplayMessage>,
    /// Outcome counts for every action processed
    pub counters: SummaryCounters,
    /// Summary line rendered from the counters
    pub summary: String,
}

impl Transcript {
    pub fn new(messages: Vec<DisplayMessage>, counters: SummaryCounters) -> Self {
        let summary = counters.summary_line();
        Self {
            messages,
            counters,
            summary,
        }
    }
}
