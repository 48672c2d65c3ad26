use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::enums::Speaker;

/// One entry in the intake transcript. Append-only, rendered in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationMessage {
    pub speaker: Speaker,
    pub text: String,
    pub sent_at: NaiveDateTime,
}

impl ConversationMessage {
    pub fn patient(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Patient,
            text: text.into(),
            sent_at: chrono::Local::now().naive_local(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
            sent_at: chrono::Local::now().naive_local(),
        }
    }
}
