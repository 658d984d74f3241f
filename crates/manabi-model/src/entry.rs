use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Number of characters an entry keeps in list views before it is cut off.
pub const PREVIEW_CHARS: usize = 50;

/// A timestamped note belonging to exactly one topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: i32,
    pub topic_id: i32,
    pub text: String,
    pub date_added: DateTime<FixedOffset>,
}

impl Entry {
    /// Short display form of the entry text.
    pub fn preview(&self) -> String {
        preview(&self.text)
    }
}

/// Text below [`PREVIEW_CHARS`] characters is returned whole, anything at or
/// above it is cut to the first [`PREVIEW_CHARS`] characters plus `...`.
/// Lengths are counted in characters, not bytes.
pub fn preview(text: &str) -> String {
    if text.chars().count() >= PREVIEW_CHARS {
        let cut: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{cut}...")
    } else {
        text.to_owned()
    }
}
