use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A subject the user is learning about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub id: i32,
    pub text: String,
    pub date_added: DateTime<FixedOffset>,
}
