use serde::{Deserialize, Serialize};

use crate::values::Timestamp;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsProvider {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsArticle {
    /// 0 = plain text or html, 1 = binary data (base64)
    pub article_type: i32,
    pub article_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalNews {
    pub time: Timestamp,
    pub provider_code: String,
    pub article_id: String,
    pub headline: String,
}

/// Streamed news headline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsTick {
    /// Milliseconds since the unix epoch
    pub time_stamp: i64,
    pub provider_code: String,
    pub article_id: String,
    pub headline: String,
    pub extra_data: String,
}

/// Exchange bulletin
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsBulletin {
    pub msg_id: i32,
    /// 1 = regular, 2 = exchange unavailable, 3 = exchange available
    pub msg_type: i32,
    pub message: String,
    pub orig_exchange: String,
}
