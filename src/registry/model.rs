//! Registry wire format and the record type handed to the pipeline.

use serde::{Deserialize, Serialize};

/// One raw registration record as returned by the registry.
///
/// Field contents are unprocessed upstream text; grade normalization and
/// deduplication happen later in the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Registered product model string.
    #[serde(rename = "productModel", default)]
    pub model: String,

    /// Declared efficiency grade, upstream form ("1", "2", ...).
    #[serde(rename = "nxLever", default)]
    pub declared_level_raw: String,

    /// Producer / manufacturer name.
    #[serde(rename = "producerName", default)]
    pub producer: String,

    /// Registration number.
    #[serde(rename = "registrationNumber", default)]
    pub registration_number: String,

    /// Upstream product category.
    #[serde(rename = "productType", default)]
    pub category: String,

    /// Announcement timestamp, date-like text (`YYYY-MM-DD[ HH:MM:SS]`).
    #[serde(rename = "announcementTime", default)]
    pub announced_at: String,
}

impl RawRecord {
    /// True when the record carries a declared grade at all.
    pub fn has_grade(&self) -> bool {
        !self.declared_level_raw.trim().is_empty()
    }
}

/// Body of the registry search response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchPage {
    /// Records on this page. The upstream `total` field is unreliable and
    /// intentionally ignored.
    #[serde(rename = "list", default)]
    pub records: Vec<RawRecord>,
}

/// Registry response envelope: `{ "code": 0, "data": { "list": [...] } }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchEnvelope {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Option<SearchPage>,
}

/// Search request body sent to the registry.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest<'a> {
    #[serde(rename = "productModel")]
    pub model: &'a str,
    #[serde(rename = "pageNo")]
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}
