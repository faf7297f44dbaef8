use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::fill::report::SkipReason;
use crate::matching::matcher::MatchResult;

/// One per-element decision taken during a fill pass.
#[derive(Debug, Serialize)]
pub struct FillTraceEvent {
    pub timestamp_ms: u128,

    /// Fingerprint of the page layout the element belongs to.
    pub page: String,
    pub element: String,
    pub hint_text: String,

    pub decision: String,
    pub field_key: Option<String>,
    pub keyword: Option<String>,
    pub value: Option<String>,
    pub skip_reason: Option<String>,
}

impl FillTraceEvent {
    pub fn now(page: &str, element: &str, hint_text: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            page: page.to_string(),
            element: element.to_string(),
            hint_text: hint_text.to_string(),
            decision: "pending".to_string(),
            field_key: None,
            keyword: None,
            value: None,
            skip_reason: None,
        }
    }

    pub fn with_match(mut self, m: &MatchResult) -> Self {
        self.field_key = Some(m.field_key.to_string());
        self.keyword = Some(m.keyword.clone());
        self
    }

    pub fn filled(mut self, value: &str) -> Self {
        self.decision = "filled".to_string();
        self.value = Some(value.to_string());
        self
    }

    pub fn skipped(mut self, reason: &SkipReason) -> Self {
        self.decision = "skipped".to_string();
        self.skip_reason = Some(format!("{:?}", reason));
        self
    }
}
