//! # Entry draft
//!
//! The form's in-progress, unsaved record shape: catalog defaults, submit
//! validation, and the pure confidence advisory.
//!
//! Validation runs in order and stops at the first failure; a rejected
//! submit never touches the store, so the caller keeps the draft unchanged.

use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::{BusinessLine, ImpactDirection, ImpactStrength, Record, RevenueShare};

/// Blocking validation failures, surfaced to the user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    MissingCompany,
    MissingNewsTitle,
}

impl std::fmt::Display for DraftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DraftError::MissingCompany => write!(f, "missing company name"),
            DraftError::MissingNewsTitle => write!(f, "missing news summary"),
        }
    }
}

impl std::error::Error for DraftError {}

/// Record-shaped draft; all fields optional on the wire with catalog
/// defaults filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordDraft {
    pub date: String,
    pub company: String,
    pub news_title: String,
    pub business_a: String,
    pub business_b: String,
    pub business_chosen: BusinessLine,
    pub revenue_share: RevenueShare,
    pub impact_direction: ImpactDirection,
    pub impact_strength: ImpactStrength,
    pub confidence: u8,
    pub buy_plan: String,
    pub sell_plan: String,
    pub watch_plan: String,
    pub notes: String,
}

impl Default for RecordDraft {
    fn default() -> Self {
        Self {
            date: now_minute(),
            company: String::new(),
            news_title: String::new(),
            business_a: String::new(),
            business_b: String::new(),
            business_chosen: BusinessLine::A,
            revenue_share: RevenueShare::Core,
            impact_direction: ImpactDirection::Neutral,
            impact_strength: ImpactStrength::Medium,
            confidence: 5,
            buy_plan: String::new(),
            sell_plan: String::new(),
            watch_plan: String::new(),
            notes: String::new(),
        }
    }
}

impl RecordDraft {
    /// Checks run in order; the first failure aborts the submit.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.company.trim().is_empty() {
            return Err(DraftError::MissingCompany);
        }
        if self.news_title.trim().is_empty() {
            return Err(DraftError::MissingNewsTitle);
        }
        Ok(())
    }

    /// Compose the record to persist: fresh id, confidence clamped to the
    /// 1-10 scale, blank date replaced with "now".
    pub fn into_record(self) -> Record {
        let date = if self.date.trim().is_empty() {
            now_minute()
        } else {
            self.date
        };
        Record {
            id: Uuid::new_v4().to_string(),
            date,
            company: self.company,
            news_title: self.news_title,
            business_a: self.business_a,
            business_b: self.business_b,
            business_chosen: self.business_chosen,
            revenue_share: self.revenue_share,
            impact_direction: self.impact_direction,
            impact_strength: self.impact_strength,
            confidence: self.confidence.clamp(1, 10),
            buy_plan: self.buy_plan,
            sell_plan: self.sell_plan,
            watch_plan: self.watch_plan,
            notes: self.notes,
        }
    }
}

/// Current local time at minute precision, the format the date field uses.
pub fn now_minute() -> String {
    Local::now().format("%Y-%m-%dT%H:%M").to_string()
}

/// Advisory about evidentiary strength for a given confidence score.
/// Pure; the bands are fixed and the strings are shown to the user as-is.
pub fn confidence_hint(confidence: u8) -> &'static str {
    if confidence >= 9 {
        "Hard evidence: filings, company confirmation, signed contracts."
    } else if confidence >= 6 {
        "Several reputable sources corroborate each other; details are clear."
    } else if confidence >= 4 {
        "Market rumor or single-source, caution; keep position size tight."
    } else {
        "Highly uncertain; default to watching or a small tracking position."
    }
}
