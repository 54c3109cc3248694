// src/filter.rs
//! Pure derivation of the visible record subset. Filter state is transient;
//! it deserializes straight from query parameters and is never persisted.

use serde::Deserialize;

use crate::record::{BusinessLine, ImpactDirection, Record};

/// Business selector; `all` disables the check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub enum BizFilter {
    #[default]
    #[serde(rename = "all")]
    All,
    A,
    B,
    #[serde(rename = "other")]
    Other,
}

/// Direction selector; `all` disables the check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DirFilter {
    #[default]
    All,
    Bull,
    Bear,
    Neutral,
}

impl BizFilter {
    fn matches(&self, line: BusinessLine) -> bool {
        match self {
            BizFilter::All => true,
            BizFilter::A => line == BusinessLine::A,
            BizFilter::B => line == BusinessLine::B,
            BizFilter::Other => line == BusinessLine::Other,
        }
    }
}

impl DirFilter {
    fn matches(&self, dir: ImpactDirection) -> bool {
        match self {
            DirFilter::All => true,
            DirFilter::Bull => dir == ImpactDirection::Bull,
            DirFilter::Bear => dir == ImpactDirection::Bear,
            DirFilter::Neutral => dir == ImpactDirection::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct RecordFilter {
    pub text: String,
    pub biz: BizFilter,
    pub dir: DirFilter,
}

impl RecordFilter {
    pub fn matches(&self, record: &Record) -> bool {
        if !self.biz.matches(record.business_chosen) {
            return false;
        }
        if !self.dir.matches(record.impact_direction) {
            return false;
        }
        let query = self.text.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        // Same haystack the UI has always searched: company, title, notes.
        let haystack = format!(
            "{} {} {}",
            record.company, record.news_title, record.notes
        )
        .to_lowercase();
        haystack.contains(&query)
    }

    /// Filtered subset preserving the list's relative order.
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }
}
