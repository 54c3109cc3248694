//! # Record model
//!
//! One persisted checklist entry plus the static option catalogs shared by
//! the entry form and the filter row.
//!
//! Field names and enum wire values are part of the persisted payload and of
//! both export formats, so they stay exactly as the UI has always written
//! them (camelCase keys, `">50%"`-style share buckets).

use serde::{Deserialize, Serialize};

/// Sentinel appended to `notes` when an entry has been revisited.
pub const REVIEWED_MARKER: &str = "✅ reviewed";

/// Which business line a news item lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BusinessLine {
    #[default]
    A,
    B,
    #[serde(rename = "other")]
    Other,
}

/// Bucket of the affected line's revenue share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RevenueShare {
    #[default]
    #[serde(rename = ">50%")]
    Core,
    #[serde(rename = "20-50%")]
    Major,
    #[serde(rename = "<20%")]
    Minor,
}

/// Expected market effect of the news.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImpactDirection {
    Bull,
    Bear,
    #[default]
    Neutral,
}

/// Magnitude of the expected effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImpactStrength {
    Large,
    #[default]
    Medium,
    Small,
}

impl BusinessLine {
    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessLine::A => "A",
            BusinessLine::B => "B",
            BusinessLine::Other => "other",
        }
    }
}

impl RevenueShare {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevenueShare::Core => ">50%",
            RevenueShare::Major => "20-50%",
            RevenueShare::Minor => "<20%",
        }
    }
}

impl ImpactDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactDirection::Bull => "bull",
            ImpactDirection::Bear => "bear",
            ImpactDirection::Neutral => "neutral",
        }
    }
}

impl ImpactStrength {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactStrength::Large => "large",
            ImpactStrength::Medium => "medium",
            ImpactStrength::Small => "small",
        }
    }
}

/// One saved checklist entry.
///
/// Every field is `#[serde(default)]` so a payload written by an older shape
/// still decodes; missing fields come back as their defaults instead of
/// failing the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Record {
    pub id: String,
    /// Local date-time, minute precision (`YYYY-MM-DDTHH:MM`).
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

impl Record {
    /// Append the reviewed sentinel to `notes`, once.
    /// Applying this twice yields the same notes as applying it once.
    pub fn mark_reviewed(mut self) -> Self {
        if !self.notes.contains(REVIEWED_MARKER) {
            if self.notes.is_empty() {
                self.notes.push_str(REVIEWED_MARKER);
            } else {
                self.notes.push(' ');
                self.notes.push_str(REVIEWED_MARKER);
            }
        }
        self
    }
}

/// One selectable option: wire value plus the label the UI shows.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

pub const BUSINESS_TYPES: [Choice; 3] = [
    Choice { value: "A", label: "Business A" },
    Choice { value: "B", label: "Business B" },
    Choice { value: "other", label: "Other" },
];

pub const REVENUE_SHARE_OPTIONS: [Choice; 3] = [
    Choice { value: ">50%", label: "Over 50% (core)" },
    Choice { value: "20-50%", label: "20%-50% (major)" },
    Choice { value: "<20%", label: "Under 20% (minor)" },
];

pub const IMPACT_DIRECTIONS: [Choice; 3] = [
    Choice { value: "bull", label: "Bullish" },
    Choice { value: "bear", label: "Bearish" },
    Choice { value: "neutral", label: "Neutral" },
];

pub const IMPACT_STRENGTH_OPTIONS: [Choice; 3] = [
    Choice { value: "large", label: "Large" },
    Choice { value: "medium", label: "Medium" },
    Choice { value: "small", label: "Small" },
];
