//! # Export
//!
//! Serializes the full record list for download. Both formats always cover
//! the complete stored collection; the active filter never applies here.
//! The CSV column set and the `id`-less layout match what the journal has
//! always produced, so spreadsheets built on old exports keep working.

use anyhow::{Context, Result};
use chrono::Local;
use csv::{QuoteStyle, WriterBuilder};

use crate::record::Record;

/// Exported column order; downstream spreadsheets depend on it.
pub const CSV_HEADERS: [&str; 14] = [
    "date",
    "company",
    "newsTitle",
    "businessA",
    "businessB",
    "businessChosen",
    "revenueShare",
    "impactDirection",
    "impactStrength",
    "confidence",
    "buyPlan",
    "sellPlan",
    "watchPlan",
    "notes",
];

/// Pretty-printed JSON array of the full list.
pub fn json_pretty(records: &[Record]) -> Result<String> {
    serde_json::to_string_pretty(records).context("serializing records to JSON")
}

/// CSV with a fixed header row and every field double-quoted (internal
/// quotes doubled), one line per record.
pub fn csv_text(records: &[Record]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer
        .write_record(CSV_HEADERS)
        .context("writing CSV header")?;

    for r in records {
        writer
            .write_record([
                r.date.as_str(),
                r.company.as_str(),
                r.news_title.as_str(),
                r.business_a.as_str(),
                r.business_b.as_str(),
                r.business_chosen.as_str(),
                r.revenue_share.as_str(),
                r.impact_direction.as_str(),
                r.impact_strength.as_str(),
                &r.confidence.to_string(),
                r.buy_plan.as_str(),
                r.sell_plan.as_str(),
                r.watch_plan.as_str(),
                r.notes.as_str(),
            ])
            .context("writing CSV row")?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing CSV writer: {e}"))?;
    String::from_utf8(bytes).context("CSV output was not UTF-8")
}

/// Download name stamped with the current local date, e.g.
/// `checklist_records_2025-08-16.csv`.
pub fn file_name(ext: &str) -> String {
    format!(
        "checklist_records_{}.{}",
        Local::now().format("%Y-%m-%d"),
        ext
    )
}
