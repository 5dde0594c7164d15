//! Text listings of input and accepted entries.

use std::fmt::Write;

use mgagr_engine::{UnpackReport, UnpackStats};
use mgagr_foundation::Entry;

/// Renders one entry as `key :: slots`.
#[must_use]
pub fn entry_line(entry: &Entry) -> String {
    format!("{} :: {entry}", entry.key())
}

/// Renders entries one per line, sorted by key and then by rendered slots.
#[must_use]
pub fn listing<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> String {
    let mut rows: Vec<(&str, String)> = entries
        .into_iter()
        .map(|e| (e.key(), e.to_string()))
        .collect();
    rows.sort();

    rows.iter().fold(String::new(), |mut out, (key, slots)| {
        let _ = writeln!(out, "{key} :: {slots}");
        out
    })
}

/// Renders the accepted variants of a run.
#[must_use]
pub fn accepted_listing(report: &UnpackReport) -> String {
    listing(report.accepted.iter().map(|a| &a.entry))
}

/// One-line summary of run statistics.
#[must_use]
pub fn summary(stats: &UnpackStats) -> String {
    format!(
        "{} entries, {} variants enumerated, {} distinct, {} consistent, {} accepted",
        stats.entries, stats.enumerated, stats.distinct, stats.consistent, stats.accepted
    )
}
