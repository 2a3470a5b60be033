//! # worksbot-cli
//!
//! Argument parsing, settings resolution, and the run summary. No dispatch
//! logic; that lives in worksbot-sender.

pub mod cli;

pub use cli::{load_settings, Cli, Commands};

use worksbot_core::{DispatchOutcome, DispatchRecord};

/// Renders the aggregated run report: per-recipient lines plus totals.
/// The run itself never fails on recipient errors; this is how an operator
/// sees partial failure without reading logs.
pub fn summarize(records: &[DispatchRecord]) -> String {
    let mut sent = 0usize;
    let mut failed = 0usize;
    let mut skipped = 0usize;

    let mut out = String::new();
    for record in records {
        match record.outcome {
            DispatchOutcome::Success => sent += 1,
            DispatchOutcome::Failure(_) => failed += 1,
            DispatchOutcome::Skipped => skipped += 1,
        }
        out.push_str(&format!("{:<24} {}\n", record.recipient, record.outcome));
    }
    out.push_str(&format!(
        "{} recipient(s): {} sent, {} failed, {} skipped",
        records.len(),
        sent,
        failed,
        skipped
    ));
    out
}
