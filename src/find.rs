//! Gap pair search entry points.
//!
//! [`find_report`] is the shared implementation used by both `pgap find`
//! (CLI) and `POST /api/price-gap-pair` (HTTP server). It resolves the
//! tie-break policy from config and delegates to
//! `price_gap_core::gap::find_pair_with`.

use anyhow::Result;
use price_gap_core::gap::{find_pair_with, GapError, TieBreak};
use price_gap_core::report::GapReport;

use crate::config::Config;

/// Core find function returning a structured report (used by CLI and server).
///
/// `tie_break` overrides `[search].tie_break` when given.
pub fn find_report(
    config: &Config,
    values: &[i64],
    k: i64,
    tie_break: Option<TieBreak>,
) -> Result<GapReport, GapError> {
    let policy = tie_break.unwrap_or(config.search.tie_break);
    let outcome = find_pair_with(values, k, policy)?;

    tracing::debug!(
        len = values.len(),
        k,
        policy = %policy,
        found = outcome.is_some(),
        "gap search finished"
    );

    Ok(GapReport::new(values, outcome))
}

/// CLI entry point: calls [`find_report`] and prints the result to stdout.
///
/// An absent pair is a normal outcome and still returns `Ok(())`; a negative
/// gap is returned as an error.
pub fn run_find(
    config: &Config,
    values: &[i64],
    k: i64,
    tie_break: Option<TieBreak>,
    json: bool,
) -> Result<()> {
    let report = find_report(config, values, k, tie_break)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match (report.indices, report.values) {
        (Some([i, j]), Some([a, b])) => {
            println!("pair: ({}, {})  values: ({}, {})", i, j, a, b);
        }
        _ => println!("no pair found"),
    }

    Ok(())
}
