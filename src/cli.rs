//! Command handler functions for the covbadge CLI.
//!
//! Each `cmd_*` function returns its output as a `String`, making them easy
//! to test without capturing stdout.

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::badge::{self, Badge};
use crate::error::Error;
use crate::parsers::gocov;

/// Read the gocov report at `input`, render its badge and write it to
/// `output`. Nothing is written unless every earlier step succeeds.
pub fn cmd_badge(input: &Path, output: &Path) -> Result<String> {
    let data = gocov::load(input)?;

    let totals = data.statement_totals();
    debug!(
        reached = totals.reached,
        total = totals.total,
        "aggregated statements"
    );
    let percent = totals.percent().ok_or(Error::NoStatements)?;

    let badge = Badge::new(percent);
    debug!(percent, label = badge.label, color = %badge.color, "selected badge");
    badge::write_badge(output, &badge.svg())?;

    Ok(format!(
        "Coverage {:.1}% ({}/{} statements) → {} [{}]\n",
        percent,
        totals.reached,
        totals.total,
        output.display(),
        badge.color,
    ))
}
