//! In-memory representation of a gocov report, independent of how it was
//! serialized. Parsers produce a `CoverageData` which is then reduced to
//! `StatementTotals` for the badge.

/// Compute a coverage rate, returning `None` when the total is zero.
#[must_use]
pub fn rate(covered: u64, total: u64) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(covered as f64 / total as f64)
    }
}

/// A single instrumented statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatementCoverage {
    /// How many times the statement was executed.
    pub reached: i64,
}

impl StatementCoverage {
    pub fn is_reached(&self) -> bool {
        self.reached > 0
    }
}

/// A function and its statements. Functions reported without any
/// statements have an empty list.
#[derive(Debug, Clone, Default)]
pub struct FunctionCoverage {
    pub name: String,
    pub statements: Vec<StatementCoverage>,
}

/// A Go package and its functions.
#[derive(Debug, Clone, Default)]
pub struct PackageCoverage {
    pub name: String,
    pub functions: Vec<FunctionCoverage>,
}

/// The complete result of parsing a single coverage report.
#[derive(Debug, Clone, Default)]
pub struct CoverageData {
    pub packages: Vec<PackageCoverage>,
}

impl CoverageData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every statement in the report and how many of them were
    /// reached at least once.
    #[must_use]
    pub fn statement_totals(&self) -> StatementTotals {
        let mut totals = StatementTotals::default();
        for package in &self.packages {
            for function in &package.functions {
                for statement in &function.statements {
                    totals.record(statement);
                }
            }
        }
        totals
    }
}

/// Statement counters accumulated over a whole report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatementTotals {
    pub reached: u64,
    pub total: u64,
}

impl StatementTotals {
    fn record(&mut self, statement: &StatementCoverage) {
        self.total += 1;
        if statement.is_reached() {
            self.reached += 1;
        }
    }

    /// Coverage as a percentage in `0.0..=100.0`, or `None` for a report
    /// without statements.
    #[must_use]
    pub fn percent(&self) -> Option<f64> {
        rate(self.reached, self.total).map(|r| r * 100.0)
    }
}
