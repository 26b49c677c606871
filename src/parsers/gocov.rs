/// Parser for the JSON report written by `gocov test` / `gocov convert`.
///
/// Reference: https://github.com/axw/gocov
///
/// Shape:
///   { "Packages": [ { "Name": "...", "Functions": [
///       { "Name": "...", "Statements": [ { "Reached": 3 }, ... ] }, ...
///   ] }, ... ] }
///
/// `Statements` may be missing or `null` (Go encodes an empty slice that
/// way); `Functions` may not. `Reached` is normally an integer but older
/// tools have emitted it as a string, so it is coerced leniently.
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, warn};

use super::Parser;
use crate::error::{Error, Result};
use crate::model::*;

/// gocov JSON parser.
pub struct GocovParser;

impl Parser for GocovParser {
    fn parse(&self, input: &[u8]) -> Result<CoverageData> {
        parse(input)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawReport {
    packages: Vec<RawPackage>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawPackage {
    #[serde(default)]
    name: Option<String>,
    functions: Vec<RawFunction>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawFunction {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    statements: Option<Vec<RawStatement>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawStatement {
    #[serde(default, deserialize_with = "reach_count")]
    reached: i64,
}

/// Read and parse the report at `path`.
pub fn load(path: &Path) -> Result<CoverageData> {
    let content = std::fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "read coverage report");

    if !looks_like_gocov(&super::sniff_head(&content)) {
        warn!(path = %path.display(), "input does not look like gocov JSON");
    }

    GocovParser.parse(&content)
}

/// Parse gocov JSON from raw bytes.
pub fn parse(input: &[u8]) -> Result<CoverageData> {
    let raw: RawReport = serde_json::from_slice(input)?;

    let packages: Vec<PackageCoverage> = raw
        .packages
        .into_iter()
        .map(|package| PackageCoverage {
            name: package.name.unwrap_or_default(),
            functions: package
                .functions
                .into_iter()
                .map(|function| FunctionCoverage {
                    name: function.name.unwrap_or_default(),
                    statements: function
                        .statements
                        .unwrap_or_default()
                        .into_iter()
                        .map(|s| StatementCoverage { reached: s.reached })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    debug!(packages = packages.len(), "parsed gocov report");
    Ok(CoverageData { packages })
}

/// Content-based detection: a JSON object with a `"Packages"` key.
pub fn looks_like_gocov(head: &str) -> bool {
    let trimmed = head.trim_start();
    trimmed.starts_with('{') && trimmed.contains("\"Packages\"")
}

fn reach_count<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_reach_count(&value))
}

/// Coerce any JSON value to an execution count. Anything that is not a
/// number or a numeric-looking string counts as zero.
fn coerce_reach_count(value: &Value) -> i64 {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i
            } else if n.as_u64().is_some() {
                i64::MAX
            } else {
                // `as` saturates and maps NaN to 0.
                n.as_f64().map_or(0, |f| f.trunc() as i64)
            }
        }
        Value::String(s) => leading_integer(s),
        _ => 0,
    }
}

/// Parse the leading integer of `s`: optional whitespace, an optional sign,
/// then digits, allowing single underscores between digits. Parsing stops
/// at the first character that does not fit; no digits yields 0.
fn leading_integer(s: &str) -> i64 {
    let s = s.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut after_digit = false;
    for ch in digits.chars() {
        match ch.to_digit(10) {
            Some(d) => {
                let d = i64::from(d);
                value = value.saturating_mul(10);
                value = if negative {
                    value.saturating_sub(d)
                } else {
                    value.saturating_add(d)
                };
                after_digit = true;
            }
            None if ch == '_' && after_digit => after_digit = false,
            None => break,
        }
    }
    value
}
