//! Shields-style SVG badge for a coverage percentage.
//!
//! The badge is a fixed 106x20 template with two placeholders: the rounded
//! percentage shown on the right segment and that segment's background
//! color.

use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

const PERCENT_TOKEN: &str = "__percent__";
const BACKGROUND_TOKEN: &str = "__background__";

// http://shields.io/
const TEMPLATE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="106" height="20">
  <linearGradient id="b" x2="0" y2="100%">
    <stop offset="0" stop-color="#bbb" stop-opacity=".1"/>
    <stop offset="1" stop-opacity=".1"/>
  </linearGradient>
  <mask id="a">
    <rect width="106" height="20" rx="3" fill="#fff"/>
  </mask>
  <g mask="url(#a)">
    <path fill="#555" d="M0 0h63v20H0z"/>
    <path fill="__background__" d="M63 0h43v20H63z"/>
    <path fill="url(#b)" d="M0 0h106v20H0z"/>
  </g>
  <g fill="#fff" text-anchor="middle" font-family="DejaVu Sans,Verdana,Geneva,sans-serif" font-size="11">
    <text x="31.5" y="15" fill="#010101" fill-opacity=".3">coverage</text>
    <text x="31.5" y="14">coverage</text>
    <text x="83.5" y="15" fill="#010101" fill-opacity=".3">__percent__%</text>
    <text x="83.5" y="14">__percent__%</text>
  </g>
</svg>
"##;

/// Background color tier of the value segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Orange,
    Yellow,
    YellowGreen,
    Green,
    BrightGreen,
}

impl Color {
    /// Pick the tier for a raw (unrounded) percentage.
    ///
    /// The bands are half-open and leave gaps at `[79, 80)`, `[86, 87)` and
    /// `[92, 93)`; anything outside a band, including NaN, is red.
    #[must_use]
    pub fn for_percent(percent: f64) -> Self {
        if (65.0..79.0).contains(&percent) {
            Color::Orange
        } else if (80.0..86.0).contains(&percent) {
            Color::Yellow
        } else if (87.0..92.0).contains(&percent) {
            Color::YellowGreen
        } else if (93.0..100.0).contains(&percent) {
            Color::Green
        } else if percent == 100.0 {
            Color::BrightGreen
        } else {
            Color::Red
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::YellowGreen => "yellowgreen",
            Color::Green => "green",
            Color::BrightGreen => "brightgreen",
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            Color::Red => "#e05d44",
            Color::Orange => "#fe7d37",
            Color::Yellow => "#dfb317",
            Color::YellowGreen => "#a4a61d",
            Color::Green => "#97ca00",
            Color::BrightGreen => "#4c1",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two dynamic parts of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    /// Percentage shown on the badge, rounded up.
    pub label: i64,
    pub color: Color,
}

impl Badge {
    /// Classify on the raw percentage; only the label is rounded.
    #[must_use]
    pub fn new(percent: f64) -> Self {
        Self {
            label: percent.ceil() as i64,
            color: Color::for_percent(percent),
        }
    }

    /// Render the complete SVG document.
    #[must_use]
    pub fn svg(&self) -> String {
        TEMPLATE
            .replace(PERCENT_TOKEN, &self.label.to_string())
            .replace(BACKGROUND_TOKEN, self.color.hex())
    }
}

/// Render the badge SVG for a percentage.
#[must_use]
pub fn render(percent: f64) -> String {
    Badge::new(percent).svg()
}

/// Write `svg` to `path`, creating or truncating the file.
pub fn write_badge(path: &Path, svg: &str) -> Result<()> {
    std::fs::write(path, svg).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = svg.len(), "wrote badge");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_bands() {
        assert_eq!(Color::for_percent(0.0), Color::Red);
        assert_eq!(Color::for_percent(50.0), Color::Red);
        assert_eq!(Color::for_percent(64.99), Color::Red);
        assert_eq!(Color::for_percent(65.0), Color::Orange);
        assert_eq!(Color::for_percent(78.99), Color::Orange);
        assert_eq!(Color::for_percent(80.0), Color::Yellow);
        assert_eq!(Color::for_percent(82.3), Color::Yellow);
        assert_eq!(Color::for_percent(87.0), Color::YellowGreen);
        assert_eq!(Color::for_percent(91.9), Color::YellowGreen);
        assert_eq!(Color::for_percent(93.0), Color::Green);
        assert_eq!(Color::for_percent(99.99), Color::Green);
        assert_eq!(Color::for_percent(100.0), Color::BrightGreen);
    }

    #[test]
    fn test_color_gaps_fall_back_to_red() {
        assert_eq!(Color::for_percent(79.0), Color::Red);
        assert_eq!(Color::for_percent(79.5), Color::Red);
        assert_eq!(Color::for_percent(86.0), Color::Red);
        assert_eq!(Color::for_percent(86.5), Color::Red);
        assert_eq!(Color::for_percent(92.0), Color::Red);
        assert_eq!(Color::for_percent(92.5), Color::Red);
        assert_eq!(Color::for_percent(100.5), Color::Red);
        assert_eq!(Color::for_percent(-1.0), Color::Red);
        assert_eq!(Color::for_percent(f64::NAN), Color::Red);
        assert_eq!(Color::for_percent(f64::INFINITY), Color::Red);
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::Red.hex(), "#e05d44");
        assert_eq!(Color::Orange.hex(), "#fe7d37");
        assert_eq!(Color::Yellow.hex(), "#dfb317");
        assert_eq!(Color::YellowGreen.hex(), "#a4a61d");
        assert_eq!(Color::Green.hex(), "#97ca00");
        assert_eq!(Color::BrightGreen.hex(), "#4c1");
        assert_eq!(Color::YellowGreen.to_string(), "yellowgreen");
    }

    #[test]
    fn test_badge_rounds_label_up() {
        assert_eq!(Badge::new(82.3).label, 83);
        assert_eq!(Badge::new(50.0).label, 50);
        assert_eq!(Badge::new(0.1).label, 1);
        assert_eq!(Badge::new(0.0).label, 0);
    }

    #[test]
    fn test_badge_classifies_raw_percent() {
        // Shows 80 but 79.5 sits in the orange/yellow gap.
        let badge = Badge::new(79.5);
        assert_eq!(badge.label, 80);
        assert_eq!(badge.color, Color::Red);
    }

    #[test]
    fn test_render_half_covered() {
        let svg = render(50.0);
        assert_eq!(svg.matches(">50%</text>").count(), 2);
        assert_eq!(svg.matches("fill=\"#e05d44\"").count(), 1);
        assert!(!svg.contains(PERCENT_TOKEN));
        assert!(!svg.contains(BACKGROUND_TOKEN));
    }

    #[test]
    fn test_render_full_coverage() {
        let svg = render(100.0);
        assert_eq!(svg.matches(">100%</text>").count(), 2);
        assert!(svg.contains("<path fill=\"#4c1\" d=\"M63 0h43v20H63z\"/>"));
    }

    #[test]
    fn test_render_layout() {
        let svg = render(82.3);
        assert!(svg.starts_with(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"106\" height=\"20\">"
        ));
        assert!(svg.ends_with("</svg>\n"));
        assert_eq!(svg.matches(">coverage</text>").count(), 2);
        assert_eq!(svg.matches(">83%</text>").count(), 2);
        assert!(svg.contains("#dfb317"));
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render(62.5), render(62.5));
    }

    #[test]
    fn test_template_tokens() {
        assert_eq!(TEMPLATE.matches(PERCENT_TOKEN).count(), 2);
        assert_eq!(TEMPLATE.matches(BACKGROUND_TOKEN).count(), 1);
    }
}
