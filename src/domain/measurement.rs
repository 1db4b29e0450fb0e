//! Measurement values with an explicit "unknown" case.
//!
//! The remote source stores height, mass, and population as strings and uses
//! the literal token `unknown` (sometimes `n/a`) for missing values. Modeling
//! the sentinel as a tagged value keeps it a first-class, testable case
//! instead of a string comparison scattered across formatting helpers.

use std::fmt;

/// A numeric field that may be unknown upstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    Known(f64),
    Unknown,
}

impl Measurement {
    /// Parses a raw field value from the remote source.
    ///
    /// Comma-grouped numbers (`"1,358"`, `"200,000"`) parse as [`Known`];
    /// anything that is not a number, including the `unknown` sentinel,
    /// parses as [`Unknown`].
    ///
    /// [`Known`]: Measurement::Known
    /// [`Unknown`]: Measurement::Unknown
    pub fn parse(raw: &str) -> Self {
        let cleaned = raw.trim().replace(',', "");
        cleaned
            .parse::<f64>()
            .map(Self::Known)
            .unwrap_or(Self::Unknown)
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Formats a height in centimeters as meters with two decimals.
    pub fn format_height(&self) -> String {
        match self {
            Self::Known(cm) => format!("{:.2} m", cm / 100.0),
            Self::Unknown => "Unknown".to_string(),
        }
    }

    /// Formats a mass in kilograms.
    pub fn format_mass(&self) -> String {
        match self {
            Self::Known(kg) => format!("{} kg", trim_trailing_zeros(*kg)),
            Self::Unknown => "Unknown".to_string(),
        }
    }

    /// Formats a population count with thousands separators.
    pub fn format_population(&self) -> String {
        match self {
            Self::Known(n) => group_thousands(*n as u64),
            Self::Unknown => "Unknown".to_string(),
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(n) => write!(f, "{}", trim_trailing_zeros(*n)),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Renders a float without a spurious `.0` for whole numbers.
fn trim_trailing_zeros(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// Groups an integer into comma-separated thousands (`200000` → `"200,000"`).
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
