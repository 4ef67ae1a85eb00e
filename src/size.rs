//! Byte counts and their human-readable form
//!
//! Thresholds come in as strings like `500MiB` or `2 GB` and sizes go out as
//! binary-prefixed labels like `1.50GiB`. Both directions are total: bad input
//! never produces an error.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

pub const KB: u64 = 1000;
pub const KIB: u64 = 1024;
pub const MB: u64 = 1000 * KB;
pub const MIB: u64 = 1024 * KIB;
pub const GB: u64 = 1000 * MB;
pub const GIB: u64 = 1024 * MIB;
pub const TB: u64 = 1000 * GB;
pub const TIB: u64 = 1024 * GIB;

/// Threshold used when a size string holds no digits at all.
pub const DEFAULT_THRESHOLD: Size = Size(500 * MIB);

const UNIT_PREFIXES: [&str; 7] = ["", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei"];

/// An aggregate byte count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Size(pub u64);

impl Size {
    pub const ZERO: Size = Size(0);

    pub fn bytes(self) -> u64 {
        self.0
    }

    /// Parse a magnitude with an optional unit suffix.
    ///
    /// Leading junk before the first digit is skipped. Once a digit has been
    /// seen, whitespace is skipped and the first other character starts the
    /// unit suffix, which runs to the end of the input. Recognized suffixes
    /// (case-insensitive) are `kb`, `kib`, `mb`, `mib`, `gb`, `gib`, `tb` and
    /// `tib`; anything else counts as plain bytes. Input without a single
    /// digit yields [`DEFAULT_THRESHOLD`].
    pub fn parse(input: &str) -> Size {
        let input = input.trim().to_lowercase();

        let mut number = String::new();
        let mut seen_digit = false;
        let mut seen_dot = false;
        let mut unit_start = input.len();

        for (i, c) in input.char_indices() {
            if c.is_ascii_digit() {
                number.push(c);
                seen_digit = true;
                continue;
            }
            if c == '.' && !seen_dot {
                number.push(c);
                seen_dot = true;
                continue;
            }
            if seen_digit {
                if c.is_whitespace() {
                    continue;
                }
                unit_start = i;
                break;
            }
        }

        if !seen_digit {
            return DEFAULT_THRESHOLD;
        }

        let value: f64 = number.parse().unwrap_or(0.0);
        let multiplier = unit_multiplier(&input[unit_start..]).unwrap_or(1);

        // `as` saturates at u64::MAX and truncates the fraction
        Size((value * multiplier as f64) as u64)
    }

    /// Human-readable label wrapped in double quotes, ready to be dropped
    /// into a JSON document as a string value.
    pub fn format(self) -> String {
        format!("\"{}\"", self)
    }
}

fn unit_multiplier(suffix: &str) -> Option<u64> {
    match suffix {
        "kb" => Some(KB),
        "kib" => Some(KIB),
        "mb" => Some(MB),
        "mib" => Some(MIB),
        "gb" => Some(GB),
        "gib" => Some(GIB),
        "tb" => Some(TB),
        "tib" => Some(TIB),
        _ => None,
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut value = self.0 as f64;
        for prefix in UNIT_PREFIXES {
            if value < 1024.0 {
                return write!(f, "{:.2}{}B", value, prefix);
            }
            value /= 1024.0;
        }
        write!(f, "{:.1}YiB", value)
    }
}

impl Default for Size {
    fn default() -> Self {
        DEFAULT_THRESHOLD
    }
}

impl FromStr for Size {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Size::parse(s))
    }
}

impl From<u64> for Size {
    fn from(bytes: u64) -> Self {
        Size(bytes)
    }
}

impl std::ops::Add for Size {
    type Output = Size;

    fn add(self, rhs: Size) -> Size {
        Size(self.0.saturating_add(rhs.0))
    }
}

impl std::ops::AddAssign for Size {
    fn add_assign(&mut self, rhs: Size) {
        *self = *self + rhs;
    }
}

impl Serialize for Size {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
