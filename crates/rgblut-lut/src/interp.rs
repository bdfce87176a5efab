//! Interpolation modes for float lookups.

use crate::LutError;
use std::fmt;
use std::str::FromStr;

/// How a float component is looked up between two table entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Blend {
    /// Linear interpolation between entry `i` and entry `i + 1`.
    ///
    /// The weight is the fractional table position `v * (N - 1) - i`.
    #[default]
    Linear,

    /// Compatibility mode for tables tuned against nearest-lower lookups.
    ///
    /// Blends entry `i` with itself, so the result is the entry at or below
    /// the value: a nearest-lower lookup.
    Legacy,
}

impl Blend {
    /// Blends entries `i` and `i + 1` of `table` for value `v` in `[0, 1)`.
    ///
    /// `table` must have at least two entries.
    #[inline]
    pub fn sample(self, table: &[f32], v: f32) -> f32 {
        let last = table.len() - 1;
        let scaled = v * last as f32;
        // float rounding can push v just under 1.0 onto the last entry
        let i = (scaled as usize).min(last - 1);
        match self {
            Blend::Linear => {
                let t = scaled - i as f32;
                table[i] * (1.0 - t) + table[i + 1] * t
            }
            Blend::Legacy => {
                let alpha = v - i as f32 / last as f32;
                table[i] * (1.0 - alpha) + table[i] * alpha
            }
        }
    }
}

impl fmt::Display for Blend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Blend::Linear => write!(f, "linear"),
            Blend::Legacy => write!(f, "legacy"),
        }
    }
}

impl FromStr for Blend {
    type Err = LutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Blend::Linear),
            "legacy" => Ok(Blend::Legacy),
            other => Err(LutError::InvalidOption {
                what: "blend mode",
                value: other.to_string(),
            }),
        }
    }
}
