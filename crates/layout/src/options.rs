//! Tunables for the layout pipeline.
//!
//! Every threshold the stages compare against lives here so that none of them
//! is a literal buried inside a comparison.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::LayoutError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Two baselines closer than this fraction of the reference fragment's font
/// size belong to the same line.  0.15 absorbs sub-point jitter while keeping
/// sub/superscripts (typically offset by a third of the font size) apart.
pub const DEFAULT_BASELINE_TOLERANCE: f64 = 0.15;

/// Gaps wider than this multiple of the averaged mean glyph width are
/// rendered as two spaces instead of one.
pub const DEFAULT_WORD_GAP_FACTOR: f64 = 2.0;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Which font size on a line measures one "line height" when computing the
/// number of line separators below it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineUnit {
    /// The leftmost fragment's font size.
    #[default]
    FirstFragment,
    /// The smallest font size on the line.
    Smallest,
    /// The largest font size on the line.
    Largest,
}

impl fmt::Display for LineUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineUnit::FirstFragment => write!(f, "first-fragment"),
            LineUnit::Smallest => write!(f, "smallest"),
            LineUnit::Largest => write!(f, "largest"),
        }
    }
}

impl FromStr for LineUnit {
    type Err = InvalidLineUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first-fragment" | "first" => Ok(LineUnit::FirstFragment),
            "smallest" | "min" => Ok(LineUnit::Smallest),
            "largest" | "max" => Ok(LineUnit::Largest),
            _ => Err(InvalidLineUnit(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Invalid line unit '{0}' (expected first-fragment, smallest or largest)")]
pub struct InvalidLineUnit(String);

/// What to do with a fragment whose text is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyTextPolicy {
    /// Fail with [`LayoutError::InvalidFragment`].
    #[default]
    Reject,
    /// Drop the fragment and log a warning.
    Skip,
}

/// Options controlling a reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    pub baseline_tolerance: f64,
    pub word_gap_factor: f64,
    pub line_unit: LineUnit,
    pub empty_text: EmptyTextPolicy,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            baseline_tolerance: DEFAULT_BASELINE_TOLERANCE,
            word_gap_factor: DEFAULT_WORD_GAP_FACTOR,
            line_unit: LineUnit::default(),
            empty_text: EmptyTextPolicy::default(),
        }
    }
}

impl LayoutOptions {
    pub fn with_baseline_tolerance(mut self, tolerance: f64) -> Self {
        self.baseline_tolerance = tolerance;
        self
    }

    pub fn with_word_gap_factor(mut self, factor: f64) -> Self {
        self.word_gap_factor = factor;
        self
    }

    pub fn with_line_unit(mut self, unit: LineUnit) -> Self {
        self.line_unit = unit;
        self
    }

    pub fn with_empty_text(mut self, policy: EmptyTextPolicy) -> Self {
        self.empty_text = policy;
        self
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.baseline_tolerance.is_finite() || self.baseline_tolerance < 0.0 {
            return Err(LayoutError::InvalidOptions(format!(
                "baseline tolerance must be a finite, non-negative number, got {}",
                self.baseline_tolerance
            )));
        }
        if !self.word_gap_factor.is_finite() || self.word_gap_factor <= 0.0 {
            return Err(LayoutError::InvalidOptions(format!(
                "word gap factor must be a finite, positive number, got {}",
                self.word_gap_factor
            )));
        }
        Ok(())
    }
}
