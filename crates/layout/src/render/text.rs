use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parser::lines::{Line, OrderedLine};
use crate::parser::words::assemble_line;
use crate::parser::{spacing_count, MAX_SPACING};
use crate::LayoutError;

/// One rendered line together with the decisions that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutLine {
    /// Baseline of the cluster the line was built from.
    pub baseline: f64,
    /// Newlines emitted before this line (0 for the first line).
    pub separators_before: usize,
    /// Leading spaces.
    pub indent: usize,
    /// Assembled words, without indentation.
    pub text: String,
}

/// A fully analysed page.  [`fmt::Display`] yields the reconstructed text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub lines: Vec<LayoutLine>,
}

impl PageLayout {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for PageLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            for _ in 0..line.separators_before {
                f.write_str("\n")?;
            }
            write!(f, "{:indent$}{}", "", line.text, indent = line.indent)?;
        }
        Ok(())
    }
}

/// The leftmost column any line starts at.
pub fn page_origin_x(lines: &[OrderedLine<'_>]) -> Option<f64> {
    lines
        .iter()
        .filter_map(|l| l.line.first())
        .map(|f| f.x)
        .reduce(f64::min)
}

/// Leading spaces for `line`: its offset from `origin_x` measured in the
/// leftmost fragment's mean glyph width, rounded half-up.  `None` when the
/// count overflows or exceeds [`MAX_SPACING`].
pub fn indent_spaces(line: &Line<'_>, origin_x: f64) -> Option<usize> {
    let Some(first) = line.first() else {
        return Some(0);
    };
    let offset = first.x - origin_x;
    let glyph = first.mean_glyph_width();
    if offset <= 0.0 || glyph <= 0.0 {
        return Some(0);
    }
    spacing_count(offset / glyph)
}

/// Assemble every ordered line and compute its indentation.
pub fn layout_lines(
    lines: &[OrderedLine<'_>],
    word_gap_factor: f64,
) -> Result<PageLayout, LayoutError> {
    let Some(origin_x) = page_origin_x(lines) else {
        return Ok(PageLayout::default());
    };

    let lines = lines
        .iter()
        .map(|ordered| {
            let baseline = ordered.line.baseline();
            let indent = indent_spaces(&ordered.line, origin_x).ok_or_else(|| {
                LayoutError::SpacingOverflow {
                    baseline,
                    reason: format!("indentation from x={origin_x} exceeds {MAX_SPACING} spaces"),
                }
            })?;
            Ok(LayoutLine {
                baseline,
                separators_before: ordered.separators_before,
                indent,
                text: assemble_line(&ordered.line, word_gap_factor),
            })
        })
        .collect::<Result<Vec<_>, LayoutError>>()?;

    Ok(PageLayout { lines })
}
