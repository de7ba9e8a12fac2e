//! Baseline clustering and top-to-bottom line ordering.
//!
//! ```text
//! &[TextFragment]  ->  Line[]         ->  OrderedLine[]
//!                      cluster_lines      order_lines
//! ```
//!
//! Both stages borrow the caller's fragments; nothing here clones text.

use std::cmp::Ordering;

use super::{spacing_count, MAX_SPACING};
use crate::options::LineUnit;
use crate::{LayoutError, TextFragment};

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Fragments sharing one baseline cluster, sorted left to right.
#[derive(Debug, Clone)]
pub struct Line<'a> {
    fragments: Vec<&'a TextFragment>,
    baseline: f64,
}

impl<'a> Line<'a> {
    /// Build a line from fragments already known to share a baseline.
    ///
    /// Fragments are sorted left to right; `baseline` is the reference every
    /// member was compared against.
    pub fn new(baseline: f64, mut fragments: Vec<&'a TextFragment>) -> Self {
        fragments.sort_by(|a, b| left_to_right(a, b));
        Self {
            fragments,
            baseline,
        }
    }

    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    pub fn fragments(&self) -> &[&'a TextFragment] {
        &self.fragments
    }

    /// The leftmost fragment.
    pub fn first(&self) -> Option<&'a TextFragment> {
        self.fragments.first().copied()
    }

    /// Font size used as one line height for this line.
    pub fn font_size(&self, unit: LineUnit) -> f64 {
        let sizes = self.fragments.iter().map(|f| f.font_size);
        match unit {
            LineUnit::FirstFragment => self.first().map(|f| f.font_size).unwrap_or(0.0),
            LineUnit::Smallest => sizes.reduce(f64::min).unwrap_or(0.0),
            LineUnit::Largest => sizes.reduce(f64::max).unwrap_or(0.0),
        }
    }
}

/// A line in reading order together with the number of line separators that
/// precede it (always 0 for the first line).
#[derive(Debug, Clone)]
pub struct OrderedLine<'a> {
    pub line: Line<'a>,
    pub separators_before: usize,
}

// ---------------------------------------------------------------------------
// Orderings
// ---------------------------------------------------------------------------

/// Top of the page first, then left to right.  The trailing keys only exist
/// to make the order total, so input order can never leak into the output.
fn top_to_bottom(a: &TextFragment, b: &TextFragment) -> Ordering {
    b.y.total_cmp(&a.y)
        .then(a.x.total_cmp(&b.x))
        .then_with(|| tie_break(a, b))
}

fn left_to_right(a: &TextFragment, b: &TextFragment) -> Ordering {
    a.x.total_cmp(&b.x)
        .then(b.y.total_cmp(&a.y))
        .then_with(|| tie_break(a, b))
}

fn tie_break(a: &TextFragment, b: &TextFragment) -> Ordering {
    a.width
        .total_cmp(&b.width)
        .then(a.font_size.total_cmp(&b.font_size))
        .then_with(|| a.text.cmp(&b.text))
}

// ---------------------------------------------------------------------------
// Public API: clustering
// ---------------------------------------------------------------------------

/// Group fragments into lines by baseline proximity.
///
/// Fragments are walked from the top of the page down.  The first fragment of
/// each cluster is its reference; a following fragment joins the cluster when
/// its baseline lies within `tolerance * reference.font_size` below the
/// reference, otherwise it opens the next cluster.  Every member is therefore
/// within tolerance of the line's baseline.
pub fn cluster_lines<'a, I>(fragments: I, tolerance: f64) -> Vec<Line<'a>>
where
    I: IntoIterator<Item = &'a TextFragment>,
{
    let mut sorted: Vec<&'a TextFragment> = fragments.into_iter().collect();
    if sorted.is_empty() {
        return Vec::new();
    }
    sorted.sort_by(|a, b| top_to_bottom(a, b));

    let mut lines: Vec<Line<'a>> = Vec::new();
    let mut reference = sorted[0];
    let mut current: Vec<&'a TextFragment> = Vec::new();

    for fragment in sorted {
        let band = tolerance * reference.font_size.abs();
        if !current.is_empty() && reference.y - fragment.y > band {
            lines.push(Line::new(reference.y, std::mem::take(&mut current)));
            reference = fragment;
        }
        current.push(fragment);
    }
    lines.push(Line::new(reference.y, current));

    lines
}

// ---------------------------------------------------------------------------
// Public API: ordering
// ---------------------------------------------------------------------------

/// Sort lines top to bottom and attach the separator count between each
/// consecutive pair.
///
/// Fails with [`LayoutError::SpacingOverflow`] when two lines are so far apart
/// that the separator count cannot be represented.
pub fn order_lines(
    mut lines: Vec<Line<'_>>,
    unit: LineUnit,
) -> Result<Vec<OrderedLine<'_>>, LayoutError> {
    lines.sort_by(|a, b| {
        b.baseline
            .total_cmp(&a.baseline)
            .then_with(|| match (a.first(), b.first()) {
                (Some(fa), Some(fb)) => left_to_right(fa, fb),
                _ => Ordering::Equal,
            })
    });

    let mut ordered: Vec<OrderedLine<'_>> = Vec::with_capacity(lines.len());
    for line in lines {
        let separators_before = match ordered.last() {
            Some(prev) => line_separators(&prev.line, &line, unit).ok_or_else(|| {
                LayoutError::SpacingOverflow {
                    baseline: line.baseline,
                    reason: format!(
                        "gap of {} below the line at y={} exceeds {} line separators",
                        prev.line.baseline - line.baseline,
                        prev.line.baseline,
                        MAX_SPACING
                    ),
                }
            })?,
            None => 0,
        };
        log::trace!(
            "line at y={} preceded by {} separator(s)",
            line.baseline,
            separators_before
        );
        ordered.push(OrderedLine {
            line,
            separators_before,
        });
    }
    Ok(ordered)
}

/// Number of newline characters between `upper` and the line directly below
/// it: the baseline gap measured in line heights, rounded half-up, never less
/// than one.
///
/// A line height is `upper`'s font size as selected by `unit`.  A zero font
/// size cannot measure anything and yields a single separator.  `None` when
/// the count overflows or exceeds [`MAX_SPACING`].
pub fn line_separators(upper: &Line<'_>, lower: &Line<'_>, unit: LineUnit) -> Option<usize> {
    let gap = upper.baseline - lower.baseline;
    let size = upper.font_size(unit);
    if size <= 0.0 || gap <= 0.0 {
        return Some(1);
    }
    spacing_count(gap / size).map(|n| n.max(1))
}
