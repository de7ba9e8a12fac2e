//! Geometry stages: fragments to lines, lines to reading order, and
//! fragments within a line to words.

pub mod lines;
pub mod words;

/// Round to the nearest integer, with exact halves going up.
///
/// `f64::round` sends halves away from zero, which differs for negative
/// inputs; the layout rules pin half-up explicitly.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Upper bound for any newline or space run the layout may emit.
pub const MAX_SPACING: usize = 10_000;

/// Round `ratio` half-up into a spacing count, or `None` when the result is
/// not finite or exceeds [`MAX_SPACING`].
pub(crate) fn spacing_count(ratio: f64) -> Option<usize> {
    let rounded = round_half_up(ratio);
    if !rounded.is_finite() || rounded > MAX_SPACING as f64 {
        return None;
    }
    Some(rounded.max(0.0) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(1.08), 1.0);
        assert_eq!(round_half_up(1.5), 2.0);
        assert_eq!(round_half_up(1.49), 1.0);
        assert_eq!(round_half_up(2.0), 2.0);
        assert_eq!(round_half_up(0.0), 0.0);
        assert_eq!(round_half_up(-0.5), 0.0);
    }

    #[test]
    fn test_spacing_count_bounds() {
        assert_eq!(spacing_count(1.5), Some(2));
        assert_eq!(spacing_count(MAX_SPACING as f64), Some(MAX_SPACING));
        assert_eq!(spacing_count(MAX_SPACING as f64 + 1.0), None);
        assert_eq!(spacing_count(f64::INFINITY), None);
        assert_eq!(spacing_count(f64::NAN), None);
    }
}
