//! Word assembly within a single line.
//!
//! Fragments are folded left to right.  Between each adjacent pair the
//! horizontal gap is compared with the pair's averaged mean glyph width:
//!
//! | Gap                          | Separator   |
//! |------------------------------|-------------|
//! | `gap <= 0`                   | none        |
//! | `0 < gap <= threshold`       | one space   |
//! | `gap > threshold`            | two spaces  |
//!
//! where `threshold = word_gap_factor * mean(a.glyph, b.glyph)`.

use super::lines::Line;
use crate::TextFragment;

/// Separator inserted between two adjacent fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gap {
    /// Touching or overlapping: concatenate directly.
    Join,
    /// An ordinary word break.
    Space,
    /// A wide break, e.g. between columns or justified words.
    Wide,
}

impl Gap {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gap::Join => "",
            Gap::Space => " ",
            Gap::Wide => "  ",
        }
    }
}

/// Classify the gap between `left` and the fragment `right` that follows it.
///
/// A zero-width fragment has a mean glyph width of zero, which can bring the
/// threshold to zero; any positive gap then classifies as [`Gap::Wide`].
pub fn classify_gap(left: &TextFragment, right: &TextFragment, word_gap_factor: f64) -> Gap {
    let gap = right.x - left.end_x();
    if gap <= 0.0 {
        return Gap::Join;
    }
    let mean_glyph = (left.mean_glyph_width() + right.mean_glyph_width()) / 2.0;
    if gap <= word_gap_factor * mean_glyph {
        Gap::Space
    } else {
        Gap::Wide
    }
}

/// Render a line's fragments into a single string.
pub fn assemble_line(line: &Line<'_>, word_gap_factor: f64) -> String {
    let fragments = line.fragments();
    let capacity = fragments.iter().map(|f| f.text.len() + 2).sum();
    let mut text = String::with_capacity(capacity);

    let mut prev: Option<&TextFragment> = None;
    for &fragment in fragments {
        if let Some(left) = prev {
            text.push_str(classify_gap(left, fragment, word_gap_factor).as_str());
        }
        text.push_str(&fragment.text);
        prev = Some(fragment);
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DEFAULT_WORD_GAP_FACTOR;

    fn frag(text: &str, x: f64, width: f64) -> TextFragment {
        TextFragment::new(x, 700.0, width, 12.0, text)
    }

    fn assemble(frags: &[TextFragment]) -> String {
        let line = Line::new(700.0, frags.iter().collect());
        assemble_line(&line, DEFAULT_WORD_GAP_FACTOR)
    }

    // =====================================================================
    // classify_gap
    // =====================================================================

    #[test]
    fn test_classify_touching() {
        let a = frag("Hel", 30.0, 30.0);
        let b = frag("lo", 60.0, 20.0);
        assert_eq!(classify_gap(&a, &b, DEFAULT_WORD_GAP_FACTOR), Gap::Join);
    }

    #[test]
    fn test_classify_overlapping() {
        let a = frag("Hel", 30.0, 30.0);
        let b = frag("lo", 55.0, 20.0);
        assert_eq!(classify_gap(&a, &b, DEFAULT_WORD_GAP_FACTOR), Gap::Join);
    }

    #[test]
    fn test_classify_threshold_is_inclusive() {
        // Both glyph widths are 10, threshold = 20, gap = 20.
        let a = frag("Hello", 30.0, 50.0);
        let b = frag("World", 100.0, 50.0);
        assert_eq!(classify_gap(&a, &b, DEFAULT_WORD_GAP_FACTOR), Gap::Space);
    }

    #[test]
    fn test_classify_just_over_threshold() {
        let a = frag("Hello", 30.0, 50.0);
        let b = frag("World", 100.5, 50.0);
        assert_eq!(classify_gap(&a, &b, DEFAULT_WORD_GAP_FACTOR), Gap::Wide);
    }

    #[test]
    fn test_classify_averages_glyph_widths() {
        // Glyph widths 4 and 16 average to 10, threshold = 20.
        let a = frag("abcde", 0.0, 20.0);
        let b = frag("fghij", 39.0, 80.0);
        assert_eq!(classify_gap(&a, &b, DEFAULT_WORD_GAP_FACTOR), Gap::Space);
        let b = frag("fghij", 41.0, 80.0);
        assert_eq!(classify_gap(&a, &b, DEFAULT_WORD_GAP_FACTOR), Gap::Wide);
    }

    #[test]
    fn test_classify_zero_width_forces_wide() {
        let a = frag("x", 30.0, 0.0);
        let b = frag("y", 30.5, 0.0);
        assert_eq!(classify_gap(&a, &b, DEFAULT_WORD_GAP_FACTOR), Gap::Wide);
    }

    #[test]
    fn test_classify_respects_factor() {
        let a = frag("Hello", 30.0, 50.0);
        let b = frag("World", 95.0, 50.0);
        assert_eq!(classify_gap(&a, &b, 2.0), Gap::Space);
        assert_eq!(classify_gap(&a, &b, 1.0), Gap::Wide);
    }

    // =====================================================================
    // assemble_line
    // =====================================================================

    #[test]
    fn test_assemble_single_fragment() {
        assert_eq!(assemble(&[frag("Hello", 30.0, 50.0)]), "Hello");
    }

    #[test]
    fn test_assemble_single_space() {
        let frags = vec![frag("Hello", 30.0, 50.0), frag("World", 92.0, 50.0)];
        assert_eq!(assemble(&frags), "Hello World");
    }

    #[test]
    fn test_assemble_double_space() {
        let frags = vec![frag("Hello", 30.0, 50.0), frag("World", 101.0, 50.0)];
        assert_eq!(assemble(&frags), "Hello  World");
    }

    #[test]
    fn test_assemble_sorts_left_to_right() {
        let frags = vec![frag("World", 92.0, 50.0), frag("Hello", 30.0, 50.0)];
        assert_eq!(assemble(&frags), "Hello World");
    }

    #[test]
    fn test_assemble_single_glyph_runs_with_embedded_space() {
        let frags: Vec<TextFragment> = "Hey World"
            .chars()
            .enumerate()
            .map(|(i, c)| frag(&c.to_string(), 30.0 + 10.0 * i as f64, 10.0))
            .collect();
        assert_eq!(assemble(&frags), "Hey World");
    }

    #[test]
    fn test_assemble_touching_runs_keep_their_own_whitespace() {
        let frags = vec![frag("Hello ", 30.0, 60.0), frag(" World", 90.0, 60.0)];
        assert_eq!(assemble(&frags), "Hello  World");
    }

    #[test]
    fn test_assemble_mixed_gaps() {
        let frags = vec![
            frag("a", 0.0, 10.0),
            frag("b", 10.0, 10.0),
            frag("c", 25.0, 10.0),
            frag("d", 100.0, 10.0),
        ];
        assert_eq!(assemble(&frags), "ab c  d");
    }
}
