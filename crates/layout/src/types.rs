use serde::{Deserialize, Serialize};

/// A single run of glyphs drawn at one position with one width and font size.
///
/// `x` is the left edge of the run and `y` its baseline, in page units with
/// the vertical axis growing upward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    #[serde(alias = "fs")]
    pub font_size: f64,
    pub text: String,
}

impl TextFragment {
    pub fn new(x: f64, y: f64, width: f64, font_size: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            font_size,
            text: text.into(),
        }
    }

    /// Number of code points in the run.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Horizontal position where the run stops.
    pub fn end_x(&self) -> f64 {
        self.x + self.width
    }

    /// Width of an average glyph in this run.
    ///
    /// Returns `0.0` for empty text; callers are expected to have rejected or
    /// skipped such fragments already.
    pub fn mean_glyph_width(&self) -> f64 {
        match self.char_count() {
            0 => 0.0,
            n => self.width / n as f64,
        }
    }
}

/// The coordinate extent of a page, `[x0, y0, x1, y1]`.
///
/// Serialized in the same four-number array form PDF uses for media boxes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct PageBoundary {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl PageBoundary {
    pub const A4: Self = PageBoundary::new(0.0, 0.0, 595.28, 841.89);
    pub const LETTER: Self = PageBoundary::new(0.0, 0.0, 612.0, 792.0);

    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }
}

impl Default for PageBoundary {
    fn default() -> Self {
        Self::A4
    }
}

impl From<[f64; 4]> for PageBoundary {
    fn from([x0, y0, x1, y1]: [f64; 4]) -> Self {
        Self { x0, y0, x1, y1 }
    }
}

impl From<PageBoundary> for [f64; 4] {
    fn from(page: PageBoundary) -> Self {
        [page.x0, page.y0, page.x1, page.y1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_glyph_width() {
        let f = TextFragment::new(30.0, 700.0, 50.0, 12.0, "Hello");
        assert!((f.mean_glyph_width() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mean_glyph_width_counts_code_points() {
        // Five code points, eight bytes.
        let f = TextFragment::new(0.0, 0.0, 50.0, 12.0, "h\u{e9}ll\u{f6}");
        assert_eq!(f.char_count(), 5);
        assert!((f.mean_glyph_width() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mean_glyph_width_empty_text_is_zero() {
        let f = TextFragment::new(0.0, 0.0, 50.0, 12.0, "");
        assert_eq!(f.mean_glyph_width(), 0.0);
    }

    #[test]
    fn test_mean_glyph_width_zero_width() {
        let f = TextFragment::new(0.0, 0.0, 0.0, 12.0, "abc");
        assert_eq!(f.mean_glyph_width(), 0.0);
    }

    #[test]
    fn test_end_x() {
        let f = TextFragment::new(30.0, 700.0, 50.0, 12.0, "Hello");
        assert!((f.end_x() - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_page_boundary_dimensions() {
        let page = PageBoundary::from([10.0, 20.0, 110.0, 220.0]);
        assert!((page.width() - 100.0).abs() < f64::EPSILON);
        assert!((page.height() - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_page_boundary_default_is_a4() {
        assert_eq!(PageBoundary::default(), PageBoundary::A4);
    }

    #[test]
    fn test_page_boundary_serde_array_form() {
        let page: PageBoundary = serde_json::from_str("[0, 0, 612, 792]").unwrap();
        assert_eq!(page, PageBoundary::LETTER);
        assert_eq!(
            serde_json::to_string(&PageBoundary::LETTER).unwrap(),
            "[0.0,0.0,612.0,792.0]"
        );
    }

    #[test]
    fn test_fragment_deserialize_fs_alias() {
        let f: TextFragment =
            serde_json::from_str(r#"{"x": 30, "y": 700, "width": 50, "fs": 12, "text": "Hi"}"#)
                .unwrap();
        assert_eq!(f, TextFragment::new(30.0, 700.0, 50.0, 12.0, "Hi"));
    }
}
