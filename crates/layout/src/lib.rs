//! Plain-text reconstruction for fixed-layout pages.
//!
//! A page from a fixed-layout format arrives as an unordered bag of
//! positioned [`TextFragment`]s.  This crate turns that bag back into text
//! whose newlines and spaces approximate what the page looks like.
//!
//! # Pipeline
//!
//! ```text
//! TextFragment[]  ->  Line[]         ->  OrderedLine[]  ->  PageLayout  ->  String
//!                     cluster_lines      order_lines        layout_lines    Display
//!                                                           (assemble_line,
//!                                                            indent_spaces)
//! ```
//!
//! Every stage is a pure function over borrowed input, so pages can be
//! processed on as many threads as the caller likes.

use thiserror::Error;

pub mod options;
pub mod parser;
pub mod render;
pub mod types;

pub use options::{EmptyTextPolicy, LayoutOptions, LineUnit};
pub use render::text::{LayoutLine, PageLayout};
pub use types::*;

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("Invalid fragment #{index}: {reason}")]
    InvalidFragment { index: usize, reason: String },
    #[error("Invalid page boundary: {reason}")]
    InvalidPage { reason: String },
    #[error("Invalid layout options: {0}")]
    InvalidOptions(String),
    #[error("Spacing overflow at baseline {baseline}: {reason}")]
    SpacingOverflow { baseline: f64, reason: String },
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Rebuild the text of one page using the default [`LayoutOptions`].
///
/// The result does not depend on the order of `fragments`.
pub fn reconstruct(
    fragments: &[TextFragment],
    page: &PageBoundary,
) -> Result<String, LayoutError> {
    reconstruct_with(fragments, page, &LayoutOptions::default())
}

/// Rebuild the text of one page with explicit options.
pub fn reconstruct_with(
    fragments: &[TextFragment],
    page: &PageBoundary,
    options: &LayoutOptions,
) -> Result<String, LayoutError> {
    Ok(analyze(fragments, page, options)?.to_string())
}

/// Run the whole pipeline and keep the per-line decisions.
pub fn analyze(
    fragments: &[TextFragment],
    page: &PageBoundary,
    options: &LayoutOptions,
) -> Result<PageLayout, LayoutError> {
    options.validate()?;
    validate_page(page)?;
    let accepted = validate_fragments(fragments, options.empty_text)?;

    let lines = parser::lines::cluster_lines(accepted, options.baseline_tolerance);
    let ordered = parser::lines::order_lines(lines, options.line_unit)?;
    let layout = render::text::layout_lines(&ordered, options.word_gap_factor)?;

    log::debug!(
        "reconstructed {} fragment(s) into {} line(s) on a {}x{} page",
        fragments.len(),
        layout.lines.len(),
        page.width(),
        page.height()
    );

    Ok(layout)
}

// ---------------------------------------------------------------------------
// Boundary checks
// ---------------------------------------------------------------------------

/// Check that every corner is finite and the rectangle is not inverted.
pub fn validate_page(page: &PageBoundary) -> Result<(), LayoutError> {
    let corners = [page.x0, page.y0, page.x1, page.y1];
    if corners.iter().any(|v| !v.is_finite()) {
        return Err(LayoutError::InvalidPage {
            reason: format!("non-finite corner in {corners:?}"),
        });
    }
    if page.x0 >= page.x1 || page.y0 >= page.y1 {
        return Err(LayoutError::InvalidPage {
            reason: format!("empty or inverted rectangle {corners:?}"),
        });
    }
    Ok(())
}

/// Check a single fragment's geometry.  Empty text is left to the
/// [`EmptyTextPolicy`] in [`validate_fragments`].
fn check_fragment(fragment: &TextFragment) -> Result<(), String> {
    let fields = [
        ("x", fragment.x),
        ("y", fragment.y),
        ("width", fragment.width),
        ("font_size", fragment.font_size),
    ];
    if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
        return Err(format!("{name} is not finite ({value})"));
    }
    if fragment.width < 0.0 {
        return Err(format!("negative width ({})", fragment.width));
    }
    if fragment.font_size < 0.0 {
        return Err(format!("negative font size ({})", fragment.font_size));
    }
    Ok(())
}

/// Return the fragments that may enter the pipeline.
pub fn validate_fragments(
    fragments: &[TextFragment],
    policy: EmptyTextPolicy,
) -> Result<Vec<&TextFragment>, LayoutError> {
    let mut accepted = Vec::with_capacity(fragments.len());

    for (index, fragment) in fragments.iter().enumerate() {
        check_fragment(fragment)
            .map_err(|reason| LayoutError::InvalidFragment { index, reason })?;

        if fragment.text.is_empty() {
            match policy {
                EmptyTextPolicy::Reject => {
                    return Err(LayoutError::InvalidFragment {
                        index,
                        reason: "empty text".to_string(),
                    });
                }
                EmptyTextPolicy::Skip => {
                    log::warn!(
                        "skipping empty fragment #{index} at ({}, {})",
                        fragment.x,
                        fragment.y
                    );
                    continue;
                }
            }
        }

        accepted.push(fragment);
    }

    Ok(accepted)
}
