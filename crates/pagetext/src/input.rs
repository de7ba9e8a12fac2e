use std::io::Read;
use std::path::Path;

use layout::{PageBoundary, TextFragment};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// One page of positioned fragments as read from a JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInput {
    /// `[x0, y0, x1, y1]`; A4 when absent.
    #[serde(default, alias = "page")]
    pub mediabox: PageBoundary,
    #[serde(default, alias = "runs")]
    pub fragments: Vec<TextFragment>,
}

/// Read a document from `path`, or from stdin when the path is absent or `-`.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read {}", p.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Parse a document into pages.
///
/// Accepted shapes:
/// - a single page object: `{"mediabox": [...], "fragments": [...]}`
/// - a page list: `{"pages": [{...}, ...]}`
/// - a bare array of page objects
pub fn parse_document(source: &str) -> Result<Vec<PageInput>> {
    let value: serde_json::Value =
        serde_json::from_str(source).context("Document is not valid JSON")?;

    let pages = match value {
        serde_json::Value::Array(_) => serde_json::from_value::<Vec<PageInput>>(value)?,
        serde_json::Value::Object(mut map) => match map.remove("pages") {
            Some(pages) => serde_json::from_value::<Vec<PageInput>>(pages)?,
            None => vec![serde_json::from_value::<PageInput>(
                serde_json::Value::Object(map),
            )?],
        },
        other => {
            return Err(Error::InvalidDocument(format!(
                "expected an object or an array, found {}",
                json_kind(&other)
            ))
            .into())
        }
    };

    if pages.is_empty() {
        return Err(Error::EmptyDocument.into());
    }
    Ok(pages)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Pick the requested 1-based page, or every page when `page` is `None`.
///
/// Returns `(page_number, page)` pairs.
pub fn select_pages(
    pages: &[PageInput],
    page: Option<usize>,
) -> Result<Vec<(usize, &PageInput)>> {
    match page {
        None => Ok(pages.iter().enumerate().map(|(i, p)| (i + 1, p)).collect()),
        Some(n) if (1..=pages.len()).contains(&n) => Ok(vec![(n, &pages[n - 1])]),
        Some(n) => Err(Error::PageOutOfRange {
            page: n,
            count: pages.len(),
        }
        .into()),
    }
}
