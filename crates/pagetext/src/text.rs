use layout::LayoutOptions;

use crate::input::{parse_document, read_source, select_pages, PageInput};
use crate::prelude::*;
use crate::prelude::println;

#[derive(Debug, clap::Parser)]
#[command(name = "text")]
#[command(about = "Print the reconstructed text of every page")]
pub struct App {
    /// Path to the fragment document (JSON); reads stdin when omitted or "-"
    pub path: Option<std::path::PathBuf>,

    /// Only print this page (1-indexed)
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Text placed between consecutive pages
    #[arg(long, default_value = "\u{000C}\n")]
    pub page_separator: String,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    let source = read_source(app.path.as_deref())?;
    let pages = parse_document(&source)?;
    let selected = select_pages(&pages, app.page)?;
    let options = global.layout_options();

    log::debug!(
        "Reconstructing {} of {} page(s) with {:?}",
        selected.len(),
        pages.len(),
        options
    );

    let text = render_pages(&selected, &options, &app.page_separator)?;
    println!("{}", text);
    Ok(())
}

/// Reconstruct each selected page and join them with `separator`.
pub fn render_pages(
    pages: &[(usize, &PageInput)],
    options: &LayoutOptions,
    separator: &str,
) -> Result<String> {
    let texts = pages
        .iter()
        .map(|(number, page)| {
            layout::reconstruct_with(&page.fragments, &page.mediabox, options)
                .with_context(|| format!("Failed to reconstruct page {number}"))
        })
        .collect::<Result<Vec<String>>>()?;

    Ok(texts.join(separator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout::{PageBoundary, TextFragment};

    fn page(fragments: Vec<TextFragment>) -> PageInput {
        PageInput {
            mediabox: PageBoundary::A4,
            fragments,
        }
    }

    #[test]
    fn test_render_pages_joins_with_separator() {
        let first = page(vec![TextFragment::new(30.0, 700.0, 50.0, 12.0, "Hello")]);
        let second = page(vec![
            TextFragment::new(30.0, 700.0, 50.0, 12.0, "Hello"),
            TextFragment::new(30.0, 676.0, 50.0, 12.0, "World"),
        ]);
        let selected = vec![(1, &first), (2, &second)];

        let text = render_pages(&selected, &LayoutOptions::default(), "\u{c}\n").unwrap();
        assert_eq!(text, "Hello\u{c}\nHello\n\nWorld");
    }

    #[test]
    fn test_render_pages_empty_page() {
        let empty = page(vec![]);
        let text = render_pages(&[(1, &empty)], &LayoutOptions::default(), "\n").unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_render_pages_reports_page_number() {
        let ok = page(vec![TextFragment::new(30.0, 700.0, 50.0, 12.0, "Hello")]);
        let bad = page(vec![TextFragment::new(30.0, 700.0, 50.0, 12.0, "")]);
        let err = render_pages(&[(1, &ok), (2, &bad)], &LayoutOptions::default(), "\n")
            .unwrap_err();
        assert!(err.to_string().contains("page 2"));
    }
}
