use layout::{LayoutOptions, PageLayout};
use serde::Serialize;

use crate::input::{parse_document, read_source, select_pages, PageInput};
use crate::prelude::*;
use crate::prelude::println;

#[derive(Debug, clap::Parser)]
#[command(name = "lines")]
#[command(about = "Print the analysed lines of every page")]
pub struct App {
    /// Path to the fragment document (JSON); reads stdin when omitted or "-"
    pub path: Option<std::path::PathBuf>,

    /// Only print this page (1-indexed)
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct PageLines {
    pub page: usize,
    #[serde(flatten)]
    pub layout: PageLayout,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    let source = read_source(app.path.as_deref())?;
    let pages = parse_document(&source)?;
    let selected = select_pages(&pages, app.page)?;

    let analysed = analyze_pages(&selected, &global.layout_options())?;
    log::debug!("Analysed {} of {} page(s)", analysed.len(), pages.len());

    if app.json {
        println!("{}", serde_json::to_string_pretty(&analysed)?);
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["PAGE", "BASELINE", "SEP", "INDENT", "TEXT"]);
    for page in &analysed {
        for line in &page.layout.lines {
            table.add_row(prettytable::row![
                page.page,
                format!("{:.2}", line.baseline),
                line.separators_before,
                line.indent,
                line.text
            ]);
        }
    }
    table.printstd();

    Ok(())
}

pub fn analyze_pages(
    pages: &[(usize, &PageInput)],
    options: &LayoutOptions,
) -> Result<Vec<PageLines>> {
    pages
        .iter()
        .map(|(number, page)| {
            layout::analyze(&page.fragments, &page.mediabox, options)
                .map(|layout| PageLines {
                    page: *number,
                    layout,
                })
                .with_context(|| format!("Failed to analyse page {number}"))
        })
        .collect()
}
