use crate::prelude::*;
use clap::Parser;

mod error;
mod input;
mod lines;
mod prelude;
mod text;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Rebuild plain text from positioned page text fragments"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Baseline clustering tolerance, as a fraction of the font size
    #[clap(
        long,
        env = "PAGETEXT_BASELINE_TOLERANCE",
        global = true,
        default_value_t = layout::options::DEFAULT_BASELINE_TOLERANCE
    )]
    baseline_tolerance: f64,

    /// Gaps wider than this many mean glyph widths become two spaces
    #[clap(
        long,
        env = "PAGETEXT_WORD_GAP_FACTOR",
        global = true,
        default_value_t = layout::options::DEFAULT_WORD_GAP_FACTOR
    )]
    word_gap_factor: f64,

    /// Font size measuring a line height on mixed-size lines (first-fragment, smallest, largest)
    #[clap(
        long,
        env = "PAGETEXT_LINE_UNIT",
        global = true,
        default_value = "first-fragment"
    )]
    line_unit: layout::LineUnit,

    /// Skip fragments with empty text instead of failing
    #[clap(long, env = "PAGETEXT_SKIP_EMPTY", global = true, default_value = "false")]
    skip_empty: bool,

    /// Whether to display additional information.
    #[clap(long, env = "PAGETEXT_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

impl Global {
    pub fn layout_options(&self) -> layout::LayoutOptions {
        let empty_text = if self.skip_empty {
            layout::EmptyTextPolicy::Skip
        } else {
            layout::EmptyTextPolicy::Reject
        };

        layout::LayoutOptions::default()
            .with_baseline_tolerance(self.baseline_tolerance)
            .with_word_gap_factor(self.word_gap_factor)
            .with_line_unit(self.line_unit)
            .with_empty_text(empty_text)
    }
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Print the reconstructed text of every page
    Text(crate::text::App),

    /// Print the analysed lines of every page
    Lines(crate::lines::App),
}

fn main() -> Result<()> {
    let app = App::parse();

    let default_filter = if app.global.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
    color_eyre::install()?;

    match app.command {
        SubCommands::Text(sub_app) => crate::text::run(sub_app, app.global),
        SubCommands::Lines(sub_app) => crate::lines::run(sub_app, app.global),
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
