mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod render;
mod viewer;

use std::path::PathBuf;

use clap::Parser;

use crate::error::AppError;
use crate::model::style::PlotStyle;
use crate::pipeline::{DEFAULT_COLUMN, PlotRequest, plot_entropy_correlation};

/// Scatter plot of true against upper-approximated schedule entropy.
#[derive(Debug, Parser)]
#[command(name = "entropy-scatter", version, about)]
struct Cli {
    /// CSV with the true (base) values, plotted on the x axis.
    base_csv: PathBuf,

    /// CSV with the approximated values, plotted on the y axis.
    approx_csv: PathBuf,

    /// Open an interactive window after saving.
    #[arg(short, long)]
    show: bool,

    /// Output filename; its extension is replaced by .pdf and .png.
    #[arg(short, long, default_value = "")]
    output: String,

    /// Column read from both files.
    #[arg(short, long, default_value = DEFAULT_COLUMN)]
    column: String,

    /// JSON file overriding the default plot style.
    #[arg(long)]
    style: Option<PathBuf>,
}

impl Cli {
    fn request(&self) -> PlotRequest {
        PlotRequest {
            show: self.show,
            inputs: [self.base_csv.clone(), self.approx_csv.clone()],
            output: self.output.clone(),
            column: self.column.clone(),
        }
    }

    fn load_style(&self) -> Result<PlotStyle, AppError> {
        match &self.style {
            Some(path) => Ok(PlotStyle::from_json_file(path)?),
            None => Ok(PlotStyle::default()),
        }
    }
}

fn main() {
    logging::init_logging();
    if let Err(err) = run(Cli::parse()) {
        tracing::error!("{err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        base = %cli.base_csv.display(),
        approx = %cli.approx_csv.display(),
        "starting entropy-scatter"
    );
    let style = cli.load_style()?;
    let outcome = plot_entropy_correlation(&cli.request(), &style)?;
    if outcome.written.is_empty() && !cli.show {
        tracing::warn!("no --output and no --show given; nothing was produced");
    }
    tracing::info!(
        points = outcome.summary.points,
        width_px = outcome.figure.width_px,
        height_px = outcome.figure.height_px,
        files = outcome.written.len(),
        "done"
    );
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
