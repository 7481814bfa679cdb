use std::path::PathBuf;

use crate::error::AppError;
use crate::model::figure::ScatterFigure;
use crate::model::style::PlotStyle;
use crate::model::summary::PairSummary;

pub mod stage1_load;
pub mod stage2_figure;
pub mod stage3_save;
pub mod stage4_show;

use stage1_load::{Stage1Params, run_stage1};
use stage2_figure::run_stage2;
use stage3_save::run_stage3;
use stage4_show::run_stage4;

pub const DEFAULT_COLUMN: &str = "Entropy";

#[derive(Debug, Clone)]
pub struct PlotRequest {
    pub show: bool,
    /// Base ("true") file first, approximated file second.
    pub inputs: [PathBuf; 2],
    /// Empty means no files are written.
    pub output: String,
    pub column: String,
}

#[derive(Debug, Clone)]
pub struct PlotOutcome {
    pub figure: ScatterFigure,
    pub summary: PairSummary,
    pub written: Vec<PathBuf>,
}

/// Load both series, build the figure, save it, then optionally show it.
///
/// Any failure aborts the run; nothing is retried.
pub fn plot_entropy_correlation(
    request: &PlotRequest,
    style: &PlotStyle,
) -> Result<PlotOutcome, AppError> {
    style.validate()?;

    let [base_path, approx_path] = request.inputs.clone();
    let input = run_stage1(&Stage1Params {
        base_path,
        approx_path,
        column: request.column.clone(),
    })?;

    let stage2 = run_stage2(&input, style);
    let written = run_stage3(&stage2.figure, style, &request.output)?;
    run_stage4(&stage2.figure, request.show)?;

    Ok(PlotOutcome {
        figure: stage2.figure,
        summary: stage2.summary,
        written,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
