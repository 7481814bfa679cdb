use crate::input::InputPair;
use crate::model::figure::{ScatterFigure, build_figure};
use crate::model::style::PlotStyle;
use crate::model::summary::{PairSummary, summarize};

#[derive(Debug, Clone)]
pub struct Stage2Output {
    pub figure: ScatterFigure,
    pub summary: PairSummary,
}

pub fn run_stage2(input: &InputPair, style: &PlotStyle) -> Stage2Output {
    if input.base.is_empty() || input.approx.is_empty() {
        tracing::warn!("an input series has no rows; the plot will contain no points");
    }
    let figure = build_figure(input, style);
    let summary = summarize(&figure);

    if summary.non_finite > 0 {
        tracing::warn!(
            count = summary.non_finite,
            "pairs with empty or non-finite values are not drawn"
        );
    }
    if summary.outside_range > 0 {
        tracing::warn!(
            count = summary.outside_range,
            x_min = figure.x_axis.min,
            x_max = figure.x_axis.max,
            y_min = figure.y_axis.min,
            y_max = figure.y_axis.max,
            "points fall outside the fixed axis range and are not visible"
        );
    }
    tracing::info!(
        points = summary.points,
        above_identity = summary.above_identity,
        mean_diff = summary.mean_diff,
        mean_abs_diff = summary.mean_abs_diff,
        "figure built"
    );

    Stage2Output { figure, summary }
}
