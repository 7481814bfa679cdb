use crate::model::figure::ScatterFigure;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairSummary {
    pub points: usize,
    pub non_finite: usize,
    pub outside_range: usize,
    pub mean_diff: f64,
    pub mean_abs_diff: f64,
    pub above_identity: usize,
}

/// Differences are approx − true over finite pairs only.
pub fn summarize(figure: &ScatterFigure) -> PairSummary {
    let mut finite = 0usize;
    let mut outside_range = 0usize;
    let mut above_identity = 0usize;
    let mut sum = 0.0f64;
    let mut sum_abs = 0.0f64;

    for (x, y) in figure.drawable_points() {
        finite += 1;
        if !figure.x_axis.contains(x) || !figure.y_axis.contains(y) {
            outside_range += 1;
        }
        let d = y - x;
        if d > 0.0 {
            above_identity += 1;
        }
        sum += d;
        sum_abs += d.abs();
    }

    let (mean_diff, mean_abs_diff) = if finite > 0 {
        (sum / finite as f64, sum_abs / finite as f64)
    } else {
        (0.0, 0.0)
    };

    PairSummary {
        points: figure.points.len(),
        non_finite: figure.points.len() - finite,
        outside_range,
        mean_diff,
        mean_abs_diff,
        above_identity,
    }
}
