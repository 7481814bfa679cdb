use crate::input::InputPair;
use crate::model::style::{PlotStyle, Rgb};

/// Both entropy axes span `[0, 40]` with a tick every 5, whatever the data.
pub const ENTROPY_MIN: f64 = 0.0;
pub const ENTROPY_MAX: f64 = 40.0;
pub const ENTROPY_TICK_STEP: f64 = 5.0;

/// Upper bound on ticks (and gridlines) per axis.
pub const MAX_TICKS: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub tick_step: f64,
}

impl AxisSpec {
    pub fn entropy(label: &str) -> Self {
        Self {
            label: label.to_string(),
            min: ENTROPY_MIN,
            max: ENTROPY_MAX,
            tick_step: ENTROPY_TICK_STEP,
        }
    }

    /// Tick positions from `min` to `max` inclusive, at most [`MAX_TICKS`].
    pub fn ticks(&self) -> Vec<f64> {
        if !(self.tick_step > 0.0) || !(self.max >= self.min) {
            return vec![self.min];
        }
        let steps = ((self.max - self.min) / self.tick_step + 1e-9).floor();
        let n = if steps.is_finite() {
            (steps as usize).min(MAX_TICKS - 1)
        } else {
            MAX_TICKS - 1
        };
        (0..=n)
            .map(|i| self.min + i as f64 * self.tick_step)
            .collect()
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAxis {
    /// Vertical line at an x tick.
    X,
    /// Horizontal line at a y tick.
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gridline {
    pub axis: GridAxis,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub color: Rgb,
    pub alpha: f64,
    pub radius_px: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceLine {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub color: Rgb,
    pub dashed: bool,
}

/// Backend-independent description of the correlation plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterFigure {
    pub width_px: u32,
    pub height_px: u32,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    pub points: Vec<(f64, f64)>,
    pub marker: MarkerStyle,
    pub reference: ReferenceLine,
    pub gridlines: Vec<Gridline>,
    pub grid_color: Rgb,
}

impl ScatterFigure {
    /// Points with both coordinates finite.
    pub fn drawable_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points
            .iter()
            .copied()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
    }
}

pub fn build_figure(input: &InputPair, style: &PlotStyle) -> ScatterFigure {
    let base = &input.base.values;
    let approx = &input.approx.values;
    if base.len() != approx.len() {
        tracing::warn!(
            base_rows = base.len(),
            approx_rows = approx.len(),
            "series lengths differ; pairing stops at the shorter one"
        );
    }

    let points = base
        .iter()
        .zip(approx.iter())
        .map(|(&x, &y)| (x, y))
        .collect::<Vec<_>>();

    let x_axis = AxisSpec::entropy(&style.x_label);
    let y_axis = AxisSpec::entropy(&style.y_label);

    let mut gridlines = Vec::new();
    for value in x_axis.ticks() {
        gridlines.push(Gridline {
            axis: GridAxis::X,
            value,
        });
    }
    for value in y_axis.ticks() {
        gridlines.push(Gridline {
            axis: GridAxis::Y,
            value,
        });
    }

    let entry = style.palette.get(style.series_index);
    let (width_px, height_px) = style.figure_px();

    ScatterFigure {
        width_px,
        height_px,
        x_axis,
        y_axis,
        points,
        marker: MarkerStyle {
            color: entry.color,
            alpha: entry.alpha,
            radius_px: style.marker_radius_px(),
        },
        reference: ReferenceLine {
            from: (ENTROPY_MIN, ENTROPY_MIN),
            to: (ENTROPY_MAX, ENTROPY_MAX),
            color: style.reference_color,
            dashed: true,
        },
        gridlines,
        grid_color: style.grid_color,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/figure.rs"]
mod tests;
