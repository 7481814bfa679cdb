use std::path::PathBuf;

use super::*;
use crate::input::EntropySeries;
use crate::model::summary::summarize;

fn series(values: &[f64]) -> EntropySeries {
    EntropySeries {
        source: PathBuf::from("mem.csv"),
        column: "Entropy".to_string(),
        values: values.to_vec(),
    }
}

fn pair(base: &[f64], approx: &[f64]) -> InputPair {
    InputPair {
        base: series(base),
        approx: series(approx),
    }
}

#[test]
fn test_one_point_per_row() {
    let fig = build_figure(&pair(&[1.0, 2.0, 3.0], &[1.5, 2.5, 3.5]), &PlotStyle::default());
    assert_eq!(fig.points, vec![(1.0, 1.5), (2.0, 2.5), (3.0, 3.5)]);
}

#[test]
fn test_identity_line_spans_fixed_range() {
    let fig = build_figure(&pair(&[100.0], &[-3.0]), &PlotStyle::default());
    assert_eq!(fig.reference.from, (0.0, 0.0));
    assert_eq!(fig.reference.to, (40.0, 40.0));
    assert!(fig.reference.dashed);
    assert_eq!(fig.reference.color, Rgb::GREY);
}

#[test]
fn test_axis_bounds_ignore_data_range() {
    let fig = build_figure(&pair(&[0.5, 95.0], &[120.0, 0.1]), &PlotStyle::default());
    assert_eq!((fig.x_axis.min, fig.x_axis.max), (0.0, 40.0));
    assert_eq!((fig.y_axis.min, fig.y_axis.max), (0.0, 40.0));
    assert_eq!(fig.points.len(), 2);
}

#[test]
fn test_ticks_and_gridlines_every_five() {
    let fig = build_figure(&pair(&[], &[]), &PlotStyle::default());
    let expected = vec![0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0];
    assert_eq!(fig.x_axis.ticks(), expected);
    assert_eq!(fig.y_axis.ticks(), expected);

    let xs = fig
        .gridlines
        .iter()
        .filter(|g| g.axis == GridAxis::X)
        .map(|g| g.value)
        .collect::<Vec<_>>();
    let ys = fig
        .gridlines
        .iter()
        .filter(|g| g.axis == GridAxis::Y)
        .map(|g| g.value)
        .collect::<Vec<_>>();
    assert_eq!(xs, expected);
    assert_eq!(ys, expected);
}

#[test]
fn test_marker_uses_first_palette_entry() {
    let style = PlotStyle::default();
    let fig = build_figure(&pair(&[1.0], &[1.0]), &style);
    assert_eq!(fig.marker.color, style.palette.entries[0].color);
    assert_eq!(fig.marker.alpha, style.palette.entries[0].alpha);
}

#[test]
fn test_unequal_lengths_pair_to_shorter() {
    let fig = build_figure(&pair(&[1.0, 2.0, 3.0, 4.0], &[1.0, 2.0]), &PlotStyle::default());
    assert_eq!(fig.points.len(), 2);
}

#[test]
fn test_figure_size_from_style() {
    let fig = build_figure(&pair(&[], &[]), &PlotStyle::default());
    assert_eq!((fig.width_px, fig.height_px), (600, 550));
}

#[test]
fn test_summary_counts() {
    let fig = build_figure(
        &pair(&[1.0, 2.0, 50.0, f64::NAN], &[2.0, 1.0, 50.0, 3.0]),
        &PlotStyle::default(),
    );
    let s = summarize(&fig);
    assert_eq!(s.points, 4);
    assert_eq!(s.non_finite, 1);
    assert_eq!(s.outside_range, 1);
    assert_eq!(s.above_identity, 1);
    assert!((s.mean_diff - 0.0).abs() < 1e-12);
    assert!((s.mean_abs_diff - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_style_changes_do_not_move_axes_or_identity_line() {
    let mut style = PlotStyle::default();
    style.dpi = 300.0;
    style.x_label = "x".to_string();
    let fig = build_figure(&pair(&[1.0], &[2.0]), &style);
    assert_eq!((fig.x_axis.min, fig.x_axis.max), (ENTROPY_MIN, ENTROPY_MAX));
    assert_eq!((fig.y_axis.min, fig.y_axis.max), (ENTROPY_MIN, ENTROPY_MAX));
    assert_eq!(fig.reference.from, (0.0, 0.0));
    assert_eq!(fig.reference.to, (40.0, 40.0));
}

#[test]
fn test_tick_count_is_bounded() {
    let axis = AxisSpec {
        label: String::new(),
        min: 0.0,
        max: 40.0,
        tick_step: 1e-12,
    };
    let ticks = axis.ticks();
    assert_eq!(ticks.len(), MAX_TICKS);
    assert_eq!(ticks[0], 0.0);

    let wide = AxisSpec {
        tick_step: f64::MIN_POSITIVE,
        max: f64::MAX,
        ..axis
    };
    assert_eq!(wide.ticks().len(), MAX_TICKS);
}
