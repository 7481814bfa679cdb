use plotters::coord::Shift;
use plotters::prelude::*;

use crate::model::figure::{GridAxis, ScatterFigure};
use crate::model::style::{PlotStyle, Rgb};
use crate::render::RenderError;

const GRID_DASH_PX: u32 = 4;
const GRID_GAP_PX: u32 = 3;
const REFERENCE_DASH_PX: u32 = 8;
const REFERENCE_GAP_PX: u32 = 5;

fn drawing<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Drawing(e.to_string())
}

fn color(rgb: Rgb) -> RGBColor {
    RGBColor(rgb.0, rgb.1, rgb.2)
}

fn format_tick(v: &f64) -> String {
    if v.fract().abs() < 1e-9 {
        format!("{:.0}", v)
    } else {
        format!("{}", v)
    }
}

/// Renders the figure as a standalone SVG document.
pub fn render_svg(figure: &ScatterFigure, style: &PlotStyle) -> Result<String, RenderError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (figure.width_px, figure.height_px))
            .into_drawing_area();
        draw_figure(&root, figure, style)?;
        root.present().map_err(drawing)?;
    }
    Ok(svg)
}

fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &ScatterFigure,
    style: &PlotStyle,
) -> Result<(), RenderError> {
    root.fill(&WHITE).map_err(drawing)?;

    // Tight bounding box: only the pad separates the artwork from the edge.
    let pad = style.pad_px();
    let area = root.margin(pad, pad, pad, pad);

    let font_px = style.font_px();
    let font = (style.font_family.as_str(), font_px);
    let x = &figure.x_axis;
    let y = &figure.y_axis;

    let mut chart = ChartBuilder::on(&area)
        .x_label_area_size(font_px * 3)
        .y_label_area_size(font_px * 4)
        .build_cartesian_2d(x.min..x.max, y.min..y.max)
        .map_err(drawing)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(x.ticks().len())
        .y_labels(y.ticks().len())
        .x_label_formatter(&format_tick)
        .y_label_formatter(&format_tick)
        .x_desc(x.label.as_str())
        .y_desc(y.label.as_str())
        .label_style(font)
        .axis_desc_style(font)
        .draw()
        .map_err(drawing)?;

    let grid_style = color(figure.grid_color).stroke_width(1);
    for line in &figure.gridlines {
        let ends = match line.axis {
            GridAxis::X => vec![(line.value, y.min), (line.value, y.max)],
            GridAxis::Y => vec![(x.min, line.value), (x.max, line.value)],
        };
        chart
            .draw_series(DashedLineSeries::new(
                ends,
                GRID_DASH_PX,
                GRID_GAP_PX,
                grid_style,
            ))
            .map_err(drawing)?;
    }

    let marker = &figure.marker;
    let marker_style = color(marker.color).mix(marker.alpha).filled();
    let radius = marker.radius_px.round().max(1.0) as u32;
    chart
        .draw_series(
            figure
                .drawable_points()
                .filter(|&(px, py)| x.contains(px) && y.contains(py))
                .map(|p| Circle::new(p, radius, marker_style)),
        )
        .map_err(drawing)?;

    let reference = &figure.reference;
    let reference_style = color(reference.color).stroke_width(1);
    let ends = vec![reference.from, reference.to];
    if reference.dashed {
        chart
            .draw_series(DashedLineSeries::new(
                ends,
                REFERENCE_DASH_PX,
                REFERENCE_GAP_PX,
                reference_style,
            ))
            .map_err(drawing)?;
    } else {
        chart
            .draw_series(LineSeries::new(ends, reference_style))
            .map_err(drawing)?;
    }

    Ok(())
}
