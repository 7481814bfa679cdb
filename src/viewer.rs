use thiserror::Error;

use crate::model::figure::ScatterFigure;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[cfg_attr(feature = "viewer", allow(dead_code))]
    #[error("interactive display is unavailable: built without the `viewer` feature")]
    Unavailable,

    #[error("viewer failed: {0}")]
    Backend(String),
}

#[cfg(feature = "viewer")]
mod native {
    use egui_plot::{Line, LineStyle, MarkerShape, Plot, PlotPoints, Points};

    use super::ViewerError;
    use crate::model::figure::ScatterFigure;
    use crate::model::style::Rgb;

    const TITLE: &str = "Entropy correlation";

    fn color32(rgb: Rgb, alpha: f64) -> egui::Color32 {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        egui::Color32::from_rgba_unmultiplied(rgb.0, rgb.1, rgb.2, a)
    }

    struct ScatterViewer {
        figure: ScatterFigure,
    }

    impl eframe::App for ScatterViewer {
        fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
            let fig = &self.figure;
            egui::CentralPanel::default().show(ctx, |ui| {
                Plot::new("entropy_scatter")
                    .x_axis_label(fig.x_axis.label.clone())
                    .y_axis_label(fig.y_axis.label.clone())
                    .include_x(fig.x_axis.min)
                    .include_x(fig.x_axis.max)
                    .include_y(fig.y_axis.min)
                    .include_y(fig.y_axis.max)
                    .data_aspect(1.0)
                    .allow_scroll(false)
                    .show(ui, |plot_ui| {
                        let points: PlotPoints = fig
                            .drawable_points()
                            .filter(|&(x, y)| fig.x_axis.contains(x) && fig.y_axis.contains(y))
                            .map(|(x, y)| [x, y])
                            .collect();
                        plot_ui.points(
                            Points::new("entropy", points)
                                .shape(MarkerShape::Circle)
                                .filled(true)
                                .radius(fig.marker.radius_px as f32)
                                .color(color32(fig.marker.color, fig.marker.alpha)),
                        );

                        let r = &fig.reference;
                        let identity =
                            PlotPoints::from(vec![[r.from.0, r.from.1], [r.to.0, r.to.1]]);
                        let mut line = Line::new("identity", identity).color(color32(r.color, 1.0));
                        if r.dashed {
                            line = line.style(LineStyle::dashed_loose());
                        }
                        plot_ui.line(line);
                    });
            });
        }
    }

    pub fn run(figure: &ScatterFigure) -> Result<(), ViewerError> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(TITLE)
                .with_inner_size([figure.width_px as f32, figure.height_px as f32]),
            ..Default::default()
        };
        let app = ScatterViewer {
            figure: figure.clone(),
        };
        eframe::run_native(TITLE, options, Box::new(move |_cc| Ok(Box::new(app))))
            .map_err(|e| ViewerError::Backend(e.to_string()))
    }
}

/// Opens a native window with the figure and blocks until it is closed.
pub fn show_figure(figure: &ScatterFigure) -> Result<(), ViewerError> {
    #[cfg(feature = "viewer")]
    {
        tracing::info!(points = figure.points.len(), "opening viewer");
        native::run(figure)?;
        tracing::info!("viewer closed");
        Ok(())
    }
    #[cfg(not(feature = "viewer"))]
    {
        let _ = figure;
        Err(ViewerError::Unavailable)
    }
}
