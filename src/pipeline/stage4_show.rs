use crate::model::figure::ScatterFigure;
use crate::viewer::{ViewerError, show_figure};

pub fn run_stage4(figure: &ScatterFigure, show: bool) -> Result<(), ViewerError> {
    if !show {
        return Ok(());
    }
    show_figure(figure)
}
