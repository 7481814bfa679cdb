use thiserror::Error;

use crate::input::InputError;
use crate::model::style::StyleError;
use crate::render::RenderError;
use crate::viewer::ViewerError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Style(#[from] StyleError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Viewer(#[from] ViewerError),
}
