use std::path::Path;

use resvg::usvg;
use svg2pdf::{ConversionOptions, PageOptions};

use crate::render::RenderError;

pub fn write_pdf(tree: &usvg::Tree, path: &Path) -> Result<(), RenderError> {
    let pdf = convert_pdf(tree)?;
    super::write_bytes(path, &pdf)
}

/// Single-page vector PDF, page size taken from the SVG viewport.
pub fn convert_pdf(tree: &usvg::Tree) -> Result<Vec<u8>, RenderError> {
    svg2pdf::to_pdf(tree, ConversionOptions::default(), PageOptions::default())
        .map_err(|e| RenderError::Pdf(e.to_string()))
}
