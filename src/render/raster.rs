use std::path::Path;

use resvg::tiny_skia::{Color, Pixmap, Transform};
use resvg::usvg;

use crate::render::RenderError;

pub fn write_png(tree: &usvg::Tree, path: &Path) -> Result<(), RenderError> {
    let png = rasterize_png(tree)?;
    super::write_bytes(path, &png)
}

pub fn rasterize_png(tree: &usvg::Tree) -> Result<Vec<u8>, RenderError> {
    let size = tree.size().to_int_size();
    let mut pixmap = Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        RenderError::Png(format!(
            "cannot allocate {}x{} pixmap",
            size.width(),
            size.height()
        ))
    })?;
    pixmap.fill(Color::WHITE);
    resvg::render(tree, Transform::default(), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| RenderError::Png(e.to_string()))
}
