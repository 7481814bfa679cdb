use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use resvg::usvg;
use resvg::usvg::fontdb;
use thiserror::Error;

pub mod pdf;
pub mod raster;
pub mod svg;

pub use pdf::write_pdf;
pub use raster::write_png;
pub use svg::render_svg;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to draw figure: {0}")]
    Drawing(String),

    #[error("failed to parse rendered SVG: {0}")]
    Svg(String),

    #[error("no usable font for figure text: {0}")]
    Font(String),

    #[error("failed to convert figure to PDF: {0}")]
    Pdf(String),

    #[error("failed to encode figure as PNG: {0}")]
    Png(String),

    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// Generic families default to faces that are often not installed, in which
// case usvg drops the text silently.
const SANS_FACES: &[&str] = &[
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
    "FreeSans",
    "Arial",
    "Helvetica",
];

/// Parses the rendered SVG once for both output formats, with the generic
/// font families bound to faces that are actually loaded.
pub fn parse_svg(svg: &str) -> Result<usvg::Tree, RenderError> {
    let mut options = usvg::Options::default();
    let db = options.fontdb_mut();
    db.load_system_fonts();

    let family = resolve_sans_family(db).ok_or_else(|| {
        RenderError::Font("no font faces found on this system".to_string())
    })?;
    tracing::debug!(family = %family, faces = db.len(), "resolved sans-serif font");
    db.set_sans_serif_family(family.clone());
    // usvg falls back to the serif family for unmatched names.
    db.set_serif_family(family);

    usvg::Tree::from_str(svg, &options).map_err(|e| RenderError::Svg(e.to_string()))
}

fn resolve_sans_family(db: &fontdb::Database) -> Option<String> {
    let names = || {
        db.faces()
            .filter_map(|face| face.families.first().map(|(name, _)| (name, face.monospaced)))
    };
    SANS_FACES
        .iter()
        .find_map(|want| names().find(|(name, _)| name == want))
        .or_else(|| names().find(|(name, mono)| !mono && name.contains("Sans")))
        .or_else(|| names().find(|(_, mono)| !mono))
        .or_else(|| names().next())
        .map(|(name, _)| name.clone())
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), RenderError> {
    let io = |source: std::io::Error| RenderError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut w = BufWriter::new(File::create(path).map_err(io)?);
    w.write_all(bytes).map_err(io)?;
    w.flush().map_err(io)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/mod.rs"]
mod tests;
