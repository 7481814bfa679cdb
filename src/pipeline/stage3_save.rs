use std::path::{Path, PathBuf};

use crate::model::figure::ScatterFigure;
use crate::model::style::PlotStyle;
use crate::render::{RenderError, parse_svg, render_svg, write_pdf, write_png};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub pdf: PathBuf,
    pub png: PathBuf,
}

impl OutputPaths {
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        [self.pdf.as_path(), self.png.as_path()].into_iter()
    }
}

/// Strips the final extension of `output` and appends `.pdf` / `.png`.
/// An empty string means nothing is written.
pub fn output_paths(output: &str) -> Option<OutputPaths> {
    if output.is_empty() {
        return None;
    }
    let stem = Path::new(output).with_extension("");
    Some(OutputPaths {
        pdf: append_suffix(&stem, ".pdf"),
        png: append_suffix(&stem, ".png"),
    })
}

// Appended rather than `with_extension`, which would eat a dotted stem like `run.v2`.
fn append_suffix(stem: &Path, suffix: &str) -> PathBuf {
    let mut name = stem.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

pub fn run_stage3(
    figure: &ScatterFigure,
    style: &PlotStyle,
    output: &str,
) -> Result<Vec<PathBuf>, RenderError> {
    let Some(paths) = output_paths(output) else {
        tracing::debug!("no output filename given; skipping save");
        return Ok(Vec::new());
    };

    let svg = render_svg(figure, style)?;
    let tree = parse_svg(&svg)?;
    write_pdf(&tree, &paths.pdf)?;
    write_png(&tree, &paths.png)?;

    for path in paths.iter() {
        tracing::info!(path = %path.display(), "wrote plot");
    }
    Ok(paths.iter().map(Path::to_path_buf).collect())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_save.rs"]
mod tests;
