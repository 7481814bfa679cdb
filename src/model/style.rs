use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("IO error reading style {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid style JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid style: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const GREY: Rgb = Rgb(128, 128, 128);

    /// Gray level in `[0, 1]`, 0 being black.
    pub fn gray(level: f64) -> Self {
        let v = (level.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgb(v, v, v)
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let digits = value.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("expected #rrggbb colour, got '{value}'"));
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
        match (channel(0), channel(2), channel(4)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Rgb(r, g, b)),
            _ => Err(format!("expected #rrggbb colour, got '{value}'")),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PaletteEntry {
    pub color: Rgb,
    pub alpha: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    pub entries: Vec<PaletteEntry>,
}

impl Palette {
    pub fn default_v1() -> Self {
        let entry = |color: Rgb| PaletteEntry { color, alpha: 0.5 };
        Self {
            entries: vec![
                entry(Rgb(0x1f, 0x77, 0xb4)),
                entry(Rgb(0xff, 0x7f, 0x0e)),
                entry(Rgb(0x2c, 0xa0, 0x2c)),
                entry(Rgb(0xd6, 0x27, 0x28)),
                entry(Rgb(0x94, 0x67, 0xbd)),
            ],
        }
    }

    /// Series `index` wraps around the palette.
    pub fn get(&self, index: usize) -> PaletteEntry {
        if self.entries.is_empty() {
            return PaletteEntry {
                color: Rgb::BLACK,
                alpha: 1.0,
            };
        }
        self.entries[index % self.entries.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::default_v1()
    }
}

/// Rendering options shared by every plot of the report toolchain.
///
/// Passed explicitly into the pipeline; nothing here is process-global.
/// Axis bounds are not part of the style: the entropy axes are fixed by
/// the figure builder.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotStyle {
    pub figure_size_in: [f64; 2],
    pub dpi: f64,
    pub pad_in: f64,
    pub font_family: String,
    pub font_size_pt: f64,
    pub x_label: String,
    pub y_label: String,
    pub marker_area_pt2: f64,
    pub series_index: usize,
    pub palette: Palette,
    pub grid_color: Rgb,
    pub reference_color: Rgb,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            figure_size_in: [6.0, 5.5],
            dpi: 100.0,
            pad_in: 0.02,
            font_family: "sans-serif".to_string(),
            font_size_pt: 12.0,
            x_label: "True Schedule Entropy".to_string(),
            y_label: "Upper-Approximated Schedule Entropy".to_string(),
            marker_area_pt2: 100.0,
            series_index: 0,
            palette: Palette::default_v1(),
            grid_color: Rgb::gray(0.8),
            reference_color: Rgb::GREY,
        }
    }
}

impl PlotStyle {
    pub fn from_json_file(path: &Path) -> Result<Self, StyleError> {
        let text = std::fs::read_to_string(path).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let style: PlotStyle = serde_json::from_str(&text).map_err(|source| StyleError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        style.validate()?;
        Ok(style)
    }

    pub fn validate(&self) -> Result<(), StyleError> {
        if !(self.dpi > 0.0) || self.figure_size_in.iter().any(|v| !(*v > 0.0)) {
            return Err(StyleError::Invalid(
                "figure size and dpi must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn pt_to_px(&self, pt: f64) -> f64 {
        pt * self.dpi / 72.0
    }

    pub fn figure_px(&self) -> (u32, u32) {
        (
            (self.figure_size_in[0] * self.dpi).round() as u32,
            (self.figure_size_in[1] * self.dpi).round() as u32,
        )
    }

    pub fn pad_px(&self) -> u32 {
        (self.pad_in * self.dpi).round().max(0.0) as u32
    }

    pub fn font_px(&self) -> u32 {
        self.pt_to_px(self.font_size_pt).round().max(1.0) as u32
    }

    /// Marker area is in pt², like a scatter `s` argument.
    pub fn marker_radius_px(&self) -> f64 {
        self.pt_to_px(self.marker_area_pt2.max(0.0).sqrt() / 2.0)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/style.rs"]
mod tests;
