//! Font resources and text measurement
//!
//! A [`FontResource`] holds the raw font data and can move between threads.
//! Each document acquires a [`LoadedFont`] from it once, on the thread that
//! lays out and renders the document, and lends that to layout (for width
//! queries) and rendering (for glyph output). Dropping the [`LoadedFont`]
//! releases the parsed font.

use crate::types::{NotebookError, Result};
use printpdf::{BuiltinFont, FontId, ParsedFont, PdfDocument};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rendered-width query used for right-aligned and centered text
pub trait TextMetrics {
    /// Width of `text` in points at the given font size
    fn text_width(&self, text: &str, size: f32) -> f32;
}

/// Where the document font comes from
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FontSource {
    /// Built-in PDF Helvetica, nothing embedded
    #[default]
    Helvetica,
    /// TrueType/OpenType file embedded into the document
    File(PathBuf),
}

/// Font data read from its source, not yet parsed
#[derive(Clone)]
pub struct FontResource {
    kind: FontData,
}

#[derive(Clone)]
enum FontData {
    Builtin(BuiltinFont),
    Embedded(Arc<[u8]>),
}

/// A parsed font, ready for measuring and drawing one document
pub struct LoadedFont {
    kind: FontKind,
}

enum FontKind {
    Builtin(BuiltinFont),
    Embedded {
        font: Box<ParsedFont>,
        units_per_em: f32,
    },
}

/// How a canvas refers to the font once it is registered with a document
#[derive(Debug, Clone)]
pub enum FontHandle {
    Builtin(BuiltinFont),
    Embedded(FontId),
}

impl FontResource {
    pub fn helvetica() -> Self {
        Self {
            kind: FontData::Builtin(BuiltinFont::Helvetica),
        }
    }

    /// Wrap TrueType/OpenType font data; parsing happens in [`FontResource::acquire`]
    pub fn from_bytes(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            kind: FontData::Embedded(bytes.into()),
        }
    }

    /// Read the font named by `source`
    pub async fn load(source: &FontSource) -> Result<Self> {
        match source {
            FontSource::Helvetica => Ok(Self::helvetica()),
            FontSource::File(path) => {
                let bytes = tokio::fs::read(path)
                    .await
                    .map_err(|e| unavailable(path, e))?;
                Ok(Self::from_bytes(bytes))
            }
        }
    }

    /// Blocking counterpart of [`FontResource::load`]
    pub fn load_blocking(source: &FontSource) -> Result<Self> {
        match source {
            FontSource::Helvetica => Ok(Self::helvetica()),
            FontSource::File(path) => {
                let bytes = std::fs::read(path).map_err(|e| unavailable(path, e))?;
                Ok(Self::from_bytes(bytes))
            }
        }
    }

    /// Parse the font for one document
    pub fn acquire(&self) -> Result<LoadedFont> {
        let kind = match &self.kind {
            FontData::Builtin(font) => FontKind::Builtin(*font),
            FontData::Embedded(bytes) => {
                let mut warnings = Vec::new();
                let font = ParsedFont::from_bytes(bytes, 0, &mut warnings).ok_or_else(|| {
                    NotebookError::FontUnavailable("Failed to parse font".to_string())
                })?;

                let units_per_em = match font.font_metrics.units_per_em {
                    0 => 1000.0,
                    units => units as f32,
                };

                FontKind::Embedded {
                    font: Box::new(font),
                    units_per_em,
                }
            }
        };

        Ok(LoadedFont { kind })
    }
}

impl std::fmt::Debug for FontResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            FontData::Builtin(font) => f.debug_tuple("Builtin").field(font).finish(),
            FontData::Embedded(bytes) => f
                .debug_struct("Embedded")
                .field("len", &bytes.len())
                .finish(),
        }
    }
}

fn unavailable(path: &Path, err: std::io::Error) -> NotebookError {
    NotebookError::FontUnavailable(format!("{}: {}", path.display(), err))
}

impl LoadedFont {
    pub fn helvetica() -> Self {
        Self {
            kind: FontKind::Builtin(BuiltinFont::Helvetica),
        }
    }

    /// Make the font usable by pages of `doc`
    pub(crate) fn register(&self, doc: &mut PdfDocument) -> FontHandle {
        match &self.kind {
            FontKind::Builtin(font) => FontHandle::Builtin(*font),
            FontKind::Embedded { font, .. } => FontHandle::Embedded(doc.add_font(font)),
        }
    }
}

impl std::fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            FontKind::Builtin(font) => f.debug_tuple("Builtin").field(font).finish(),
            FontKind::Embedded { units_per_em, .. } => f
                .debug_struct("Embedded")
                .field("units_per_em", units_per_em)
                .finish_non_exhaustive(),
        }
    }
}

impl TextMetrics for LoadedFont {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        match &self.kind {
            FontKind::Builtin(_) => {
                let units: u32 = text.chars().map(helvetica_advance).sum();
                units as f32 / 1000.0 * size
            }
            FontKind::Embedded { font, units_per_em } => {
                let mut units = 0.0;
                for ch in text.chars() {
                    match font.lookup_glyph_index(ch as u32) {
                        Some(glyph_id) => units += font.get_horizontal_advance(glyph_id) as f32,
                        None => log::warn!("No glyph for {:?} in embedded font", ch),
                    }
                }
                units / units_per_em * size
            }
        }
    }
}

/// Helvetica advance widths (1/1000 em) for printable ASCII, from the
/// standard Adobe font metrics
const HELVETICA_ASCII_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0..?
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // P.._
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `..o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // p..~
];

const HELVETICA_COPYRIGHT_WIDTH: u32 = 737;
const HELVETICA_DEFAULT_WIDTH: u32 = 556;

fn helvetica_advance(ch: char) -> u32 {
    match ch {
        ' '..='~' => HELVETICA_ASCII_WIDTHS[ch as usize - ' ' as usize] as u32,
        '©' => HELVETICA_COPYRIGHT_WIDTH,
        _ => HELVETICA_DEFAULT_WIDTH,
    }
}
