use crate::constants::{
    ANCHORED_GRID_BOTTOM, DEFAULT_CELL_SIDE_MM, DEFAULT_UTC_OFFSET_MINUTES, MAX_PAGES_COUNT,
    mm_to_pt,
};
use crate::font::FontSource;
use crate::layout::{GridSpec, PageGeometry};
use crate::types::*;
use chrono::FixedOffset;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the grid is positioned on the page
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GridPlacement {
    /// Horizontally centered, bottom edge at a fixed offset
    Anchored { bottom_pt: f32 },
    /// Centered on both axes
    Centered,
}

/// Which brand name heads the top-left label of ruled pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BrandVariant {
    /// "Edustor Digital" when a subject is set, "Edustor Paper" otherwise
    #[default]
    SubjectDependent,
    /// Always "Edustor Digital"
    Digital,
}

/// Template variant for ruled pages
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutVariant {
    pub placement: GridPlacement,
    pub columns: usize,
    pub rows: usize,
    /// Corner registration markers
    pub markers: bool,
    /// Metadata cell row above the grid
    pub metadata_row: bool,
    /// Keep the top labels clear of the corner markers
    pub reserve_marker_space: bool,
    pub brand: BrandVariant,
}

impl LayoutVariant {
    /// Scannable template: anchored 40x55 grid with markers and metadata row
    pub fn digital() -> Self {
        Self {
            placement: GridPlacement::Anchored {
                bottom_pt: ANCHORED_GRID_BOTTOM,
            },
            columns: 40,
            rows: 55,
            markers: true,
            metadata_row: true,
            reserve_marker_space: true,
            brand: BrandVariant::SubjectDependent,
        }
    }

    /// Plain template: centered 40x56 grid without markers
    pub fn paper() -> Self {
        Self {
            placement: GridPlacement::Centered,
            columns: 40,
            rows: 56,
            markers: false,
            metadata_row: false,
            reserve_marker_space: false,
            brand: BrandVariant::Digital,
        }
    }
}

impl LayoutVariant {
    /// Grid of this variant's size with the given cell side in points
    pub fn grid_spec(&self, cell_side: f32, draw_cornell: bool) -> GridSpec {
        GridSpec {
            cell_side,
            columns: self.columns,
            rows: self.rows,
            draw_cornell,
        }
    }
}

impl Default for LayoutVariant {
    fn default() -> Self {
        Self::digital()
    }
}

/// Notebook generation configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NotebookOptions {
    // Page
    pub paper_size: PaperSize,
    pub orientation: Orientation,

    // Grid
    pub cell_side_mm: f32,
    pub variant: LayoutVariant,
    pub draw_cornell: bool,

    // Document
    pub generate_title: bool,
    pub pages_count: usize,
    pub font: FontSource,

    /// Offset from UTC of the clock that decides the academic year
    pub utc_offset_minutes: i32,
}

impl Default for NotebookOptions {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
            cell_side_mm: DEFAULT_CELL_SIDE_MM,
            variant: LayoutVariant::digital(),
            draw_cornell: true,
            generate_title: true,
            pages_count: 1,
            font: FontSource::Helvetica,
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
        }
    }
}

impl NotebookOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| NotebookError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| NotebookError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Page size in points
    pub fn page_geometry(&self) -> PageGeometry {
        let (w, h) = self
            .paper_size
            .dimensions_with_orientation(self.orientation);
        PageGeometry::new(mm_to_pt(w), mm_to_pt(h))
    }

    pub fn grid_spec(&self) -> GridSpec {
        self.variant
            .grid_spec(mm_to_pt(self.cell_side_mm), self.draw_cornell)
    }

    pub fn utc_offset(&self) -> Result<FixedOffset> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                NotebookError::Config(format!(
                    "UTC offset of {} minutes is out of range",
                    self.utc_offset_minutes
                ))
            })
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let (w, h) = self.paper_size.dimensions_mm();
        if !(w.is_finite() && h.is_finite()) || w <= 0.0 || h <= 0.0 {
            return Err(NotebookError::InvalidDimension(format!(
                "paper size must be positive, got {}x{}mm",
                w, h
            )));
        }

        if !self.cell_side_mm.is_finite() || self.cell_side_mm <= 0.0 {
            return Err(NotebookError::InvalidDimension(format!(
                "cell side must be positive, got {}mm",
                self.cell_side_mm
            )));
        }

        self.grid_spec().validate()?;

        if let GridPlacement::Anchored { bottom_pt } = self.variant.placement {
            if !bottom_pt.is_finite() || bottom_pt < 0.0 {
                return Err(NotebookError::Config(format!(
                    "anchored grid offset must be non-negative, got {}",
                    bottom_pt
                )));
            }
        }

        if self.pages_count == 0 && !self.generate_title {
            return Err(NotebookError::Config(
                "Document would have no pages".to_string(),
            ));
        }
        if self.pages_count > MAX_PAGES_COUNT {
            return Err(NotebookError::Config(format!(
                "at most {} pages per notebook, got {}",
                MAX_PAGES_COUNT, self.pages_count
            )));
        }

        self.utc_offset()?;

        Ok(())
    }
}
