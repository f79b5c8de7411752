use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Error, Debug)]
pub enum NotebookError {
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),
    #[error(
        "Grid of {grid_width:.2}x{grid_height:.2}pt does not fit on a {page_width:.2}x{page_height:.2}pt page"
    )]
    GridTooLarge {
        grid_width: f32,
        grid_height: f32,
        page_width: f32,
        page_height: f32,
    },
    #[error("Font unavailable: {0}")]
    FontUnavailable(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, NotebookError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (default for most paper sizes)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PaperSize {
    A3,
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Tabloid => (279.4, 431.8),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// Text shared by every page of one document.
///
/// Built once per document (the academic year is resolved up front) and
/// only read afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageMetadata {
    pub author_name: String,
    pub subject_name: String,
    pub course_name: String,
    pub copyright: String,
    pub contacts: String,
    /// Pre-formatted span such as `2024-2025`
    pub academic_year: String,
}

impl PageMetadata {
    /// `© {copyright} {academic year}`, as printed in page footers
    pub fn copyright_line(&self) -> String {
        format!("© {} {}", self.copyright, self.academic_year)
    }
}

/// What a notebook is about, as supplied by the caller
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotebookContent {
    /// Document title stored in the PDF metadata
    pub title: String,
    pub author_name: String,
    pub subject_name: String,
    pub course_name: String,
    pub copyright: String,
    pub contacts: String,
}

impl NotebookContent {
    /// Page metadata for this notebook in the given academic year
    pub fn page_metadata(&self, academic_year: String) -> PageMetadata {
        PageMetadata {
            author_name: self.author_name.clone(),
            subject_name: self.subject_name.clone(),
            course_name: self.course_name.clone(),
            copyright: self.copyright.clone(),
            contacts: self.contacts.clone(),
            academic_year,
        }
    }
}
