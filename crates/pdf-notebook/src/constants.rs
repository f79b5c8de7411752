//! Template constants for notebook pages
//!
//! The offsets below are part of the printed template. Scanning software
//! relies on them, so they are fixed values rather than derived ones.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Grid
// =============================================================================

/// Default grid cell side in millimeters
pub const DEFAULT_CELL_SIDE_MM: f32 = 5.0;

/// Line width for grid lines (points)
pub const GRID_LINE_WIDTH: f32 = 0.1;

/// Line width for Cornell rules (points)
pub const CORNELL_LINE_WIDTH: f32 = 1.0;

/// Title rule distance below the grid top, in cells
pub const CORNELL_TITLE_CELLS: f32 = 3.0;

/// Summary rule distance above the grid bottom, in cells
pub const CORNELL_SUMMARY_CELLS: f32 = 5.0;

/// Notes column rule distance from the grid's left edge, in cells
pub const CORNELL_NOTES_CELLS: f32 = 8.0;

/// Grid bottom offset used by anchored placement (points)
pub const ANCHORED_GRID_BOTTOM: f32 = 30.0;

// =============================================================================
// Markers and Metadata Row
// =============================================================================

/// The marker area is the grid raised by this much at the top (points)
pub const MARKER_AREA_RAISE: f32 = 3.0;

/// Gap between a corner marker and a label beside it (points)
pub const MARKER_LABEL_GAP: f32 = 3.0;

/// Fraction of the row width before the first metadata marker
pub const META_ROW_START_RATIO: f32 = 0.4;

/// Gap between consecutive metadata cells (points)
pub const META_CELL_GAP: f32 = 2.0;

/// Line width for metadata cell outlines (points)
pub const META_CELL_LINE_WIDTH: f32 = 0.1;

/// Outlined cells per metadata group; a filled marker separates groups
pub const META_CELL_GROUPS: [usize; 2] = [3, 1];

/// Default outline width for filled shapes (PDF default line width)
pub const DEFAULT_LINE_WIDTH: f32 = 1.0;

// =============================================================================
// Labels
// =============================================================================

/// The label area starts this far below the grid bottom (points)
pub const LABEL_AREA_DROP: f32 = 9.0;

/// The label area is this much taller than the grid (points)
pub const LABEL_AREA_GROW: f32 = 15.0;

/// Font size for the top label row (points)
pub const TOP_LABEL_FONT_SIZE: f32 = 11.0;

/// Font size for the bottom label row (points)
pub const BOTTOM_LABEL_FONT_SIZE: f32 = 8.0;

pub const BRAND_DIGITAL: &str = "Edustor Digital";
pub const BRAND_PAPER: &str = "Edustor Paper";

// =============================================================================
// Title Page
// =============================================================================

pub const TITLE_BRAND_OFFSET_FROM_TOP: f32 = 50.0;
pub const TITLE_COURSE_OFFSET_FROM_TOP: f32 = 365.0;
pub const TITLE_SUBJECT_OFFSET_FROM_TOP: f32 = 400.0;
pub const TITLE_AUTHOR_OFFSET_FROM_BOTTOM: f32 = 100.0;
pub const TITLE_CONTACTS_OFFSET_FROM_BOTTOM: f32 = 80.0;
pub const TITLE_COPYRIGHT_OFFSET_FROM_BOTTOM: f32 = 20.0;

pub const TITLE_BRAND_FONT_SIZE: f32 = 18.0;
pub const TITLE_COURSE_FONT_SIZE: f32 = 20.0;
pub const TITLE_SUBJECT_FONT_SIZE: f32 = 30.0;
pub const TITLE_AUTHOR_FONT_SIZE: f32 = 18.0;
pub const TITLE_CONTACTS_FONT_SIZE: f32 = 10.0;
pub const TITLE_COPYRIGHT_FONT_SIZE: f32 = 10.0;

// =============================================================================
// Academic Year
// =============================================================================

/// Last month (1-based) that still belongs to the previous academic year
pub const ACADEMIC_YEAR_LAST_MONTH: u32 = 6;

/// Default UTC offset for the academic year clock (Moscow, minutes)
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 180;

// =============================================================================
// Document
// =============================================================================

/// Upper bound on ruled pages in one notebook
pub const MAX_PAGES_COUNT: usize = 10_000;
