//! Layout data types for notebook pages
//!
//! These types sit between the geometric calculations and the canvas that
//! finally paints them. Coordinates are PDF points with the origin at the
//! bottom-left corner of the page.

use crate::constants::{
    CORNELL_LINE_WIDTH, DEFAULT_LINE_WIDTH, GRID_LINE_WIDTH, META_CELL_LINE_WIDTH,
};
use crate::types::{NotebookError, Result};

/// A position in page space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A square with its bottom-left corner at (x, y)
    pub fn square(x: f32, y: f32, side: f32) -> Self {
        Self::new(x, y, side, side)
    }

    /// Left edge x coordinate
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f32 {
        self.y
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Center y coordinate
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// The page every layout calculation is performed against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
}

impl PageGeometry {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Grid dimensions for a ruled page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// Cell side in points
    pub cell_side: f32,
    pub columns: usize,
    pub rows: usize,
    /// Add the three Cornell rules on top of the grid
    pub draw_cornell: bool,
}

impl GridSpec {
    /// Reject non-positive cell sides and empty grids
    pub fn validate(&self) -> Result<()> {
        if !self.cell_side.is_finite() || self.cell_side <= 0.0 {
            return Err(NotebookError::InvalidDimension(format!(
                "cell side must be positive, got {}",
                self.cell_side
            )));
        }
        if self.columns == 0 || self.rows == 0 {
            return Err(NotebookError::InvalidDimension(format!(
                "grid needs at least one column and row, got {}x{}",
                self.columns, self.rows
            )));
        }
        Ok(())
    }

    pub fn width(&self) -> f32 {
        self.columns as f32 * self.cell_side
    }

    pub fn height(&self) -> f32 {
        self.rows as f32 * self.cell_side
    }
}

/// Ink colours used by the template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    Black,
    Gray,
}

/// Stroke settings for a line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Line width in points
    pub width: f32,
    pub ink: Ink,
}

impl StrokeStyle {
    /// Hairline used for the ruled grid
    pub const GRID: StrokeStyle = StrokeStyle {
        width: GRID_LINE_WIDTH,
        ink: Ink::Gray,
    };

    /// Heavier rule dividing Cornell regions
    pub const CORNELL: StrokeStyle = StrokeStyle {
        width: CORNELL_LINE_WIDTH,
        ink: Ink::Gray,
    };

    /// Outline of metadata cells
    pub const META_CELL: StrokeStyle = StrokeStyle {
        width: META_CELL_LINE_WIDTH,
        ink: Ink::Black,
    };

    /// Outline painted around filled markers
    pub const MARKER: StrokeStyle = StrokeStyle {
        width: DEFAULT_LINE_WIDTH,
        ink: Ink::Black,
    };
}

/// Which template slot a text run fills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelRole {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    TitleBrand,
    TitleCourse,
    TitleSubject,
    TitleAuthor,
    TitleContacts,
    TitleCopyright,
}

/// A positioned text run
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// Baseline start of the text
    pub anchor: Point,
    pub text: String,
    /// Font size in points
    pub size: f32,
    pub role: LabelRole,
}

/// A single drawing instruction.
///
/// A page is an ordered list of these. Rectangle variants carry a batch of
/// rectangles painted by one fill or stroke operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawInstruction {
    Line {
        from: Point,
        to: Point,
        style: StrokeStyle,
    },
    /// Black fill plus outline, all rectangles in one paint operation
    FilledRects(Vec<Rect>),
    /// Outline only, all rectangles in one paint operation
    StrokedRects { rects: Vec<Rect>, style: StrokeStyle },
    Text(TextRun),
}

impl DrawInstruction {
    pub fn line(from: Point, to: Point, style: StrokeStyle) -> Self {
        DrawInstruction::Line { from, to, style }
    }
}

/// Result of the grid calculation
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    /// Bounding rectangle of the ruled area
    pub bounds: Rect,
    /// Vertical lines, left to right
    pub vertical_lines: Vec<(Point, Point)>,
    /// Horizontal lines, bottom to top
    pub horizontal_lines: Vec<(Point, Point)>,
    /// Title, summary and notes rules (empty when Cornell is off)
    pub cornell_lines: Vec<(Point, Point)>,
}

impl GridLayout {
    /// Drawing instructions for the grid, hairlines first
    pub fn instructions(&self) -> Vec<DrawInstruction> {
        let grid = self
            .vertical_lines
            .iter()
            .chain(self.horizontal_lines.iter())
            .map(|&(from, to)| DrawInstruction::line(from, to, StrokeStyle::GRID));
        let cornell = self
            .cornell_lines
            .iter()
            .map(|&(from, to)| DrawInstruction::line(from, to, StrokeStyle::CORNELL));
        grid.chain(cornell).collect()
    }
}

/// Kind of a laid out page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Title,
    Regular,
}

/// A fully laid out page, ready to be replayed onto a canvas
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub kind: PageKind,
    pub geometry: PageGeometry,
    /// Grid bounds for regular pages
    pub grid: Option<Rect>,
    pub instructions: Vec<DrawInstruction>,
}
