//! Metadata cell row
//!
//! A row of small squares above the grid where page number, date and similar
//! fields get marked by hand. Filled markers bracket each group of outlined
//! cells so a scanner can find the fields.

use crate::constants::{META_CELL_GAP, META_CELL_GROUPS, META_ROW_START_RATIO};

use super::{DrawInstruction, Rect, StrokeStyle};

/// Positions of every square in the metadata row
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataRow {
    /// Filled markers, one before each group and one after the last
    pub markers: Vec<Rect>,
    /// Outlined cells, grouped as in `META_CELL_GROUPS`
    pub groups: Vec<Vec<Rect>>,
}

impl MetadataRow {
    /// Instructions in painting order: marker, group, marker, group, marker
    pub fn instructions(&self) -> Vec<DrawInstruction> {
        let mut ops = Vec::with_capacity(self.markers.len() + self.groups.len());
        let mut markers = self.markers.iter();

        for group in &self.groups {
            if let Some(marker) = markers.next() {
                ops.push(DrawInstruction::FilledRects(vec![*marker]));
            }
            ops.push(DrawInstruction::StrokedRects {
                rects: group.clone(),
                style: StrokeStyle::META_CELL,
            });
        }
        for marker in markers {
            ops.push(DrawInstruction::FilledRects(vec![*marker]));
        }

        ops
    }
}

/// Lay out the metadata row along the top edge of `target`.
///
/// The row starts at 40% of the target width. Squares are `cell_side` wide
/// and spaced `cell_side + 2` apart.
pub fn compute_metadata_row(target: &Rect, cell_side: f32) -> MetadataRow {
    let y = target.top();
    let step = cell_side + META_CELL_GAP;

    let mut x = target.x + target.width * META_ROW_START_RATIO;
    let mut markers = vec![Rect::square(x, y, cell_side)];
    let mut groups = Vec::with_capacity(META_CELL_GROUPS.len());

    for count in META_CELL_GROUPS {
        x += step;
        let mut cells = Vec::with_capacity(count);
        for _ in 0..count {
            cells.push(Rect::square(x, y, cell_side));
            x += step;
        }
        groups.push(cells);
        markers.push(Rect::square(x, y, cell_side));
    }

    MetadataRow { markers, groups }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_shape() {
        let target = Rect::new(0.0, 0.0, 500.0, 700.0);
        let row = compute_metadata_row(&target, 10.0);

        assert_eq!(row.markers.len(), 3);
        assert_eq!(row.groups.len(), 2);
        assert_eq!(row.groups[0].len(), 3);
        assert_eq!(row.groups[1].len(), 1);
        assert!(row.markers.iter().all(|r| r.y == 700.0));
        assert!(row.groups.iter().flatten().all(|r| r.y == 700.0));
    }

    #[test]
    fn test_row_positions() {
        let target = Rect::new(10.0, 0.0, 500.0, 700.0);
        let row = compute_metadata_row(&target, 10.0);

        // 10 + 0.4 * 500
        assert_eq!(row.markers[0].x, 210.0);
        let xs: Vec<f32> = row.groups[0].iter().map(|r| r.x).collect();
        assert_eq!(xs, vec![222.0, 234.0, 246.0]);
        assert_eq!(row.markers[1].x, 258.0);
        assert_eq!(row.groups[1][0].x, 270.0);
        assert_eq!(row.markers[2].x, 282.0);
    }

    #[test]
    fn test_instruction_order() {
        let row = compute_metadata_row(&Rect::new(0.0, 0.0, 100.0, 100.0), 5.0);
        let ops = row.instructions();

        assert_eq!(ops.len(), 5);
        assert!(matches!(ops[0], DrawInstruction::FilledRects(_)));
        assert!(matches!(&ops[1], DrawInstruction::StrokedRects { rects, .. } if rects.len() == 3));
        assert!(matches!(ops[2], DrawInstruction::FilledRects(_)));
        assert!(matches!(&ops[3], DrawInstruction::StrokedRects { rects, .. } if rects.len() == 1));
        assert!(matches!(ops[4], DrawInstruction::FilledRects(_)));
    }
}
