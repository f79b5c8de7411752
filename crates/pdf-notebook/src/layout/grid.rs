//! Grid layout calculation
//!
//! This module places the ruled grid on the page and computes its lines,
//! including the optional Cornell rules.

use crate::constants::{CORNELL_NOTES_CELLS, CORNELL_SUMMARY_CELLS, CORNELL_TITLE_CELLS};
use crate::options::GridPlacement;
use crate::types::{NotebookError, Result};

use super::{GridLayout, GridSpec, PageGeometry, Point, Rect};

/// Rounding slack for a page extent: one f32 ulp-scale step, no more
fn fit_slack(extent: f32) -> f32 {
    extent.abs() * f32::EPSILON
}

// =============================================================================
// Placement
// =============================================================================

/// Bottom-left corner of the grid for the given placement mode.
///
/// Centered placement splits the free space evenly on both axes. Anchored
/// placement centers horizontally and sits at a fixed bottom offset.
pub fn grid_origin(page: PageGeometry, spec: &GridSpec, placement: GridPlacement) -> Result<Point> {
    spec.validate()?;

    let x_margin = (page.width - spec.width()) / 2.0;

    let origin = match placement {
        GridPlacement::Centered => {
            let y_margin = (page.height - spec.height()) / 2.0;
            Point::new(x_margin, y_margin)
        }
        GridPlacement::Anchored { bottom_pt } => Point::new(x_margin, bottom_pt),
    };

    ensure_fits(page, spec, origin)?;
    Ok(origin)
}

fn ensure_fits(page: PageGeometry, spec: &GridSpec, origin: Point) -> Result<()> {
    let x_slack = fit_slack(page.width);
    let y_slack = fit_slack(page.height);
    let fits = origin.x >= -x_slack
        && origin.y >= -y_slack
        && origin.x + spec.width() <= page.width + x_slack
        && origin.y + spec.height() <= page.height + y_slack;

    if fits {
        Ok(())
    } else {
        Err(NotebookError::GridTooLarge {
            grid_width: spec.width(),
            grid_height: spec.height(),
            page_width: page.width,
            page_height: page.height,
        })
    }
}

// =============================================================================
// Ruling
// =============================================================================

/// Compute the grid bounds and every line of the grid.
///
/// Both boundaries are ruled, so a grid has `columns + 1` vertical and
/// `rows + 1` horizontal lines. Fails with `GridTooLarge` when the grid
/// starting at `start` leaves the page.
pub fn compute_grid(page: PageGeometry, start: Point, spec: &GridSpec) -> Result<GridLayout> {
    spec.validate()?;
    ensure_fits(page, spec, start)?;

    let bounds = Rect::new(start.x, start.y, spec.width(), spec.height());
    let cell = spec.cell_side;

    let vertical_lines = (0..=spec.columns)
        .map(|i| bounds.left() + i as f32 * cell)
        .map(|x| (Point::new(x, bounds.top()), Point::new(x, bounds.bottom())))
        .collect();

    let horizontal_lines = (0..=spec.rows)
        .map(|i| bounds.bottom() + i as f32 * cell)
        .map(|y| (Point::new(bounds.left(), y), Point::new(bounds.right(), y)))
        .collect();

    let cornell_lines = if spec.draw_cornell {
        cornell_rules(&bounds, cell)
    } else {
        Vec::new()
    };

    log::debug!(
        "Grid {}x{} at ({:.2}, {:.2}), {:.2}x{:.2}pt",
        spec.columns,
        spec.rows,
        bounds.x,
        bounds.y,
        bounds.width,
        bounds.height
    );

    Ok(GridLayout {
        bounds,
        vertical_lines,
        horizontal_lines,
        cornell_lines,
    })
}

/// Title rule, summary rule and notes column rule, in that order
fn cornell_rules(bounds: &Rect, cell: f32) -> Vec<(Point, Point)> {
    let title_y = bounds.top() - CORNELL_TITLE_CELLS * cell;
    let summary_y = bounds.bottom() + CORNELL_SUMMARY_CELLS * cell;
    let notes_x = bounds.left() + CORNELL_NOTES_CELLS * cell;

    vec![
        (
            Point::new(bounds.left(), title_y),
            Point::new(bounds.right(), title_y),
        ),
        (
            Point::new(bounds.left(), summary_y),
            Point::new(bounds.right(), summary_y),
        ),
        (
            Point::new(notes_x, bounds.top()),
            Point::new(notes_x, summary_y),
        ),
    ]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(cols: usize, rows: usize, cornell: bool) -> GridSpec {
        GridSpec {
            cell_side: 10.0,
            columns: cols,
            rows,
            draw_cornell: cornell,
        }
    }

    #[test]
    fn test_line_counts_include_both_boundaries() {
        let page = PageGeometry::new(200.0, 300.0);
        let grid = compute_grid(page, Point::new(0.0, 0.0), &spec(4, 7, false)).unwrap();

        assert_eq!(grid.vertical_lines.len(), 5);
        assert_eq!(grid.horizontal_lines.len(), 8);
        assert!(grid.cornell_lines.is_empty());

        let (first, _) = grid.vertical_lines[0];
        let (last, _) = grid.vertical_lines[4];
        assert_eq!(first.x, 0.0);
        assert_eq!(last.x, 40.0);
    }

    #[test]
    fn test_vertical_lines_run_top_to_bottom() {
        let page = PageGeometry::new(200.0, 300.0);
        let grid = compute_grid(page, Point::new(5.0, 20.0), &spec(2, 3, false)).unwrap();

        let (from, to) = grid.vertical_lines[1];
        assert_eq!(from, Point::new(15.0, 50.0));
        assert_eq!(to, Point::new(15.0, 20.0));

        let (from, to) = grid.horizontal_lines[2];
        assert_eq!(from, Point::new(5.0, 40.0));
        assert_eq!(to, Point::new(25.0, 40.0));
    }

    #[test]
    fn test_cornell_rules() {
        let page = PageGeometry::new(200.0, 300.0);
        let grid = compute_grid(page, Point::new(0.0, 0.0), &spec(10, 20, true)).unwrap();

        assert_eq!(grid.cornell_lines.len(), 3);
        // Title rule three cells below the top
        assert_eq!(grid.cornell_lines[0].0, Point::new(0.0, 170.0));
        assert_eq!(grid.cornell_lines[0].1, Point::new(100.0, 170.0));
        // Summary rule five cells above the bottom
        assert_eq!(grid.cornell_lines[1].0.y, 50.0);
        // Notes rule eight cells in, from the top down to the summary rule
        assert_eq!(grid.cornell_lines[2].0, Point::new(80.0, 200.0));
        assert_eq!(grid.cornell_lines[2].1, Point::new(80.0, 50.0));
    }

    #[test]
    fn test_centered_origin() {
        let page = PageGeometry::new(200.0, 300.0);
        let origin = grid_origin(page, &spec(10, 20, false), GridPlacement::Centered).unwrap();
        assert_eq!(origin, Point::new(50.0, 50.0));
    }

    #[test]
    fn test_anchored_origin() {
        let page = PageGeometry::new(200.0, 300.0);
        let origin = grid_origin(
            page,
            &spec(10, 20, false),
            GridPlacement::Anchored { bottom_pt: 30.0 },
        )
        .unwrap();
        assert_eq!(origin, Point::new(50.0, 30.0));
    }

    #[test]
    fn test_grid_too_large() {
        let page = PageGeometry::new(200.0, 300.0);
        let result = grid_origin(page, &spec(21, 10, false), GridPlacement::Centered);
        assert!(matches!(result, Err(NotebookError::GridTooLarge { .. })));

        let result = grid_origin(
            page,
            &spec(10, 28, false),
            GridPlacement::Anchored { bottom_pt: 30.0 },
        );
        assert!(matches!(result, Err(NotebookError::GridTooLarge { .. })));
    }

    #[test]
    fn test_invalid_dimensions() {
        let page = PageGeometry::new(200.0, 300.0);
        let mut bad = spec(0, 10, false);
        assert!(matches!(
            compute_grid(page, Point::default(), &bad),
            Err(NotebookError::InvalidDimension(_))
        ));

        bad = spec(5, 5, false);
        bad.cell_side = 0.0;
        assert!(matches!(
            compute_grid(page, Point::default(), &bad),
            Err(NotebookError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_small_cornell_grid_still_rules() {
        let page = PageGeometry::new(200.0, 300.0);
        let grid = compute_grid(page, Point::default(), &spec(5, 20, true)).unwrap();
        assert_eq!(grid.vertical_lines.len(), 6);
        assert_eq!(grid.cornell_lines.len(), 3);

        let grid = compute_grid(page, Point::default(), &spec(2, 2, true)).unwrap();
        assert_eq!(grid.cornell_lines.len(), 3);
    }

    #[test]
    fn test_exact_fit_and_slight_overflow() {
        let page = PageGeometry::new(200.0, 300.0);
        let exact = spec(20, 30, false);
        assert!(grid_origin(page, &exact, GridPlacement::Centered).is_ok());

        let mut over = exact;
        over.cell_side = 10.00002;
        assert!(matches!(
            grid_origin(page, &over, GridPlacement::Centered),
            Err(NotebookError::GridTooLarge { .. })
        ));
    }
}
