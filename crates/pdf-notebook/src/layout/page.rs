//! Page composition
//!
//! Runs the grid, marker, metadata-row and label calculations in order and
//! collects their instructions into one page.

use crate::constants::{LABEL_AREA_DROP, LABEL_AREA_GROW, MARKER_AREA_RAISE};
use crate::font::TextMetrics;
use crate::options::LayoutVariant;
use crate::types::{PageMetadata, Result};

use super::{
    DrawInstruction, PageGeometry, PageKind, PageLayout, Rect, compute_grid,
    compute_labels, compute_metadata_row, compute_title_page_labels, grid_origin,
    marker_instruction,
};

/// Lay out a ruled page.
///
/// The grid takes its columns and rows from `variant`. Fails before
/// producing any instruction when the grid does not fit.
pub fn layout_regular_page(
    page: PageGeometry,
    variant: &LayoutVariant,
    cell_side: f32,
    draw_cornell: bool,
    metadata: &PageMetadata,
    metrics: &impl TextMetrics,
) -> Result<PageLayout> {
    let grid = variant.grid_spec(cell_side, draw_cornell);
    let origin = grid_origin(page, &grid, variant.placement)?;
    let grid_layout = compute_grid(page, origin, &grid)?;
    let bounds = grid_layout.bounds;

    let mut instructions = grid_layout.instructions();

    let marker_area = Rect::new(
        bounds.x,
        bounds.y,
        bounds.width,
        bounds.height + MARKER_AREA_RAISE,
    );
    if variant.markers {
        instructions.push(marker_instruction(&marker_area, grid.cell_side));
    }
    if variant.metadata_row {
        instructions.extend(compute_metadata_row(&marker_area, grid.cell_side).instructions());
    }

    let label_area = Rect::new(
        bounds.x,
        bounds.y - LABEL_AREA_DROP,
        bounds.width,
        bounds.height + LABEL_AREA_GROW,
    );
    let labels = compute_labels(
        &label_area,
        variant.reserve_marker_space,
        grid.cell_side,
        variant.brand,
        metadata,
        metrics,
    );
    instructions.extend(labels.into_instructions());

    Ok(PageLayout {
        kind: PageKind::Regular,
        geometry: page,
        grid: Some(bounds),
        instructions,
    })
}

/// Lay out the title page
pub fn layout_title_page(
    page: PageGeometry,
    metadata: &PageMetadata,
    metrics: &impl TextMetrics,
) -> PageLayout {
    let instructions = compute_title_page_labels(page, metadata, metrics)
        .into_iter()
        .map(DrawInstruction::Text)
        .collect();

    PageLayout {
        kind: PageKind::Title,
        geometry: page,
        grid: None,
        instructions,
    }
}
