//! Notebook document generation
//!
//! Ties the pieces together:
//! 1. Validate options and resolve the page metadata
//! 2. Lay out the title page and every ruled page
//! 3. Replay the layouts into a PDF and write it out
//!
//! Every page is laid out before the first PDF byte is produced, so a
//! configuration error never leaves a partial document behind.

use crate::academic_year::academic_year_in;
use crate::font::{FontResource, TextMetrics};
use crate::layout::{PageLayout, layout_regular_page, layout_title_page};
use crate::options::NotebookOptions;
use crate::render::render_document;
use crate::types::*;
use chrono::{DateTime, Utc};
use std::io::Write;
use std::path::Path;

/// Lay out all pages of a notebook: the optional title page, then
/// `pages_count` ruled pages
pub fn layout_document(
    metadata: &PageMetadata,
    options: &NotebookOptions,
    metrics: &impl TextMetrics,
) -> Result<Vec<PageLayout>> {
    options.validate()?;

    let page = options.page_geometry();
    let grid = options.grid_spec();

    let mut pages = Vec::with_capacity(options.pages_count.saturating_add(1));
    if options.generate_title {
        pages.push(layout_title_page(page, metadata, metrics));
    }
    for _ in 0..options.pages_count {
        pages.push(layout_regular_page(
            page,
            &options.variant,
            grid.cell_side,
            grid.draw_cornell,
            metadata,
            metrics,
        )?);
    }

    log::info!(
        "Laid out {} pages ({}title page, {}x{} grid)",
        pages.len(),
        if options.generate_title { "with " } else { "no " },
        grid.columns,
        grid.rows
    );

    Ok(pages)
}

/// Render a notebook to PDF bytes.
///
/// The font is parsed once here and released when the document is done;
/// `now` decides the academic year printed in the footers.
pub fn notebook_pdf_bytes(
    content: &NotebookContent,
    options: &NotebookOptions,
    font: &FontResource,
    now: DateTime<Utc>,
) -> Result<Vec<u8>> {
    let metadata = content.page_metadata(academic_year_in(now, options.utc_offset()?));
    let font = font.acquire()?;
    let pages = layout_document(&metadata, options, &font)?;
    Ok(render_document(&content.title, &pages, &font))
}

/// Render a notebook and write it to `output`
pub fn write_notebook<W: Write>(
    output: &mut W,
    content: &NotebookContent,
    options: &NotebookOptions,
    font: &FontResource,
    now: DateTime<Utc>,
) -> Result<()> {
    let bytes = notebook_pdf_bytes(content, options, font, now)?;
    output.write_all(&bytes)?;
    output.flush()?;
    Ok(())
}

/// Generate a notebook PDF at `output_path`.
///
/// The font file is read here; parsing and layout run on a blocking thread.
/// Nothing is written when layout fails.
pub async fn generate_pdf(
    content: &NotebookContent,
    options: &NotebookOptions,
    output_path: impl AsRef<Path>,
) -> Result<()> {
    options.validate()?;

    let content = content.clone();
    let options = options.clone();
    let output_path = output_path.as_ref().to_owned();

    let font = FontResource::load(&options.font).await?;
    let now = Utc::now();

    // Font parsing, layout and serialization are CPU-bound, spawn blocking
    let bytes =
        tokio::task::spawn_blocking(move || notebook_pdf_bytes(&content, &options, &font, now))
            .await??;

    tokio::fs::write(&output_path, &bytes).await?;
    log::info!("Wrote {} bytes to {}", bytes.len(), output_path.display());

    Ok(())
}
