pub mod constants;
pub mod layout;
pub mod render;

mod academic_year;
mod font;
mod generate;
mod options;
mod types;

pub use academic_year::{academic_year, academic_year_in};
pub use font::{FontHandle, FontResource, FontSource, LoadedFont, TextMetrics};
pub use generate::{generate_pdf, layout_document, notebook_pdf_bytes, write_notebook};
pub use options::*;
pub use types::*;
