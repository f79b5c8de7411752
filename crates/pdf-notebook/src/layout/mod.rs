//! Page geometry for notebook pages
//!
//! Everything here is a pure calculation. The functions take page and grid
//! dimensions plus a text-width query and return drawing instructions:
//! - Grid placement, ruling and Cornell rules
//! - Corner registration markers
//! - The metadata cell row above the grid
//! - Label anchors for ruled pages and the title page

mod grid;
mod labels;
mod markers;
mod meta_fields;
mod page;
mod types;

pub use grid::*;
pub use labels::*;
pub use markers::*;
pub use meta_fields::*;
pub use page::*;
pub use types::*;
