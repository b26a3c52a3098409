pub mod blocks;
pub mod helpers;
pub mod preview;
pub mod provenance;
pub mod registry;
pub mod sections;
pub mod templates;

pub use blocks::{render_blocks, Fragment};
pub use preview::{render_page, render_placeholder, CourseBuilder, PreviewState};
pub use templates::{engine, select_template, TemplateId};
