//! Turns a course JSON document into a standalone interactive landing page.
//!
//! The pipeline is `ingest` (parse and shape check) → per-block resolution of
//! display defaults → tera rendering with one of several page designs.

pub mod cli;
pub mod course;
pub mod error;
pub mod logging;
pub mod render;
pub mod resolve;
pub mod settings;
pub mod util;
