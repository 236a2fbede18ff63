//! Output reporters for statistics reports
//!
//! - `json` - the report document written to disk
//! - `text` - the human-readable console summary

mod json;
mod text;

pub use json::{render, write_report};
pub use text::render as render_summary;
