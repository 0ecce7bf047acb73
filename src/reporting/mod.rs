pub mod formatter;

pub use formatter::{format_outcome, PREVIEW_LIMIT};
