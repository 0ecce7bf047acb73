pub mod source;
pub mod client;

pub use source::ReportSource;
pub use client::{OrcaClient, MISSING_API_KEY_MESSAGE};
