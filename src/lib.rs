pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod intent;
pub mod models;
pub mod orca;
pub mod pipeline;
pub mod reporting;
