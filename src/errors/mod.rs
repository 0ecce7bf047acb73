pub mod types;

pub use types::OrcaChatError;
