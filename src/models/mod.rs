pub mod message;
pub mod query;
pub mod record;
pub mod outcome;

pub use message::{ChatMessage, Role};
pub use query::{Category, QuerySpec, RemoteCredentials, DEFAULT_BASE_URL};
pub use record::{AlertRecord, AssetRecord, RemoteRecord};
pub use outcome::{FailureReason, FetchFailure, FetchOutcome};
