use async_trait::async_trait;
use crate::models::{FetchOutcome, QuerySpec, RemoteCredentials};

/// Read-only access to the security platform's reporting data.
///
/// Implementations perform at most one remote call per `fetch` and report
/// every failure as a `FetchOutcome::Failure` value rather than an error.
#[async_trait]
pub trait ReportSource: Send + Sync {
    async fn fetch(&self, spec: &QuerySpec, creds: &RemoteCredentials) -> FetchOutcome;

    /// Source name for logging
    fn source_name(&self) -> &str;
}
