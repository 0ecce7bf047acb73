use super::record::RemoteRecord;

/// Why a remote call produced no records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    MissingCredential,
    TransportError,
    RemoteStatusError,
    DecodeError,
}

impl FailureReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingCredential => "missing_credential",
            Self::TransportError => "transport_error",
            Self::RemoteStatusError => "remote_status_error",
            Self::DecodeError => "decode_error",
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub reason: FailureReason,
    /// Single-line text shown to the user as-is.
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Success { items: Vec<RemoteRecord> },
    Failure(FetchFailure),
}

impl FetchOutcome {
    pub fn failure(reason: FailureReason, detail: impl Into<String>) -> Self {
        FetchOutcome::Failure(FetchFailure { reason, detail: detail.into() })
    }

    pub fn failure_reason(&self) -> Option<FailureReason> {
        match self {
            FetchOutcome::Failure(f) => Some(f.reason),
            FetchOutcome::Success { .. } => None,
        }
    }
}
