use crate::error::MountError;

/// Outcome of one check cycle. Transient: the only part that outlives
/// the cycle is a successful count, adopted as the new baseline.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckResult {
    Success { file_count: u64 },
    Failure { kind: FailureKind, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    CredentialsMissing,
    MountCommandFailed,
    RemountVerificationFailed,

    /// Mount-level failure with no more specific kind
    Unavailable,

    /// Path access, removal, or permission trouble during listing
    EnumerationError,
}

impl FailureKind {
    /// Notification title for this failure
    pub fn title(&self) -> &'static str {
        match self {
            FailureKind::CredentialsMissing => "Server credentials missing",
            FailureKind::MountCommandFailed => "Mount command failed",
            FailureKind::RemountVerificationFailed => "Remount failed",
            FailureKind::Unavailable => "Share unavailable",
            FailureKind::EnumerationError => "Folder check failed",
        }
    }
}

impl From<&MountError> for FailureKind {
    fn from(err: &MountError) -> Self {
        match err {
            MountError::CredentialsMissing => FailureKind::CredentialsMissing,
            MountError::CommandFailed { .. } => FailureKind::MountCommandFailed,
            MountError::VerificationFailed { .. } => FailureKind::RemountVerificationFailed,
            MountError::Secret { .. } | MountError::OpenerNotFound { .. } | MountError::Io(_) => {
                FailureKind::Unavailable
            }
        }
    }
}

/// Comparison state across cycles. The baseline belongs to exactly one
/// watch target; installing a new target resets it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PollingState {
    pub previous_file_count: Option<u64>,
}
