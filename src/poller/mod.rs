mod cycle;
mod scheduler;
mod types;

pub use cycle::{SharePoller, count_files};
pub use types::{CheckResult, FailureKind, PollingState};
