use super::types::{CheckResult, FailureKind, PollingState};
use crate::config::{ConfigManager, StateManager, WatchTarget};
use crate::handle::AccessBroker;
use crate::mount::MountController;
use crate::notify::Notifier;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Orchestrates check cycles over one watch target: mount recovery,
/// handle resolution, scoped enumeration, delta computation and
/// notification dispatch.
pub struct SharePoller {
    controller: MountController,
    broker: Arc<dyn AccessBroker>,
    notifier: Arc<dyn Notifier>,
    config: ConfigManager,
    state: StateManager,
    polling: PollingState,
}

impl SharePoller {
    pub fn new(
        controller: MountController,
        broker: Arc<dyn AccessBroker>,
        notifier: Arc<dyn Notifier>,
        config: ConfigManager,
        state: StateManager,
    ) -> Self {
        let polling = PollingState {
            previous_file_count: state.load_or_default().previous_file_count,
        };
        Self {
            controller,
            broker,
            notifier,
            config,
            state,
            polling,
        }
    }

    pub fn baseline(&self) -> Option<u64> {
        self.polling.previous_file_count
    }

    /// One complete evaluation of the watched folder's file count.
    ///
    /// Every failure is absorbed into the returned value; nothing here
    /// escapes a cycle. The next scheduled cycle is the only retry.
    pub async fn run_cycle(&self, target: &WatchTarget) -> CheckResult {
        // Settings are re-read at the start of every cycle, so credential
        // changes apply without restarting the watcher.
        let settings = self.config.load_or_default();

        if let Err(err) = self.controller.ensure_mounted(target, &settings).await {
            return CheckResult::Failure {
                kind: FailureKind::from(&err),
                message: err.to_string(),
            };
        }

        let resolved = target.handle.resolve();
        if resolved.stale {
            warn!(
                "Folder handle is stale, proceeding with {}",
                resolved.path.display()
            );
        }

        // The guard's drop is the release; every exit path below runs it
        let _access = match self.broker.acquire(&resolved.path) {
            Ok(guard) => guard,
            Err(err) => {
                return CheckResult::Failure {
                    kind: FailureKind::EnumerationError,
                    message: err.to_string(),
                };
            }
        };

        match count_files(&resolved.path).await {
            Ok(file_count) => CheckResult::Success { file_count },
            Err(err) => CheckResult::Failure {
                kind: FailureKind::EnumerationError,
                message: format!("Failed to list {}: {err}", resolved.path.display()),
            },
        }
    }

    /// Digest a cycle's outcome: compare against the baseline, notify on
    /// change or failure, and persist the new baseline. Failures leave
    /// the baseline alone so a later success still sees the delta
    /// against the last known-good count.
    pub fn apply_result(&mut self, target: &WatchTarget, result: &CheckResult) {
        match result {
            CheckResult::Success { file_count } => {
                match self.polling.previous_file_count {
                    Some(previous) if *file_count != previous => {
                        let (title, body) = describe_change(previous, *file_count);
                        info!("{}", body);
                        self.notifier.notify(&title, &body, Some(target));
                    }
                    Some(_) => debug!("File count unchanged: {}", file_count),
                    None => info!("Baseline established: {} files", file_count),
                }
                self.polling.previous_file_count = Some(*file_count);
                if let Err(e) = self.state.set_baseline(Some(*file_count)) {
                    warn!("Failed to persist baseline: {}", e);
                }
            }
            CheckResult::Failure { kind, message } => {
                warn!("Check failed: {}", message);
                self.notifier.notify(kind.title(), message, None);
            }
        }
    }

    /// One scheduled tick: check, then digest.
    pub async fn run_once(&mut self, target: &WatchTarget) -> CheckResult {
        let result = self.run_cycle(target).await;
        self.apply_result(target, &result);
        result
    }

    /// Install a new target, clearing the baseline with it.
    pub fn replace_target(&mut self, target: Option<WatchTarget>) -> crate::error::Result<()> {
        self.polling.previous_file_count = None;
        self.state.replace_target(target)
    }
}

fn describe_change(previous: u64, current: u64) -> (String, String) {
    if current > previous {
        (
            "New files detected".to_string(),
            format!(
                "File count increased from {previous} to {current} (+{})",
                current - previous
            ),
        )
    } else {
        (
            "Files removed".to_string(),
            format!(
                "File count decreased from {previous} to {current} (-{})",
                previous - current
            ),
        )
    }
}

/// Count direct children that are confirmed files.
///
/// Hidden entries and directories are skipped; an entry whose type
/// cannot be determined is skipped too rather than failing the cycle.
pub async fn count_files(path: &Path) -> std::io::Result<u64> {
    let mut entries = tokio::fs::read_dir(path).await?;
    let mut count = 0u64;

    while let Some(entry) = entries.next_entry().await? {
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        let file_type = match entry.file_type().await {
            Ok(file_type) => file_type,
            Err(e) => {
                debug!("Skipping {}: type unknown ({})", entry.path().display(), e);
                continue;
            }
        };

        let is_dir = if file_type.is_symlink() {
            match tokio::fs::metadata(entry.path()).await {
                Ok(meta) => meta.is_dir(),
                // Dangling link: not confirmably a file
                Err(_) => continue,
            }
        } else {
            file_type.is_dir()
        };

        if !is_dir {
            count += 1;
        }
    }

    Ok(count)
}
