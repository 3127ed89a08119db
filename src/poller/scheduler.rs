use super::cycle::SharePoller;
use super::types::CheckResult;
use crate::config::WatchTarget;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

impl SharePoller {
    /// Run the periodic check loop: one immediate cycle, then one per
    /// period. Cycles never overlap — the loop awaits each cycle to
    /// completion, and a tick that comes due while a cycle is still
    /// running is skipped rather than queued, since concurrent mount
    /// attempts against the same volume are unsafe.
    ///
    /// Target and interval are fixed for the lifetime of the loop;
    /// changing either means restarting it.
    pub async fn watch(&mut self, target: &WatchTarget, period: Duration) -> crate::error::Result<()> {
        info!(
            "Watching {} every {:?}",
            target.display_path.display(),
            period
        );

        let mut ticks = tokio::time::interval(period);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            // The first tick completes immediately
            ticks.tick().await;
            match self.run_once(target).await {
                CheckResult::Success { file_count } => {
                    debug!("Cycle complete: {} files", file_count);
                }
                CheckResult::Failure { kind, .. } => {
                    debug!("Cycle failed: {}", kind.title());
                }
            }
        }
    }
}
