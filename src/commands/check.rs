use crate::config::StateManager;
use crate::poller::CheckResult;
use anyhow::Result;
use colored::*;

pub async fn execute() -> Result<()> {
    let state = StateManager::new()?.load_or_default();
    let Some(target) = state.target else {
        return Err(crate::error::WatchError::NoTargetConfigured.into());
    };

    let mut poller = super::build_poller()?;
    match poller.run_once(&target).await {
        CheckResult::Success { file_count } => {
            println!(
                "{} {} — {} files",
                "✓".green(),
                target.display_path.display(),
                file_count
            );
        }
        CheckResult::Failure { kind, message } => {
            println!("{} {}: {}", "✗".red(), kind.title(), message);
        }
    }
    Ok(())
}
