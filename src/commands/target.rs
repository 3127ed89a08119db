use crate::config::{StateManager, WatchTarget};
use crate::handle::FolderHandle;
use crate::utils::paths::expand_path;
use anyhow::Result;
use colored::*;
use std::path::PathBuf;

pub async fn set(path: PathBuf) -> Result<()> {
    let expanded = expand_path(&path)?;
    let handle = FolderHandle::capture(&expanded)?;
    let display_path = handle.stored_path().to_path_buf();

    StateManager::new()?.replace_target(Some(WatchTarget::new(handle, display_path.clone())))?;

    println!("{} Watching {}", "✓".green(), display_path.display());
    println!("Baseline cleared; the next check establishes a fresh one.");
    Ok(())
}

pub async fn show() -> Result<()> {
    match StateManager::new()?.load_or_default().target {
        Some(target) => {
            println!("{}", target.display_path.display());
            let resolved = target.handle.resolve();
            if resolved.stale {
                println!(
                    "{} folder moved, now at {}",
                    "warning:".yellow(),
                    resolved.path.display()
                );
            }
        }
        None => println!("{}", "No target configured".yellow()),
    }
    Ok(())
}

pub async fn clear() -> Result<()> {
    StateManager::new()?.replace_target(None)?;
    println!("{} Target cleared", "✓".green());
    Ok(())
}
