use crate::config::{ConfigManager, StateManager};
use crate::mount::volume_root;
use crate::platform::detect_platform;
use crate::secrets::{KeyringStore, SecretStore};
use anyhow::Result;
use colored::*;

pub async fn execute() -> Result<()> {
    let config = ConfigManager::new()?;
    let settings = config.load_or_default();
    let state = StateManager::new()?.load_or_default();
    let platform_info = detect_platform()?;

    println!("{}", "Sharewatch Status".bold().cyan());
    println!("{}", "=================".cyan());
    println!();

    println!("{}", "Target:".bold());
    match &state.target {
        None => {
            println!("  {}", "No target configured".yellow());
            println!(
                "  Select a folder with {}",
                "sharewatch target set <path>".cyan()
            );
        }
        Some(target) => {
            println!("  Folder: {}", target.display_path.display());

            let resolved = target.handle.resolve();
            if resolved.stale {
                println!(
                    "  Handle: {} (best effort: {})",
                    "stale".yellow(),
                    resolved.path.display()
                );
            } else {
                println!("  Handle: {}", "fresh".green());
            }

            let volume = volume_root(&target.display_path, &platform_info.mounts_root);
            if volume.exists() {
                println!("  Volume: {} {} ✓", volume.display(), "reachable".green());
            } else {
                println!("  Volume: {} {} ✗", volume.display(), "unreachable".red());
            }

            match state.previous_file_count {
                Some(count) => println!("  Baseline: {} files", count),
                None => println!("  Baseline: {}", "not established".dimmed()),
            }
        }
    }
    println!();

    println!("{}", "Server:".bold());
    if settings.server_address.is_empty() {
        println!("  Address: {}", "(not set)".dimmed());
    } else {
        println!("  Address: {}", settings.server_address);
    }
    if settings.username.is_empty() {
        println!("  Username: {}", "(not set)".dimmed());
    } else {
        println!("  Username: {}", settings.username);
    }
    if settings.server_address.is_empty() {
        println!("  Password: {}", "(no server configured)".dimmed());
    } else {
        match KeyringStore::new().retrieve(&settings.server_address) {
            Ok(Some(_)) => println!("  Password: {} ✓", "stored".green()),
            Ok(None) => {
                println!("  Password: {} ✗", "not stored".red());
                println!(
                    "  Store one with {}",
                    "sharewatch credentials set".cyan()
                );
            }
            Err(e) => println!("  Password: {} ({})", "unavailable".yellow(), e),
        }
    }
    println!("  Interval: every {} minutes", settings.check_interval_minutes);
    println!();

    println!("{}", "System:".bold());
    match platform_info.platform.mount_tool_name() {
        Some(tool) if platform_info.platform.can_mount() => {
            println!("  Mount helper: {} {} ✓", tool, "available".green());
        }
        Some(tool) => {
            println!("  Mount helper: {} {} ✗", tool, "not found".red());
        }
        None => println!("  Mount helper: {}", "unsupported platform".red()),
    }
    println!("  Mounts root: {}", platform_info.mounts_root.display());

    Ok(())
}
