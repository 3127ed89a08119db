use super::Notifier;
use crate::config::WatchTarget;
use tracing::{debug, warn};

/// Desktop notification center sink
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, body: &str, context: Option<&WatchTarget>) {
        let mut notification = notify_rust::Notification::new();
        notification.appname("sharewatch").summary(title).body(body);

        if let Some(target) = context {
            attach_context(&mut notification, target);
        }

        match notification.show() {
            Ok(_) => debug!("Notification delivered: {}", title),
            Err(e) => warn!("Failed to deliver notification: {}", e),
        }
    }
}

// Hints ride along on freedesktop servers only; the click handler reads
// the folder path back out of them.
#[cfg(all(unix, not(target_os = "macos")))]
fn attach_context(notification: &mut notify_rust::Notification, target: &WatchTarget) {
    notification.hint(notify_rust::Hint::Custom(
        "x-sharewatch-folder".to_string(),
        target.display_path.display().to_string(),
    ));
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn attach_context(_notification: &mut notify_rust::Notification, _target: &WatchTarget) {}
