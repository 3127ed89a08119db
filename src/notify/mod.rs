mod desktop;

#[cfg(test)]
mod mock;

pub use desktop::DesktopNotifier;

#[cfg(test)]
pub use mock::{MockNotifier, SentNotification};

use crate::config::WatchTarget;

/// Fire-and-forget notification sink.
///
/// Delivery is never awaited or confirmed; failures are logged and
/// dropped. The context carries the watched folder so a click handler
/// can navigate back to it — resolution of that reference happens
/// entirely outside this crate.
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, body: &str, context: Option<&WatchTarget>);
}
