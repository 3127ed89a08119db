use super::Notifier;
use crate::config::WatchTarget;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// A notification captured by the mock sink
#[derive(Debug, Clone, PartialEq)]
pub struct SentNotification {
    pub title: String,
    pub body: String,
    pub context_path: Option<PathBuf>,
}

/// Recording notifier for tests
#[derive(Clone, Default)]
pub struct MockNotifier {
    sent: Arc<Mutex<Vec<SentNotification>>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<SentNotification> {
        self.sent.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, title: &str, body: &str, context: Option<&WatchTarget>) {
        self.sent.lock().unwrap().push(SentNotification {
            title: title.to_string(),
            body: body.to_string(),
            context_path: context.map(|t| t.display_path.clone()),
        });
    }
}
