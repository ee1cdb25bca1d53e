//! The interface through which the pipeline talks to a user interface.

use crate::domain::{ModelStatus, Notification, Severity};
use crate::processors::RankedResult;
use tracing::{error, info, warn};

/// Receives state changes, results and messages from a classification session.
///
/// The session only calls into the presenter; it never reads UI state back.
pub trait Presenter {
    /// The model moved to a new lifecycle state.
    fn on_model_state_changed(&mut self, status: &ModelStatus);

    /// A classification finished. Every class is included, most likely first.
    fn on_classification_result(&mut self, result: &RankedResult);

    /// An operation failed. The message is meant to be shown for a few seconds.
    fn on_error(&mut self, message: &str, severity: Severity);

    /// A non-error notice, such as a successful model load.
    fn on_notice(&mut self, _message: &str, _severity: Severity) {}

    /// A classification started (`true`) or finished (`false`).
    fn on_busy_changed(&mut self, _busy: bool) {}
}

/// Presenter that writes everything to the log.
///
/// Errors and notices become [`Notification`]s; the most recent one is kept
/// so a caller can show it for its TTL.
#[derive(Debug, Clone, Default)]
pub struct TracingPresenter {
    /// Number of entries logged per result.
    top_k: Option<usize>,
    last_notification: Option<Notification>,
}

impl TracingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top_k(mut self, k: usize) -> Self {
        self.top_k = Some(k);
        self
    }

    pub fn last_notification(&self) -> Option<&Notification> {
        self.last_notification.as_ref()
    }

    fn notify(&mut self, notification: Notification) {
        let ttl_ms = notification.ttl.as_millis() as u64;
        match notification.severity {
            Severity::Error => error!(ttl_ms, "{notification}"),
            Severity::Warning => warn!(ttl_ms, "{notification}"),
            Severity::Success => info!(ttl_ms, "{notification}"),
        }
        self.last_notification = Some(notification);
    }
}

impl Presenter for TracingPresenter {
    fn on_model_state_changed(&mut self, status: &ModelStatus) {
        info!("Model state: {status}");
    }

    fn on_classification_result(&mut self, result: &RankedResult) {
        let shown = match self.top_k {
            Some(k) => result.top(k),
            None => result.entries(),
        };
        for entry in shown {
            info!("{}: {}%", entry.label, entry.percentage());
        }
    }

    fn on_error(&mut self, message: &str, severity: Severity) {
        self.notify(Notification::new(message, severity));
    }

    fn on_notice(&mut self, message: &str, severity: Severity) {
        self.notify(Notification::new(message, severity));
    }
}
