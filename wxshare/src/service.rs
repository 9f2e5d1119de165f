use crate::classifier::{classify, Phase};
use crate::config::ShareConfig;
use crate::errors::ShareError;
use crate::event::Notification;
use crate::platforms::AutomationSwitch;
use crate::sequencer::{Collaborators, Sequencer};
use crate::session::Session;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Entry point the host calls once per notification
///
/// Owns the run state of the current share session. Notifications must be
/// delivered one at a time; use [`ShareAutomation::spawn`] when the caller
/// cannot guarantee that.
pub struct ShareAutomation {
    sequencer: Sequencer,
    switch: Arc<dyn AutomationSwitch>,
    session: Session,
}

impl ShareAutomation {
    pub fn new(
        config: ShareConfig,
        collaborators: Collaborators,
        switch: Arc<dyn AutomationSwitch>,
    ) -> Self {
        Self {
            sequencer: Sequencer::new(config, collaborators),
            switch,
            session: Session::new(),
        }
    }

    pub fn config(&self) -> &ShareConfig {
        self.sequencer.config()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Discard the current run state and begin a fresh session.
    pub fn start_session(&mut self) -> Uuid {
        self.session = Session::new();
        debug!(session = %self.session.id(), "started share session");
        self.session.id()
    }

    /// Gate, classify and handle one notification. Returns the phase it was
    /// routed to; [`Phase::Ignore`] when automation is disabled.
    #[instrument(
        level = "debug",
        skip_all,
        fields(kind = ?notification.kind, source_type = %notification.source_type)
    )]
    pub fn on_notification<'a>(&mut self, notification: &'a Notification) -> Phase<'a> {
        if !self.switch.is_enabled() {
            return Phase::Ignore;
        }

        if let Some(timeout) = self.config().stall_timeout() {
            if self.session.is_stalled(timeout) {
                warn!(
                    session = %self.session.id(),
                    state = %self.session.state(),
                    waited_ms = self.session.time_in_state().as_millis() as u64,
                    "share session stalled, returning to idle"
                );
                self.session.reset_stalled();
            }
        }

        let phase = classify(notification, self.config());
        if !matches!(phase, Phase::Ignore) {
            debug!(%phase, "routing notification");
        }
        self.sequencer.handle(&mut self.session, phase);
        phase
    }

    /// Move the engine onto a tokio task fed by a single-writer queue, so
    /// callers on any thread can submit notifications while handling stays
    /// serial.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a tokio runtime.
    pub fn spawn(mut self) -> AutomationHandle {
        let (tx, mut rx) = mpsc::unbounded_channel::<Notification>();
        let task = tokio::spawn(async move {
            while let Some(notification) = rx.recv().await {
                self.on_notification(&notification);
            }
            debug!(session = %self.session.id(), "notification queue closed");
            self
        });
        AutomationHandle { tx, task }
    }
}

/// Submission side of a spawned [`ShareAutomation`]
pub struct AutomationHandle {
    tx: mpsc::UnboundedSender<Notification>,
    task: JoinHandle<ShareAutomation>,
}

impl AutomationHandle {
    pub fn notify(&self, notification: Notification) -> Result<(), ShareError> {
        self.tx
            .send(notification)
            .map_err(|_| ShareError::DispatcherClosed)
    }

    /// Close the queue, wait for queued notifications to drain and hand the
    /// engine back.
    pub async fn shutdown(self) -> Result<ShareAutomation, ShareError> {
        drop(self.tx);
        self.task
            .await
            .map_err(|e| ShareError::Internal(format!("Task join error: {e}")))
    }
}
