//! Run state of one share session as an explicit state machine
//!
//! The session remembers the last compose screen and list view it acted on,
//! so the host's repeated notifications for one screen instance are handled
//! once. Only `Completed` blocks album-open and image-select handling; a new
//! compose screen always restarts the flow.

use crate::node::NodeId;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No compose screen handled yet
    Idle,
    /// Compose screen handled; no add-image tap issued
    Composing,
    /// Add-image tapped; waiting for the album entry
    AlbumOpening,
    /// Album entry tapped; waiting for the picker
    Selecting,
    /// Images picked and confirmed
    Completed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Idle => "idle",
            SessionState::Composing => "composing",
            SessionState::AlbumOpening => "album_opening",
            SessionState::Selecting => "selecting",
            SessionState::Completed => "completed",
        };
        f.write_str(name)
    }
}

/// Outcome of asking the session whether a notification may be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Accepted,
    /// Same node instance as the last one handled
    Duplicate,
    /// Selection already finished for this session
    AlreadyCompleted,
}

#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    state: SessionState,
    last_compose: Option<NodeId>,
    last_list_view: Option<NodeId>,
    entered_at: Instant,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            state: SessionState::Idle,
            last_compose: None,
            last_list_view: None,
            entered_at: Instant::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn selection_completed(&self) -> bool {
        self.state == SessionState::Completed
    }

    pub fn last_compose(&self) -> Option<NodeId> {
        self.last_compose
    }

    pub fn last_list_view(&self) -> Option<NodeId> {
        self.last_list_view
    }

    /// Time spent in the current state.
    pub fn time_in_state(&self) -> Duration {
        self.entered_at.elapsed()
    }

    fn transition(&mut self, to: SessionState) {
        if self.state != to {
            debug!(session = %self.id, from = %self.state, to = %to, "session transition");
        }
        self.state = to;
        self.entered_at = Instant::now();
    }

    /// Admit a compose screen. A new identity restarts the flow from
    /// `Composing`, whatever state the session was in.
    pub fn admit_compose(&mut self, source: Option<NodeId>) -> Admission {
        if source == self.last_compose {
            return Admission::Duplicate;
        }
        self.last_compose = source;
        self.transition(SessionState::Composing);
        Admission::Accepted
    }

    /// Admit a list-view change. The identity is recorded only when admitted.
    pub fn admit_list_view(&mut self, source: Option<NodeId>) -> Admission {
        if self.selection_completed() {
            return Admission::AlreadyCompleted;
        }
        if source == self.last_list_view {
            return Admission::Duplicate;
        }
        self.last_list_view = source;
        Admission::Accepted
    }

    pub fn admit_selection(&self) -> Admission {
        if self.selection_completed() {
            Admission::AlreadyCompleted
        } else {
            Admission::Accepted
        }
    }

    /// The add-image tile on the compose screen was tapped.
    pub fn add_image_requested(&mut self) {
        self.transition(SessionState::AlbumOpening);
    }

    /// The album entry row was tapped.
    pub fn album_opened(&mut self) {
        self.transition(SessionState::Selecting);
    }

    pub fn complete(&mut self) {
        self.transition(SessionState::Completed);
    }

    /// Whether the session has waited on the host longer than `timeout`.
    pub fn is_stalled(&self, timeout: Duration) -> bool {
        matches!(
            self.state,
            SessionState::AlbumOpening | SessionState::Selecting
        ) && self.time_in_state() > timeout
    }

    /// Return a stalled session to idle. The list-view identity is forgotten
    /// so the next list change can retry; the compose identity is kept so
    /// late duplicates of the old compose screen stay suppressed.
    pub fn reset_stalled(&mut self) {
        self.last_list_view = None;
        self.transition(SessionState::Idle);
    }
}
