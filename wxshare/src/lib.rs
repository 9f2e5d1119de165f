//! Accessibility-driven automation of a multi-image share flow
//!
//! The host delivers UI-change notifications; this crate classifies them,
//! inspects the active window's node tree and drives the share flow through
//! three screens: composing the post, opening the album and picking the
//! pending images.

pub mod classifier;
pub mod config;
pub mod errors;
pub mod event;
pub mod node;
pub mod platforms;
pub mod search;
pub mod sequencer;
pub mod service;
pub mod session;
#[cfg(test)]
mod tests;

pub use classifier::{classify, Phase};
pub use config::ShareConfig;
pub use errors::ShareError;
pub use event::{EventKind, Notification};
pub use node::{NodeId, UINode};
pub use platforms::{
    AccessibilityHost, AutomationSwitch, Clipboard, InMemoryCounters, MemoryHost, NodeAction,
    ShareCounters,
};
pub use sequencer::Collaborators;
pub use service::{AutomationHandle, ShareAutomation};
pub use session::{Admission, Session, SessionState};
