//! Static routing table from host notifications to automation phases

use crate::config::ShareConfig;
use crate::event::{EventKind, Notification};
use crate::node::UINode;
use std::fmt;

/// A classified notification, carrying the payload its handler needs.
#[derive(Debug, Clone, Copy)]
pub enum Phase<'a> {
    /// The compose screen appeared.
    Compose { source: Option<&'a UINode> },
    /// A list view changed, possibly the one holding the album entry.
    AlbumOpen { list_view: Option<&'a UINode> },
    /// The album picker appeared.
    ImageSelect,
    Ignore,
}

impl Phase<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Compose { .. } => "compose",
            Phase::AlbumOpen { .. } => "album_open",
            Phase::ImageSelect => "image_select",
            Phase::Ignore => "ignore",
        }
    }
}

impl fmt::Display for Phase<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Map a notification to its phase. Type names are compared exactly;
/// anything not in the table is ignored.
pub fn classify<'a>(notification: &'a Notification, config: &ShareConfig) -> Phase<'a> {
    let source_type = notification.source_type.as_str();
    match notification.kind {
        EventKind::ScreenAppeared if source_type == config.compose_screen_type => Phase::Compose {
            source: notification.source.as_ref(),
        },
        EventKind::ScreenAppeared if source_type == config.album_picker_type => {
            Phase::ImageSelect
        }
        EventKind::ContentChanged if source_type == config.list_view_type => Phase::AlbumOpen {
            list_view: notification.source.as_ref(),
        },
        EventKind::ScreenAppeared | EventKind::ContentChanged => Phase::Ignore,
    }
}
