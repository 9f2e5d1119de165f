//! The three phase handlers of the share flow
//!
//! Every lookup is optional: a missing node skips the dependent action and
//! the next notification from the host retries. Nothing here returns an
//! error to the caller; failed host actions are logged and dropped.

use crate::classifier::Phase;
use crate::config::ShareConfig;
use crate::node::UINode;
use crate::platforms::{AccessibilityHost, Clipboard, NodeAction, ShareCounters};
use crate::search::{find_by_type, find_first_by_text};
use crate::session::{Admission, Session};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Host-side collaborators the handlers read from and act through.
#[derive(Clone)]
pub struct Collaborators {
    pub host: Arc<dyn AccessibilityHost>,
    pub clipboard: Arc<dyn Clipboard>,
    pub counters: Arc<dyn ShareCounters>,
}

pub struct Sequencer {
    config: ShareConfig,
    collaborators: Collaborators,
}

impl Sequencer {
    pub fn new(config: ShareConfig, collaborators: Collaborators) -> Self {
        Self {
            config,
            collaborators,
        }
    }

    pub fn config(&self) -> &ShareConfig {
        &self.config
    }

    /// Run the handler for `phase` against `session`.
    pub fn handle(&self, session: &mut Session, phase: Phase<'_>) {
        match phase {
            Phase::Compose { source } => self.on_compose(session, source),
            Phase::AlbumOpen { list_view } => self.on_album_open(session, list_view),
            Phase::ImageSelect => self.on_image_select(session),
            Phase::Ignore => {}
        }
    }

    #[instrument(
        level = "debug",
        skip_all,
        fields(session = %session.id(), source = ?source.map(|node| node.id))
    )]
    fn on_compose(&self, session: &mut Session, source: Option<&UINode>) {
        let admission = session.admit_compose(source.map(|node| node.id));
        if admission != Admission::Accepted {
            debug!(?admission, "compose notification skipped");
            return;
        }

        let root = self.collaborators.host.active_window_root();

        match find_by_type(root.as_ref(), &self.config.text_input_type) {
            Some(input) => self.fill_share_text(input),
            None => debug!("compose screen has no text input"),
        }

        let pending = self.collaborators.counters.pending_count();
        if pending == 0 {
            debug!("no pending images");
            return;
        }

        // The add-image tile is the grid's last cell.
        let add_tile =
            find_by_type(root.as_ref(), &self.config.grid_type).and_then(UINode::last_child);
        match add_tile {
            Some(tile) => {
                if self.act(tile, NodeAction::Click) {
                    info!(pending, "opened add-image sheet");
                    session.add_image_requested();
                }
            }
            None => debug!("compose screen has no add-image tile"),
        }
    }

    fn fill_share_text(&self, input: &UINode) {
        if self.collaborators.host.supports_paste() {
            // Focus reports failure when the input already has focus.
            self.act(input, NodeAction::Focus);
            self.act(input, NodeAction::Paste);
            return;
        }
        match self.collaborators.clipboard.primary_text() {
            Some(text) => {
                self.act(input, NodeAction::SetText(text));
            }
            None => debug!("clipboard is empty"),
        }
    }

    #[instrument(
        level = "debug",
        skip_all,
        fields(session = %session.id(), list_view = ?list_view.map(|node| node.id))
    )]
    fn on_album_open(&self, session: &mut Session, list_view: Option<&UINode>) {
        let admission = session.admit_list_view(list_view.map(|node| node.id));
        if admission != Admission::Accepted {
            debug!(?admission, "list view change skipped");
            return;
        }

        let Some(entry) = find_first_by_text(list_view, &self.config.album_entry_label) else {
            debug!("list view has no album entry");
            return;
        };
        // The label itself is not tappable; its row is. A label on the list
        // view itself has no row inside this snapshot and is skipped.
        match entry.parent {
            Some(row) => {
                if self.act(row, NodeAction::Click) {
                    info!(row = %row.id, "opened album");
                    session.album_opened();
                }
            }
            None => debug!("album entry has no row container"),
        }
    }

    #[instrument(level = "debug", skip_all, fields(session = %session.id()))]
    fn on_image_select(&self, session: &mut Session) {
        let admission = session.admit_selection();
        if admission != Admission::Accepted {
            debug!(?admission, "picker notification skipped");
            return;
        }

        let root = self.collaborators.host.active_window_root();
        let Some(grid) = find_by_type(root.as_ref(), &self.config.grid_type) else {
            debug!("picker has no image grid yet");
            return;
        };

        let counters = &self.collaborators.counters;
        let selected = counters.selected_count();
        let pending = counters.pending_count();

        // Inclusive on both ends. Cells past the end of the grid can never be
        // clicked, so the range stops at the last cell.
        let cells = grid.child_count();
        let upper = cells
            .checked_sub(1)
            .map(|last| pending.min(u32::try_from(last).unwrap_or(u32::MAX)));
        if upper != Some(pending) {
            debug!(pending, cells, "selection range clamped to grid");
        }
        let mut clicked = 0usize;
        for index in upper.into_iter().flat_map(|upper| selected..=upper) {
            let item = grid
                .child(index as usize)
                .and_then(|cell| find_by_type(Some(cell), &self.config.grid_item_type));
            match item {
                Some(item) => {
                    if self.act(item, NodeAction::Click) {
                        clicked += 1;
                    }
                }
                None => debug!(index, "no selectable item in grid cell"),
            }
        }

        match find_first_by_text(root.as_ref(), &self.config.done_label) {
            Some(done) => {
                self.act(done.node, NodeAction::Click);
            }
            None => debug!("picker has no done button"),
        }

        session.complete();
        counters.set_counts(0, 0);
        info!(selected, pending, clicked, "image selection completed");
    }

    /// Perform `action`, logging a failure instead of returning it.
    fn act(&self, node: &UINode, action: NodeAction) -> bool {
        match self.collaborators.host.perform_action(node, action) {
            Ok(()) => true,
            Err(e) => {
                warn!(node = %node.id, class_name = %node.class_name, "host action failed: {e}");
                false
            }
        }
    }
}
