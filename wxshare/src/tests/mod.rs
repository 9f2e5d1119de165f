mod search_tests;

use crate::platforms::{Clipboard, InMemoryCounters, MemoryHost};
use crate::sequencer::Collaborators;
use crate::{ShareAutomation, ShareConfig, UINode};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

// Initialize tracing for tests
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .with_target(true)
        .with_test_writer()
        .try_init();
}

pub struct FixedClipboard(pub Option<String>);

impl Clipboard for FixedClipboard {
    fn primary_text(&self) -> Option<String> {
        self.0.clone()
    }
}

pub const TEXT_INPUT: u64 = 3;
pub const ADD_TILE: u64 = 6;
pub const ALBUM_ROW: u64 = 53;
pub const PICKER_GRID: u64 = 101;
pub const DONE_BUTTON: u64 = 102;

/// Id of the check box inside picker cell `index`.
pub fn checkbox_id(index: u64) -> u64 {
    130 + index
}

/// Compose screen: a text input and an image grid whose last cell is the
/// add-image tile.
pub fn compose_screen() -> UINode {
    UINode::new(1, "android.widget.FrameLayout").with_child(
        UINode::new(2, "android.widget.LinearLayout")
            .with_child(UINode::new(TEXT_INPUT, "android.widget.EditText"))
            .with_child(UINode::new(4, "android.widget.GridView").with_children([
                UINode::new(5, "android.widget.ImageView"),
                UINode::new(ADD_TILE, "android.widget.ImageView").with_description("add"),
            ])),
    )
}

/// Bottom sheet offering camera and album entries.
pub fn album_sheet(list_id: u64, label: &str) -> UINode {
    UINode::new(list_id, "android.widget.ListView")
        .with_child(
            UINode::new(51, "android.widget.LinearLayout")
                .with_child(UINode::new(52, "android.widget.TextView").with_text("拍摄")),
        )
        .with_child(
            UINode::new(ALBUM_ROW, "android.widget.LinearLayout")
                .with_child(UINode::new(54, "android.widget.TextView").with_text(label)),
        )
}

/// Album picker with `cells` grid cells and a done button.
pub fn picker_screen(cells: u64, done_label: &str) -> UINode {
    let grid = UINode::new(PICKER_GRID, "android.widget.GridView").with_children((0..cells).map(
        |index| {
            UINode::new(110 + index, "android.widget.RelativeLayout")
                .with_child(UINode::new(120 + index, "android.widget.ImageView"))
                .with_child(UINode::new(checkbox_id(index), "android.view.View"))
        },
    ));
    UINode::new(100, "android.widget.FrameLayout")
        .with_child(
            UINode::new(103, "android.widget.LinearLayout")
                .with_child(UINode::new(DONE_BUTTON, "android.widget.Button").with_text(done_label)),
        )
        .with_child(grid)
}

pub struct Harness {
    pub host: Arc<MemoryHost>,
    pub counters: Arc<InMemoryCounters>,
    pub switch: Arc<AtomicBool>,
    pub automation: ShareAutomation,
}

impl Harness {
    pub fn new(selected: u32, pending: u32) -> Self {
        Self::with_host(MemoryHost::new(), ShareConfig::default(), selected, pending)
    }

    pub fn with_host(host: MemoryHost, config: ShareConfig, selected: u32, pending: u32) -> Self {
        init_tracing();
        let host = Arc::new(host);
        let counters = Arc::new(InMemoryCounters::new(selected, pending));
        let switch = Arc::new(AtomicBool::new(true));
        let automation = ShareAutomation::new(
            config,
            Collaborators {
                host: host.clone(),
                clipboard: Arc::new(FixedClipboard(Some("share text".to_string()))),
                counters: counters.clone(),
            },
            switch.clone(),
        );
        Self {
            host,
            counters,
            switch,
            automation,
        }
    }
}
