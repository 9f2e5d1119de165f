use crate::errors::ShareError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the share automation
///
/// Every field has a default targeting WeChat's Moments flow, so a JSON
/// document only needs to name the fields it overrides.
///
/// # Examples
///
/// ```rust
/// use wxshare::ShareConfig;
///
/// let config = ShareConfig::from_json(r#"{ "done_label": "Done" }"#)?;
/// assert_eq!(config.done_label, "Done");
/// assert_eq!(config.grid_type, ShareConfig::default().grid_type);
/// # Ok::<(), wxshare::ShareError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Screen type of the compose (upload) screen
    pub compose_screen_type: String,

    /// Screen type of the album picker
    pub album_picker_type: String,

    /// Node type whose content changes announce the album-entry sheet
    pub list_view_type: String,

    /// Node type of the share-text input on the compose screen
    pub text_input_type: String,

    /// Node type of the image grid, on both compose and picker screens
    pub grid_type: String,

    /// Node type of the tappable check box inside a picker grid cell
    pub grid_item_type: String,

    /// Label of the "choose from album" row
    pub album_entry_label: String,

    /// Label of the picker's confirm button
    pub done_label: String,

    /// How long a session may wait for the album entry or the picker before
    /// it is returned to idle. `None` disables stall detection.
    pub stall_timeout_ms: Option<u64>,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            compose_screen_type: "com.tencent.mm.plugin.sns.ui.SnsUploadUI".to_string(),
            album_picker_type: "com.tencent.mm.plugin.gallery.ui.AlbumPreviewUI".to_string(),
            list_view_type: "android.widget.ListView".to_string(),
            text_input_type: "android.widget.EditText".to_string(),
            grid_type: "android.widget.GridView".to_string(),
            grid_item_type: "android.view.View".to_string(),
            album_entry_label: "从相册选择".to_string(),
            done_label: "完成".to_string(),
            stall_timeout_ms: None,
        }
    }
}

impl ShareConfig {
    /// Defaults with the English-locale labels.
    pub fn english() -> Self {
        Self {
            album_entry_label: "choose from album".to_string(),
            done_label: "done".to_string(),
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON document over the defaults.
    pub fn from_json(json: &str) -> Result<Self, ShareError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn stall_timeout(&self) -> Option<Duration> {
        self.stall_timeout_ms.map(Duration::from_millis)
    }
}
