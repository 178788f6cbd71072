//! Request records accepted by the host's window commands.
//!
//! Field names are snake_case on the wire, matching the host's serde
//! structs. Every field is always serialized (`None` as `null`) since the
//! host requires its non-optional fields to be present.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Why the open was triggered.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub enum OpenContext {
    /// Opened programmatically through this API
    Api,
    /// Launched from the command line
    Cli,
    /// macOS dock, including files dropped on a running instance
    Dock,
    /// Application menu
    Menu,
    /// File or folder dialog
    Dialog,
    /// The OS shell (double-click, "open with")
    #[default]
    Desktop,
}

/// A resource to open: a folder, a file, or both.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct WindowOpenable {
    pub folder: Option<PathBuf>,
    pub file: Option<PathBuf>,
}

impl WindowOpenable {
    pub fn new(file: Option<PathBuf>, folder: Option<PathBuf>) -> Self {
        Self { folder, file }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            folder: None,
            file: Some(path.into()),
        }
    }

    pub fn folder(path: impl Into<PathBuf>) -> Self {
        Self {
            folder: Some(path.into()),
            file: None,
        }
    }
}

/// How a window should be opened.
///
/// The `force_*` flags are forwarded as given. When more than one is set,
/// the host decides which wins.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct OpenConfiguration {
    pub label: Option<String>,
    pub url: Option<String>, // app path or external URL
    pub uris_to_open: Option<Vec<WindowOpenable>>,
    pub context_window_label: Option<String>, // window the request came from
    pub context: OpenContext,
    pub force_new_window: bool,
    pub force_new_tabbed_window: bool,
    pub force_reuse_window: bool,
    pub force_empty_window: bool,
    pub prefer_new_window: bool,
    pub initial_startup: bool,
    pub diff_mode: bool,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct WindowSize {
    pub width: f64,
    pub height: f64,
}

impl WindowSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct WindowPosition {
    pub x: f64,
    pub y: f64,
}

impl WindowPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// Files handed to a new window.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct FilesToOpen {
    pub files_to_open_or_create: Vec<PathBuf>,
    pub files_to_diff: Vec<PathBuf>,
    pub files_to_wait: Vec<PathBuf>,
}

impl FilesToOpen {
    pub fn is_empty(&self) -> bool {
        self.files_to_open_or_create.is_empty()
            && self.files_to_diff.is_empty()
            && self.files_to_wait.is_empty()
    }
}

/// Backup location of an empty (folder-less) window, used when restoring it.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct EmptyWindowBackupInfo {
    pub window: String,
    pub backup_folder: Option<PathBuf>,
}

/// Native presentation options plus reuse policy for `open_empty_window`.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct WindowOptions {
    pub label: Option<String>,
    pub url: Option<String>,
    pub always_on_top: Option<bool>,
    pub center: bool,
    pub decorations: Option<bool>,
    pub focus: bool,
    pub fullscreen: Option<bool>,
    pub inner_size: Option<WindowSize>,
    pub max_inner_size: Option<WindowSize>,
    pub maximized: Option<bool>,
    pub min_inner_size: Option<WindowSize>,
    pub position: Option<WindowPosition>,
    pub resizable: Option<bool>,
    pub skip_taskbar: Option<bool>,
    pub theme: Option<Theme>,
    pub title: Option<String>,
    pub transparent: Option<bool>,
    pub visible: Option<bool>,

    pub initial_startup: bool,
    pub force_new_window: bool,
    pub force_new_tabbed_window: bool,
    pub force_reuse_window: bool,
    pub force_empty_window: bool,

    pub empty_window_backup_info: Option<EmptyWindowBackupInfo>,
    pub files_to_open: FilesToOpen,
    pub window_to_use: Option<String>, // label of an open window to reuse
    pub folder: Option<PathBuf>,
}
