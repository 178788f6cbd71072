//! Events the host plugin emits, for callers that listen on them.
//!
//! Menu-driven events (`new_window`, `close_file`, ...) carry no payload.
//! `open_files` and `add_folders` are global; `resize` goes to the resized window.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const WINDOW_NEW_WINDOW_EVENT: &str = "windows://new_window";
pub const WINDOW_CLOSE_WINDOW_EVENT: &str = "windows://close_window";
pub const WINDOW_OPEN_FILE_EVENT: &str = "windows://open_file";
pub const WINDOW_OPEN_FILES_EVENT: &str = "windows://open_files";
pub const WINDOW_ADD_FOLDERS_EVENT: &str = "windows://add_folders";
pub const WINDOW_OPEN_FOLDER_EVENT: &str = "windows://open_folder";
pub const WINDOW_CLOSE_FILE_EVENT: &str = "windows://close_file";
pub const WINDOW_CLOSE_FOLDER_EVENT: &str = "windows://close_folder";
pub const WINDOW_RESIZE_EVENT: &str = "windows://resize";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindowsEvent {
    NewWindow,
    CloseWindow,
    OpenFile,
    OpenFiles,
    AddFolders,
    OpenFolder,
    CloseFile,
    CloseFolder,
    Resize,
}

impl WindowsEvent {
    pub const ALL: [WindowsEvent; 9] = [
        WindowsEvent::NewWindow,
        WindowsEvent::CloseWindow,
        WindowsEvent::OpenFile,
        WindowsEvent::OpenFiles,
        WindowsEvent::AddFolders,
        WindowsEvent::OpenFolder,
        WindowsEvent::CloseFile,
        WindowsEvent::CloseFolder,
        WindowsEvent::Resize,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WindowsEvent::NewWindow => WINDOW_NEW_WINDOW_EVENT,
            WindowsEvent::CloseWindow => WINDOW_CLOSE_WINDOW_EVENT,
            WindowsEvent::OpenFile => WINDOW_OPEN_FILE_EVENT,
            WindowsEvent::OpenFiles => WINDOW_OPEN_FILES_EVENT,
            WindowsEvent::AddFolders => WINDOW_ADD_FOLDERS_EVENT,
            WindowsEvent::OpenFolder => WINDOW_OPEN_FOLDER_EVENT,
            WindowsEvent::CloseFile => WINDOW_CLOSE_FILE_EVENT,
            WindowsEvent::CloseFolder => WINDOW_CLOSE_FOLDER_EVENT,
            WindowsEvent::Resize => WINDOW_RESIZE_EVENT,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.name() == name)
    }

    /// Whether the host broadcasts this event to every window.
    pub fn is_global(self) -> bool {
        matches!(self, WindowsEvent::OpenFiles | WindowsEvent::AddFolders)
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub enum FileType {
    Directory,
    #[default]
    File,
}

/// A resolved path the host is about to open.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default)]
pub struct PathToOpen {
    pub folder: Option<PathBuf>,
    pub file: Option<PathBuf>,
    pub backup_path: Option<PathBuf>,
    pub path_type: FileType,
    pub exists: bool,
    pub window: Option<String>,
    pub label: Option<String>,
}

/// Payload of [`WINDOW_OPEN_FILES_EVENT`].
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct OpenFilesPayload {
    pub files_to_open_or_create: Vec<PathBuf>,
}

/// Payload of [`WINDOW_ADD_FOLDERS_EVENT`].
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct AddFoldersPayload {
    pub folders_to_add: Vec<PathToOpen>,
}

/// Payload of [`WINDOW_RESIZE_EVENT`], in physical pixels.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub struct ResizePayload {
    pub width: u32,
    pub height: u32,
}
