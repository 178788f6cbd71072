//! Client bindings for the `windows` host plugin.
//!
//! Every operation is a single remote call to `plugin:windows|<command>`
//! through an [`Invoke`] supplied by the host integration; replies and errors
//! come back unchanged.
//!
//! ```no_run
//! # async fn demo(invoker: windows_api::BridgeInvoker) -> windows_api::Result<()> {
//! use windows_api::{OpenConfiguration, OpenContext, WindowOpenable};
//!
//! let windows = windows_api::init(invoker);
//! windows
//!     .open_window(&OpenConfiguration {
//!         uris_to_open: Some(vec![WindowOpenable::file("/tmp/notes.md")]),
//!         context: OpenContext::Menu,
//!         prefer_new_window: true,
//!         ..Default::default()
//!     })
//!     .await?;
//! windows.send_to_all("theme-changed", &"dark").await?;
//! let focused = windows.get_focused_window().await?;
//! # let _ = focused;
//! # Ok(())
//! # }
//! ```

pub mod bridge;
pub mod commands;
pub mod config;
pub mod error;
pub mod event;
pub mod invoke;
pub mod service;
pub mod window;

pub use bridge::{bridge, BridgeInvoker, BridgeReceiver, PendingCall};
pub use commands::Command;
pub use config::ServiceConfig;
pub use error::{Error, InvokeError, Result};
pub use event::WindowsEvent;
pub use invoke::{invoke_fn, Invoke, InvokeArgs, InvokeFn};
pub use service::{init, init_with_config, service, WindowsService};
pub use window::{
    EmptyWindowBackupInfo, FilesToOpen, OpenConfiguration, OpenContext, Theme, WindowOpenable,
    WindowOptions, WindowPosition, WindowSize,
};
