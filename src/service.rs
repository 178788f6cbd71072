use std::sync::{Arc, OnceLock};

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::commands::Command;
use crate::config::ServiceConfig;
use crate::error::{Error, Result};
use crate::invoke::{Invoke, InvokeArgs};
use crate::window::{OpenConfiguration, WindowOptions};

static SERVICE: OnceLock<WindowsService> = OnceLock::new();

/// Install the process-wide service with the default config.
///
/// The first call wins; later calls return the instance already installed
/// and drop their invoker.
pub fn init(invoker: impl Invoke + 'static) -> &'static WindowsService {
    init_with_config(ServiceConfig::default(), invoker)
}

pub fn init_with_config(
    config: ServiceConfig,
    invoker: impl Invoke + 'static,
) -> &'static WindowsService {
    let mut installed = false;
    let service = SERVICE.get_or_init(|| {
        installed = true;
        WindowsService::with_config(config, invoker)
    });
    if !installed {
        tracing::warn!("windows service already initialized, keeping the existing instance");
    }
    service
}

/// The process-wide service, if [`init`] has run.
pub fn service() -> Option<&'static WindowsService> {
    SERVICE.get()
}

/// Typed facade over the host's `windows` plugin commands.
///
/// Each method sends exactly one command and hands back the host's result
/// as-is: no validation, retries or timeouts. Calls are independent and may
/// run concurrently; ordering between them is up to the caller.
#[derive(Clone)]
pub struct WindowsService {
    config: ServiceConfig,
    invoker: Arc<dyn Invoke>,
}

impl std::fmt::Debug for WindowsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowsService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl WindowsService {
    pub fn new(invoker: impl Invoke + 'static) -> Self {
        Self::with_config(ServiceConfig::default(), invoker)
    }

    pub fn with_config(config: ServiceConfig, invoker: impl Invoke + 'static) -> Self {
        Self {
            config,
            invoker: Arc::new(invoker),
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Ask the host to open a window, honoring the configuration's reuse flags.
    pub async fn open_window(&self, configuration: &OpenConfiguration) -> Result<()> {
        let args = InvokeArgs::new().arg("configuration", configuration)?;
        self.call(Command::OpenWindow, args).await?;
        Ok(())
    }

    /// Open a window with no content. `configuration` and `options` travel
    /// as two separate arguments.
    pub async fn open_empty_window(
        &self,
        configuration: &OpenConfiguration,
        options: &WindowOptions,
    ) -> Result<()> {
        let args = InvokeArgs::new()
            .arg("configuration", configuration)?
            .arg("options", options)?;
        self.call(Command::OpenEmptyWindow, args).await?;
        Ok(())
    }

    /// Open into the already-open window labelled `window_to_use`.
    pub async fn open_existing_window(
        &self,
        configuration: &OpenConfiguration,
        window_to_use: &str,
    ) -> Result<()> {
        let args = InvokeArgs::new()
            .arg("configuration", configuration)?
            .arg("windowToUse", window_to_use)?;
        self.call(Command::OpenExistingWindow, args).await?;
        Ok(())
    }

    /// Deliver `payload` on `channel` to whichever window has input focus.
    ///
    /// The payload goes through `serde_json` unvalidated, so JSON's limits
    /// apply: non-finite floats (`NaN`, infinities) are sent as `null`.
    pub async fn send_to_focused<P>(&self, channel: &str, payload: &P) -> Result<()>
    where
        P: Serialize + ?Sized,
    {
        self.call(Command::SendToFocused, channel_args(channel, payload)?).await?;
        Ok(())
    }

    /// Broadcast `payload` on `channel` to every open window.
    ///
    /// Encoded like [`WindowsService::send_to_focused`]; non-finite floats
    /// arrive as `null`.
    pub async fn send_to_all<P>(&self, channel: &str, payload: &P) -> Result<()>
    where
        P: Serialize + ?Sized,
    {
        self.call(Command::SendToAll, channel_args(channel, payload)?).await?;
        Ok(())
    }

    /// Label of the window that currently has focus.
    pub async fn get_focused_window(&self) -> Result<String> {
        self.query(Command::GetFocusedWindow).await
    }

    /// Label of the most recently active window, focused or not.
    pub async fn get_last_active_window(&self) -> Result<String> {
        self.query(Command::GetLastActiveWindow).await
    }

    async fn query(&self, command: Command) -> Result<String> {
        let reply = self.call(command, InvokeArgs::new()).await?;
        serde_json::from_value(reply).map_err(Error::Deserialize)
    }

    async fn call(&self, command: Command, args: InvokeArgs) -> Result<JsonValue> {
        let cmd = self.config.command(command);
        let keys: Vec<&str> = args.keys().collect();
        tracing::debug!(cmd = %cmd, args = ?keys, "invoking host command");
        if self.config.trace_payloads {
            tracing::trace!(cmd = %cmd, args = ?args, "command arguments");
        }

        self.invoker.invoke(&cmd, args).await.map_err(|error| {
            tracing::debug!(cmd = %cmd, %error, "host command failed");
            Error::Invoke(error)
        })
    }
}

fn channel_args<P: Serialize + ?Sized>(channel: &str, payload: &P) -> Result<InvokeArgs> {
    InvokeArgs::new().arg("channel", channel)?.arg("payload", payload)
}
