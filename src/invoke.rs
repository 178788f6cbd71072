//! The remote-invocation seam.
//!
//! Whatever integrates this crate with a host runtime supplies an [`Invoke`]
//! implementation: it takes a namespaced command name plus a record of named
//! arguments and settles once with the host's reply or the host's error.
//! Transport, serialization on the wire and dispatch all live behind it.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::error::{Error, InvokeError, Result};

/// Sends one named command to the host and waits for its reply.
#[async_trait]
pub trait Invoke: Send + Sync {
    async fn invoke(
        &self,
        cmd: &str,
        args: InvokeArgs,
    ) -> std::result::Result<JsonValue, InvokeError>;
}

/// Named arguments for a single command, serialized as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvokeArgs(Map<String, JsonValue>);

impl InvokeArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `key`, encoding `value` to JSON. A later call with the same key wins.
    pub fn arg<T: Serialize + ?Sized>(mut self, key: &str, value: &T) -> Result<Self> {
        let value = serde_json::to_value(value).map_err(Error::Serialize)?;
        self.0.insert(key.to_owned(), value);
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_value(self) -> JsonValue {
        JsonValue::Object(self.0)
    }
}

#[async_trait]
impl<T: Invoke + ?Sized> Invoke for Arc<T> {
    async fn invoke(
        &self,
        cmd: &str,
        args: InvokeArgs,
    ) -> std::result::Result<JsonValue, InvokeError> {
        (**self).invoke(cmd, args).await
    }
}

#[async_trait]
impl<T: Invoke + ?Sized> Invoke for Box<T> {
    async fn invoke(
        &self,
        cmd: &str,
        args: InvokeArgs,
    ) -> std::result::Result<JsonValue, InvokeError> {
        (**self).invoke(cmd, args).await
    }
}

/// An [`Invoke`] backed by an async closure. See [`invoke_fn`].
pub struct InvokeFn<F>(F);

/// Wraps an async closure as an invoker.
///
/// ```
/// use windows_api::{invoke_fn, InvokeError};
///
/// let invoker = invoke_fn(|cmd, _args| async move {
///     if cmd.ends_with("|get_focused_window") {
///         Ok(serde_json::json!("main"))
///     } else {
///         Err(InvokeError::message(format!("unsupported command {cmd}")))
///     }
/// });
/// # let _ = invoker;
/// ```
pub fn invoke_fn<F, Fut>(f: F) -> InvokeFn<F>
where
    F: Fn(String, InvokeArgs) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = std::result::Result<JsonValue, InvokeError>> + Send + 'static,
{
    InvokeFn(f)
}

#[async_trait]
impl<F, Fut> Invoke for InvokeFn<F>
where
    F: Fn(String, InvokeArgs) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = std::result::Result<JsonValue, InvokeError>> + Send + 'static,
{
    async fn invoke(
        &self,
        cmd: &str,
        args: InvokeArgs,
    ) -> std::result::Result<JsonValue, InvokeError> {
        (self.0)(cmd.to_owned(), args).await
    }
}
