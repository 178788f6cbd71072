//! Channel-backed [`Invoke`] for runtimes that answer commands from their own task.
//!
//! The client side holds a [`BridgeInvoker`]; the host integration drains
//! [`PendingCall`]s from the [`BridgeReceiver`] and settles each one. Every
//! call carries its own oneshot responder, so any number of calls can be in
//! flight and they may be settled in any order.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use tokio::sync::{mpsc, oneshot};
use uuid::Uuid;

use crate::error::InvokeError;
use crate::invoke::{Invoke, InvokeArgs};

type Reply = Result<JsonValue, InvokeError>;

/// Create a connected invoker/receiver pair. `capacity` bounds the number
/// of calls queued but not yet picked up by the receiver; zero is treated as one.
pub fn bridge(capacity: usize) -> (BridgeInvoker, BridgeReceiver) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (BridgeInvoker { tx }, BridgeReceiver { rx })
}

/// A command waiting for the host's answer.
#[derive(Debug)]
pub struct PendingCall {
    pub id: Uuid,
    pub cmd: String,
    pub args: InvokeArgs,
    responder: oneshot::Sender<Reply>,
}

impl PendingCall {
    pub fn resolve(self, value: JsonValue) {
        self.settle(Ok(value));
    }

    pub fn reject(self, error: InvokeError) {
        self.settle(Err(error));
    }

    pub fn settle(self, reply: Reply) {
        // The caller may have stopped waiting; nothing to do then.
        if self.responder.send(reply).is_err() {
            tracing::debug!(id = %self.id, cmd = %self.cmd, "caller went away before reply");
        }
    }

    /// True once the waiting caller has dropped its future.
    pub fn is_abandoned(&self) -> bool {
        self.responder.is_closed()
    }
}

#[derive(Clone, Debug)]
pub struct BridgeInvoker {
    tx: mpsc::Sender<PendingCall>,
}

#[async_trait]
impl Invoke for BridgeInvoker {
    async fn invoke(&self, cmd: &str, args: InvokeArgs) -> Reply {
        let (responder, reply) = oneshot::channel();
        let call = PendingCall {
            id: Uuid::new_v4(),
            cmd: cmd.to_owned(),
            args,
            responder,
        };

        if self.tx.send(call).await.is_err() {
            return Err(InvokeError::unreachable(cmd));
        }

        reply.await.unwrap_or_else(|_| Err(InvokeError::dropped(cmd)))
    }
}

#[derive(Debug)]
pub struct BridgeReceiver {
    rx: mpsc::Receiver<PendingCall>,
}

impl BridgeReceiver {
    /// Next queued call, or `None` once every invoker has been dropped.
    pub async fn recv(&mut self) -> Option<PendingCall> {
        self.rx.recv().await
    }

    /// Stop accepting calls. Already queued calls can still be received.
    pub fn close(&mut self) {
        self.rx.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn resolves_with_host_reply() {
        let (invoker, mut host) = bridge(4);

        let host = tokio::spawn(async move {
            let call = host.recv().await.unwrap();
            assert_eq!(call.cmd, "plugin:windows|get_focused_window");
            assert!(call.args.is_empty());
            call.resolve(json!("main"));
        });

        let reply = invoker
            .invoke("plugin:windows|get_focused_window", InvokeArgs::new())
            .await
            .unwrap();
        assert_eq!(reply, json!("main"));
        host.await.unwrap();
    }

    #[tokio::test]
    async fn zero_capacity_still_delivers() {
        let (invoker, mut host) = bridge(0);

        tokio::spawn(async move {
            let call = host.recv().await.unwrap();
            call.resolve(json!(true));
        });

        let reply = invoker.invoke("plugin:windows|x", InvokeArgs::new()).await.unwrap();
        assert_eq!(reply, json!(true));
    }

    #[tokio::test]
    async fn rejection_passes_through() {
        let (invoker, mut host) = bridge(4);

        tokio::spawn(async move {
            let call = host.recv().await.unwrap();
            call.reject(InvokeError::message("no window `ghost`"));
        });

        let err = invoker.invoke("plugin:windows|x", InvokeArgs::new()).await.unwrap_err();
        assert_eq!(err, InvokeError::message("no window `ghost`"));
    }

    #[tokio::test]
    async fn closed_receiver_is_unreachable() {
        let (invoker, host) = bridge(1);
        drop(host);

        let err = invoker.invoke("plugin:windows|x", InvokeArgs::new()).await.unwrap_err();
        assert_eq!(err, InvokeError::unreachable("plugin:windows|x"));
    }

    #[tokio::test]
    async fn unsettled_call_is_dropped() {
        let (invoker, mut host) = bridge(1);

        tokio::spawn(async move {
            let call = host.recv().await.unwrap();
            drop(call);
        });

        let err = invoker.invoke("plugin:windows|x", InvokeArgs::new()).await.unwrap_err();
        assert_eq!(err, InvokeError::dropped("plugin:windows|x"));
    }

    #[tokio::test]
    async fn calls_settle_out_of_order() {
        let (invoker, mut host) = bridge(8);

        let first = tokio::spawn({
            let invoker = invoker.clone();
            async move { invoker.invoke("first", InvokeArgs::new()).await }
        });
        let a = host.recv().await.unwrap();

        let second = tokio::spawn({
            let invoker = invoker.clone();
            async move { invoker.invoke("second", InvokeArgs::new()).await }
        });
        let b = host.recv().await.unwrap();

        assert_ne!(a.id, b.id);
        b.resolve(json!(2));
        assert_eq!(second.await.unwrap().unwrap(), json!(2));
        assert!(!first.is_finished());

        a.resolve(json!(1));
        assert_eq!(first.await.unwrap().unwrap(), json!(1));
    }
}
