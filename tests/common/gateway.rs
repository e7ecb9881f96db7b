//! Recording message gateway.

use async_trait::async_trait;
use groupmute::error::GatewayError;
use groupmute::services::MessageGateway;
use groupmute::{GroupId, MessageRef, OutboundMessage};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Something the engine asked the gateway to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    Send(GroupId, OutboundMessage),
    Retract(MessageRef),
}

/// Gateway that records every call, optionally failing them.
#[derive(Default)]
pub struct RecordingGateway {
    log: Mutex<Vec<Outbound>>,
    failing: AtomicBool,
}

impl RecordingGateway {
    /// Make every subsequent call fail (after recording it).
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn take(&self) -> Vec<Outbound> {
        std::mem::take(&mut *self.log.lock().unwrap())
    }

    pub fn is_empty(&self) -> bool {
        self.log.lock().unwrap().is_empty()
    }

    /// Texts of all sent replies, draining the log.
    pub fn take_texts(&self) -> Vec<String> {
        self.take()
            .into_iter()
            .filter_map(|o| match o {
                Outbound::Send(_, msg) => Some(msg.text),
                Outbound::Retract(_) => None,
            })
            .collect()
    }

    /// The single reply sent since the last drain.
    pub fn single_reply(&self) -> OutboundMessage {
        let log = self.take();
        match log.as_slice() {
            [Outbound::Send(_, msg)] => msg.clone(),
            other => panic!("expected exactly one reply, got {other:?}"),
        }
    }

    fn result(&self) -> Result<(), GatewayError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(GatewayError::Rejected("test gateway is failing".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl MessageGateway for RecordingGateway {
    async fn send(&self, group: &GroupId, msg: OutboundMessage) -> Result<(), GatewayError> {
        self.log
            .lock()
            .unwrap()
            .push(Outbound::Send(group.clone(), msg));
        self.result()
    }

    async fn retract(&self, target: &MessageRef) -> Result<(), GatewayError> {
        self.log
            .lock()
            .unwrap()
            .push(Outbound::Retract(target.clone()));
        self.result()
    }
}
