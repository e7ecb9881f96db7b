//! Integration test common infrastructure.
//!
//! Provides in-memory fakes for the engine's collaborators and helpers for
//! building inbound messages.

#![allow(dead_code)]

pub mod gateway;
pub mod roles;

#[allow(unused_imports)]
pub use gateway::{Outbound, RecordingGateway};
#[allow(unused_imports)]
pub use roles::{Gate, ScriptedRoles};

use groupmute::services::ModerationEngine;
use groupmute::{GroupId, InboundMessage, MemberId};
use std::sync::Arc;

pub const GROUP: &str = "120363041234567890@g.us";
pub const OTHER_GROUP: &str = "120363049999999999@g.us";

pub fn group() -> GroupId {
    GroupId::new(GROUP)
}

pub fn member(number: &str) -> MemberId {
    MemberId::from_number(number)
}

/// A text message from `sender` (a bare number) in `group`.
pub fn text(id: &str, group: &str, sender: &str, body: &str) -> InboundMessage {
    InboundMessage::text(id, group, member(sender), body)
}

/// A text message mentioning `targets` (bare numbers).
pub fn mention(id: &str, sender: &str, body: &str, targets: &[&str]) -> InboundMessage {
    let targets = targets.iter().map(|t| member(t)).collect();
    text(id, GROUP, sender, body).with_mentions(targets)
}

/// An engine together with the fakes it was wired to.
pub type Harness = (
    Arc<ModerationEngine>,
    Arc<RecordingGateway>,
    Arc<ScriptedRoles>,
);

/// An engine wired to fresh fakes.
pub fn engine(roles: ScriptedRoles) -> Harness {
    let roles = Arc::new(roles);
    let gateway = Arc::new(RecordingGateway::default());
    let engine = Arc::new(ModerationEngine::new(roles.clone(), gateway.clone()));
    (engine, gateway, roles)
}
