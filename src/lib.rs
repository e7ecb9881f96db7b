//! groupmute - group chat moderation bot
//!
//! Enforces a per-group mute list by retracting messages from muted members
//! and answers admin-only `/mute`, `/unmute`, `/listmuted` and `/unmuteall`
//! commands. The messaging session itself is an external collaborator: it
//! feeds [`InboundMessage`]s into [`ModerationEngine::on_group_message`] and
//! implements [`MessageGateway`] and [`RoleOracle`] for the engine.

pub mod config;
pub mod error;
pub mod http;
pub mod metrics;
pub mod network;
pub mod services;
pub mod state;
pub mod telemetry;

pub use groupmute_proto::{Command, GroupId, InboundMessage, MemberId, MessageRef, OutboundMessage};
pub use services::{MessageGateway, ModerationEngine, RoleOracle};
pub use state::MuteStore;
