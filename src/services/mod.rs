//! Moderation services.
//!
//! The [`ModerationEngine`] consumes inbound group messages and produces
//! [`ModerationEffect`]s, which are applied through a [`MessageGateway`].
//! Admin checks go through a [`RoleOracle`]; [`roles`] provides one backed by
//! group participant metadata.

pub mod effect;
pub mod moderation;
pub mod roles;
pub mod traits;

pub use effect::{ModerationEffect, apply_effect, apply_effects};
pub use moderation::ModerationEngine;
pub use traits::{MessageGateway, RoleOracle};
