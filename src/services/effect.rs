use crate::services::MessageGateway;
use groupmute_proto::{GroupId, MessageRef, OutboundMessage};
use tracing::{debug, warn};

/// Unified effect type produced by the moderation engine.
///
/// The engine decides; callers hand the effects to a [`MessageGateway`].
/// This keeps the decision logic free of network I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModerationEffect {
    /// Post a message to the group.
    Reply {
        group: GroupId,
        msg: OutboundMessage,
    },

    /// Retract a message from a muted member.
    Retract { target: MessageRef },
}

/// Apply a list of effects sequentially.
pub async fn apply_effects(gateway: &dyn MessageGateway, effects: Vec<ModerationEffect>) {
    for effect in effects {
        apply_effect(gateway, effect).await;
    }
}

/// Apply a single effect. Delivery failures are logged and counted.
pub async fn apply_effect(gateway: &dyn MessageGateway, effect: ModerationEffect) {
    match effect {
        ModerationEffect::Reply { group, msg } => {
            if let Err(e) = gateway.send(&group, msg).await {
                warn!(group = %group, error = %e, "Failed to deliver reply");
                crate::metrics::record_gateway_failure("send", e.error_code());
            } else {
                debug!(group = %group, "Reply delivered");
            }
        }

        ModerationEffect::Retract { target } => {
            if let Err(e) = gateway.retract(&target).await {
                warn!(
                    group = %target.group,
                    sender = %target.sender,
                    id = %target.id,
                    error = %e,
                    "Failed to retract message"
                );
                crate::metrics::record_gateway_failure("retract", e.error_code());
            } else {
                crate::metrics::record_retraction();
            }
        }
    }
}
