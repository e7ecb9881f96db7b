use crate::error::{GatewayError, LookupError};
use async_trait::async_trait;
use groupmute_proto::{GroupId, MemberId, MessageRef, OutboundMessage};

/// Answers admin-role questions about a group.
///
/// Implementations usually hit the network; errors are treated by the
/// engine as "not an admin".
#[async_trait]
pub trait RoleOracle: Send + Sync {
    /// Is `member` an admin of `group`?
    async fn is_admin(&self, group: &GroupId, member: &MemberId) -> Result<bool, LookupError>;

    /// Is the bot's own account an admin of `group`?
    async fn is_bot_admin(&self, group: &GroupId) -> Result<bool, LookupError>;
}

/// Delivers the bot's output to the messaging network.
///
/// Both operations are fire-and-forget from the engine's point of view:
/// failures are logged and counted, never retried.
#[async_trait]
pub trait MessageGateway: Send + Sync {
    /// Post `msg` to `group`.
    async fn send(&self, group: &GroupId, msg: OutboundMessage) -> Result<(), GatewayError>;

    /// Delete a message for every participant.
    async fn retract(&self, target: &MessageRef) -> Result<(), GatewayError>;
}
