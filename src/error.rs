//! Unified error handling for groupmute.
//!
//! Moderation errors never escape the engine: each one maps to a chat reply
//! and a metric label. Collaborator errors (role lookups, message delivery)
//! are logged and degraded at the point of use.

use groupmute_proto::GroupId;
use thiserror::Error;

// ============================================================================
// Moderation Errors (command processing)
// ============================================================================

/// Reasons a moderation command is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ModerationError {
    #[error("sender is not a group admin")]
    PermissionDenied,

    #[error("bot is not a group admin")]
    BotLacksPermission,

    #[error("command requires a mentioned member")]
    MissingMention,

    /// Role lookup failed; treated as denied.
    #[error("role lookup failed")]
    LookupFailed,
}

impl ModerationError {
    /// Get a static error code string for metrics labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::PermissionDenied => "permission_denied",
            Self::BotLacksPermission => "bot_lacks_permission",
            Self::MissingMention => "missing_mention",
            Self::LookupFailed => "lookup_failed",
        }
    }
}

// ============================================================================
// Collaborator Errors
// ============================================================================

/// Role lookup failures reported by a [`RoleOracle`](crate::services::RoleOracle).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("group metadata unavailable for {0}")]
    MetadataUnavailable(GroupId),
}

/// Delivery failures reported by a [`MessageGateway`](crate::services::MessageGateway).
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("gateway closed")]
    Closed,

    #[error("delivery rejected: {0}")]
    Rejected(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

impl GatewayError {
    /// Get a static error code string for metrics labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Rejected(_) => "rejected",
            Self::Io(_) => "io",
            Self::Encode(_) => "encode",
        }
    }
}
