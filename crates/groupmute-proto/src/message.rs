//! Inbound and outbound message envelopes.

use crate::id::{GroupId, MemberId};

/// Handle naming a previously delivered message, used for retraction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageRef {
    /// Group the message was posted in.
    pub group: GroupId,
    /// Transport-assigned message id.
    pub id: String,
    /// Author of the message.
    pub sender: MemberId,
}

/// A single inbound group message, as handed over by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InboundMessage {
    /// Transport-assigned message id.
    pub id: String,
    /// Group the message was posted in.
    pub group: GroupId,
    /// Author of the message.
    pub sender: MemberId,
    /// Text body, if the message carried one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: Option<String>,
    /// Members mentioned in the message, in the order they appear.
    #[cfg_attr(feature = "serde", serde(default))]
    pub mentions: Vec<MemberId>,
}

impl InboundMessage {
    /// Create a text message with no mentions.
    pub fn text(
        id: impl Into<String>,
        group: impl Into<GroupId>,
        sender: impl Into<MemberId>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            group: group.into(),
            sender: sender.into(),
            text: Some(text.into()),
            mentions: Vec::new(),
        }
    }

    /// Attach mention metadata.
    pub fn with_mentions(mut self, mentions: Vec<MemberId>) -> Self {
        self.mentions = mentions;
        self
    }

    /// The text body, or `None` when absent or empty.
    pub fn body(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    /// Reference used to retract this message.
    pub fn reference(&self) -> MessageRef {
        MessageRef {
            group: self.group.clone(),
            id: self.id.clone(),
            sender: self.sender.clone(),
        }
    }
}

/// A message the bot posts to a group.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutboundMessage {
    /// Text body.
    pub text: String,
    /// Members to render as tags in the text.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub mentions: Vec<MemberId>,
}

impl OutboundMessage {
    /// A plain text message.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mentions: Vec::new(),
        }
    }

    /// Attach mention metadata.
    pub fn with_mentions(mut self, mentions: Vec<MemberId>) -> Self {
        self.mentions = mentions;
        self
    }
}
