//! Group and member identifiers.
//!
//! Identifiers are opaque strings handed to us by the transport. The only
//! structure we rely on is the `user@server` shape used by the messaging
//! network: group chats live on [`GROUP_SERVER`], people on [`USER_SERVER`],
//! and a linked device appends `:<device>` to the user part.

use crate::error::IdError;
use std::fmt;
use std::str::FromStr;

/// Server part of a group chat identifier.
pub const GROUP_SERVER: &str = "g.us";

/// Server part of a personal account identifier.
pub const USER_SERVER: &str = "s.whatsapp.net";

/// Opaque handle naming a chat group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct GroupId(String);

impl GroupId {
    /// Wrap a raw identifier without validation.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the raw identifier.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this identifier names a group chat (as opposed to a direct chat).
    pub fn is_group(&self) -> bool {
        self.0
            .rsplit_once('@')
            .is_some_and(|(user, server)| !user.is_empty() && server == GROUP_SERVER)
    }
}

impl FromStr for GroupId {
    type Err = IdError;

    /// Parse a group identifier, rejecting anything that is not a group chat.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(IdError::Empty);
        }
        let id = Self::new(s);
        if id.is_group() {
            Ok(id)
        } else {
            Err(IdError::NotAGroup(s.to_string()))
        }
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GroupId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GroupId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for GroupId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Opaque handle naming a chat participant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct MemberId(String);

impl MemberId {
    /// Wrap a raw identifier without validation.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Build the account identifier for a bare phone number.
    ///
    /// ```
    /// use groupmute_proto::MemberId;
    ///
    /// let bot = MemberId::from_number("1234567890");
    /// assert_eq!(bot.as_str(), "1234567890@s.whatsapp.net");
    /// ```
    pub fn from_number(number: &str) -> Self {
        Self(format!("{}@{}", number.trim(), USER_SERVER))
    }

    /// Normalize a device-qualified identifier to the account identifier.
    ///
    /// A session reports its own id as `1234567890:12@s.whatsapp.net`; group
    /// participant lists only carry `1234567890@s.whatsapp.net`.
    ///
    /// ```
    /// use groupmute_proto::MemberId;
    ///
    /// let id = MemberId::from_device_jid("1234567890:12@s.whatsapp.net").unwrap();
    /// assert_eq!(id.as_str(), "1234567890@s.whatsapp.net");
    /// ```
    pub fn from_device_jid(raw: &str) -> Result<Self, IdError> {
        let user = raw.split('@').next().unwrap_or_default();
        let user = user.split(':').next().unwrap_or_default().trim();
        if user.is_empty() {
            return Err(IdError::Empty);
        }
        Ok(Self::from_number(user))
    }

    /// Borrow the raw identifier.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The user part of the identifier, as rendered after `@` in a mention.
    pub fn handle(&self) -> &str {
        match self.0.split_once('@') {
            Some((user, _)) => user,
            None => &self.0,
        }
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MemberId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MemberId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for MemberId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
