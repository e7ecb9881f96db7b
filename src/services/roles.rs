//! Role oracle backed by group participant metadata.
//!
//! The messaging network exposes admin status only as part of a group's
//! participant list. [`MetadataRoleOracle`] fetches that list from a
//! [`GroupMetadataSource`] and answers both admin questions from it.

use crate::error::LookupError;
use crate::services::RoleOracle;
use async_trait::async_trait;
use groupmute_proto::{GroupId, MemberId};

/// Admin level of a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminRole {
    Admin,
    /// Group creator.
    SuperAdmin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: MemberId,
    pub admin: Option<AdminRole>,
}

impl Participant {
    pub fn member(id: impl Into<MemberId>) -> Self {
        Self {
            id: id.into(),
            admin: None,
        }
    }

    pub fn admin(id: impl Into<MemberId>) -> Self {
        Self {
            id: id.into(),
            admin: Some(AdminRole::Admin),
        }
    }
}

/// Snapshot of a group's participants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMetadata {
    pub id: GroupId,
    pub participants: Vec<Participant>,
}

impl GroupMetadata {
    /// Participants holding any admin role.
    pub fn admins(&self) -> impl Iterator<Item = &MemberId> {
        self.participants
            .iter()
            .filter(|p| p.admin.is_some())
            .map(|p| &p.id)
    }

    pub fn is_admin(&self, member: &MemberId) -> bool {
        self.admins().any(|a| a == member)
    }
}

/// Fetches group participant metadata.
#[async_trait]
pub trait GroupMetadataSource: Send + Sync {
    async fn group_metadata(&self, group: &GroupId) -> Result<GroupMetadata, LookupError>;
}

/// [`RoleOracle`] answering from fresh group metadata on every call.
pub struct MetadataRoleOracle<S> {
    source: S,
    bot: MemberId,
}

impl<S: GroupMetadataSource> MetadataRoleOracle<S> {
    /// `bot` is the bot's account id as it appears in participant lists
    /// (see [`MemberId::from_device_jid`]).
    pub fn new(source: S, bot: MemberId) -> Self {
        Self { source, bot }
    }
}

#[async_trait]
impl<S: GroupMetadataSource> RoleOracle for MetadataRoleOracle<S> {
    async fn is_admin(&self, group: &GroupId, member: &MemberId) -> Result<bool, LookupError> {
        let metadata = self.source.group_metadata(group).await?;
        Ok(metadata.is_admin(member))
    }

    async fn is_bot_admin(&self, group: &GroupId) -> Result<bool, LookupError> {
        let metadata = self.source.group_metadata(group).await?;
        Ok(metadata.is_admin(&self.bot))
    }
}
