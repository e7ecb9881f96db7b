//! Static group rosters from configuration.

use crate::config::GroupBlock;
use crate::error::LookupError;
use crate::services::roles::{GroupMetadata, GroupMetadataSource, Participant};
use async_trait::async_trait;
use groupmute_proto::GroupId;
use std::collections::HashMap;

/// [`GroupMetadataSource`] serving the `[[groups]]` blocks of the config.
///
/// Groups that are not configured fail the lookup, which the engine treats
/// as "not an admin".
#[derive(Debug, Default)]
pub struct RosterSource {
    groups: HashMap<GroupId, GroupMetadata>,
}

impl RosterSource {
    pub fn from_config(blocks: &[GroupBlock]) -> Self {
        let groups = blocks
            .iter()
            .map(|block| {
                let id = block.group_id();
                let admins = block.admin_ids().into_iter().map(Participant::admin);
                let mut participants: Vec<Participant> = admins.collect();
                for member in block.member_ids() {
                    if !participants.iter().any(|p| p.id == member) {
                        participants.push(Participant::member(member));
                    }
                }
                (id.clone(), GroupMetadata { id, participants })
            })
            .collect();
        Self { groups }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[async_trait]
impl GroupMetadataSource for RosterSource {
    async fn group_metadata(&self, group: &GroupId) -> Result<GroupMetadata, LookupError> {
        self.groups
            .get(group)
            .cloned()
            .ok_or_else(|| LookupError::MetadataUnavailable(group.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use groupmute_proto::MemberId;

    fn block() -> GroupBlock {
        GroupBlock {
            id: "1@g.us".to_string(),
            admins: vec!["100".to_string()],
            members: vec!["100".to_string(), "200".to_string()],
        }
    }

    #[tokio::test]
    async fn test_roster_lookup() {
        let roster = RosterSource::from_config(&[block()]);
        assert_eq!(roster.len(), 1);

        let group = GroupId::new("1@g.us");
        let meta = roster.group_metadata(&group).await.unwrap();
        // Admins listed again under members are not duplicated.
        assert_eq!(meta.participants.len(), 2);
        assert!(meta.is_admin(&MemberId::from_number("100")));
        assert!(!meta.is_admin(&MemberId::from_number("200")));
    }

    #[tokio::test]
    async fn test_unknown_group_fails() {
        let roster = RosterSource::from_config(&[]);
        assert!(roster.is_empty());
        let group = GroupId::new("9@g.us");
        let err = roster.group_metadata(&group).await.unwrap_err();
        assert!(matches!(err, LookupError::MetadataUnavailable(_)));
    }
}
