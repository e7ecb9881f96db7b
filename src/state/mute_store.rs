//! Per-group mute registry.
//!
//! Each group's muted members live in a [`MuteSet`] behind its own async
//! mutex. Handlers hold a group's lock for the whole processing of one
//! inbound message (including awaited role lookups and gateway calls), which
//! serializes moderation per group while leaving distinct groups concurrent.
//!
//! Group entries are created lazily, by the first command seen in a group,
//! and never removed; an empty set means the same thing as no entry.

use super::dashmap_ext::DashMapExt;
use dashmap::DashMap;
use groupmute_proto::{GroupId, MemberId};
use indexmap::IndexSet;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Muted members of a single group, in insertion order.
#[derive(Debug, Default, Clone)]
pub struct MuteSet {
    members: IndexSet<MemberId>,
}

impl MuteSet {
    /// Whether `member` is muted.
    pub fn is_muted(&self, member: &MemberId) -> bool {
        self.members.contains(member)
    }

    /// Mute `member`. Returns `false` if it was already muted.
    pub fn mute(&mut self, member: MemberId) -> bool {
        self.members.insert(member)
    }

    /// Unmute `member`. Returns `false` if it was not muted.
    pub fn unmute(&mut self, member: &MemberId) -> bool {
        self.members.shift_remove(member)
    }

    /// Unmute everyone, returning how many members were removed.
    pub fn unmute_all(&mut self) -> usize {
        let removed = self.members.len();
        self.members.clear();
        removed
    }

    /// Snapshot of the muted members.
    pub fn list(&self) -> Vec<MemberId> {
        self.members.iter().cloned().collect()
    }

    /// Number of muted members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether nobody is muted.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Process-wide mapping from group to its muted members.
///
/// Owned by a [`ModerationEngine`](crate::services::ModerationEngine); there
/// is no global instance.
#[derive(Debug, Default)]
pub struct MuteStore {
    groups: DashMap<GroupId, Arc<Mutex<MuteSet>>>,
}

impl MuteStore {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire exclusive access to a group's mute set, creating it if needed.
    ///
    /// The keyed helpers below take the same lock; do not call them for a
    /// group while holding its guard.
    pub async fn lock(&self, group: &GroupId) -> OwnedMutexGuard<MuteSet> {
        let set = self.groups.get_or_default_cloned(group);
        set.lock_owned().await
    }

    /// Like [`lock`](Self::lock), but `None` for a group that has no entry
    /// yet instead of creating one.
    pub async fn lock_existing(&self, group: &GroupId) -> Option<OwnedMutexGuard<MuteSet>> {
        let set = self.groups.get_cloned(group)?;
        Some(set.lock_owned().await)
    }

    /// Number of groups with an entry.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Whether `member` is muted in `group`.
    pub async fn is_muted(&self, group: &GroupId, member: &MemberId) -> bool {
        match self.groups.get_cloned(group) {
            Some(set) => set.lock().await.is_muted(member),
            None => false,
        }
    }

    /// Mute `member` in `group`. Returns `false` if it was already muted.
    pub async fn mute(&self, group: &GroupId, member: MemberId) -> bool {
        self.lock(group).await.mute(member)
    }

    /// Unmute `member` in `group`. Returns `false` if it was not muted.
    pub async fn unmute(&self, group: &GroupId, member: &MemberId) -> bool {
        match self.groups.get_cloned(group) {
            Some(set) => set.lock().await.unmute(member),
            None => false,
        }
    }

    /// Clear `group`'s mute list, returning how many members were removed.
    pub async fn unmute_all(&self, group: &GroupId) -> usize {
        match self.groups.get_cloned(group) {
            Some(set) => set.lock().await.unmute_all(),
            None => 0,
        }
    }

    /// Snapshot of `group`'s muted members, in the order they were muted.
    pub async fn list_muted(&self, group: &GroupId) -> Vec<MemberId> {
        match self.groups.get_cloned(group) {
            Some(set) => set.lock().await.list(),
            None => Vec::new(),
        }
    }

    /// Total muted members across all groups.
    ///
    /// Waits on each group's lock in turn, so the caller must not hold any.
    pub async fn muted_total(&self) -> usize {
        let mut total = 0;
        for set in self.groups.values_cloned() {
            total += set.lock().await.len();
        }
        total
    }
}
