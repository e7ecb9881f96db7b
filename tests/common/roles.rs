//! Scriptable role oracle.

use async_trait::async_trait;
use groupmute::error::LookupError;
use groupmute::services::RoleOracle;
use groupmute::{GroupId, MemberId};
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::{Notify, Semaphore};

/// Blocks a lookup until released, signalling when a caller arrives.
pub struct Gate {
    arrived: Notify,
    release: Semaphore,
}

impl Default for Gate {
    fn default() -> Self {
        Self {
            arrived: Notify::new(),
            release: Semaphore::new(0),
        }
    }
}

impl Gate {
    /// Wait until some lookup is parked at the gate.
    pub async fn arrived(&self) {
        self.arrived.notified().await;
    }

    /// Let one parked lookup through.
    pub fn open(&self) {
        self.release.add_permits(1);
    }

    async fn pass(&self) {
        self.arrived.notify_one();
        if let Ok(permit) = self.release.acquire().await {
            permit.forget();
        }
    }
}

/// Role oracle with a fixed admin list and switchable failures.
#[derive(Default)]
pub struct ScriptedRoles {
    admins: Mutex<HashSet<(GroupId, MemberId)>>,
    bot_admin_in: Mutex<HashSet<GroupId>>,
    failing: AtomicBool,
    bot_gate: Mutex<Option<Arc<Gate>>>,
    pub admin_lookups: AtomicUsize,
    pub bot_lookups: AtomicUsize,
}

impl ScriptedRoles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_admin(self, group: &GroupId, member: &MemberId) -> Self {
        self.admins
            .lock()
            .unwrap()
            .insert((group.clone(), member.clone()));
        self
    }

    pub fn with_bot_admin(self, group: &GroupId) -> Self {
        self.bot_admin_in.lock().unwrap().insert(group.clone());
        self
    }

    /// Park every bot-admin lookup at `gate`.
    pub fn with_bot_gate(self, gate: Arc<Gate>) -> Self {
        *self.bot_gate.lock().unwrap() = Some(gate);
        self
    }

    /// Make every subsequent lookup fail.
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn check_failing(&self, group: &GroupId) -> Result<(), LookupError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(LookupError::MetadataUnavailable(group.clone()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RoleOracle for ScriptedRoles {
    async fn is_admin(&self, group: &GroupId, member: &MemberId) -> Result<bool, LookupError> {
        self.admin_lookups.fetch_add(1, Ordering::SeqCst);
        self.check_failing(group)?;
        Ok(self
            .admins
            .lock()
            .unwrap()
            .contains(&(group.clone(), member.clone())))
    }

    async fn is_bot_admin(&self, group: &GroupId) -> Result<bool, LookupError> {
        self.bot_lookups.fetch_add(1, Ordering::SeqCst);
        let gate = self.bot_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.pass().await;
        }
        self.check_failing(group)?;
        Ok(self.bot_admin_in.lock().unwrap().contains(group))
    }
}
