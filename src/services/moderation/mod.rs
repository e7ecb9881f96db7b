//! Moderation engine: mute enforcement and admin commands.
//!
//! Per inbound group message, with the group's mute set locked:
//!
//! 1. A muted sender's message is retracted and nothing else happens, even
//!    if it carries a command.
//! 2. Messages without text are ignored.
//! 3. The text is parsed into a [`Command`]; non-commands are ignored.
//! 4. Role checks run against the [`RoleOracle`] (bot admin before sender
//!    admin for `/mute` and `/unmute`).
//! 5. [`decide`] picks the state change and reply; the change is applied to
//!    the locked set and the reply goes out through the [`MessageGateway`].
//!
//! Plain chatter in a group the registry has never seen is dropped without
//! locking, since nobody there can be muted.

mod decision;
mod replies;

pub use decision::{Authorization, Decision, MuteAction, decide};

use crate::services::{MessageGateway, ModerationEffect, RoleOracle, apply_effects};
use crate::state::{MuteSet, MuteStore};
use crate::telemetry::{CommandTimer, spans};
use groupmute_proto::{Command, GroupId, InboundMessage, MemberId};
use std::sync::Arc;
use tracing::{Instrument, debug, info, warn};

/// The moderation core. Owns its mute registry.
pub struct ModerationEngine {
    store: MuteStore,
    roles: Arc<dyn RoleOracle>,
    gateway: Arc<dyn MessageGateway>,
}

impl ModerationEngine {
    /// Create an engine with an empty mute registry.
    pub fn new(roles: Arc<dyn RoleOracle>, gateway: Arc<dyn MessageGateway>) -> Self {
        Self::with_store(MuteStore::new(), roles, gateway)
    }

    /// Create an engine around an existing registry.
    pub fn with_store(
        store: MuteStore,
        roles: Arc<dyn RoleOracle>,
        gateway: Arc<dyn MessageGateway>,
    ) -> Self {
        Self {
            store,
            roles,
            gateway,
        }
    }

    /// The engine's mute registry.
    pub fn store(&self) -> &MuteStore {
        &self.store
    }

    /// Handle one inbound group message.
    ///
    /// Never fails: refusals become chat replies and delivery errors are
    /// logged. Messages for the same group are fully serialized.
    pub async fn on_group_message(&self, msg: &InboundMessage) {
        let span = spans::moderation(msg.group.as_str(), msg.sender.as_str(), &msg.id);
        async {
            if !msg.group.is_group() {
                debug!("Ignoring message outside a group chat");
                return;
            }

            let command = msg
                .body()
                .map_or(Command::None, |text| Command::parse(text, &msg.mentions));

            // Plain chatter in a group with no registry entry has nothing to
            // enforce and must not create one.
            let mut mutes = if command == Command::None {
                match self.store.lock_existing(&msg.group).await {
                    Some(mutes) => mutes,
                    None => return,
                }
            } else {
                self.store.lock(&msg.group).await
            };

            let (effects, changed) = self.process(msg, &command, &mut mutes).await;
            // The group stays locked until delivery completes.
            apply_effects(self.gateway.as_ref(), effects).await;
            if changed {
                crate::metrics::set_muted_members(&msg.group, mutes.len());
            }
        }
        .instrument(span)
        .await;
    }

    /// Returns the effects to deliver and whether the mute set changed.
    async fn process(
        &self,
        msg: &InboundMessage,
        command: &Command,
        mutes: &mut MuteSet,
    ) -> (Vec<ModerationEffect>, bool) {
        if mutes.is_muted(&msg.sender) {
            debug!("Sender is muted; retracting");
            let retract = ModerationEffect::Retract {
                target: msg.reference(),
            };
            return (vec![retract], false);
        }

        if *command == Command::None {
            return (Vec::new(), false);
        }

        let _timer = CommandTimer::new(command.name());
        let auth = self.authorize(&msg.group, &msg.sender, command).await;
        let decision = decide(command, auth, mutes);

        if let Some(err) = decision.refusal {
            info!(command = command.name(), reason = %err, "Command refused");
            crate::metrics::record_command_error(command.name(), err.error_code());
        }

        let changed = apply_action(&msg.group, &msg.sender, decision.action, mutes);

        let effects = decision
            .reply
            .map(|reply| ModerationEffect::Reply {
                group: msg.group.clone(),
                msg: reply,
            })
            .into_iter()
            .collect();
        (effects, changed)
    }

    /// Run the role checks `command` needs.
    ///
    /// Commands that need none (menu, or mute/unmute without a target) are
    /// `Allowed`; the missing mention is reported by [`decide`] instead.
    async fn authorize(
        &self,
        group: &GroupId,
        sender: &MemberId,
        command: &Command,
    ) -> Authorization {
        match command {
            Command::Menu | Command::None | Command::Mute(None) | Command::Unmute(None) => {
                Authorization::Allowed
            }
            Command::ListMuted | Command::UnmuteAll => self.check_sender(group, sender).await,
            Command::Mute(Some(_)) | Command::Unmute(Some(_)) => {
                match self.roles.is_bot_admin(group).await {
                    Ok(true) => self.check_sender(group, sender).await,
                    Ok(false) => Authorization::DeniedBotNotAdmin,
                    Err(e) => {
                        warn!(error = %e, "Bot admin lookup failed");
                        Authorization::LookupFailed
                    }
                }
            }
        }
    }

    async fn check_sender(&self, group: &GroupId, sender: &MemberId) -> Authorization {
        match self.roles.is_admin(group, sender).await {
            Ok(true) => Authorization::Allowed,
            Ok(false) => Authorization::DeniedNotSenderAdmin,
            Err(e) => {
                warn!(error = %e, "Sender admin lookup failed");
                Authorization::LookupFailed
            }
        }
    }
}

/// Apply `action` to the locked set. Returns whether anything changed.
fn apply_action(
    group: &GroupId,
    by: &MemberId,
    action: MuteAction,
    mutes: &mut MuteSet,
) -> bool {
    match action {
        MuteAction::None => false,
        MuteAction::Mute(target) => {
            info!(group = %group, target = %target, by = %by, "Member muted");
            mutes.mute(target)
        }
        MuteAction::Unmute(target) => {
            info!(group = %group, target = %target, by = %by, "Member unmuted");
            mutes.unmute(&target)
        }
        MuteAction::UnmuteAll => {
            let count = mutes.unmute_all();
            info!(group = %group, count, by = %by, "All members unmuted");
            count > 0
        }
    }
}
