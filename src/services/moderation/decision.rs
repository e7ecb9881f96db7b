//! Pure command decisions.
//!
//! [`decide`] maps a parsed command, the outcome of the role checks and the
//! group's current mute set to a [`Decision`]: the state change to apply and
//! the reply to post. It performs no I/O and never mutates the set.

use super::replies;
use crate::error::ModerationError;
use crate::state::MuteSet;
use groupmute_proto::{Command, MemberId, OutboundMessage};

/// Outcome of the role checks a command requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    /// Every required check passed, or none was required.
    Allowed,
    DeniedNotSenderAdmin,
    DeniedBotNotAdmin,
    /// A role lookup errored. Fail-closed: treated as denied.
    LookupFailed,
}

impl Authorization {
    /// The refusal this outcome implies, if any.
    pub fn denial(self) -> Option<ModerationError> {
        match self {
            Self::Allowed => None,
            Self::DeniedNotSenderAdmin => Some(ModerationError::PermissionDenied),
            Self::DeniedBotNotAdmin => Some(ModerationError::BotLacksPermission),
            Self::LookupFailed => Some(ModerationError::LookupFailed),
        }
    }
}

/// State change requested by a decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MuteAction {
    None,
    Mute(MemberId),
    Unmute(MemberId),
    UnmuteAll,
}

/// What to do in response to one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub action: MuteAction,
    pub reply: Option<OutboundMessage>,
    /// Set when the command was refused.
    pub refusal: Option<ModerationError>,
}

impl Decision {
    fn ignore() -> Self {
        Self {
            action: MuteAction::None,
            reply: None,
            refusal: None,
        }
    }

    fn reply(msg: OutboundMessage) -> Self {
        Self {
            action: MuteAction::None,
            reply: Some(msg),
            refusal: None,
        }
    }

    fn apply(action: MuteAction, msg: OutboundMessage) -> Self {
        Self {
            action,
            reply: Some(msg),
            refusal: None,
        }
    }

    fn refuse(err: ModerationError, verb: &str) -> Self {
        Self {
            action: MuteAction::None,
            reply: Some(replies::refusal(err, verb)),
            refusal: Some(err),
        }
    }
}

/// Decide how to answer `command`.
///
/// For `/mute` and `/unmute` a missing mention is reported before any
/// authorization outcome; the bot-admin denial is produced upstream before
/// the sender check, so `auth` already reflects that precedence.
///
/// An allowed `/mute` or `/unmute` always confirms, even when the member is
/// already in the requested state; only the action is skipped then.
pub fn decide(command: &Command, auth: Authorization, mutes: &MuteSet) -> Decision {
    match command {
        Command::None => Decision::ignore(),

        Command::Menu => Decision::reply(replies::menu()),

        Command::ListMuted => {
            if let Some(err) = auth.denial() {
                return Decision::refuse(err, "list muted users");
            }
            if mutes.is_empty() {
                Decision::reply(replies::no_muted_users())
            } else {
                Decision::reply(replies::muted_list(mutes.list()))
            }
        }

        Command::UnmuteAll => {
            if let Some(err) = auth.denial() {
                return Decision::refuse(err, "unmute everyone");
            }
            if mutes.is_empty() {
                Decision::reply(replies::no_muted_users())
            } else {
                Decision::apply(MuteAction::UnmuteAll, replies::all_unmuted(mutes.len()))
            }
        }

        Command::Mute(target) => {
            let Some(target) = target else {
                return Decision::refuse(ModerationError::MissingMention, "mute");
            };
            if let Some(err) = auth.denial() {
                return Decision::refuse(err, "mute");
            }
            if mutes.is_muted(target) {
                Decision::reply(replies::muted(target))
            } else {
                Decision::apply(MuteAction::Mute(target.clone()), replies::muted(target))
            }
        }

        Command::Unmute(target) => {
            let Some(target) = target else {
                return Decision::refuse(ModerationError::MissingMention, "unmute");
            };
            if let Some(err) = auth.denial() {
                return Decision::refuse(err, "unmute");
            }
            if mutes.is_muted(target) {
                Decision::apply(
                    MuteAction::Unmute(target.clone()),
                    replies::unmuted(target),
                )
            } else {
                Decision::reply(replies::unmuted(target))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(n: &str) -> MemberId {
        MemberId::new(format!("{n}@s.whatsapp.net"))
    }

    fn muted(members: &[&str]) -> MuteSet {
        let mut set = MuteSet::default();
        for m in members {
            set.mute(member(m));
        }
        set
    }

    #[test]
    fn test_none_is_ignored() {
        let d = decide(&Command::None, Authorization::Allowed, &muted(&["1"]));
        assert_eq!(d, Decision::ignore());
    }

    #[test]
    fn test_menu_needs_no_authorization() {
        let d = decide(
            &Command::Menu,
            Authorization::DeniedNotSenderAdmin,
            &MuteSet::default(),
        );
        assert_eq!(d.action, MuteAction::None);
        assert!(d.reply.unwrap().text.contains("/menu"));
        assert_eq!(d.refusal, None);
    }

    #[test]
    fn test_list_muted_mentions_exactly_the_set() {
        let set = muted(&["1", "2"]);
        let d = decide(&Command::ListMuted, Authorization::Allowed, &set);
        let reply = d.reply.unwrap();
        assert!(reply.text.contains("@1"));
        assert!(reply.text.contains("@2"));
        assert_eq!(reply.mentions, set.list());
        assert_eq!(d.action, MuteAction::None);
    }

    #[test]
    fn test_list_muted_empty() {
        let empty = MuteSet::default();
        let d = decide(&Command::ListMuted, Authorization::Allowed, &empty);
        assert!(d.reply.unwrap().text.contains("no muted users"));
    }

    #[test]
    fn test_list_muted_denied() {
        let set = muted(&["1"]);
        let auth = Authorization::DeniedNotSenderAdmin;
        let d = decide(&Command::ListMuted, auth, &set);
        assert_eq!(d.refusal, Some(ModerationError::PermissionDenied));
        assert!(d.reply.unwrap().mentions.is_empty());
    }

    #[test]
    fn test_unmute_all() {
        let set = muted(&["1", "2"]);
        let d = decide(&Command::UnmuteAll, Authorization::Allowed, &set);
        assert_eq!(d.action, MuteAction::UnmuteAll);

        let empty = MuteSet::default();
        let d = decide(&Command::UnmuteAll, Authorization::Allowed, &empty);
        assert_eq!(d.action, MuteAction::None);
        assert!(d.reply.unwrap().text.contains("no muted users"));
    }

    #[test]
    fn test_missing_mention_wins_over_denials() {
        for auth in [
            Authorization::Allowed,
            Authorization::DeniedBotNotAdmin,
            Authorization::DeniedNotSenderAdmin,
            Authorization::LookupFailed,
        ] {
            let d = decide(&Command::Mute(None), auth, &MuteSet::default());
            assert_eq!(d.refusal, Some(ModerationError::MissingMention));
            assert_eq!(d.action, MuteAction::None);
        }
    }

    #[test]
    fn test_mute_refusals() {
        let cmd = Command::Mute(Some(member("9")));
        let empty = MuteSet::default();
        let d = decide(&cmd, Authorization::DeniedBotNotAdmin, &empty);
        assert_eq!(d.refusal, Some(ModerationError::BotLacksPermission));

        let d = decide(&cmd, Authorization::DeniedNotSenderAdmin, &empty);
        assert_eq!(d.refusal, Some(ModerationError::PermissionDenied));

        let d = decide(&cmd, Authorization::LookupFailed, &empty);
        assert_eq!(d.refusal, Some(ModerationError::LookupFailed));
        assert_eq!(d.action, MuteAction::None);
    }

    #[test]
    fn test_mute_and_remute() {
        let cmd = Command::Mute(Some(member("9")));
        let d = decide(&cmd, Authorization::Allowed, &MuteSet::default());
        assert_eq!(d.action, MuteAction::Mute(member("9")));
        assert_eq!(d.reply.unwrap().mentions, vec![member("9")]);

        // Already muted: same confirmation, nothing to apply.
        let d = decide(&cmd, Authorization::Allowed, &muted(&["9"]));
        assert_eq!(d.action, MuteAction::None);
        assert_eq!(d.refusal, None);
        let reply = d.reply.unwrap();
        assert!(reply.text.contains("has been muted"));
        assert_eq!(reply.mentions, vec![member("9")]);
    }

    #[test]
    fn test_unmute() {
        let cmd = Command::Unmute(Some(member("9")));
        let d = decide(&cmd, Authorization::Allowed, &muted(&["9"]));
        assert_eq!(d.action, MuteAction::Unmute(member("9")));

        let d = decide(&cmd, Authorization::Allowed, &MuteSet::default());
        assert_eq!(d.action, MuteAction::None);
        assert_eq!(d.refusal, None);
        assert!(d.reply.unwrap().text.contains("has been unmuted"));
    }
}
