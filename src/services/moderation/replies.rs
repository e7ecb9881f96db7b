//! Reply texts.

use crate::error::ModerationError;
use groupmute_proto::{MemberId, OutboundMessage};

const MENU_TEXT: &str = "📌 Bot commands:

🔹 /mute @user - Mute a user until an admin unmutes them.
🔹 /unmute @user - Unmute a user.
🔹 /listmuted - Show the muted users of this group.
🔹 /unmuteall - Unmute every user in this group.
🔹 /menu - Show this command menu.

⚠️ Note: only group admins can use these commands.";

pub(super) fn menu() -> OutboundMessage {
    OutboundMessage::text(MENU_TEXT)
}

pub(super) fn no_muted_users() -> OutboundMessage {
    OutboundMessage::text("✅ There are no muted users in this group.")
}

/// One line per member, tagged so clients render mentions.
pub(super) fn muted_list(members: Vec<MemberId>) -> OutboundMessage {
    let mut text = String::from("🔇 Muted users in this group:");
    for member in &members {
        text.push_str("\n- @");
        text.push_str(member.handle());
    }
    OutboundMessage::text(text).with_mentions(members)
}

pub(super) fn all_unmuted(count: usize) -> OutboundMessage {
    OutboundMessage::text(format!(
        "🔊 All users have been unmuted in this group! ({count} unmuted)"
    ))
}

pub(super) fn muted(target: &MemberId) -> OutboundMessage {
    OutboundMessage::text(format!(
        "🔇 @{} has been muted until an admin unmutes them.",
        target.handle()
    ))
    .with_mentions(vec![target.clone()])
}

pub(super) fn unmuted(target: &MemberId) -> OutboundMessage {
    OutboundMessage::text(format!("🔊 @{} has been unmuted!", target.handle()))
        .with_mentions(vec![target.clone()])
}

const NOT_ADMIN_TEXT: &str = "❌ Only group admins can use this command.";

const LOOKUP_FAILED_TEXT: &str =
    "⚠️ Couldn't check group permissions right now. Please try again later.";

/// Reply for a refused command. `verb` names the action ("mute", "unmute").
pub(super) fn refusal(err: ModerationError, verb: &str) -> OutboundMessage {
    let text = match err {
        ModerationError::PermissionDenied => NOT_ADMIN_TEXT.to_string(),
        ModerationError::BotLacksPermission => format!("❌ I can't {verb}. Make me an admin!"),
        ModerationError::MissingMention => format!("❌ You must mention a user to {verb}."),
        ModerationError::LookupFailed => LOOKUP_FAILED_TEXT.to_string(),
    };
    OutboundMessage::text(text)
}
