//! Slash-command parsing.
//!
//! Commands are recognized by prefix on the left-trimmed message text,
//! case-sensitively. `/unmuteall` and `/unmute` must be tried before
//! `/mute`-style prefixes that could shadow them, so the table below is
//! ordered from most to least specific and the first match wins.

use crate::id::MemberId;

/// Command reference menu.
pub const MENU: &str = "/menu";
/// List muted members of the group.
pub const LIST_MUTED: &str = "/listmuted";
/// Unmute every member of the group.
pub const UNMUTE_ALL: &str = "/unmuteall";
/// Unmute the mentioned member.
pub const UNMUTE: &str = "/unmute";
/// Mute the mentioned member.
pub const MUTE: &str = "/mute";

/// A recognized moderation command.
///
/// `Mute(None)` and `Unmute(None)` mean the command was issued without a
/// mention; the engine answers those with a missing-mention error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/menu`
    Menu,
    /// `/listmuted`
    ListMuted,
    /// `/unmuteall`
    UnmuteAll,
    /// `/mute @member`
    Mute(Option<MemberId>),
    /// `/unmute @member`
    Unmute(Option<MemberId>),
    /// Text that is not a command.
    None,
}

#[derive(Clone, Copy)]
enum Kind {
    Menu,
    ListMuted,
    UnmuteAll,
    Unmute,
    Mute,
}

const PREFIXES: [(&str, Kind); 5] = [
    (MENU, Kind::Menu),
    (LIST_MUTED, Kind::ListMuted),
    (UNMUTE_ALL, Kind::UnmuteAll),
    (UNMUTE, Kind::Unmute),
    (MUTE, Kind::Mute),
];

impl Command {
    /// Classify message text.
    ///
    /// `mentions` is the mention metadata of the message; its first entry
    /// becomes the target of `/mute` and `/unmute`.
    pub fn parse(text: &str, mentions: &[MemberId]) -> Self {
        let text = text.trim_start();
        let kind = PREFIXES
            .iter()
            .find(|(prefix, _)| text.starts_with(prefix))
            .map(|(_, kind)| *kind);

        match kind {
            Some(Kind::Menu) => Self::Menu,
            Some(Kind::ListMuted) => Self::ListMuted,
            Some(Kind::UnmuteAll) => Self::UnmuteAll,
            Some(Kind::Unmute) => Self::Unmute(mentions.first().cloned()),
            Some(Kind::Mute) => Self::Mute(mentions.first().cloned()),
            None => Self::None,
        }
    }

    /// Static label for logs and metrics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::ListMuted => "listmuted",
            Self::UnmuteAll => "unmuteall",
            Self::Mute(_) => "mute",
            Self::Unmute(_) => "unmute",
            Self::None => "none",
        }
    }
}
