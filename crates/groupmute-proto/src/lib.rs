//! # groupmute-proto
//!
//! Protocol-level types for the groupmute moderation bot: opaque group and
//! member identifiers, inbound/outbound message envelopes, and the
//! slash-command parser.
//!
//! Nothing in this crate performs I/O. The transport that produces
//! [`InboundMessage`] values and consumes [`OutboundMessage`] values lives
//! outside of it.
//!
//! ## Quick Start
//!
//! ```rust
//! use groupmute_proto::{Command, MemberId};
//!
//! let alice = MemberId::new("5511999990000@s.whatsapp.net");
//! let cmd = Command::parse("  /mute @5511999990000", &[alice.clone()]);
//! assert_eq!(cmd, Command::Mute(Some(alice)));
//!
//! assert_eq!(Command::parse("hello there", &[]), Command::None);
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod command;
pub mod error;
pub mod id;
pub mod message;

pub use self::command::Command;
pub use self::error::IdError;
pub use self::id::{GroupId, MemberId, GROUP_SERVER, USER_SERVER};
pub use self::message::{InboundMessage, MessageRef, OutboundMessage};
