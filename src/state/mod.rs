//! State management module.
//!
//! Contains the mute registry, the only mutable state of the moderation core.

pub mod dashmap_ext;
mod mute_store;

pub use mute_store::{MuteSet, MuteStore};
