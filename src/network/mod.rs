//! Network module.
//!
//! Contains the console transport (JSON lines on stdin/stdout) and the
//! static roster that backs its role lookups.

pub mod console;
pub mod roster;

pub use console::{ConsoleGateway, ConsoleStats};
pub use roster::RosterSource;
