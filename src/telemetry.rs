//! Telemetry utilities for command timing and tracing spans.

use std::time::Instant;

/// Guard for timing command execution and recording metrics.
///
/// Records command latency when dropped.
pub struct CommandTimer {
    command: &'static str,
    start: Instant,
}

impl CommandTimer {
    /// Start timing a command.
    pub fn new(command: &'static str) -> Self {
        Self {
            command,
            start: Instant::now(),
        }
    }
}

impl Drop for CommandTimer {
    fn drop(&mut self) {
        let duration = self.start.elapsed().as_secs_f64();
        crate::metrics::record_command(self.command, duration);
    }
}

/// Standardized span constructors.
pub mod spans {
    use tracing::{Span, info_span};

    /// Span covering the handling of one inbound group message.
    pub fn moderation(group: &str, sender: &str, msg_id: &str) -> Span {
        info_span!("moderation", group = %group, sender = %sender, msg_id = %msg_id)
    }

    /// Span covering a transport session.
    pub fn transport(name: &str) -> Span {
        info_span!("transport", name = %name)
    }
}
