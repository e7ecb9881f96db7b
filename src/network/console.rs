//! Console transport.
//!
//! A line-oriented stand-in for the messaging session. Each input line is a
//! JSON [`InboundMessage`]:
//!
//! ```text
//! {"id":"3EB0","group":"1203@g.us","sender":"5511@s.whatsapp.net","text":"/mute @5522","mentions":["5522@s.whatsapp.net"]}
//! ```
//!
//! Replies and retractions are written as JSON lines by [`ConsoleGateway`]:
//!
//! ```text
//! {"action":"send","group":"1203@g.us","text":"...","mentions":["5522@s.whatsapp.net"]}
//! {"action":"retract","group":"1203@g.us","id":"3EB1","sender":"5522@s.whatsapp.net"}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use crate::error::GatewayError;
use crate::services::{MessageGateway, ModerationEngine};
use async_trait::async_trait;
use groupmute_proto::{GroupId, InboundMessage, MemberId, MessageRef, OutboundMessage};
use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;
use tracing::{debug, warn};

#[derive(Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
enum ConsoleOutput<'a> {
    Send {
        group: &'a GroupId,
        text: &'a str,
        #[serde(skip_serializing_if = "no_mentions")]
        mentions: &'a [MemberId],
    },
    Retract {
        group: &'a GroupId,
        id: &'a str,
        sender: &'a MemberId,
    },
}

fn no_mentions(mentions: &&[MemberId]) -> bool {
    mentions.is_empty()
}

/// [`MessageGateway`] writing JSON lines to `W`.
pub struct ConsoleGateway<W> {
    out: Mutex<W>,
}

impl<W: AsyncWrite + Unpin + Send> ConsoleGateway<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    async fn write_line(&self, line: &ConsoleOutput<'_>) -> Result<(), GatewayError> {
        let mut buf = serde_json::to_vec(line)?;
        buf.push(b'\n');
        let mut out = self.out.lock().await;
        out.write_all(&buf).await?;
        out.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> MessageGateway for ConsoleGateway<W> {
    async fn send(&self, group: &GroupId, msg: OutboundMessage) -> Result<(), GatewayError> {
        self.write_line(&ConsoleOutput::Send {
            group,
            text: &msg.text,
            mentions: &msg.mentions,
        })
        .await
    }

    async fn retract(&self, target: &MessageRef) -> Result<(), GatewayError> {
        self.write_line(&ConsoleOutput::Retract {
            group: &target.group,
            id: &target.id,
            sender: &target.sender,
        })
        .await
    }
}

/// Counters reported when the input ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleStats {
    pub processed: usize,
    /// Well-formed events that were not group messages.
    pub skipped: usize,
    pub malformed: usize,
}

/// Feed every event from `input` through `engine`, one at a time, until EOF.
pub async fn run<R>(engine: &ModerationEngine, input: R) -> std::io::Result<ConsoleStats>
where
    R: AsyncBufRead + Unpin,
{
    let mut stats = ConsoleStats::default();
    let mut lines = input.lines();
    let mut line_no = 0usize;

    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let msg = match serde_json::from_str::<InboundMessage>(line) {
            Ok(msg) => msg,
            Err(e) => {
                warn!(line = line_no, error = %e, "Skipping malformed event");
                stats.malformed += 1;
                continue;
            }
        };

        if !msg.group.is_group() {
            debug!(line = line_no, chat = %msg.group, "Skipping non-group event");
            stats.skipped += 1;
            continue;
        }

        engine.on_group_message(&msg).await;
        stats.processed += 1;
    }

    Ok(stats)
}
