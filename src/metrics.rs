//! Prometheus metrics collection for groupmute.
//!
//! - `groupmute_commands_total{command}` - Commands processed by type
//! - `groupmute_command_duration_seconds{command}` - Command latency histogram
//! - `groupmute_moderation_errors_total{command,error}` - Refused commands
//! - `groupmute_messages_retracted_total` - Messages retracted from muted members
//! - `groupmute_gateway_failures_total{operation,error}` - Failed sends/retractions
//! - `groupmute_muted_members{group}` - Muted members per group (gauge)

use groupmute_proto::GroupId;
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGaugeVec, Opts, Registry,
    TextEncoder,
};
use std::sync::OnceLock;

/// Global Prometheus registry for all metrics.
pub static REGISTRY: OnceLock<Registry> = OnceLock::new();

pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(Registry::new)
}

/// Commands processed by type.
pub static COMMAND_COUNTER: OnceLock<IntCounterVec> = OnceLock::new();

/// Command processing latency by type, role lookups included.
pub static COMMAND_LATENCY: OnceLock<HistogramVec> = OnceLock::new();

/// Refused commands by type and reason.
pub static COMMAND_ERRORS: OnceLock<IntCounterVec> = OnceLock::new();

/// Messages retracted because their sender is muted.
pub static MESSAGES_RETRACTED: OnceLock<IntCounter> = OnceLock::new();

/// Gateway operations that failed.
pub static GATEWAY_FAILURES: OnceLock<IntCounterVec> = OnceLock::new();

/// Muted members per group.
pub static MUTED_MEMBERS: OnceLock<IntGaugeVec> = OnceLock::new();

/// Command latency buckets, in seconds.
const LATENCY_BUCKETS: [f64; 10] = [
    0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0,
];

/// Initialize the Prometheus metrics registry.
///
/// Must be called once at startup before any metrics are recorded. Until
/// then every `record_*` helper is a no-op.
pub fn init() {
    let r = registry();

    macro_rules! register {
        ($metric:ident, $init:expr) => {
            match $init {
                Ok(m) => match r.register(Box::new(m.clone())) {
                    // Only the registered instance may back the recorder.
                    Ok(()) => {
                        let _ = $metric.set(m);
                    }
                    Err(e) => {
                        tracing::warn!(
                            error = %e,
                            concat!("Failed to register metric ", stringify!($metric))
                        );
                    }
                },
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        concat!("Failed to create metric ", stringify!($metric))
                    );
                }
            }
        };
    }

    register!(
        COMMAND_COUNTER,
        IntCounterVec::new(
            Opts::new(
                "groupmute_commands_total",
                "Moderation commands processed by type",
            ),
            &["command"],
        )
    );
    register!(
        COMMAND_LATENCY,
        HistogramVec::new(
            HistogramOpts::new(
                "groupmute_command_duration_seconds",
                "Moderation command latency by type",
            )
            .buckets(LATENCY_BUCKETS.to_vec()),
            &["command"],
        )
    );
    register!(
        COMMAND_ERRORS,
        IntCounterVec::new(
            Opts::new(
                "groupmute_moderation_errors_total",
                "Refused moderation commands",
            ),
            &["command", "error"],
        )
    );
    register!(
        MESSAGES_RETRACTED,
        IntCounter::new(
            "groupmute_messages_retracted_total",
            "Messages retracted from muted members",
        )
    );
    register!(
        GATEWAY_FAILURES,
        IntCounterVec::new(
            Opts::new(
                "groupmute_gateway_failures_total",
                "Failed gateway operations",
            ),
            &["operation", "error"],
        )
    );
    register!(
        MUTED_MEMBERS,
        IntGaugeVec::new(
            Opts::new("groupmute_muted_members", "Muted members per group"),
            &["group"],
        )
    );
}

/// Gather all metrics and encode them in Prometheus text format.
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = registry().gather();
    let mut buffer = vec![];
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode Prometheus metrics");
        return String::new();
    }
    match String::from_utf8(buffer) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Prometheus metrics were not valid UTF-8");
            String::new()
        }
    }
}

/// Record a command execution with latency.
#[inline]
pub fn record_command(command: &str, duration_secs: f64) {
    if let Some(c) = COMMAND_COUNTER.get() {
        c.with_label_values(&[command]).inc();
    }
    if let Some(h) = COMMAND_LATENCY.get() {
        h.with_label_values(&[command]).observe(duration_secs);
    }
}

/// Record a refused command.
#[inline]
pub fn record_command_error(command: &str, error: &str) {
    if let Some(c) = COMMAND_ERRORS.get() {
        c.with_label_values(&[command, error]).inc();
    }
}

#[inline]
pub fn record_retraction() {
    if let Some(c) = MESSAGES_RETRACTED.get() {
        c.inc();
    }
}

#[inline]
pub fn record_gateway_failure(operation: &str, error: &str) {
    if let Some(c) = GATEWAY_FAILURES.get() {
        c.with_label_values(&[operation, error]).inc();
    }
}

/// Update a group's muted member gauge.
#[inline]
pub fn set_muted_members(group: &GroupId, count: usize) {
    if let Some(g) = MUTED_MEMBERS.get() {
        g.with_label_values(&[group.as_str()]).set(count as i64);
    }
}
