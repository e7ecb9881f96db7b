use async_trait::async_trait;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use groupmute::error::{GatewayError, LookupError};
use groupmute::services::moderation::{Authorization, decide};
use groupmute::state::MuteSet;
use groupmute::{
    Command, GroupId, InboundMessage, MemberId, MessageGateway, MessageRef, ModerationEngine,
    OutboundMessage, RoleOracle,
};
use std::sync::Arc;

// Everyone is an admin; nothing is delivered. Measures engine overhead only.
struct Permissive;

#[async_trait]
impl RoleOracle for Permissive {
    async fn is_admin(&self, _: &GroupId, _: &MemberId) -> Result<bool, LookupError> {
        Ok(true)
    }

    async fn is_bot_admin(&self, _: &GroupId) -> Result<bool, LookupError> {
        Ok(true)
    }
}

struct Discard;

#[async_trait]
impl MessageGateway for Discard {
    async fn send(&self, _: &GroupId, _: OutboundMessage) -> Result<(), GatewayError> {
        Ok(())
    }

    async fn retract(&self, _: &MessageRef) -> Result<(), GatewayError> {
        Ok(())
    }
}

fn decide_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("decide");
    group.throughput(Throughput::Elements(1));

    let mut mutes = MuteSet::default();
    for i in 0..50 {
        mutes.mute(MemberId::from_number(&format!("5511{i:06}")));
    }
    let target = MemberId::from_number("5522000000");

    group.bench_function("mute", |b| {
        let cmd = Command::Mute(Some(target.clone()));
        b.iter(|| decide(&cmd, Authorization::Allowed, &mutes))
    });

    group.bench_function("listmuted_50", |b| {
        b.iter(|| decide(&Command::ListMuted, Authorization::Allowed, &mutes))
    });

    group.finish();
}

fn engine_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    group.throughput(Throughput::Elements(1));

    let rt = tokio::runtime::Runtime::new().unwrap();
    let engine = ModerationEngine::new(Arc::new(Permissive), Arc::new(Discard));
    let chat = GroupId::new("120363041234567890@g.us");
    let muted = MemberId::from_number("5511000001");
    rt.block_on(engine.store().mute(&chat, muted.clone()));

    let chatter = MemberId::from_number("5511000002");
    let plain = InboundMessage::text("1", chat.clone(), chatter, "hi");
    group.bench_function("plain_message", |b| {
        b.to_async(&rt).iter(|| engine.on_group_message(&plain))
    });

    let retracted = InboundMessage::text("2", chat.clone(), muted, "hi");
    group.bench_function("retract_muted", |b| {
        b.to_async(&rt).iter(|| engine.on_group_message(&retracted))
    });

    let admin = MemberId::from_number("5511000003");
    let mute = InboundMessage::text("3", chat, admin, "/mute @x")
        .with_mentions(vec![MemberId::from_number("5511000004")]);
    group.bench_function("mute_command", |b| {
        b.to_async(&rt).iter(|| engine.on_group_message(&mute))
    });

    group.finish();
}

criterion_group!(benches, decide_benchmark, engine_benchmark);
criterion_main!(benches);
