/// End-to-end tests for who may send and who may execute each call kind

use rpcq_shared::{
    BehaviourId, ClientRpcParams, ExecutionContext, NetworkUpdateStage, PeerRole,
    QueueFrameType, RpcConfig, RpcError, CallKind, ServerRpcParams,
};
use rpcq_test::{exchange_packets, tick_and_exchange, TestPeer, Turret};

const TURRET: BehaviourId = BehaviourId::new(10, 0);

#[test]
fn pure_client_does_not_send_client_calls() {
    let mut client = TestPeer::client(2, 1);
    client.spawn(Turret::new(TURRET));

    let result = client.with_behaviour::<Turret, _>(TURRET, |turret, context| {
        turret.call_fire_effect_client_rpc(context, 1.0, &ClientRpcParams::default())
    });

    assert_eq!(result, Ok(()));
    assert_eq!(client.engine.queue().pending_total(QueueFrameType::Outbound), 0);
    client.tick();
    assert!(client.transport.sent().is_empty());
}

#[test]
fn pure_server_does_not_send_server_calls() {
    let mut server = TestPeer::server(1, [2]);
    server.spawn(Turret::new(TURRET));

    let result = server.with_behaviour::<Turret, _>(TURRET, |turret, context| {
        turret.call_fire_server_rpc(context, 1.0, &ServerRpcParams::default())
    });

    assert_eq!(result, Ok(()));
    assert_eq!(server.engine.queue().pending_total(QueueFrameType::Outbound), 0);
}

#[test]
fn nothing_is_sent_before_listening() {
    let mut offline = TestPeer::new(PeerRole::offline(2), RpcConfig::default());
    offline.spawn(Turret::new(TURRET));

    offline
        .with_behaviour::<Turret, _>(TURRET, |turret, context| {
            turret.call_fire_server_rpc(context, 1.0, &ServerRpcParams::default())
        })
        .unwrap();
    assert_eq!(offline.engine.queue().pending_total(QueueFrameType::Outbound), 0);

    // same peer once networking has started
    offline.status = PeerRole::client(2, 1);
    offline
        .with_behaviour::<Turret, _>(TURRET, |turret, context| {
            turret.call_fire_server_rpc(context, 1.0, &ServerRpcParams::default())
        })
        .unwrap();
    assert_eq!(offline.engine.queue().pending_total(QueueFrameType::Outbound), 1);
}

#[test]
fn client_drops_server_call_it_received() {
    let mut sender = TestPeer::client(2, 1);
    let mut victim = TestPeer::client(3, 1);
    sender.spawn(Turret::new(TURRET));
    victim.spawn(Turret::new(TURRET));

    sender
        .with_behaviour::<Turret, _>(TURRET, |turret, context| {
            turret.call_fire_server_rpc(context, 9.0, &ServerRpcParams::default())
        })
        .unwrap();
    sender.tick();

    // hand the server-bound packet to another client instead
    let packets = sender.transport.take_sent();
    assert_eq!(packets.len(), 1);
    victim.engine.receive_packet(2, &packets[0].bytes).unwrap();
    victim.tick();

    assert!(victim.behaviour::<Turret>(TURRET).fired.is_empty());
    assert_eq!(victim.engine.stats().rpcs_dropped, 1);
    assert_eq!(victim.engine.stats().rpcs_processed, 0);
    assert_eq!(
        victim.engine.queue().pending(QueueFrameType::Inbound, NetworkUpdateStage::Update),
        0
    );
}

#[test]
fn reentrant_call_is_refused_and_context_restored() {
    let mut server = TestPeer::server(1, [2]);
    let mut client = TestPeer::client(2, 1);
    server.spawn(Turret::new(TURRET));
    client.spawn(Turret::new(TURRET));

    client
        .with_behaviour::<Turret, _>(TURRET, |turret, context| {
            turret.call_overheat_server_rpc(context, &ServerRpcParams::default())
        })
        .unwrap();
    tick_and_exchange(&mut [&mut client, &mut server]);
    server.tick();

    {
        let turret = server.behaviour::<Turret>(TURRET);
        assert_eq!(turret.contexts, vec![ExecutionContext::ActingAsServer]);
        assert_eq!(
            turret.reentry_errors,
            vec![RpcError::ReentrantCall {
                target: TURRET,
                kind: CallKind::ServerCall
            }]
        );
        assert!(turret.fired.is_empty());
    }

    // the outer call itself succeeded, the inner one was never queued
    assert_eq!(server.engine.stats().rpcs_processed, 1);
    assert_eq!(server.engine.guard().current(TURRET), ExecutionContext::None);
    assert_eq!(server.engine.queue().pending_total(QueueFrameType::Outbound), 0);
    assert_eq!(exchange_packets(&mut [&mut client, &mut server]), 0);
}

#[test]
fn missing_target_is_dropped_without_stopping_the_frame() {
    let mut server = TestPeer::server(1, [2]);
    let mut client = TestPeer::client(2, 1);
    let ghost = BehaviourId::new(99, 0);
    server.spawn(Turret::new(TURRET));
    client.spawn(Turret::new(TURRET));
    client.spawn(Turret::new(ghost));

    client
        .with_behaviour::<Turret, _>(ghost, |turret, context| {
            turret.call_fire_server_rpc(context, 1.0, &ServerRpcParams::default())
        })
        .unwrap();
    client
        .with_behaviour::<Turret, _>(TURRET, |turret, context| {
            turret.call_fire_server_rpc(context, 2.0, &ServerRpcParams::default())
        })
        .unwrap();
    tick_and_exchange(&mut [&mut client, &mut server]);
    server.tick();

    assert_eq!(server.behaviour::<Turret>(TURRET).fired, vec![(2.0, 2)]);
    assert_eq!(server.engine.stats().rpcs_dropped, 1);
    assert_eq!(server.engine.stats().rpcs_processed, 1);
}
