/// End-to-end tests for object lifecycle messages sharing the send pipeline
/// with remote calls, and for malformed or unknown input on the receive side

use rpcq_shared::{
    BehaviourId, ClientRpcParams, InternalMessage, MessageHeader, NetworkUpdateStage,
    QueueError, QueueItemType, ServerRpcParams, ADD_OBJECT, CLIENT_RPC, DEFAULT_CHANNEL,
    DESTROY_OBJECT, SERVER_RPC,
};
use rpcq_test::{exchange_packets, tick_and_exchange, TestPeer, Turret};

const TURRET: BehaviourId = BehaviourId::new(10, 0);

#[test]
fn internal_messages_are_sent_before_calls() {
    let mut server = TestPeer::server(1, [2, 3]);
    server.spawn(Turret::new(TURRET));

    server
        .with_behaviour::<Turret, _>(TURRET, |turret, context| {
            turret.call_fire_effect_client_rpc(context, 1.0, &ClientRpcParams::default())
        })
        .unwrap();
    server
        .engine
        .queue_internal_command(InternalMessage::create_object(42, [2, 3], vec![7, 8]));
    server.tick();

    let types: Vec<u8> = server.transport.sent().iter().map(|packet| packet.bytes[0]).collect();
    assert_eq!(types, vec![ADD_OBJECT, ADD_OBJECT, CLIENT_RPC, CLIENT_RPC]);
    assert_eq!(server.engine.stats().internal_sent, 2);
    assert_eq!(server.engine.stats().rpcs_sent, 2);
    assert!(server
        .transport
        .sent()
        .iter()
        .all(|packet| packet.channel == DEFAULT_CHANNEL));
}

#[test]
fn clients_receive_lifecycle_messages() {
    let mut server = TestPeer::server(1, [2]);
    let mut client = TestPeer::client(2, 1);

    server
        .engine
        .queue_internal_command(InternalMessage::create_object(42, [2], vec![1, 2, 3]));
    server.engine.queue_internal_command(
        InternalMessage::destroy_object(42, [2]).on_channel("lifecycle"),
    );
    tick_and_exchange(&mut [&mut server, &mut client]);

    assert_eq!(client.internal_received.len(), 2);
    let (sender, created) = &client.internal_received[0];
    assert_eq!(*sender, 1);
    assert_eq!(created.item_type, QueueItemType::CreateObject);
    assert_eq!(created.object_id, 42);
    assert_eq!(created.payload, vec![1, 2, 3]);
    assert_eq!(client.internal_received[1].1.item_type, QueueItemType::DestroyObject);

    // lifecycle messages never enter the call queues
    assert_eq!(
        client
            .engine
            .queue()
            .pending_total(rpcq_shared::QueueFrameType::Inbound),
        0
    );
}

#[test]
fn host_skips_lifecycle_messages_to_itself() {
    let mut host = TestPeer::host(1, [2]);
    host.engine
        .queue_internal_command(InternalMessage::destroy_object(5, [1, 2]));
    host.tick();

    let sent = host.transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, 2);
    assert_eq!(sent[0].bytes[0], DESTROY_OBJECT);
}

#[test]
fn unknown_method_is_dropped_and_the_rest_still_run() {
    let mut server = TestPeer::server(1, [2]);
    let mut client = TestPeer::client(2, 1);
    server.spawn(Turret::new(TURRET));
    client.spawn(Turret::new(TURRET));

    let bogus = MessageHeader::new(SERVER_RPC, NetworkUpdateStage::Update.to_u8(), TURRET)
        .encode(&0x0BAD_F00Du32.to_le_bytes());
    server.engine.receive_packet(2, &bogus).unwrap();

    client
        .with_behaviour::<Turret, _>(TURRET, |turret, context| {
            turret.call_fire_server_rpc(context, 6.0, &ServerRpcParams::default())
        })
        .unwrap();
    client.tick();
    exchange_packets(&mut [&mut client, &mut server]);
    server.tick();

    assert_eq!(server.behaviour::<Turret>(TURRET).fired, vec![(6.0, 2)]);
    assert_eq!(server.engine.stats().rpcs_dropped, 1);
    assert_eq!(server.engine.stats().rpcs_processed, 1);
}

#[test]
fn truncated_arguments_are_dropped() {
    let mut server = TestPeer::server(1, [2]);
    server.spawn(Turret::new(TURRET));

    // fire takes an f32, only two bytes of it arrive
    let mut payload = Turret::FIRE.id.value().to_le_bytes().to_vec();
    payload.extend_from_slice(&[0, 0]);
    let packet = MessageHeader::new(SERVER_RPC, NetworkUpdateStage::Update.to_u8(), TURRET)
        .encode(&payload);
    server.engine.receive_packet(2, &packet).unwrap();
    server.tick();

    assert!(server.behaviour::<Turret>(TURRET).fired.is_empty());
    assert_eq!(server.engine.stats().rpcs_dropped, 1);
}

#[test]
fn malformed_packets_are_rejected() {
    let mut server = TestPeer::server(1, [2]);

    assert_eq!(
        server.engine.receive_packet(2, &[SERVER_RPC, 0, 0]),
        Err(QueueError::TruncatedHeader {
            length: 3,
            expected: MessageHeader::BYTES
        })
    );

    let unknown_type = MessageHeader::new(99, 0, TURRET).encode(&[]);
    assert_eq!(
        server.engine.receive_packet(2, &unknown_type),
        Err(QueueError::UnknownMessageType { message_type: 99 })
    );

    let unknown_stage = MessageHeader::new(SERVER_RPC, 42, TURRET).encode(&[]);
    assert_eq!(
        server.engine.receive_packet(2, &unknown_stage),
        Err(QueueError::UnknownUpdateStage { stage: 42 })
    );
}
