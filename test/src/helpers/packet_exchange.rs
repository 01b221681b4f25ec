use log::warn;

use rpcq_shared::{IncomingMessage, NetworkStatus};

use super::TestPeer;

/// Delivers every packet each peer has sent to the peer it was addressed to.
/// Returns the number of packets delivered.
pub fn exchange_packets(peers: &mut [&mut TestPeer]) -> usize {
    let mut in_flight = Vec::new();
    for peer in peers.iter_mut() {
        in_flight.extend(peer.transport.take_sent());
    }

    let mut delivered = 0;
    for packet in in_flight {
        let Some(receiver) = peers
            .iter_mut()
            .find(|peer| peer.status.local_peer_id() == packet.to)
        else {
            warn!("Packet addressed to unknown peer {}", packet.to);
            continue;
        };

        match receiver.engine.receive_packet(packet.from, &packet.bytes) {
            Ok(IncomingMessage::Rpc { .. }) => {}
            Ok(IncomingMessage::Internal { sender, message }) => {
                receiver.internal_received.push((sender, message));
            }
            Err(error) => {
                warn!("Peer {} rejected packet: {}", packet.to, error);
                continue;
            }
        }
        delivered += 1;
    }
    delivered
}

/// Ticks every peer once, then exchanges the packets they produced
pub fn tick_and_exchange(peers: &mut [&mut TestPeer]) -> usize {
    for peer in peers.iter_mut() {
        peer.tick();
    }
    exchange_packets(peers)
}
