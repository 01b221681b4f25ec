/// In-memory transport for tests
/// Records every packet instead of putting it on a network

use rpcq_shared::{PeerId, Transport};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentPacket {
    pub from: PeerId,
    pub to: PeerId,
    pub bytes: Vec<u8>,
    pub channel: String,
    pub reliable: bool,
}

pub struct LocalTransport {
    local_peer_id: PeerId,
    sent: Vec<SentPacket>,
}

impl LocalTransport {
    pub fn new(local_peer_id: PeerId) -> Self {
        Self {
            local_peer_id,
            sent: Vec::new(),
        }
    }

    pub fn sent(&self) -> &[SentPacket] {
        &self.sent
    }

    pub fn take_sent(&mut self) -> Vec<SentPacket> {
        std::mem::take(&mut self.sent)
    }

    fn record(&mut self, peer: PeerId, bytes: &[u8], channel: &str, reliable: bool) {
        self.sent.push(SentPacket {
            from: self.local_peer_id,
            to: peer,
            bytes: bytes.to_vec(),
            channel: channel.to_string(),
            reliable,
        });
    }
}

impl Transport for LocalTransport {
    fn send(&mut self, peer: PeerId, bytes: &[u8], channel: &str) {
        self.record(peer, bytes, channel, true);
    }

    fn send_unreliable(&mut self, peer: PeerId, bytes: &[u8], channel: &str) {
        self.record(peer, bytes, channel, false);
    }
}
