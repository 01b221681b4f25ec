use crate::types::PeerId;

/// Fire-and-forget delivery of encoded messages to a remote peer
pub trait Transport {
    fn send(&mut self, peer: PeerId, bytes: &[u8], channel: &str);

    /// Used for methods declared unreliable. Transports without a separate
    /// unreliable path send them like any other message.
    fn send_unreliable(&mut self, peer: PeerId, bytes: &[u8], channel: &str) {
        self.send(peer, bytes, channel);
    }
}

/// Answers "what is this peer right now?" for authority checks and default
/// recipients
pub trait NetworkStatus {
    /// Whether networking has started. Nothing is queued while this is false.
    fn is_listening(&self) -> bool;
    fn is_server(&self) -> bool;
    fn is_client(&self) -> bool;
    fn is_host(&self) -> bool {
        self.is_server() && self.is_client()
    }
    fn local_peer_id(&self) -> PeerId;
    fn server_peer_id(&self) -> PeerId;
    /// Every client currently connected, including the host's own client
    fn connected_peers(&self) -> Vec<PeerId>;
}

/// A plain, fixed description of a peer's role
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeerRole {
    listening: bool,
    server: bool,
    client: bool,
    local_peer_id: PeerId,
    server_peer_id: PeerId,
    connected_peers: Vec<PeerId>,
}

impl PeerRole {
    pub fn server(local_peer_id: PeerId) -> Self {
        Self {
            listening: true,
            server: true,
            client: false,
            local_peer_id,
            server_peer_id: local_peer_id,
            connected_peers: Vec::new(),
        }
    }

    pub fn client(local_peer_id: PeerId, server_peer_id: PeerId) -> Self {
        Self {
            listening: true,
            server: false,
            client: true,
            local_peer_id,
            server_peer_id,
            connected_peers: Vec::new(),
        }
    }

    /// A server that also runs a local client. Its own client counts as
    /// connected.
    pub fn host(local_peer_id: PeerId) -> Self {
        Self {
            listening: true,
            server: true,
            client: true,
            local_peer_id,
            server_peer_id: local_peer_id,
            connected_peers: vec![local_peer_id],
        }
    }

    /// A peer that hasn't started networking
    pub fn offline(local_peer_id: PeerId) -> Self {
        Self {
            listening: false,
            server: false,
            client: false,
            local_peer_id,
            server_peer_id: local_peer_id,
            connected_peers: Vec::new(),
        }
    }

    pub fn with_peers(mut self, peers: impl IntoIterator<Item = PeerId>) -> Self {
        for peer in peers {
            if !self.connected_peers.contains(&peer) {
                self.connected_peers.push(peer);
            }
        }
        self
    }

    pub fn set_listening(&mut self, listening: bool) {
        self.listening = listening;
    }
}

impl NetworkStatus for PeerRole {
    fn is_listening(&self) -> bool {
        self.listening
    }

    fn is_server(&self) -> bool {
        self.server
    }

    fn is_client(&self) -> bool {
        self.client
    }

    fn local_peer_id(&self) -> PeerId {
        self.local_peer_id
    }

    fn server_peer_id(&self) -> PeerId {
        self.server_peer_id
    }

    fn connected_peers(&self) -> Vec<PeerId> {
        self.connected_peers.clone()
    }
}
