pub mod local_transport;
pub mod packet_exchange;

pub use local_transport::{LocalTransport, SentPacket};
pub use packet_exchange::{exchange_packets, tick_and_exchange};
pub use test_peer::TestPeer;
