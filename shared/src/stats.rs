/// Running counters kept by the engine's queue processing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RpcStats {
    /// Remote call sends handed to the transport, one per recipient
    pub rpcs_sent: u64,
    /// Payload bytes handed to the transport, counted per recipient
    pub bytes_sent: u64,
    /// Inbound calls that reached their handler
    pub rpcs_processed: u64,
    /// Inbound calls dropped with a diagnostic
    pub rpcs_dropped: u64,
    /// Internal (object lifecycle) messages handed to the transport
    pub internal_sent: u64,
    /// Calls delivered to this peer without touching the transport
    pub local_deliveries: u64,
}
