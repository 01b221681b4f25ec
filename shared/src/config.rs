use std::default::Default;

/// Channel used by calls whose method doesn't name one
pub const DEFAULT_CHANNEL: &str = "RPC_DEFAULT_MESSAGE";

/// Contains Config properties which will be used by the RpcEngine
#[derive(Clone, Debug)]
pub struct RpcConfig {
    /// How many frames each (direction, stage) queue rotates through. A depth
    /// of 2 lets the next tick fill one frame while the previous one drains.
    pub history_depth: usize,
    /// Route outbound calls straight into this process's inbound queues
    /// instead of the transport
    pub loopback: bool,
    /// Channel name used when a method doesn't declare one
    pub default_channel: String,
    /// Log every invocation along with the update stage it ran in
    pub log_invocations: bool,
}

impl RpcConfig {
    pub const MIN_HISTORY_DEPTH: usize = 2;

    pub fn loopback() -> Self {
        Self {
            loopback: true,
            ..Self::default()
        }
    }

    pub(crate) fn effective_history_depth(&self) -> usize {
        self.history_depth.max(Self::MIN_HISTORY_DEPTH)
    }
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            history_depth: Self::MIN_HISTORY_DEPTH,
            loopback: false,
            default_channel: DEFAULT_CHANNEL.to_string(),
            log_invocations: false,
        }
    }
}
