use crate::{
    config::RpcConfig,
    queue::{IncomingMessage, InternalMessage, QueueError, RpcQueueManager},
    rpc::{DispatchRegistry, ExecutionGuard, RpcContext},
    stats::RpcStats,
    transport::NetworkStatus,
    types::{NetworkUpdateStage, PeerId},
};

/// Ties the dispatch registry, the frame queues and the execution guard
/// together for one peer.
///
/// Gameplay code sends through [`RpcEngine::context`], the network layer feeds
/// packets in with [`RpcEngine::receive_packet`], and the game loop calls
/// [`RpcEngine::network_update`] once per stage (or [`RpcEngine::tick`] once
/// per tick).
pub struct RpcEngine {
    pub(crate) registry: DispatchRegistry,
    pub(crate) queue: RpcQueueManager,
    pub(crate) guard: ExecutionGuard,
    pub(crate) config: RpcConfig,
    pub(crate) stats: RpcStats,
    pub(crate) current_stage: NetworkUpdateStage,
}

impl RpcEngine {
    /// Locks `registry`: every method must be registered before this.
    pub fn new(mut registry: DispatchRegistry, config: RpcConfig) -> Self {
        registry.lock();
        let queue = RpcQueueManager::new(&config);
        Self {
            registry,
            queue,
            guard: ExecutionGuard::new(),
            config,
            stats: RpcStats::default(),
            current_stage: NetworkUpdateStage::default(),
        }
    }

    /// A send context for code running outside a handler. Between ticks the
    /// stage is `NetworkUpdateStage::default()`, during `network_update` it is
    /// the stage being run.
    pub fn context<'a>(&'a mut self, status: &'a dyn NetworkStatus) -> RpcContext<'a> {
        RpcContext::new(
            &mut self.queue,
            &self.guard,
            status,
            &self.config.default_channel,
            self.current_stage,
            None,
        )
    }

    /// Queues a packet received from `sender`. Lifecycle messages are handed
    /// back for the caller to apply.
    pub fn receive_packet(
        &mut self,
        sender: PeerId,
        bytes: &[u8],
    ) -> Result<IncomingMessage, QueueError> {
        self.queue.receive_packet(sender, bytes)
    }

    pub fn queue_internal_command(&mut self, message: InternalMessage) {
        self.queue.queue_internal_command(message);
    }

    pub fn registry(&self) -> &DispatchRegistry {
        &self.registry
    }

    pub fn queue(&self) -> &RpcQueueManager {
        &self.queue
    }

    pub fn queue_mut(&mut self) -> &mut RpcQueueManager {
        &mut self.queue
    }

    pub fn guard(&self) -> &ExecutionGuard {
        &self.guard
    }

    pub fn config(&self) -> &RpcConfig {
        &self.config
    }

    pub fn current_stage(&self) -> NetworkUpdateStage {
        self.current_stage
    }

    pub fn stats(&self) -> &RpcStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = RpcStats::default();
    }
}
