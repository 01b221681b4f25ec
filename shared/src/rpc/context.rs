use crate::{
    queue::RpcQueueManager,
    rpc::{
        marshaller::{self, CallWriter},
        ClientRpcSendParams, ExecutionGuard, RpcError, RpcMethod, ServerRpcSendParams,
    },
    transport::NetworkStatus,
    types::{BehaviourId, CallKind, NetworkUpdateStage, PeerId},
};

/// Everything a stub needs to send a call, and everything a handler needs to
/// know about the call it is running.
///
/// Handlers receive one for the duration of the invocation, gameplay code gets
/// one from `RpcEngine::context`.
pub struct RpcContext<'a> {
    queue: &'a mut RpcQueueManager,
    guard: &'a ExecutionGuard,
    status: &'a dyn NetworkStatus,
    default_channel: &'a str,
    stage: NetworkUpdateStage,
    sender: Option<PeerId>,
}

impl<'a> RpcContext<'a> {
    pub(crate) fn new(
        queue: &'a mut RpcQueueManager,
        guard: &'a ExecutionGuard,
        status: &'a dyn NetworkStatus,
        default_channel: &'a str,
        stage: NetworkUpdateStage,
        sender: Option<PeerId>,
    ) -> Self {
        Self {
            queue,
            guard,
            status,
            default_channel,
            stage,
            sender,
        }
    }

    /// The stage this context runs in. Calls sent without an explicit stage
    /// are invoked in the same stage on the receiver.
    pub fn stage(&self) -> NetworkUpdateStage {
        self.stage
    }

    /// Peer that sent the call being handled. `None` outside handlers.
    pub fn sender(&self) -> Option<PeerId> {
        self.sender
    }

    pub fn status(&self) -> &dyn NetworkStatus {
        self.status
    }

    pub fn guard(&self) -> &ExecutionGuard {
        self.guard
    }

    /// Starts a call to be executed on the server. `Ok(None)` means this peer
    /// doesn't send server calls right now and the stub should return.
    ///
    /// Calling a target that is already running as the server fails with
    /// `ReentrantCall` and nothing is queued. A handler may pass that error
    /// up with `?`: the invocation it belongs to is still counted as run.
    pub fn begin_server_call(
        &mut self,
        method: &RpcMethod,
        target: BehaviourId,
        params: &ServerRpcSendParams,
    ) -> Result<Option<CallWriter<'_>>, RpcError> {
        if !marshaller::can_send(self.status, self.guard, method, target, CallKind::ServerCall)? {
            return Ok(None);
        }
        let stage = params.update_stage.unwrap_or(self.stage);
        let recipients = vec![self.status.server_peer_id()];
        Ok(Some(CallWriter::new(
            self.queue,
            method,
            target,
            self.status.local_peer_id(),
            recipients,
            method.channel_or(self.default_channel),
            stage,
        )))
    }

    /// Starts a call to be executed on clients. `Ok(None)` means this peer
    /// doesn't send client calls right now and the stub should return.
    /// Re-entrant calls fail as in `begin_server_call`.
    pub fn begin_client_call(
        &mut self,
        method: &RpcMethod,
        target: BehaviourId,
        params: &ClientRpcSendParams,
    ) -> Result<Option<CallWriter<'_>>, RpcError> {
        if !marshaller::can_send(self.status, self.guard, method, target, CallKind::ClientCall)? {
            return Ok(None);
        }
        let stage = params.update_stage.unwrap_or(self.stage);
        let recipients = match &params.target_client_ids {
            Some(ids) => ids.clone(),
            None => self.status.connected_peers(),
        };
        Ok(Some(CallWriter::new(
            self.queue,
            method,
            target,
            self.status.local_peer_id(),
            recipients,
            method.channel_or(self.default_channel),
            stage,
        )))
    }
}
