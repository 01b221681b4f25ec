use log::{trace, warn};
use rpcq_serde::{BitReader, BitWriter, Serde};

use crate::{
    behaviour::NetworkObjects,
    config::RpcConfig,
    queue::{QueueFrameType, QueueItem, QueueItemType, RpcQueueManager},
    rpc::{DispatchRegistry, ExecutionGuard, MethodId, RpcContext, RpcError, RpcMethod},
    transport::NetworkStatus,
    types::{BehaviourId, CallKind, NetworkUpdateStage, PeerId},
};

/// Decides whether a call of `used` kind gets transmitted at all.
///
/// Not listening, or not holding the sending role, is a silent `Ok(false)`.
/// Calling the target in the context it is already executing in is refused.
pub(crate) fn can_send(
    status: &dyn NetworkStatus,
    guard: &ExecutionGuard,
    method: &RpcMethod,
    target: BehaviourId,
    used: CallKind,
) -> Result<bool, RpcError> {
    if !status.is_listening() {
        trace!("Not listening, `{}` is not sent", method.name);
        return Ok(false);
    }

    if guard.current(target) == used.required_context() {
        warn!(
            "Dropping re-entrant call to `{}` on {:?}",
            method.name, target
        );
        return Err(RpcError::ReentrantCall { target, kind: used });
    }

    let has_role = match used {
        CallKind::ServerCall => status.is_client() || status.is_host(),
        CallKind::ClientCall => status.is_server() || status.is_host(),
    };
    if !has_role {
        trace!("Local peer can't send {:?}, `{}` is not sent", used, method.name);
        return Ok(false);
    }

    if method.kind != used {
        return Err(RpcError::CallKindMismatch {
            name: method.name,
            declared: method.kind,
            used,
        });
    }

    Ok(true)
}

/// Serializes one outgoing call. The method id is written up front, each
/// `write` appends the next argument, and `end` queues the result.
pub struct CallWriter<'q> {
    queue: &'q mut RpcQueueManager,
    writer: BitWriter,
    item_type: QueueItemType,
    method_id: MethodId,
    target: BehaviourId,
    sender: PeerId,
    recipients: Vec<PeerId>,
    channel: String,
    reliable: bool,
    stage: NetworkUpdateStage,
}

impl<'q> CallWriter<'q> {
    pub(crate) fn new(
        queue: &'q mut RpcQueueManager,
        method: &RpcMethod,
        target: BehaviourId,
        sender: PeerId,
        recipients: Vec<PeerId>,
        channel: &str,
        stage: NetworkUpdateStage,
    ) -> Self {
        let mut writer = BitWriter::new();
        method.id.ser(&mut writer);
        Self {
            queue,
            writer,
            item_type: method.kind.into(),
            method_id: method.id,
            target,
            sender,
            recipients,
            channel: channel.to_string(),
            reliable: method.reliable,
            stage,
        }
    }

    /// Appends the next argument
    pub fn write<T: Serde>(&mut self, value: &T) -> &mut Self {
        value.ser(&mut self.writer);
        self
    }

    pub fn bits_written(&self) -> u32 {
        self.writer.bits_written()
    }

    /// Closes the payload and appends the call to the current outbound frame
    /// of its stage. Returns the payload length in bytes.
    pub fn end(self) -> usize {
        let payload = self.writer.to_bytes();
        let length = payload.len();
        self.queue.enqueue(
            QueueFrameType::Outbound,
            QueueItem {
                item_type: self.item_type,
                target: self.target,
                method_id: Some(self.method_id),
                sender: self.sender,
                recipients: self.recipients,
                channel: self.channel,
                reliable: self.reliable,
                stage: self.stage,
                payload,
            },
        );
        length
    }
}

/// What an inbound item needs from the engine to be invoked
pub(crate) struct Invocation<'e> {
    pub registry: &'e DispatchRegistry,
    pub guard: &'e ExecutionGuard,
    pub config: &'e RpcConfig,
    pub status: &'e dyn NetworkStatus,
}

impl Invocation<'_> {
    /// Decodes, checks and runs one received call. Any error means the item
    /// was dropped, nothing else is affected.
    pub(crate) fn invoke(
        &self,
        queue: &mut RpcQueueManager,
        objects: &mut dyn NetworkObjects,
        used: CallKind,
        item: &QueueItem,
    ) -> Result<(), RpcError> {
        let mut reader = BitReader::new(&item.payload);
        let id = MethodId::de(&mut reader)?;
        let entry = self.registry.resolve(id)?;

        if entry.method.kind != used {
            return Err(RpcError::CallKindMismatch {
                name: entry.method.name,
                declared: entry.method.kind,
                used,
            });
        }

        let has_authority = match used {
            CallKind::ServerCall => self.status.is_server() || self.status.is_host(),
            CallKind::ClientCall => self.status.is_client() || self.status.is_host(),
        };
        if !has_authority {
            return Err(RpcError::AuthorityMismatch { kind: used });
        }

        let behaviour = objects
            .behaviour_mut(item.target)
            .ok_or(RpcError::TargetNotFound {
                target: item.target,
            })?;

        let _scope = self.guard.enter(item.target, used)?;
        let mut context = RpcContext::new(
            queue,
            self.guard,
            self.status,
            &self.config.default_channel,
            item.stage,
            Some(item.sender),
        );
        match (entry.handler)(behaviour, &mut reader, &mut context) {
            // a nested send refused by the guard was logged and dropped there,
            // the call being handled still counts as run
            Err(RpcError::ReentrantCall { target, .. }) if target == item.target => Ok(()),
            result => result,
        }
    }
}
