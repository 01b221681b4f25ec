use crate::{
    queue::header::{ADD_OBJECT, CLIENT_RPC, DESTROY_OBJECT, SERVER_RPC},
    rpc::MethodId,
    types::{BehaviourId, CallKind, NetworkUpdateStage, PeerId},
};

/// Which pipeline a frame belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueueFrameType {
    Inbound,
    Outbound,
}

impl QueueFrameType {
    pub(crate) fn index(self) -> usize {
        match self {
            QueueFrameType::Inbound => 0,
            QueueFrameType::Outbound => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueueItemType {
    ServerRpc,
    ClientRpc,
    CreateObject,
    DestroyObject,
}

impl QueueItemType {
    pub fn message_type(self) -> u8 {
        match self {
            QueueItemType::ServerRpc => SERVER_RPC,
            QueueItemType::ClientRpc => CLIENT_RPC,
            QueueItemType::CreateObject => ADD_OBJECT,
            QueueItemType::DestroyObject => DESTROY_OBJECT,
        }
    }

    pub fn from_message_type(message_type: u8) -> Option<Self> {
        match message_type {
            SERVER_RPC => Some(QueueItemType::ServerRpc),
            CLIENT_RPC => Some(QueueItemType::ClientRpc),
            ADD_OBJECT => Some(QueueItemType::CreateObject),
            DESTROY_OBJECT => Some(QueueItemType::DestroyObject),
            _ => None,
        }
    }

    /// The call kind of a remote call item. `None` for lifecycle messages.
    pub fn call_kind(self) -> Option<CallKind> {
        match self {
            QueueItemType::ServerRpc => Some(CallKind::ServerCall),
            QueueItemType::ClientRpc => Some(CallKind::ClientCall),
            QueueItemType::CreateObject | QueueItemType::DestroyObject => None,
        }
    }
}

impl From<CallKind> for QueueItemType {
    fn from(kind: CallKind) -> Self {
        match kind {
            CallKind::ServerCall => QueueItemType::ServerRpc,
            CallKind::ClientCall => QueueItemType::ClientRpc,
        }
    }
}

/// One queued remote call
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueueItem {
    pub item_type: QueueItemType,
    pub target: BehaviourId,
    pub method_id: Option<MethodId>,
    /// Peer the call came from. Only meaningful on inbound items.
    pub sender: PeerId,
    /// Peers an outbound item is delivered to
    pub recipients: Vec<PeerId>,
    pub channel: String,
    pub reliable: bool,
    /// Stage the call is invoked in on the receiving peer
    pub stage: NetworkUpdateStage,
    /// `[MethodId][arguments]`
    pub payload: Vec<u8>,
}

impl QueueItem {
    pub fn payload_len(&self) -> usize {
        self.payload.len()
    }

    pub fn call_kind(&self) -> Option<CallKind> {
        self.item_type.call_kind()
    }
}

/// An object lifecycle message. These share the outbound pipeline with remote
/// calls but never pass through the marshaller or the frame queues.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InternalMessage {
    pub item_type: QueueItemType,
    pub object_id: u64,
    pub recipients: Vec<PeerId>,
    pub channel: String,
    /// Opaque to the engine, e.g. the spawn description of a created object
    pub payload: Vec<u8>,
}

impl InternalMessage {
    pub fn create_object(
        object_id: u64,
        recipients: impl IntoIterator<Item = PeerId>,
        payload: Vec<u8>,
    ) -> Self {
        Self {
            item_type: QueueItemType::CreateObject,
            object_id,
            recipients: recipients.into_iter().collect(),
            channel: String::new(),
            payload,
        }
    }

    pub fn destroy_object(object_id: u64, recipients: impl IntoIterator<Item = PeerId>) -> Self {
        Self {
            item_type: QueueItemType::DestroyObject,
            object_id,
            recipients: recipients.into_iter().collect(),
            channel: String::new(),
            payload: Vec::new(),
        }
    }

    pub fn on_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }
}

/// What `RpcQueueManager::receive_packet` made of a packet
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IncomingMessage {
    /// A remote call, now sitting in the inbound frame of `stage`
    Rpc {
        target: BehaviourId,
        stage: NetworkUpdateStage,
    },
    /// A lifecycle message for the scene owner to act on
    Internal {
        sender: PeerId,
        message: InternalMessage,
    },
}
