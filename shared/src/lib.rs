//! # rpcq Shared
//! Remote calls on replicated objects, batched per network tick and update
//! stage.
//!
//! A remote method is a pair of hand-written halves agreeing on one
//! [`RpcMethod`] descriptor: a stub that writes the method id and then each
//! argument, in declared order, through [`RpcContext`], and a [`RpcHandler`]
//! that reads them back in the same order and calls the real method. Handlers
//! are registered in a [`DispatchRegistry`] before the [`RpcEngine`] is built.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use rpcq_serde::{
    BitCounter, BitReader, BitWrite, BitWriter, Color, Color32, ConstBitLength, Quat,
    Ray, Ray2D, Serde, SerdeErr, SerdeInteger, SignedInteger, SignedVariableInteger,
    UnsignedInteger, UnsignedVariableInteger, Vec2, Vec3, Vec4,
};

mod behaviour;
mod config;
mod engine;
mod processing;
mod queue;
mod rpc;
mod stats;
mod transport;
mod types;

pub use behaviour::{downcast_behaviour_mut, NetworkBehaviour, NetworkObjects};
pub use config::{RpcConfig, DEFAULT_CHANNEL};
pub use engine::RpcEngine;
pub use queue::{
    DrainedFrame, Frame, FrameHistory, FrameState, IncomingMessage, InternalMessage,
    MessageHeader, QueueError, QueueFrameType, QueueItem, QueueItemType, RpcQueueManager,
    ADD_OBJECT, CLIENT_RPC, DESTROY_OBJECT, SERVER_RPC,
};
pub use rpc::{
    CallWriter, ClientRpcParams, ClientRpcReceiveParams, ClientRpcSendParams, DispatchRegistry,
    ExecutionGuard, ExecutionScope, MethodId, RpcContext, RpcEntry, RpcError, RpcHandler,
    RpcMethod, ServerRpcParams, ServerRpcReceiveParams, ServerRpcSendParams,
};
pub use stats::RpcStats;
pub use transport::{NetworkStatus, PeerRole, Transport};
pub use types::{BehaviourId, CallKind, ExecutionContext, NetworkUpdateStage, PeerId};
