use thiserror::Error;

use rpcq_serde::SerdeErr;

use crate::{
    rpc::MethodId,
    types::{BehaviourId, CallKind},
};

/// Errors that can occur while registering, sending or invoking remote calls
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RpcError {
    /// Two methods hashed to the same identifier
    #[error("Method identifier {id} is already registered to `{existing}`, cannot register `{incoming}`. Rename one of the methods so their signatures hash differently")]
    DuplicateIdentifier {
        id: MethodId,
        existing: &'static str,
        incoming: &'static str,
    },

    /// Registration was attempted after startup
    #[error("Dispatch registry is locked. Methods must be registered before the engine starts processing")]
    RegistryLocked,

    /// A method's name doesn't follow the naming rule for its kind
    #[error("Method `{name}` is not a valid {kind:?} name. Server calls must end in `server_rpc` and client calls in `client_rpc`")]
    InvalidMethodName { name: &'static str, kind: CallKind },

    /// No handler is registered under the received identifier
    #[error("No handler registered for method identifier {id}. The sender may be running a newer build, or the payload is corrupt")]
    UnknownMethod { id: MethodId },

    /// The target is already executing a remote call
    #[error("Target {target:?} is already executing a remote call, refusing re-entrant {kind:?}")]
    ReentrantCall { target: BehaviourId, kind: CallKind },

    /// The local peer's role isn't allowed to execute this kind of call
    #[error("Local peer does not hold the role required to execute a {kind:?}")]
    AuthorityMismatch { kind: CallKind },

    /// The method's declared kind doesn't match how it was sent or received
    #[error("Method `{name}` is declared as {declared:?} but was used as {used:?}")]
    CallKindMismatch {
        name: &'static str,
        declared: CallKind,
        used: CallKind,
    },

    /// The call's target doesn't exist on this peer
    #[error("Target {target:?} does not exist on this peer")]
    TargetNotFound { target: BehaviourId },

    /// The target exists but isn't the behaviour type the handler expects
    #[error("Target {target:?} is not a `{expected}`")]
    BehaviourTypeMismatch {
        target: BehaviourId,
        expected: &'static str,
    },

    /// Arguments could not be read from the payload
    #[error("Failed to read call arguments: {0}")]
    Serde(#[from] SerdeErr),
}
