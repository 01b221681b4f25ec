mod context;
mod error;
mod execution;
pub(crate) mod marshaller;
mod method_id;
mod params;
mod registry;

pub use context::RpcContext;
pub use error::RpcError;
pub use execution::{ExecutionGuard, ExecutionScope};
pub use marshaller::CallWriter;
pub use method_id::{MethodId, RpcMethod};
pub use params::{
    ClientRpcParams, ClientRpcReceiveParams, ClientRpcSendParams, ServerRpcParams,
    ServerRpcReceiveParams, ServerRpcSendParams,
};
pub use registry::{DispatchRegistry, RpcEntry, RpcHandler};
