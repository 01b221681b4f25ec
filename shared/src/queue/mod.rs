mod error;
mod frame;
mod header;
mod history;
mod item;
mod manager;

pub use error::QueueError;
pub use frame::{DrainedFrame, Frame, FrameState};
pub use header::{MessageHeader, ADD_OBJECT, CLIENT_RPC, DESTROY_OBJECT, SERVER_RPC};
pub use history::FrameHistory;
pub use item::{IncomingMessage, InternalMessage, QueueFrameType, QueueItem, QueueItemType};
pub use manager::RpcQueueManager;
