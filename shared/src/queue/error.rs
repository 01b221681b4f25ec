use thiserror::Error;

/// Errors that can occur while turning received bytes into queue items
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// The envelope names a message type this engine doesn't handle
    #[error("Unknown message type {message_type}. Only remote calls and object lifecycle messages are queued")]
    UnknownMessageType { message_type: u8 },

    /// The envelope names an update stage that doesn't exist
    #[error("Unknown update stage {stage} in message envelope")]
    UnknownUpdateStage { stage: u8 },

    /// Fewer bytes were received than the envelope needs
    #[error("Received {length} bytes, which is too short to hold a message header of {expected} bytes")]
    TruncatedHeader { length: usize, expected: usize },
}
