use crate::types::{NetworkUpdateStage, PeerId};

// Server calls

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServerRpcSendParams {
    /// Stage to invoke the call in on the server. `None` uses the sender's
    /// current stage.
    pub update_stage: Option<NetworkUpdateStage>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ServerRpcReceiveParams {
    pub sender_client_id: PeerId,
}

/// Optional trailing parameter of a server call
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServerRpcParams {
    pub send: ServerRpcSendParams,
    pub receive: ServerRpcReceiveParams,
}

impl ServerRpcParams {
    pub fn in_stage(update_stage: NetworkUpdateStage) -> Self {
        Self {
            send: ServerRpcSendParams {
                update_stage: Some(update_stage),
            },
            receive: ServerRpcReceiveParams::default(),
        }
    }

    /// What a handler passes to the real method
    pub fn received(sender_client_id: PeerId) -> Self {
        Self {
            send: ServerRpcSendParams::default(),
            receive: ServerRpcReceiveParams { sender_client_id },
        }
    }
}

// Client calls

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientRpcSendParams {
    /// Stage to invoke the call in on each client. `None` uses the sender's
    /// current stage.
    pub update_stage: Option<NetworkUpdateStage>,
    /// Clients to send to. `None` means every connected client.
    pub target_client_ids: Option<Vec<PeerId>>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClientRpcReceiveParams;

/// Optional trailing parameter of a client call
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientRpcParams {
    pub send: ClientRpcSendParams,
    pub receive: ClientRpcReceiveParams,
}

impl ClientRpcParams {
    pub fn to_clients(target_client_ids: impl IntoIterator<Item = PeerId>) -> Self {
        Self {
            send: ClientRpcSendParams {
                update_stage: None,
                target_client_ids: Some(target_client_ids.into_iter().collect()),
            },
            receive: ClientRpcReceiveParams,
        }
    }

    pub fn in_stage(mut self, update_stage: NetworkUpdateStage) -> Self {
        self.send.update_stage = Some(update_stage);
        self
    }

    pub fn received() -> Self {
        Self::default()
    }
}
