use std::collections::HashMap;

use rpcq_serde::BitReader;

use crate::{
    behaviour::NetworkBehaviour,
    rpc::{MethodId, RpcContext, RpcError, RpcMethod},
};

/// The generated receive half of a remote method: reads the arguments from
/// the payload, in declared order, and calls the real method on the target
pub type RpcHandler =
    fn(&mut dyn NetworkBehaviour, &mut BitReader, &mut RpcContext<'_>) -> Result<(), RpcError>;

#[derive(Clone, Copy)]
pub struct RpcEntry {
    pub method: RpcMethod,
    pub handler: RpcHandler,
}

/// Maps method identifiers to their handlers.
///
/// Filled once at startup, then locked. Once locked it only answers lookups.
pub struct DispatchRegistry {
    entries: HashMap<MethodId, RpcEntry>,
    locked: bool,
}

impl DispatchRegistry {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            locked: false,
        }
    }

    pub fn register(
        &mut self,
        method: &RpcMethod,
        handler: RpcHandler,
    ) -> Result<&mut Self, RpcError> {
        if self.locked {
            return Err(RpcError::RegistryLocked);
        }
        if !method.has_valid_name() {
            return Err(RpcError::InvalidMethodName {
                name: method.name,
                kind: method.kind,
            });
        }
        if let Some(existing) = self.entries.get(&method.id) {
            return Err(RpcError::DuplicateIdentifier {
                id: method.id,
                existing: existing.method.name,
                incoming: method.name,
            });
        }

        self.entries.insert(
            method.id,
            RpcEntry {
                method: *method,
                handler,
            },
        );
        Ok(self)
    }

    pub fn resolve(&self, id: MethodId) -> Result<&RpcEntry, RpcError> {
        self.entries.get(&id).ok_or(RpcError::UnknownMethod { id })
    }

    pub fn contains(&self, id: MethodId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ends the startup phase. Further registration fails.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

impl Default for DispatchRegistry {
    fn default() -> Self {
        Self::new()
    }
}
