use std::{cell::RefCell, collections::HashMap};

use crate::{
    rpc::RpcError,
    types::{BehaviourId, CallKind, ExecutionContext},
};

/// Tracks which targets are currently executing a received call, and as
/// which role.
///
/// A handler's body may issue further calls through the same engine while
/// its scope is held, so the table is behind a `RefCell` and both the scope
/// and the running handler only need `&ExecutionGuard`.
#[derive(Default)]
pub struct ExecutionGuard {
    contexts: RefCell<HashMap<BehaviourId, ExecutionContext>>,
}

impl ExecutionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `target` as executing a call of `kind`. Fails if the target is
    /// already executing anything.
    pub fn enter(
        &self,
        target: BehaviourId,
        kind: CallKind,
    ) -> Result<ExecutionScope<'_>, RpcError> {
        let mut contexts = self.contexts.borrow_mut();
        let current = contexts.get(&target).copied().unwrap_or_default();
        if current != ExecutionContext::None {
            return Err(RpcError::ReentrantCall { target, kind });
        }
        contexts.insert(target, kind.required_context());
        Ok(ExecutionScope {
            guard: self,
            target,
        })
    }

    /// Ends a scope early. Dropping the scope does the same.
    pub fn exit(&self, scope: ExecutionScope<'_>) {
        drop(scope);
    }

    pub fn current(&self, target: BehaviourId) -> ExecutionContext {
        self.contexts
            .borrow()
            .get(&target)
            .copied()
            .unwrap_or_default()
    }

    /// Number of targets currently inside a scope
    pub fn active(&self) -> usize {
        self.contexts.borrow().len()
    }

    fn release(&self, target: BehaviourId) {
        self.contexts.borrow_mut().remove(&target);
    }
}

/// Held while a target executes a received call. Restores the target's
/// context to `None` when dropped, on every exit path.
#[must_use = "the execution context is released as soon as the scope is dropped"]
pub struct ExecutionScope<'g> {
    guard: &'g ExecutionGuard,
    target: BehaviourId,
}

impl ExecutionScope<'_> {
    pub fn target(&self) -> BehaviourId {
        self.target
    }
}

impl Drop for ExecutionScope<'_> {
    fn drop(&mut self) {
        self.guard.release(self.target);
    }
}
