use std::{any::Any, collections::HashMap};

use crate::{rpc::RpcError, types::BehaviourId};

/// A networked behaviour that remote calls can target
pub trait NetworkBehaviour: Any {
    fn behaviour_id(&self) -> BehaviourId;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Looks up the live behaviour a queued call is addressed to. Implemented by
/// whatever owns the scene.
pub trait NetworkObjects {
    fn behaviour_mut(&mut self, id: BehaviourId) -> Option<&mut dyn NetworkBehaviour>;
}

impl NetworkObjects for HashMap<BehaviourId, Box<dyn NetworkBehaviour>> {
    fn behaviour_mut(&mut self, id: BehaviourId) -> Option<&mut dyn NetworkBehaviour> {
        let behaviour: &mut dyn NetworkBehaviour = self.get_mut(&id)?.as_mut();
        Some(behaviour)
    }
}

/// Gets the concrete behaviour a handler was generated for
pub fn downcast_behaviour_mut<T: NetworkBehaviour>(
    behaviour: &mut dyn NetworkBehaviour,
) -> Result<&mut T, RpcError> {
    let id = behaviour.behaviour_id();
    behaviour
        .as_any_mut()
        .downcast_mut::<T>()
        .ok_or(RpcError::BehaviourTypeMismatch {
            target: id,
            expected: std::any::type_name::<T>(),
        })
}
