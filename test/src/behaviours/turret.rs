use std::any::Any;

use rpcq_shared::{
    downcast_behaviour_mut, BehaviourId, BitReader, ClientRpcParams, DispatchRegistry,
    ExecutionContext, NetworkBehaviour, NetworkUpdateStage, PeerId, RpcContext, RpcError,
    RpcMethod, Serde, ServerRpcParams, Vec3,
};

/// A behaviour with a few remote methods, each written out as the stub,
/// handler and real method a code generator would produce
pub struct Turret {
    id: BehaviourId,
    /// `(power, sender)` for every fire request the server ran
    pub fired: Vec<(f32, PeerId)>,
    /// Effects played on this peer
    pub fire_effects: Vec<f32>,
    pub aims: Vec<Vec3>,
    pub reentry_errors: Vec<RpcError>,
    /// Context the turret was in while each method body ran
    pub contexts: Vec<ExecutionContext>,
    /// Stage each method body ran in
    pub stages: Vec<NetworkUpdateStage>,
}

impl Turret {
    pub const FIRE: RpcMethod = RpcMethod::server_call("Turret::fire_server_rpc(f32)");
    pub const FIRE_EFFECT: RpcMethod =
        RpcMethod::client_call("Turret::fire_effect_client_rpc(f32)");
    pub const AIM: RpcMethod = RpcMethod::server_call("Turret::aim_server_rpc(Vec3)")
        .unreliable()
        .on_channel("turret_aim");
    pub const OVERHEAT: RpcMethod = RpcMethod::server_call("Turret::overheat_server_rpc()");

    pub fn new(id: BehaviourId) -> Self {
        Self {
            id,
            fired: Vec::new(),
            fire_effects: Vec::new(),
            aims: Vec::new(),
            reentry_errors: Vec::new(),
            contexts: Vec::new(),
            stages: Vec::new(),
        }
    }

    pub fn register(registry: &mut DispatchRegistry) -> Result<(), RpcError> {
        registry
            .register(&Self::FIRE, Self::handle_fire_server_rpc)?
            .register(&Self::FIRE_EFFECT, Self::handle_fire_effect_client_rpc)?
            .register(&Self::AIM, Self::handle_aim_server_rpc)?
            .register(&Self::OVERHEAT, Self::handle_overheat_server_rpc)?;
        Ok(())
    }

    fn observe(&mut self, context: &RpcContext<'_>) {
        self.contexts.push(context.guard().current(self.id));
        self.stages.push(context.stage());
    }

    // fire

    pub fn call_fire_server_rpc(
        &self,
        context: &mut RpcContext<'_>,
        power: f32,
        params: &ServerRpcParams,
    ) -> Result<(), RpcError> {
        let Some(mut call) = context.begin_server_call(&Self::FIRE, self.id, &params.send)? else {
            return Ok(());
        };
        call.write(&power);
        call.end();
        Ok(())
    }

    fn handle_fire_server_rpc(
        behaviour: &mut dyn NetworkBehaviour,
        reader: &mut BitReader,
        context: &mut RpcContext<'_>,
    ) -> Result<(), RpcError> {
        let turret = downcast_behaviour_mut::<Self>(behaviour)?;
        let power = f32::de(reader)?;
        let params = ServerRpcParams::received(context.sender().unwrap_or_default());
        turret.fire_server_rpc(context, power, params)
    }

    /// Runs on the server, then has every client play the effect
    pub fn fire_server_rpc(
        &mut self,
        context: &mut RpcContext<'_>,
        power: f32,
        params: ServerRpcParams,
    ) -> Result<(), RpcError> {
        self.observe(context);
        self.fired.push((power, params.receive.sender_client_id));
        self.call_fire_effect_client_rpc(context, power, &ClientRpcParams::default())
    }

    // fire effect

    pub fn call_fire_effect_client_rpc(
        &self,
        context: &mut RpcContext<'_>,
        power: f32,
        params: &ClientRpcParams,
    ) -> Result<(), RpcError> {
        let Some(mut call) =
            context.begin_client_call(&Self::FIRE_EFFECT, self.id, &params.send)?
        else {
            return Ok(());
        };
        call.write(&power);
        call.end();
        Ok(())
    }

    fn handle_fire_effect_client_rpc(
        behaviour: &mut dyn NetworkBehaviour,
        reader: &mut BitReader,
        context: &mut RpcContext<'_>,
    ) -> Result<(), RpcError> {
        let turret = downcast_behaviour_mut::<Self>(behaviour)?;
        let power = f32::de(reader)?;
        turret.fire_effect_client_rpc(context, power, ClientRpcParams::received());
        Ok(())
    }

    pub fn fire_effect_client_rpc(
        &mut self,
        context: &mut RpcContext<'_>,
        power: f32,
        _params: ClientRpcParams,
    ) {
        self.observe(context);
        self.fire_effects.push(power);
    }

    // aim

    pub fn call_aim_server_rpc(
        &self,
        context: &mut RpcContext<'_>,
        direction: Vec3,
        params: &ServerRpcParams,
    ) -> Result<(), RpcError> {
        let Some(mut call) = context.begin_server_call(&Self::AIM, self.id, &params.send)? else {
            return Ok(());
        };
        call.write(&direction);
        call.end();
        Ok(())
    }

    fn handle_aim_server_rpc(
        behaviour: &mut dyn NetworkBehaviour,
        reader: &mut BitReader,
        context: &mut RpcContext<'_>,
    ) -> Result<(), RpcError> {
        let turret = downcast_behaviour_mut::<Self>(behaviour)?;
        let direction = Vec3::de(reader)?;
        turret.observe(context);
        turret.aims.push(direction);
        Ok(())
    }

    // overheat

    pub fn call_overheat_server_rpc(
        &self,
        context: &mut RpcContext<'_>,
        params: &ServerRpcParams,
    ) -> Result<(), RpcError> {
        if let Some(call) = context.begin_server_call(&Self::OVERHEAT, self.id, &params.send)? {
            call.end();
        }
        Ok(())
    }

    fn handle_overheat_server_rpc(
        behaviour: &mut dyn NetworkBehaviour,
        _reader: &mut BitReader,
        context: &mut RpcContext<'_>,
    ) -> Result<(), RpcError> {
        let turret = downcast_behaviour_mut::<Self>(behaviour)?;
        turret.overheat_server_rpc(context);
        Ok(())
    }

    /// Tries to fire itself while already running as the server. The inner
    /// call is refused and the error kept for inspection.
    pub fn overheat_server_rpc(&mut self, context: &mut RpcContext<'_>) {
        self.observe(context);
        if let Err(error) = self.call_fire_server_rpc(context, 100.0, &ServerRpcParams::default()) {
            self.reentry_errors.push(error);
        }
    }
}

impl NetworkBehaviour for Turret {
    fn behaviour_id(&self) -> BehaviourId {
        self.id
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
