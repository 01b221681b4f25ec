use rpcq_serde::{BitReader, BitWrite, ConstBitLength, Serde, SerdeErr};

pub type PeerId = u64;

/// Which side of the network is allowed to execute a remote call
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
    /// Executes on the server (or host), usually sent by a client
    ServerCall,
    /// Executes on clients (or the host), sent by the server
    ClientCall,
}

impl CallKind {
    /// The execution context a target is put in while running a call of this kind
    pub fn required_context(self) -> ExecutionContext {
        match self {
            CallKind::ServerCall => ExecutionContext::ActingAsServer,
            CallKind::ClientCall => ExecutionContext::ActingAsClient,
        }
    }
}

/// What a target instance is currently doing on behalf of the network
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExecutionContext {
    #[default]
    None,
    ActingAsServer,
    ActingAsClient,
}

/// Identifies one networked behaviour: the object it lives on, and its
/// index among that object's behaviours
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BehaviourId {
    pub object_id: u64,
    pub behaviour_index: u16,
}

impl BehaviourId {
    pub const fn new(object_id: u64, behaviour_index: u16) -> Self {
        Self {
            object_id,
            behaviour_index,
        }
    }
}

impl Serde for BehaviourId {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.object_id.ser(writer);
        self.behaviour_index.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let object_id = u64::de(reader)?;
        let behaviour_index = u16::de(reader)?;
        Ok(Self::new(object_id, behaviour_index))
    }

    fn bit_length(&self) -> u32 {
        <Self as ConstBitLength>::const_bit_length()
    }
}

impl ConstBitLength for BehaviourId {
    fn const_bit_length() -> u32 {
        <u64 as ConstBitLength>::const_bit_length() + <u16 as ConstBitLength>::const_bit_length()
    }
}

/// The phases of one network tick. Each phase has its own inbound and
/// outbound queues, and a call can ask to be invoked during a specific phase
/// on the receiving peer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NetworkUpdateStage {
    Initialization,
    EarlyUpdate,
    FixedUpdate,
    PreUpdate,
    #[default]
    Update,
    PreLateUpdate,
    PostLateUpdate,
}

impl NetworkUpdateStage {
    /// Every stage, in the order they run within a tick
    pub const ALL: [NetworkUpdateStage; 7] = [
        NetworkUpdateStage::Initialization,
        NetworkUpdateStage::EarlyUpdate,
        NetworkUpdateStage::FixedUpdate,
        NetworkUpdateStage::PreUpdate,
        NetworkUpdateStage::Update,
        NetworkUpdateStage::PreLateUpdate,
        NetworkUpdateStage::PostLateUpdate,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn to_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }
}
