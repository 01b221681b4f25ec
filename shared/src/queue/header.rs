use rpcq_serde::{BitReader, BitWrite, BitWriter, ConstBitLength, Serde, SerdeErr};

use crate::types::BehaviourId;

pub const ADD_OBJECT: u8 = 3;
pub const DESTROY_OBJECT: u8 = 4;
pub const SERVER_RPC: u8 = 30;
pub const CLIENT_RPC: u8 = 31;

/// Envelope written in front of every payload handed to the transport.
/// Carries everything the payload itself leaves out: what kind of message it
/// is, which stage it runs in and which behaviour it targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageHeader {
    pub message_type: u8,
    pub stage: u8,
    pub object_id: u64,
    pub behaviour_index: u16,
}

impl MessageHeader {
    pub const BYTES: usize = 12;

    pub fn new(message_type: u8, stage: u8, target: BehaviourId) -> Self {
        Self {
            message_type,
            stage,
            object_id: target.object_id,
            behaviour_index: target.behaviour_index,
        }
    }

    pub fn target(&self) -> BehaviourId {
        BehaviourId::new(self.object_id, self.behaviour_index)
    }

    /// Header followed by `payload`
    pub fn encode(&self, payload: &[u8]) -> Vec<u8> {
        let mut writer = BitWriter::with_capacity(Self::BYTES + payload.len());
        self.ser(&mut writer);
        let mut bytes = writer.to_bytes();
        bytes.extend_from_slice(payload);
        bytes
    }

    /// Splits a packet into its header and payload
    pub fn decode(bytes: &[u8]) -> Result<(Self, &[u8]), SerdeErr> {
        let mut reader = BitReader::new(bytes);
        let header = Self::de(&mut reader)?;
        Ok((header, &bytes[Self::BYTES..]))
    }
}

impl Serde for MessageHeader {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.message_type.ser(writer);
        self.stage.ser(writer);
        self.object_id.ser(writer);
        self.behaviour_index.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let message_type = u8::de(reader)?;
        let stage = u8::de(reader)?;
        let object_id = u64::de(reader)?;
        let behaviour_index = u16::de(reader)?;
        Ok(Self {
            message_type,
            stage,
            object_id,
            behaviour_index,
        })
    }

    fn bit_length(&self) -> u32 {
        <Self as ConstBitLength>::const_bit_length()
    }
}

impl ConstBitLength for MessageHeader {
    fn const_bit_length() -> u32 {
        96
    }
}
