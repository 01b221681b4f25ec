use std::fmt;

use rpcq_serde::{BitReader, BitWrite, ConstBitLength, Serde, SerdeErr};

use crate::types::CallKind;

const FNV_OFFSET_BASIS: u32 = 0x811c9dc5;
const FNV_PRIME: u32 = 0x01000193;

/// Stable identifier of a remote method, derived from its signature text
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MethodId(u32);

impl MethodId {
    /// Hashes a fully qualified signature (32-bit FNV-1a). Identical text
    /// always gives the identical id. 0 is reserved, so a signature that
    /// hashes to 0 is given 1 instead.
    pub const fn from_signature(signature: &str) -> Self {
        let bytes = signature.as_bytes();
        let mut hash = FNV_OFFSET_BASIS;
        let mut index = 0;
        while index < bytes.len() {
            hash ^= bytes[index] as u32;
            hash = hash.wrapping_mul(FNV_PRIME);
            index += 1;
        }
        if hash == 0 {
            hash = 1;
        }
        Self(hash)
    }

    pub const fn from_u32(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

impl Serde for MethodId {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.0.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self(u32::de(reader)?))
    }

    fn bit_length(&self) -> u32 {
        32
    }
}

impl ConstBitLength for MethodId {
    fn const_bit_length() -> u32 {
        32
    }
}

/// Everything the stub and handler of one remote method agree on. Declared
/// once per method as a `const`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RpcMethod {
    pub id: MethodId,
    pub kind: CallKind,
    /// The signature the id was hashed from
    pub name: &'static str,
    pub reliable: bool,
    /// Empty means the engine's configured default channel
    pub channel: &'static str,
}

impl RpcMethod {
    pub const fn server_call(signature: &'static str) -> Self {
        Self::new(signature, CallKind::ServerCall)
    }

    pub const fn client_call(signature: &'static str) -> Self {
        Self::new(signature, CallKind::ClientCall)
    }

    const fn new(signature: &'static str, kind: CallKind) -> Self {
        Self {
            id: MethodId::from_signature(signature),
            kind,
            name: signature,
            reliable: true,
            channel: "",
        }
    }

    pub const fn unreliable(mut self) -> Self {
        self.reliable = false;
        self
    }

    pub const fn on_channel(mut self, channel: &'static str) -> Self {
        self.channel = channel;
        self
    }

    /// The bare method name: the signature without its path or parameter list
    pub fn method_name(&self) -> &'static str {
        let name = self.name;
        let before_params = name.split('(').next().unwrap_or(name);
        before_params.rsplit("::").next().unwrap_or(before_params).trim()
    }

    /// Server calls must be named `*_server_rpc` and client calls
    /// `*_client_rpc`, compared case-insensitively and ignoring underscores
    pub fn has_valid_name(&self) -> bool {
        let suffix = match self.kind {
            CallKind::ServerCall => "serverrpc",
            CallKind::ClientCall => "clientrpc",
        };
        let mut name = self
            .method_name()
            .chars()
            .rev()
            .filter(|c| *c != '_')
            .map(|c| c.to_ascii_lowercase());
        suffix.chars().rev().all(|expected| name.next() == Some(expected)) && name.next().is_some()
    }

    pub(crate) fn channel_or<'a>(&self, default_channel: &'a str) -> &'a str {
        if self.channel.is_empty() {
            default_channel
        } else {
            self.channel
        }
    }
}
