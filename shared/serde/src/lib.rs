//! # rpcq Serde
//! Bit-level reading & writing of the values carried by remote calls.
//!
//! A value is written into a [`BitWriter`] and read back out of a
//! [`BitReader`]. Nothing in the stream describes itself: a reader must
//! consume values in exactly the order, and with exactly the types, that the
//! writer produced them.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod bit_reader;
mod bit_writer;
mod error;
mod impls;
mod integer;
mod math;
mod serde;

pub use bit_reader::BitReader;
pub use bit_writer::{BitCounter, BitWrite, BitWriter};
pub use error::SerdeErr;
pub use integer::{
    SerdeInteger, SignedInteger, SignedVariableInteger, UnsignedInteger, UnsignedVariableInteger,
};
pub use math::{Color, Color32, Quat, Ray, Ray2D, Vec2, Vec3, Vec4};
pub use serde::{ConstBitLength, Serde};
