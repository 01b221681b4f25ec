use crate::{BitReader, BitWrite, ConstBitLength, Serde, SerdeErr};

pub type UnsignedInteger<const BITS: u8> = SerdeInteger<false, false, BITS>;
pub type SignedInteger<const BITS: u8> = SerdeInteger<true, false, BITS>;
pub type UnsignedVariableInteger<const BITS: u8> = SerdeInteger<false, true, BITS>;
pub type SignedVariableInteger<const BITS: u8> = SerdeInteger<true, true, BITS>;

/// An integer written with a chosen number of bits.
///
/// Variable integers are written in `BITS`-sized groups, each preceded by a
/// continuation bit, so small values stay small on the wire. Collection
/// lengths use `UnsignedVariableInteger`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct SerdeInteger<const SIGNED: bool, const VARIABLE: bool, const BITS: u8> {
    value: i128,
}

impl<const SIGNED: bool, const VARIABLE: bool, const BITS: u8> SerdeInteger<SIGNED, VARIABLE, BITS> {
    /// Returns `None` if the value can't be represented with this encoding
    pub fn try_new<T: Into<i128>>(value: T) -> Option<Self> {
        let value = value.into();
        if BITS == 0 || BITS > 127 {
            return None;
        }
        if !SIGNED && value < 0 {
            return None;
        }
        if !VARIABLE {
            let max_value: u128 = 1u128 << BITS;
            if value.unsigned_abs() >= max_value {
                return None;
            }
        }
        Some(Self { value })
    }

    /// Panics if the value can't be represented with this encoding
    pub fn new<T: Into<i128>>(value: T) -> Self {
        let value = value.into();
        let Some(integer) = Self::try_new(value) else {
            panic!(
                "can't encode {} as a {}-bit {} integer",
                value,
                BITS,
                if SIGNED { "signed" } else { "unsigned" }
            );
        };
        integer
    }

    pub fn get(&self) -> i128 {
        self.value
    }

    pub fn to<T: TryFrom<i128>>(&self) -> Result<T, SerdeErr> {
        T::try_from(self.value).map_err(|_| SerdeErr::IntegerOutOfRange { value: self.value })
    }
}

impl<const SIGNED: bool, const VARIABLE: bool, const BITS: u8> Serde
    for SerdeInteger<SIGNED, VARIABLE, BITS>
{
    fn ser(&self, writer: &mut dyn BitWrite) {
        let negative = self.value < 0;
        if SIGNED {
            writer.write_bit(negative);
        }
        let mut value = self.value.unsigned_abs();

        if VARIABLE {
            loop {
                let proceed = value >= 2_u128.pow(BITS as u32);
                writer.write_bit(proceed);
                for _ in 0..BITS {
                    writer.write_bit(value & 1 != 0);
                    value >>= 1;
                }
                if !proceed {
                    return;
                }
            }
        } else {
            for _ in 0..BITS {
                writer.write_bit(value & 1 != 0);
                value >>= 1;
            }
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let negative = SIGNED && reader.read_bit()?;

        let mut output: u128 = 0;
        let mut shift: u32 = 0;
        loop {
            let proceed = VARIABLE && reader.read_bit()?;
            for _ in 0..BITS {
                if reader.read_bit()? {
                    if shift >= 128 {
                        return Err(SerdeErr::IntegerOutOfRange { value: i128::MAX });
                    }
                    output |= 1u128 << shift;
                }
                shift += 1;
            }
            if !proceed {
                break;
            }
        }

        let Ok(value) = i128::try_from(output) else {
            return Err(SerdeErr::IntegerOutOfRange { value: i128::MAX });
        };
        Ok(Self {
            value: if negative { -value } else { value },
        })
    }
}

impl<const SIGNED: bool, const BITS: u8> ConstBitLength for SerdeInteger<SIGNED, false, BITS> {
    fn const_bit_length() -> u32 {
        let sign_bit = if SIGNED { 1 } else { 0 };
        sign_bit + BITS as u32
    }
}
