use crate::{BitReader, BitWrite, ConstBitLength, Serde, SerdeErr};

impl Serde for bool {
    fn ser(&self, writer: &mut dyn BitWrite) {
        writer.write_bit(*self);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        reader.read_bit()
    }

    fn bit_length(&self) -> u32 {
        1
    }
}

impl ConstBitLength for bool {
    fn const_bit_length() -> u32 {
        1
    }
}

impl Serde for u8 {
    fn ser(&self, writer: &mut dyn BitWrite) {
        writer.write_byte(*self);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        reader.read_byte()
    }

    fn bit_length(&self) -> u32 {
        8
    }
}

impl ConstBitLength for u8 {
    fn const_bit_length() -> u32 {
        8
    }
}

// Multi-byte integers are written little-endian, one byte at a time
macro_rules! impl_serde_for_int {
    ($($int:ty),*) => {
        $(
            impl Serde for $int {
                fn ser(&self, writer: &mut dyn BitWrite) {
                    for byte in self.to_le_bytes() {
                        writer.write_byte(byte);
                    }
                }

                fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
                    let mut bytes = [0u8; std::mem::size_of::<$int>()];
                    for byte in bytes.iter_mut() {
                        *byte = reader.read_byte()?;
                    }
                    Ok(<$int>::from_le_bytes(bytes))
                }

                fn bit_length(&self) -> u32 {
                    <$int as ConstBitLength>::const_bit_length()
                }
            }

            impl ConstBitLength for $int {
                fn const_bit_length() -> u32 {
                    (std::mem::size_of::<$int>() * 8) as u32
                }
            }
        )*
    };
}

impl_serde_for_int!(u16, u32, u64, i8, i16, i32, i64);

impl Serde for f32 {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.to_bits().ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(f32::from_bits(u32::de(reader)?))
    }

    fn bit_length(&self) -> u32 {
        32
    }
}

impl ConstBitLength for f32 {
    fn const_bit_length() -> u32 {
        32
    }
}

impl Serde for f64 {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.to_bits().ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(f64::from_bits(u64::de(reader)?))
    }

    fn bit_length(&self) -> u32 {
        64
    }
}

impl ConstBitLength for f64 {
    fn const_bit_length() -> u32 {
        64
    }
}

impl Serde for char {
    fn ser(&self, writer: &mut dyn BitWrite) {
        u32::from(*self).ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let value = u32::de(reader)?;
        char::from_u32(value).ok_or(SerdeErr::InvalidChar { value })
    }

    fn bit_length(&self) -> u32 {
        32
    }
}

impl ConstBitLength for char {
    fn const_bit_length() -> u32 {
        32
    }
}
