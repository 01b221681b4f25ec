use crate::{BitReader, BitWrite, Serde, SerdeErr, UnsignedVariableInteger};

impl<T: Serde> Serde for Vec<T> {
    fn ser(&self, writer: &mut dyn BitWrite) {
        let length = UnsignedVariableInteger::<5>::new(self.len() as u64);
        length.ser(writer);
        for element in self {
            element.ser(writer);
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let length: usize = UnsignedVariableInteger::<5>::de(reader)?.to()?;
        // every element takes at least one bit, so this caps a corrupt length
        let mut output = Vec::with_capacity(length.min(reader.bits_remaining()));
        for _ in 0..length {
            output.push(T::de(reader)?);
        }
        Ok(output)
    }

    fn bit_length(&self) -> u32 {
        let length = UnsignedVariableInteger::<5>::new(self.len() as u64);
        self.iter()
            .fold(length.bit_length(), |bits, element| bits + element.bit_length())
    }
}

impl<T: Serde, const N: usize> Serde for [T; N] {
    fn ser(&self, writer: &mut dyn BitWrite) {
        for element in self {
            element.ser(writer);
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let mut output = Vec::with_capacity(N);
        for _ in 0..N {
            output.push(T::de(reader)?);
        }
        output.try_into().map_err(|elements: Vec<T>| SerdeErr::ArrayLength {
            expected: N,
            actual: elements.len(),
        })
    }

    fn bit_length(&self) -> u32 {
        self.iter().map(Serde::bit_length).sum()
    }
}

impl<T: Serde> Serde for Option<T> {
    fn ser(&self, writer: &mut dyn BitWrite) {
        match self {
            Some(value) => {
                writer.write_bit(true);
                value.ser(writer);
            }
            None => writer.write_bit(false),
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        if reader.read_bit()? {
            Ok(Some(T::de(reader)?))
        } else {
            Ok(None)
        }
    }

    fn bit_length(&self) -> u32 {
        match self {
            Some(value) => 1 + value.bit_length(),
            None => 1,
        }
    }
}
