use crate::SerdeErr;

/// Reads bits back out of a buffer produced by a
/// [`BitWriter`](crate::BitWriter), least significant bit first
pub struct BitReader<'b> {
    buffer: &'b [u8],
    bit_index: usize,
}

impl<'b> BitReader<'b> {
    pub fn new(buffer: &'b [u8]) -> Self {
        Self {
            buffer,
            bit_index: 0,
        }
    }

    pub fn read_bit(&mut self) -> Result<bool, SerdeErr> {
        let byte_index = self.bit_index / 8;
        let Some(byte) = self.buffer.get(byte_index) else {
            return Err(SerdeErr::EndOfStream);
        };
        let bit = (byte >> (self.bit_index % 8)) & 1 != 0;
        self.bit_index += 1;
        Ok(bit)
    }

    pub fn read_byte(&mut self) -> Result<u8, SerdeErr> {
        if self.bit_index % 8 == 0 {
            let Some(byte) = self.buffer.get(self.bit_index / 8) else {
                return Err(SerdeErr::EndOfStream);
            };
            self.bit_index += 8;
            return Ok(*byte);
        }

        let mut output: u8 = 0;
        for index in 0..8 {
            if self.read_bit()? {
                output |= 1u8 << index;
            }
        }
        Ok(output)
    }

    /// Reads `bits` bits into the low end of a u64, least significant first
    pub fn read_bits(&mut self, bits: u32) -> Result<u64, SerdeErr> {
        let mut output: u64 = 0;
        for index in 0..bits {
            if self.read_bit()? {
                output |= 1u64 << index;
            }
        }
        Ok(output)
    }

    pub fn bits_read(&self) -> usize {
        self.bit_index
    }

    pub fn bits_remaining(&self) -> usize {
        (self.buffer.len() * 8).saturating_sub(self.bit_index)
    }

    /// Whole bytes left after the current position, rounding the position up
    pub fn bytes_remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.bit_index.div_ceil(8))
    }
}
