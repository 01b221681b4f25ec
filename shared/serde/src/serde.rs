use crate::{BitCounter, BitReader, BitWrite, SerdeErr};

/// A type that can be written to and read from a bit stream.
///
/// `de` must consume exactly the bits `ser` produced. The stream carries no
/// tags, so this contract is the only thing keeping a reader in step with its
/// writer.
pub trait Serde: Sized + Clone + PartialEq {
    /// Writes the value into the writer
    fn ser(&self, writer: &mut dyn BitWrite);

    /// Reads a value out of the reader
    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr>;

    /// Number of bits `ser` will write for this value
    fn bit_length(&self) -> u32 {
        let mut counter = BitCounter::new();
        self.ser(&mut counter);
        counter.bits_needed()
    }
}

/// Implemented by types whose encoding is always the same number of bits
pub trait ConstBitLength {
    fn const_bit_length() -> u32;
}
