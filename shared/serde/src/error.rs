use thiserror::Error;

/// Errors that can occur while reading a value out of a bit stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SerdeErr {
    /// The reader ran past the end of its buffer
    #[error("Attempted to read past the end of the bit stream. The payload is shorter than the values being read")]
    EndOfStream,

    /// A string payload was not valid UTF-8
    #[error("String payload is not valid UTF-8")]
    InvalidUtf8,

    /// A char payload was not a valid unicode scalar value
    #[error("Value {value:#x} is not a valid unicode scalar value")]
    InvalidChar { value: u32 },

    /// A fixed-size array was read with the wrong element count
    #[error("Expected {expected} array elements but decoded {actual}")]
    ArrayLength { expected: usize, actual: usize },

    /// A decoded integer does not fit the target type
    #[error("Decoded integer {value} does not fit in the target type")]
    IntegerOutOfRange { value: i128 },
}
