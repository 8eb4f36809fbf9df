use std::fmt;
use std::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The module is malformed: bad magic, a truncated instruction, an ID
    /// reference past the declared bound, or a reference that resolves to
    /// the wrong kind of instruction.
    Invalid,
    /// The module declares an ID bound past the parser's capacity.
    TooBig,
    /// A specialization constant is not a 32-bit int, uint, float or bool.
    UnsupportedSpecConstantType,
    /// A buffer or push constant member is not a supported scalar, vector,
    /// matrix, array or struct shape.
    UnsupportedDataType,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Invalid => write!(f, "spirv binary is corrupted"),
            Error::TooBig => write!(f, "spirv binary declares too many ids"),
            Error::UnsupportedSpecConstantType => write!(f, "specialization constant type is not supported"),
            Error::UnsupportedDataType => write!(f, "data type is not supported"),
        }
    }
}
impl error::Error for Error { }
