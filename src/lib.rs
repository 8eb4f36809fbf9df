//! Reflection parser for SPIR-V shader module interfaces.
//!
//! Feed a module's words to [`SpirvBinary`] and get back everything a
//! renderer needs to bind it: declared capabilities, the compute
//! workgroup size, specialization constants, vertex attribute locations,
//! push constant layout and the full descriptor resource list with byte
//! layouts for buffer blocks.
//!
//! ```no_run
//! use spvmeta::SpirvBinary;
//!
//! # fn demo(bytes: &[u8]) -> spvmeta::Result<()> {
//! let module = SpirvBinary::from_bytes(bytes)?;
//! for resource in module.reflect()?.resources.iter() {
//!     println!("set {} binding {}: {:?}", resource.set, resource.binding, resource.kind);
//! }
//! # Ok(())
//! # }
//! ```
use std::iter::FromIterator;

use byteorder::{ByteOrder, LittleEndian};

mod cache;
mod consts;
mod error;
mod parse;
mod reflect;

pub use crate::error::Error;
pub use crate::reflect::*;

pub type Result<T> = std::result::Result<T, Error>;

/// SPIR-V module in words.
#[derive(Debug, Clone)]
pub struct SpirvBinary(Vec<u32>);

impl From<Vec<u32>> for SpirvBinary {
    fn from(words: Vec<u32>) -> SpirvBinary { SpirvBinary(words) }
}
impl FromIterator<u32> for SpirvBinary {
    fn from_iter<I: IntoIterator<Item=u32>>(iter: I) -> SpirvBinary {
        SpirvBinary(iter.into_iter().collect())
    }
}

impl SpirvBinary {
    /// Reinterpret little-endian bytes as module words. The byte length
    /// must be a multiple of the word size.
    pub fn from_bytes(bytes: &[u8]) -> Result<SpirvBinary> {
        if bytes.len() % 4 != 0 { return Err(Error::Invalid); }
        let mut words = vec![0; bytes.len() / 4];
        LittleEndian::read_u32_into(bytes, &mut words);
        Ok(SpirvBinary(words))
    }
    pub fn words(&self) -> &[u32] { &self.0 }
    /// Parse the module's interface.
    pub fn reflect(&self) -> Result<Reflection> {
        reflect::reflect_words(&self.0)
    }
    /// Count the interface items without keeping them, with the exact
    /// validation of [`SpirvBinary::reflect`]: a module the full parse
    /// rejects is rejected here too.
    pub fn reflection_sizes(&self) -> Result<Sizes> {
        self.reflect().map(|x| x.sizes())
    }
}
