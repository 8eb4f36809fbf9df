//! Word stream access.
//!
//! Everything the reflector reads goes through the accessors here, so the
//! bounds checks against the module's word count live in one place.
use crate::{Error, Result};

/// Word count of the fixed module header.
pub const HEADER_LEN: usize = 5;
/// First word of every valid module.
pub const MAGIC: u32 = 0x0723_0203;

/// Lookahead margin for reads through cached word offsets. An instruction
/// recovered from the ID cache may only start at or before
/// `len - LOOKAHEAD`, which keeps the fixed operand fields of every
/// supported declaration in bounds.
const LOOKAHEAD: usize = 8;

#[derive(Clone, Copy)]
pub struct Words<'a> {
    words: &'a [u32],
    edge: usize,
}

impl<'a> Words<'a> {
    pub fn new(words: &'a [u32]) -> Words<'a> {
        Words {
            words: words,
            edge: words.len().saturating_sub(LOOKAHEAD),
        }
    }
    /// Read the instruction at a word offset recovered from the ID cache.
    pub fn instr_at(&self, offset: usize) -> Result<Instr<'a>> {
        if offset > self.edge { return Err(Error::Invalid); }
        let head = self.words[offset];
        let len = (head >> 16) as usize;
        if len == 0 || offset + len > self.words.len() { return Err(Error::Invalid); }
        let instr = Instr {
            opcode: head & 0xFFFF,
            offset: offset,
            words: &self.words[offset..offset + len],
        };
        Ok(instr)
    }
    /// Decode the nul-terminated string packed into the words starting at
    /// the given offset.
    pub fn str_at(&self, offset: usize) -> Result<String> {
        let words = self.words.get(offset..).ok_or(Error::Invalid)?;
        let mut bytes = Vec::new();
        for word in words.iter() {
            for &byte in word.to_le_bytes().iter() {
                if byte == 0 {
                    return String::from_utf8(bytes).map_err(|_| Error::Invalid);
                }
                bytes.push(byte);
            }
        }
        // Ran off the end of the module without a terminator.
        Err(Error::Invalid)
    }
    /// Forward scan over the instructions following the header.
    pub fn instrs(&self) -> Instrs<'a> {
        Instrs {
            words: self.words,
            offset: HEADER_LEN,
        }
    }
}

pub struct Instr<'a> {
    opcode: u32,
    offset: usize,
    words: &'a [u32],
}

impl<'a> Instr<'a> {
    pub fn opcode(&self) -> u32 { self.opcode }
    /// Word count of the instruction, including the leading opcode word.
    pub fn len(&self) -> usize { self.words.len() }
    /// Word offset of the instruction within the module.
    pub fn offset(&self) -> usize { self.offset }
    /// Word `i` of the instruction, `at(0)` being the opcode word itself.
    pub fn at(&self, i: usize) -> Result<u32> {
        self.words.get(i).copied().ok_or(Error::Invalid)
    }
}

pub struct Instrs<'a> {
    words: &'a [u32],
    offset: usize,
}

impl<'a> Iterator for Instrs<'a> {
    type Item = Result<Instr<'a>>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.words.len() { return None; }
        let head = self.words[self.offset];
        let len = (head >> 16) as usize;
        if len == 0 || self.offset + len > self.words.len() {
            self.offset = self.words.len();
            return Some(Err(Error::Invalid));
        }
        let instr = Instr {
            opcode: head & 0xFFFF,
            offset: self.offset,
            words: &self.words[self.offset..self.offset + len],
        };
        self.offset += len;
        Some(Ok(instr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(bytes: &[u8; 4]) -> u32 { u32::from_le_bytes(*bytes) }

    #[test]
    fn decodes_packed_strings() {
        let words = [0, word(b"main"), 0];
        assert_eq!(Words::new(&words).str_at(1), Ok("main".to_owned()));
    }

    #[test]
    fn rejects_unterminated_strings() {
        let words = [word(b"main")];
        assert_eq!(Words::new(&words).str_at(0), Err(Error::Invalid));
    }

    #[test]
    fn truncated_instruction_is_an_error() {
        let mut words = vec![0; HEADER_LEN];
        // Claims four words with only one present.
        words.push((4 << 16) | 17);
        let mut instrs = Words::new(&words).instrs();
        assert!(matches!(instrs.next(), Some(Err(Error::Invalid))));
    }

    #[test]
    fn zero_length_instruction_is_an_error() {
        let mut words = vec![0; HEADER_LEN];
        words.push(17);
        let mut instrs = Words::new(&words).instrs();
        assert!(matches!(instrs.next(), Some(Err(Error::Invalid))));
    }

    #[test]
    fn cached_offsets_past_the_edge_are_rejected() {
        let mut words = vec![0; 16];
        words[8] = (1 << 16) | 54;
        let words = Words::new(&words);
        assert!(words.instr_at(8).is_ok());
        assert_eq!(words.instr_at(9).err(), Some(Error::Invalid));
    }
}
