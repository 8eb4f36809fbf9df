//! Per-call ID scratch table.
//!
//! Instructions cross-reference each other by ID, pointing forward or
//! backward through the stream. Rather than re-scanning on every
//! reference, a flat table keyed by ID records the word offset of
//! everything interesting the single forward pass has seen so far. The
//! table is allocated fresh for each parse and discarded with it.
use crate::{Error, Result};

/// Universal "nothing recorded" sentinel.
pub const UNKNOWN: u32 = u32::MAX;

/// Hard ceiling on the ID bound a module may declare.
pub const MAX_BOUND: u32 = 65535;

#[derive(Debug, Clone, Copy)]
pub struct CacheEntry {
    /// Word offset of the type declaration carrying this ID.
    pub ty_word: u32,
    /// Word offset of the `OpName` string for this ID.
    pub name_word: u32,
    /// Word offset of the first set or binding decoration for this ID.
    pub deco_word: u32,
    /// Word offset of the constant or spec constant declaring this ID.
    pub const_word: u32,
    /// Attribute location for inputs, SpecId ordinal for spec constants.
    pub value: u32,
    /// ArrayStride decoration for array types.
    pub stride: u32,
}

impl Default for CacheEntry {
    fn default() -> CacheEntry {
        CacheEntry {
            ty_word: UNKNOWN,
            name_word: UNKNOWN,
            deco_word: UNKNOWN,
            const_word: UNKNOWN,
            value: UNKNOWN,
            stride: UNKNOWN,
        }
    }
}

pub struct IdCache {
    entries: Vec<CacheEntry>,
}

impl IdCache {
    pub fn new(bound: u32) -> IdCache {
        IdCache { entries: vec![CacheEntry::default(); bound as usize] }
    }
    /// An instruction referencing an ID at or past the declared bound
    /// contradicts the module's own header.
    pub fn check(&self, id: u32) -> Result<()> {
        if (id as usize) < self.entries.len() { Ok(()) } else { Err(Error::Invalid) }
    }
    pub fn get(&self, id: u32) -> Result<&CacheEntry> {
        self.entries.get(id as usize).ok_or(Error::Invalid)
    }
    fn get_mut(&mut self, id: u32) -> Result<&mut CacheEntry> {
        self.entries.get_mut(id as usize).ok_or(Error::Invalid)
    }
    pub fn record_type(&mut self, id: u32, offset: usize) -> Result<()> {
        self.get_mut(id)?.ty_word = offset as u32;
        Ok(())
    }
    pub fn record_name(&mut self, id: u32, offset: usize) -> Result<()> {
        self.get_mut(id)?.name_word = offset as u32;
        Ok(())
    }
    /// Only the first set or binding decoration is kept; the extractor
    /// scans forward from it for the complementary one.
    pub fn record_set_binding(&mut self, id: u32, offset: usize) -> Result<()> {
        let entry = self.get_mut(id)?;
        if entry.deco_word == UNKNOWN {
            entry.deco_word = offset as u32;
        }
        Ok(())
    }
    pub fn record_constant(&mut self, id: u32, offset: usize) -> Result<()> {
        self.get_mut(id)?.const_word = offset as u32;
        Ok(())
    }
    pub fn record_value(&mut self, id: u32, value: u32) -> Result<()> {
        self.get_mut(id)?.value = value;
        Ok(())
    }
    pub fn record_stride(&mut self, id: u32, stride: u32) -> Result<()> {
        self.get_mut(id)?.stride = stride;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_past_the_bound_are_rejected() {
        let mut cache = IdCache::new(4);
        assert!(cache.record_type(3, 10).is_ok());
        assert_eq!(cache.record_type(4, 10), Err(Error::Invalid));
        assert_eq!(cache.check(4), Err(Error::Invalid));
    }

    #[test]
    fn keeps_first_set_binding_decoration() {
        let mut cache = IdCache::new(1);
        cache.record_set_binding(0, 7).unwrap();
        cache.record_set_binding(0, 11).unwrap();
        assert_eq!(cache.get(0).unwrap().deco_word, 7);
    }
}
