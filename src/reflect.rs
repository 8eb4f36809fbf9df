//! SPIR-V interface reflection.
//!
//! A single forward scan over the instruction stream, stopping at the
//! first function body since nothing past it matters to reflection. The
//! scan fills the ID cache as declarations and decorations stream by;
//! variable instructions then chase their type IDs back through the cache
//! to produce attribute, push constant and resource descriptions.
use log::debug;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use crate::cache::{IdCache, MAX_BOUND, UNKNOWN};
use crate::consts::*;
use crate::parse::{Instr, Words, HEADER_LEN, MAGIC};
use crate::{Error, Result};

/// Array length marker for runtime-sized arrays.
pub const UNSIZED_ARRAY: u32 = u32::MAX;

/// Highest attribute location representable in the downstream location
/// mask. Input variables bound past it are dropped.
pub const MAX_ATTR_LOCATION: u32 = 31;

/// Struct nesting bound for field expansion.
const MAX_FIELD_DEPTH: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    B32,
    I32,
    I32x2,
    I32x3,
    I32x4,
    U32,
    U32x2,
    U32x3,
    U32x4,
    F32,
    F32x2,
    F32x3,
    F32x4,
    Mat2,
    Mat3,
    Mat4,
    Struct,
}

/// One scalar/vector/matrix/array/struct value in a buffer or push
/// constant block.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub ty: FieldType,
    pub name: Option<String>,
    /// Byte offset within the parent struct.
    pub offset: u32,
    /// 0 for non-array fields, `UNSIZED_ARRAY` for runtime-sized arrays.
    pub array_length: u32,
    pub array_stride: u32,
    /// Byte size of one element, ignoring any array repetition.
    pub elem_size: u32,
    /// Members, in declaration order, when `ty` is `Struct`.
    pub children: Vec<Field>,
}

impl Field {
    /// Total byte span the field occupies within its parent.
    pub fn footprint(&self) -> u32 {
        match self.array_length {
            0 => self.elem_size,
            UNSIZED_ARRAY => self.array_stride,
            n => n.saturating_mul(self.array_stride),
        }
    }
    /// Number of field descriptors in this tree, itself included.
    pub fn field_count(&self) -> usize {
        1 + self.children.iter().map(Field::field_count).sum::<usize>()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: Option<String>,
    pub location: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpecConstant {
    pub name: Option<String>,
    /// The SpecId ordinal used to override the constant at build time.
    pub spec_id: u32,
    /// One of `B32`, `I32`, `U32` or `F32`.
    pub ty: FieldType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureDim {
    D1,
    D2,
    D3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureInfo {
    pub dim: TextureDim,
    pub cube: bool,
    pub array: bool,
    pub shadow: bool,
    pub multisample: bool,
    /// The texel type is an integer type.
    pub integer: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    UniformBuffer,
    StorageBuffer,
    SampledTexture,
    StorageTexture,
    Sampler,
    CombinedTextureSampler,
    UniformTexelBuffer,
    StorageTexelBuffer,
    InputAttachment,
}

/// One descriptor-set-visible binding.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub set: u32,
    pub binding: u32,
    pub name: Option<String>,
    pub kind: ResourceKind,
    /// 0 when the binding is not arrayed.
    pub array_size: u32,
    pub texture: Option<TextureInfo>,
    pub buffer_field: Option<Field>,
}

/// Output counts of the sizing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sizes {
    pub capabilities: usize,
    pub spec_constants: usize,
    pub attributes: usize,
    pub resources: usize,
    /// Field descriptors across all buffer and push constant expansions.
    pub fields: usize,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reflection {
    /// Raw version word from the module header.
    pub version: u32,
    /// Zero unless the module declares a compute LocalSize.
    pub workgroup_size: [u32; 3],
    pub capabilities: Vec<u32>,
    pub spec_constants: Vec<SpecConstant>,
    pub attributes: Vec<Attribute>,
    pub resources: Vec<Resource>,
    pub push_constants: Option<Field>,
}

impl Reflection {
    pub fn sizes(&self) -> Sizes {
        let fields = self.resources.iter()
            .filter_map(|x| x.buffer_field.as_ref())
            .map(Field::field_count)
            .sum::<usize>()
            + self.push_constants.as_ref().map(Field::field_count).unwrap_or(0);
        Sizes {
            capabilities: self.capabilities.len(),
            spec_constants: self.spec_constants.len(),
            attributes: self.attributes.len(),
            resources: self.resources.len(),
            fields: fields,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, FromPrimitive)]
enum StorageClass {
    UniformConstant = 0,
    Input = 1,
    Uniform = 2,
    Output = 3,
    PushConstant = 9,
    StorageBuffer = 12,
}

#[derive(Debug, Clone, Copy, PartialEq, FromPrimitive)]
enum ImageDim {
    D1 = 0,
    D2 = 1,
    D3 = 2,
    Cube = 3,
    Buffer = 5,
    SubpassData = 6,
}

pub(crate) fn reflect_words(words: &[u32]) -> Result<Reflection> {
    if words.len() < HEADER_LEN || words[0] != MAGIC {
        return Err(Error::Invalid);
    }
    if words.len() >= u32::MAX as usize {
        return Err(Error::TooBig);
    }
    let bound = words[3];
    if bound > MAX_BOUND {
        return Err(Error::TooBig);
    }
    let mut reflector = Reflector {
        words: Words::new(words),
        cache: IdCache::new(bound),
        out: Reflection {
            version: words[1],
            ..Default::default()
        },
    };
    reflector.scan()?;
    let out = reflector.out;
    debug!(
        "reflected module: {} capabilities, {} spec constants, {} attributes, {} resources",
        out.capabilities.len(), out.spec_constants.len(), out.attributes.len(),
        out.resources.len(),
    );
    Ok(out)
}

struct Reflector<'a> {
    words: Words<'a>,
    cache: IdCache,
    out: Reflection,
}

impl<'a> Reflector<'a> {
    fn scan(&mut self) -> Result<()> {
        let words = self.words;
        for instr in words.instrs() {
            let instr = instr?;
            match instr.opcode() {
                OP_CAPABILITY => self.parse_capability(&instr)?,
                OP_EXECUTION_MODE => self.parse_execution_mode(&instr)?,
                OP_NAME => self.parse_name(&instr)?,
                OP_DECORATE => self.parse_decoration(&instr)?,
                opcode if TYPE_RANGE.contains(&opcode) => self.parse_type(&instr)?,
                opcode if SPEC_CONST_RANGE.contains(&opcode) => self.parse_spec_constant(&instr)?,
                OP_CONSTANT => self.parse_constant(&instr)?,
                OP_VARIABLE => self.parse_variable(&instr)?,
                // Nothing relevant to reflection appears past the first
                // function.
                OP_FUNCTION => break,
                _ => {},
            }
        }
        Ok(())
    }

    fn parse_capability(&mut self, instr: &Instr) -> Result<()> {
        if instr.len() != 2 { return Err(Error::Invalid); }
        self.out.capabilities.push(instr.at(1)?);
        Ok(())
    }

    fn parse_execution_mode(&mut self, instr: &Instr) -> Result<()> {
        if instr.len() < 3 { return Err(Error::Invalid); }
        if instr.at(2)? == EXEC_MODE_LOCAL_SIZE {
            if instr.len() != 6 { return Err(Error::Invalid); }
            self.out.workgroup_size = [instr.at(3)?, instr.at(4)?, instr.at(5)?];
        }
        Ok(())
    }

    fn parse_name(&mut self, instr: &Instr) -> Result<()> {
        if instr.len() < 3 { return Err(Error::Invalid); }
        // Only the string offset is kept; decoding happens on demand.
        self.cache.record_name(instr.at(1)?, instr.offset() + 2)
    }

    fn parse_decoration(&mut self, instr: &Instr) -> Result<()> {
        if instr.len() < 3 { return Err(Error::Invalid); }
        let id = instr.at(1)?;
        self.cache.check(id)?;
        match instr.at(2)? {
            DECO_BINDING | DECO_DESCRIPTOR_SET => {
                instr.at(3)?;
                self.cache.record_set_binding(id, instr.offset())
            },
            DECO_LOCATION | DECO_SPEC_ID => self.cache.record_value(id, instr.at(3)?),
            DECO_ARRAY_STRIDE => self.cache.record_stride(id, instr.at(3)?),
            _ => Ok(()),
        }
    }

    fn parse_type(&mut self, instr: &Instr) -> Result<()> {
        if instr.len() < 2 { return Err(Error::Invalid); }
        self.cache.record_type(instr.at(1)?, instr.offset())
    }

    fn parse_constant(&mut self, instr: &Instr) -> Result<()> {
        if instr.len() < 4 { return Err(Error::Invalid); }
        self.cache.record_constant(instr.at(2)?, instr.offset())
    }

    fn parse_spec_constant(&mut self, instr: &Instr) -> Result<()> {
        if instr.len() < 3 { return Err(Error::Invalid); }
        let id = instr.at(2)?;
        let spec_id = self.cache.get(id)?.value;
        // Every specialization constant carries a SpecId decoration, and
        // decorations precede the constants section.
        if spec_id == UNKNOWN { return Err(Error::Invalid); }
        let ty = if instr.opcode() == OP_SPEC_CONSTANT {
            let ty_instr = self.load_type(instr.at(1)?)?;
            match ty_instr.opcode() {
                OP_TYPE_INT if ty_instr.at(2)? == 32 => {
                    if ty_instr.at(3)? != 0 { FieldType::I32 } else { FieldType::U32 }
                },
                OP_TYPE_FLOAT if ty_instr.at(2)? == 32 => FieldType::F32,
                _ => return Err(Error::UnsupportedSpecConstantType),
            }
        } else {
            // OpSpecConstantTrue or OpSpecConstantFalse.
            FieldType::B32
        };
        let name = self.name_of(id)?;
        self.out.spec_constants.push(SpecConstant {
            name: name,
            spec_id: spec_id,
            ty: ty,
        });
        // Arrays sized by this constant locate the literal through this
        // offset, which replaces the descriptor bookkeeping for the ID.
        self.cache.record_constant(id, instr.offset())
    }

    fn parse_variable(&mut self, instr: &Instr) -> Result<()> {
        if instr.len() < 4 { return Err(Error::Invalid); }
        let pointer_id = instr.at(1)?;
        let var_id = instr.at(2)?;
        self.cache.check(pointer_id)?;
        self.cache.check(var_id)?;

        let cls = match StorageClass::from_u32(instr.at(3)?) {
            Some(StorageClass::Input) => return self.parse_attribute(var_id),
            Some(StorageClass::PushConstant) => return self.parse_push_constants(pointer_id),
            // Outputs and unrecognized storage classes are never bindable.
            Some(StorageClass::Output) | None => return Ok(()),
            Some(cls) => cls,
        };

        let deco_word = self.cache.get(var_id)?.deco_word;
        if deco_word == UNKNOWN {
            // Not a descriptor binding (e.g. a builtin or workgroup
            // variable).
            return Ok(());
        }
        let (set, binding) = self.resolve_set_binding(var_id, deco_word as usize)?;

        let pointer = self.load_type(pointer_id)?;
        if pointer.opcode() != OP_TYPE_POINTER { return Err(Error::Invalid); }
        let mut type_id = pointer.at(3)?;
        let mut ty = self.load_type(type_id)?;

        // Arrayed bindings wrap the descriptor type in a sized array.
        let mut array_size = 0;
        if ty.opcode() == OP_TYPE_ARRAY {
            array_size = self.load_array_length(ty.at(3)?)?;
            type_id = ty.at(2)?;
            ty = self.load_type(type_id)?;
        }

        let resource = match cls {
            StorageClass::Uniform | StorageClass::StorageBuffer => {
                let kind = if cls == StorageClass::Uniform {
                    ResourceKind::UniformBuffer
                } else {
                    ResourceKind::StorageBuffer
                };
                let mut field = self.build_field(type_id)?;
                // Buffers name their structs rather than their variables.
                field.name = self.name_of(type_id)?;
                let name = match field.name.clone() {
                    Some(name) => Some(name),
                    None => self.name_of(var_id)?,
                };
                Resource {
                    set: set,
                    binding: binding,
                    name: name,
                    kind: kind,
                    array_size: array_size,
                    texture: None,
                    buffer_field: Some(field),
                }
            },
            _ => {
                let (kind, texture) = self.classify_opaque(&ty)?;
                Resource {
                    set: set,
                    binding: binding,
                    name: self.name_of(var_id)?,
                    kind: kind,
                    array_size: array_size,
                    texture: texture,
                    buffer_field: None,
                }
            },
        };
        self.out.resources.push(resource);
        Ok(())
    }

    fn parse_attribute(&mut self, var_id: u32) -> Result<()> {
        let location = self.cache.get(var_id)?.value;
        if location == UNKNOWN {
            // Not every input variable is a location-bound attribute.
            return Ok(());
        }
        if location > MAX_ATTR_LOCATION {
            return Ok(());
        }
        let name = self.name_of(var_id)?;
        self.out.attributes.push(Attribute {
            name: name,
            location: location,
        });
        Ok(())
    }

    fn parse_push_constants(&mut self, pointer_id: u32) -> Result<()> {
        let pointer = self.load_type(pointer_id)?;
        if pointer.opcode() != OP_TYPE_POINTER { return Err(Error::Invalid); }
        let type_id = pointer.at(3)?;
        let ty = self.load_type(type_id)?;
        if ty.opcode() != OP_TYPE_STRUCT { return Err(Error::Invalid); }
        let mut field = self.build_field(type_id)?;
        field.name = self.name_of(type_id)?;
        self.out.push_constants = Some(field);
        Ok(())
    }

    /// The cache records only the first set or binding decoration; the
    /// complementary one is found by walking the adjacent decoration
    /// instructions, which tolerates either emission order.
    fn resolve_set_binding(&self, var_id: u32, first: usize) -> Result<(u32, u32)> {
        let mut set = None;
        let mut binding = None;
        let mut offset = first;
        loop {
            let instr = match self.words.instr_at(offset) {
                Ok(instr) => instr,
                Err(_) => break,
            };
            if instr.opcode() != OP_DECORATE { break; }
            if instr.at(1)? == var_id {
                match instr.at(2)? {
                    DECO_DESCRIPTOR_SET => set = Some(instr.at(3)?),
                    DECO_BINDING => binding = Some(instr.at(3)?),
                    _ => {},
                }
            }
            if set.is_some() && binding.is_some() { break; }
            offset += instr.len();
        }
        match (set, binding) {
            (Some(set), Some(binding)) => Ok((set, binding)),
            _ => Err(Error::Invalid),
        }
    }

    /// Follow a type ID to its declaring instruction. This is the sole
    /// indirection point for type references, so every cached offset is
    /// bounds checked in `Words::instr_at`.
    fn load_type(&self, id: u32) -> Result<Instr<'a>> {
        let ty_word = self.cache.get(id)?.ty_word;
        if ty_word == UNKNOWN { return Err(Error::Invalid); }
        self.words.instr_at(ty_word as usize)
    }

    /// Resolve an array length ID to its literal. The length must come
    /// from `OpConstant` or `OpSpecConstant`.
    fn load_array_length(&self, id: u32) -> Result<u32> {
        let const_word = self.cache.get(id)?.const_word;
        if const_word == UNKNOWN { return Err(Error::Invalid); }
        let instr = self.words.instr_at(const_word as usize)?;
        match instr.opcode() {
            OP_CONSTANT | OP_SPEC_CONSTANT => instr.at(3),
            _ => Err(Error::Invalid),
        }
    }

    fn name_of(&self, id: u32) -> Result<Option<String>> {
        let name_word = self.cache.get(id)?.name_word;
        if name_word == UNKNOWN { return Ok(None); }
        self.words.str_at(name_word as usize).map(Some)
    }

    /// Recursively classify a type into a field descriptor.
    fn build_field(&self, type_id: u32) -> Result<Field> {
        self.expand_field(type_id, 0)
    }

    fn expand_field(&self, type_id: u32, depth: u32) -> Result<Field> {
        // Member type references can form a cycle in a corrupt module;
        // nesting deeper than any real interface block is treated as one.
        if depth > MAX_FIELD_DEPTH { return Err(Error::Invalid); }
        let mut type_id = type_id;
        let mut ty = self.load_type(type_id)?;

        // Unwrap one array or runtime array layer around the element type.
        let mut array_length = 0;
        let mut array_stride = 0;
        if ty.opcode() == OP_TYPE_ARRAY || ty.opcode() == OP_TYPE_RUNTIME_ARRAY {
            array_length = if ty.opcode() == OP_TYPE_ARRAY {
                self.load_array_length(ty.at(3)?)?
            } else {
                UNSIZED_ARRAY
            };
            let stride = self.cache.get(type_id)?.stride;
            if stride != UNKNOWN {
                array_stride = stride;
            }
            type_id = ty.at(2)?;
            ty = self.load_type(type_id)?;
            if ty.opcode() == OP_TYPE_ARRAY || ty.opcode() == OP_TYPE_RUNTIME_ARRAY {
                return Err(Error::UnsupportedDataType);
            }
        }

        if ty.opcode() == OP_TYPE_STRUCT {
            let member_count = ty.len() - 2;
            let mut children = Vec::with_capacity(member_count);
            for i in 0..member_count {
                children.push(self.expand_field(ty.at(2 + i)?, depth + 1)?);
            }
            self.scan_members(type_id, ty.offset(), &mut children)?;
            let elem_size = children.iter()
                .map(|x| x.offset.saturating_add(x.footprint()))
                .max()
                .unwrap_or(0);
            return Ok(Field {
                ty: FieldType::Struct,
                name: None,
                offset: 0,
                array_length: array_length,
                array_stride: array_stride,
                elem_size: elem_size,
                children: children,
            });
        }

        let mut columns = 1;
        let mut components = 1;
        if ty.opcode() == OP_TYPE_MATRIX {
            columns = ty.at(3)?;
            ty = self.load_type(ty.at(2)?)?;
        }
        if ty.opcode() == OP_TYPE_VECTOR {
            components = ty.at(3)?;
            ty = self.load_type(ty.at(2)?)?;
        }
        Ok(Field {
            ty: leaf_type(&ty, columns, components)?,
            name: None,
            offset: 0,
            array_length: array_length,
            array_stride: array_stride,
            elem_size: 4 * components * columns,
            children: Vec::new(),
        })
    }

    /// Second scan over the module head collecting member names and byte
    /// offsets for a struct. Bounded by the struct's declaring
    /// instruction; `OpVariable` also terminates it since all member
    /// debug info precedes the first variable.
    fn scan_members(&self, struct_id: u32, struct_offset: usize, members: &mut [Field]) -> Result<()> {
        let mut named = 0;
        let mut placed = 0;
        for instr in self.words.instrs() {
            let instr = instr?;
            if instr.offset() >= struct_offset { break; }
            match instr.opcode() {
                OP_MEMBER_NAME => {
                    let target = instr.at(1)?;
                    self.cache.check(target)?;
                    if target == struct_id {
                        let index = instr.at(2)? as usize;
                        if let Some(member) = members.get_mut(index) {
                            member.name = Some(self.words.str_at(instr.offset() + 3)?);
                            named += 1;
                        }
                    }
                },
                OP_MEMBER_DECORATE => {
                    let target = instr.at(1)?;
                    self.cache.check(target)?;
                    if target == struct_id && instr.at(3)? == DECO_OFFSET {
                        let index = instr.at(2)? as usize;
                        if let Some(member) = members.get_mut(index) {
                            member.offset = instr.at(4)?;
                            placed += 1;
                        }
                    }
                },
                OP_VARIABLE => break,
                _ => {},
            }
            if named == members.len() && placed == members.len() { break; }
        }
        Ok(())
    }

    fn classify_opaque(&self, ty: &Instr) -> Result<(ResourceKind, Option<TextureInfo>)> {
        match ty.opcode() {
            OP_TYPE_SAMPLER => Ok((ResourceKind::Sampler, None)),
            OP_TYPE_SAMPLED_IMAGE => {
                let image = self.load_type(ty.at(2)?)?;
                if image.opcode() != OP_TYPE_IMAGE { return Err(Error::Invalid); }
                self.classify_image(&image, true)
            },
            OP_TYPE_IMAGE => self.classify_image(ty, false),
            _ => Err(Error::Invalid),
        }
    }

    fn classify_image(&self, image: &Instr, combined: bool) -> Result<(ResourceKind, Option<TextureInfo>)> {
        if image.len() < 9 { return Err(Error::Invalid); }
        let dim = ImageDim::from_u32(image.at(3)?).ok_or(Error::Invalid)?;
        // The Sampled qualifier: 1 means usable with a sampler, 2 means
        // read/write storage access.
        let sampled = image.at(7)?;

        // Texel buffers carry no texture dimensionality or flags.
        if dim == ImageDim::Buffer {
            return match sampled {
                1 => Ok((ResourceKind::UniformTexelBuffer, None)),
                2 => Ok((ResourceKind::StorageTexelBuffer, None)),
                _ => Err(Error::Invalid),
            };
        }

        if dim == ImageDim::SubpassData {
            if sampled != 2 { return Err(Error::Invalid); }
            return Ok((ResourceKind::InputAttachment, None));
        }

        let kind = match sampled {
            1 if combined => ResourceKind::CombinedTextureSampler,
            1 => ResourceKind::SampledTexture,
            2 => ResourceKind::StorageTexture,
            _ => return Err(Error::Invalid),
        };
        let (dim, cube) = match dim {
            ImageDim::D1 => (TextureDim::D1, false),
            ImageDim::D2 => (TextureDim::D2, false),
            ImageDim::D3 => (TextureDim::D3, false),
            ImageDim::Cube => (TextureDim::D2, true),
            _ => return Err(Error::Invalid),
        };
        let texel = self.load_type(image.at(2)?)?;
        let info = TextureInfo {
            dim: dim,
            cube: cube,
            shadow: image.at(4)? == 1,
            array: image.at(5)? != 0,
            multisample: image.at(6)? != 0,
            integer: texel.opcode() == OP_TYPE_INT,
        };
        Ok((kind, Some(info)))
    }
}

fn leaf_type(ty: &Instr, columns: u32, components: u32) -> Result<FieldType> {
    match ty.opcode() {
        OP_TYPE_FLOAT if ty.at(2)? == 32 => match (columns, components) {
            (1, 1) => Ok(FieldType::F32),
            (1, 2) => Ok(FieldType::F32x2),
            (1, 3) => Ok(FieldType::F32x3),
            (1, 4) => Ok(FieldType::F32x4),
            (2, 2) => Ok(FieldType::Mat2),
            (3, 3) => Ok(FieldType::Mat3),
            (4, 4) => Ok(FieldType::Mat4),
            _ => Err(Error::UnsupportedDataType),
        },
        OP_TYPE_INT if ty.at(2)? == 32 && columns == 1 => {
            let signed = ty.at(3)? != 0;
            match (signed, components) {
                (true, 1) => Ok(FieldType::I32),
                (true, 2) => Ok(FieldType::I32x2),
                (true, 3) => Ok(FieldType::I32x3),
                (true, 4) => Ok(FieldType::I32x4),
                (false, 1) => Ok(FieldType::U32),
                (false, 2) => Ok(FieldType::U32x2),
                (false, 3) => Ok(FieldType::U32x3),
                (false, 4) => Ok(FieldType::U32x4),
                _ => Err(Error::UnsupportedDataType),
            }
        },
        OP_TYPE_BOOL if columns == 1 && components == 1 => Ok(FieldType::B32),
        _ => Err(Error::UnsupportedDataType),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(ty: FieldType, offset: u32, elem_size: u32) -> Field {
        Field {
            ty: ty,
            name: None,
            offset: offset,
            array_length: 0,
            array_stride: 0,
            elem_size: elem_size,
            children: Vec::new(),
        }
    }

    #[test]
    fn footprint_of_arrays() {
        let mut field = leaf(FieldType::F32x4, 0, 16);
        assert_eq!(field.footprint(), 16);
        field.array_length = 3;
        field.array_stride = 16;
        assert_eq!(field.footprint(), 48);
        field.array_length = UNSIZED_ARRAY;
        assert_eq!(field.footprint(), 16);
    }

    #[test]
    fn sizes_count_nested_fields() {
        let mut root = leaf(FieldType::Struct, 0, 32);
        root.children = vec![leaf(FieldType::F32, 0, 4), leaf(FieldType::Mat2, 16, 16)];
        let reflection = Reflection {
            push_constants: Some(root),
            ..Default::default()
        };
        assert_eq!(reflection.sizes().fields, 3);
    }
}
