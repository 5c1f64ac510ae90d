//! C struct layout calculator
//!
//! Computes where each field of a C struct lands in memory, following the
//! usual System V rules that `#[repr(C)]` also follows:
//!
//! - every field starts at a multiple of its own alignment
//! - the struct's alignment is the largest field alignment
//! - the total size is rounded up to that alignment (tail padding)
//!
//! # Type Sizes
//!
//! | type      | size | align |
//! |-----------|------|-------|
//! | `char`    | 1    | 1     |
//! | `int`     | 4    | 4     |
//! | `float`   | 4    | 4     |
//! | `double`  | 8    | 8     |
//! | pointer   | 8    | 8     |
//! | `T[n]`    | n * sizeof(T) | align(T) |
//!
//! ```text
//! struct Example { char a; int b; char c; };
//!
//! offset 0  a    [1]
//! offset 1  pad  [3]
//! offset 4  b    [4]
//! offset 8  c    [1]
//! offset 9  pad  [3]   -> size 12, align 4
//! ```

use std::fmt;

/// The C scalar and aggregate types the calculator knows about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CType {
    Char,
    Int,
    Float,
    Double,
    Pointer,
    Array(Box<CType>, usize),
    Struct(Vec<Field>),
}

impl CType {
    /// Size of the type in bytes, including any internal padding
    pub fn size(&self) -> usize {
        match self {
            CType::Char => 1,
            CType::Int | CType::Float => 4,
            CType::Double | CType::Pointer => 8,
            CType::Array(elem, n) => elem.size() * n,
            CType::Struct(fields) => struct_layout(fields).size,
        }
    }

    /// Required alignment of the type in bytes
    pub fn align(&self) -> usize {
        match self {
            CType::Char => 1,
            CType::Int | CType::Float => 4,
            CType::Double | CType::Pointer => 8,
            CType::Array(elem, _) => elem.align(),
            CType::Struct(fields) => struct_layout(fields).align,
        }
    }
}

impl fmt::Display for CType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CType::Char => write!(f, "char"),
            CType::Int => write!(f, "int"),
            CType::Float => write!(f, "float"),
            CType::Double => write!(f, "double"),
            CType::Pointer => write!(f, "void*"),
            CType::Array(elem, n) => write!(f, "{}[{}]", elem, n),
            CType::Struct(_) => write!(f, "struct"),
        }
    }
}

/// A named struct member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub field_type: CType,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: CType) -> Self {
        Field {
            name: name.into(),
            field_type,
        }
    }
}

/// Placement of one field inside a struct
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSlot {
    pub name: String,
    pub offset: usize,
    pub size: usize,
    /// Padding bytes inserted immediately before this field
    pub padding_before: usize,
}

/// Result of laying out a struct
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructLayout {
    pub slots: Vec<FieldSlot>,
    /// Padding after the last field
    pub tail_padding: usize,
    pub size: usize,
    pub align: usize,
}

impl StructLayout {
    /// Total padding bytes, internal and trailing
    pub fn padding(&self) -> usize {
        self.slots.iter().map(|s| s.padding_before).sum::<usize>() + self.tail_padding
    }

    /// Sum of field sizes, i.e. the size the struct would have without padding
    pub fn packed_size(&self) -> usize {
        self.slots.iter().map(|s| s.size).sum()
    }
}

/// Round `offset` up to the next multiple of `align`
pub fn align_up(offset: usize, align: usize) -> usize {
    if align <= 1 {
        return offset;
    }
    offset.div_ceil(align) * align
}

/// Compute field offsets, padding, size and alignment for a struct
pub fn struct_layout(fields: &[Field]) -> StructLayout {
    let mut current_offset = 0;
    let mut align = 1;
    let mut slots = Vec::with_capacity(fields.len());

    for field in fields {
        let field_align = field.field_type.align();
        let size = field.field_type.size();
        let offset = align_up(current_offset, field_align);
        slots.push(FieldSlot {
            name: field.name.clone(),
            offset,
            size,
            padding_before: offset - current_offset,
        });
        current_offset = offset + size;
        align = align.max(field_align);
    }

    let size = align_up(current_offset, align);
    StructLayout {
        slots,
        tail_padding: size - current_offset,
        size,
        align,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_up_rounds_to_multiple() {
        assert_eq!(align_up(0, 4), 0);
        assert_eq!(align_up(1, 4), 4);
        assert_eq!(align_up(9, 4), 12);
        assert_eq!(align_up(9, 1), 9);
    }

    #[test]
    fn empty_struct_has_no_size() {
        let layout = struct_layout(&[]);
        assert_eq!(layout.size, 0);
        assert_eq!(layout.align, 1);
    }
}
