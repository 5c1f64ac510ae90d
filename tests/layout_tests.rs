// C struct layout calculator against known layouts and repr(C)

use bitlesson::layout::{struct_layout, CType, Field};
use bitlesson::lessons::structs::{example_fields, ExampleC};
use std::mem::{align_of, size_of};

#[test]
fn test_example_struct_layout() {
    let layout = struct_layout(&example_fields());

    let offsets: Vec<_> = layout.slots.iter().map(|s| s.offset).collect();
    assert_eq!(offsets, vec![0, 4, 8]);
    assert_eq!(layout.slots[1].padding_before, 3);
    assert_eq!(layout.tail_padding, 3);
    assert_eq!(layout.size, 12);
    assert_eq!(layout.align, 4);
    assert_eq!(layout.packed_size(), 6);
    assert_eq!(layout.padding(), 6);
}

#[test]
fn test_matches_repr_c() {
    let layout = struct_layout(&example_fields());
    assert_eq!(layout.size, size_of::<ExampleC>());
    assert_eq!(layout.align, align_of::<ExampleC>());
}

#[test]
fn test_employee_like_struct() {
    // struct Employee { int ID; char Name[50]; char Department[50]; float Salary; }
    let fields = vec![
        Field::new("ID", CType::Int),
        Field::new("Name", CType::Array(Box::new(CType::Char), 50)),
        Field::new("Department", CType::Array(Box::new(CType::Char), 50)),
        Field::new("Salary", CType::Float),
    ];
    let layout = struct_layout(&fields);
    // 4 + 50 + 50 = 104, already 4-aligned
    assert_eq!(layout.slots[3].offset, 104);
    assert_eq!(layout.size, 108);
}

#[test]
fn test_nested_struct_and_pointer_alignment() {
    let inner = CType::Struct(vec![
        Field::new("c", CType::Char),
        Field::new("d", CType::Double),
    ]);
    assert_eq!(inner.size(), 16);
    assert_eq!(inner.align(), 8);

    let outer = struct_layout(&[
        Field::new("flag", CType::Char),
        Field::new("inner", inner),
        Field::new("next", CType::Pointer),
    ]);
    assert_eq!(outer.slots[1].offset, 8);
    assert_eq!(outer.slots[2].offset, 24);
    assert_eq!(outer.size, 32);
}

#[test]
fn test_reordering_removes_padding() {
    let packed = struct_layout(&[
        Field::new("b", CType::Int),
        Field::new("a", CType::Char),
        Field::new("c", CType::Char),
    ]);
    assert_eq!(packed.size, 8);
    assert_eq!(packed.padding(), 2);
}

#[test]
fn test_type_names() {
    assert_eq!(CType::Array(Box::new(CType::Char), 50).to_string(), "char[50]");
    assert_eq!(CType::Pointer.to_string(), "void*");
}
