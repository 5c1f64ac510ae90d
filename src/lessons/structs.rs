//! Struct construction, layout, and where values live

use std::mem::{align_of, offset_of, size_of};

use super::LessonOut;
use crate::layout::{struct_layout, CType, Field};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub department: String,
    pub salary: f64,
}

impl Employee {
    fn summary(&self) -> String {
        format!(
            "ID={}, Name={}, Department={}, Salary={:.2}",
            self.id, self.name, self.department, self.salary
        )
    }
}

/// `char a; int b; char c;` with C field order and padding
#[repr(C)]
#[allow(dead_code)] // Only the layout is inspected
pub struct ExampleC {
    a: u8,
    b: i32,
    c: u8,
}

/// Same fields, default Rust representation (the compiler may reorder)
#[allow(dead_code)]
pub struct ExampleRust {
    a: u8,
    b: i32,
    c: u8,
}

/// The C declaration of `Example` as the layout calculator sees it
pub fn example_fields() -> Vec<Field> {
    vec![
        Field::new("a", CType::Char),
        Field::new("b", CType::Int),
        Field::new("c", CType::Char),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// Returned by value; the caller owns the struct directly
pub fn stay_on_stack() -> User {
    User {
        name: "Bill".to_string(),
        email: "bill@email.com".to_string(),
    }
}

/// Returned behind an owning heap pointer
pub fn escape_to_heap() -> Box<User> {
    Box::new(User {
        name: "Bill".to_string(),
        email: "bill@email.com".to_string(),
    })
}

pub fn construction(out: &mut LessonOut) {
    let emp1 = Employee {
        name: "Bob".to_string(),
        department: "Sales".to_string(),
        id: 102,
        salary: 58000.00,
    };
    let emp2 = Employee {
        name: "Charlie".to_string(),
        salary: 60000.00,
        ..Default::default()
    };

    out.line(format!("emp1: {}", emp1.summary()));
    out.line(format!("emp2: {}", emp2.summary()));
    out.line(format!("emp2: {:?}", emp2));
}

pub fn padding(out: &mut LessonOut) {
    let layout = struct_layout(&example_fields());

    out.line(format!(
        "Size of #[repr(C)] Example: {} bytes (align {})",
        size_of::<ExampleC>(),
        align_of::<ExampleC>()
    ));
    out.line(format!(
        "Field offsets: a={}, b={}, c={}",
        offset_of!(ExampleC, a),
        offset_of!(ExampleC, b),
        offset_of!(ExampleC, c)
    ));

    out.line(format!(
        "Computed C layout: {} bytes, {} of data, {} of padding",
        layout.size,
        layout.packed_size(),
        layout.padding()
    ));
    for slot in &layout.slots {
        if slot.padding_before > 0 {
            out.line(format!("  pad  [{}]", slot.padding_before));
        }
        out.line(format!(
            "  {:<4} offset {} size {}",
            slot.name, slot.offset, slot.size
        ));
    }
    if layout.tail_padding > 0 {
        out.line(format!("  pad  [{}]", layout.tail_padding));
    }

    out.line(format!(
        "Size of Rust-layout Example: {} bytes (fields may be reordered)",
        size_of::<ExampleRust>()
    ));
}

pub fn stack_heap(out: &mut LessonOut) {
    let u1 = stay_on_stack();
    let u2 = escape_to_heap();

    out.line(format!("u1: name={}, email={}", u1.name, u1.email));
    out.line(format!("u2: name={}, email={}", u2.name, u2.email));
    out.line(format!(
        "Box<User> is one pointer wide: {}",
        size_of::<Box<User>>() == size_of::<usize>()
    ));
    out.line("u2's heap memory is released when it goes out of scope");
}
