//! Primitive types, sizes, defaults, casts, bindings and constants

use std::mem::{size_of, size_of_val};

use rustc_hash::FxHashMap;

use super::LessonOut;

pub const UI: i32 = 12345;
#[allow(clippy::approx_constant)]
pub const UF: f64 = 3.141592;

pub fn builtin_types(out: &mut LessonOut) {
    let a: i32 = 10;
    let b: &str = "hello";
    let c: [i32; 3] = [1, 2, 3];
    let s: &[i32] = &c[..2];
    let d: FxHashMap<&str, i32> = [("one", 1), ("two", 2)].into_iter().collect();

    out.line(format!("a: {} (type i32)", a));
    out.line(format!("b: {} (type &str)", b));
    out.line(format!("c: {:?} (type [i32; 3])", c));
    out.line(format!("s: {:?} (type &[i32])", s));

    let mut entries: Vec<_> = d.iter().collect();
    entries.sort();
    let rendered: Vec<String> = entries
        .iter()
        .map(|(k, v)| format!("{:?}: {}", k, v))
        .collect();
    out.line(format!("d: {{{}}} (type FxHashMap<&str, i32>)", rendered.join(", ")));
}

pub fn word_size(out: &mut LessonOut) {
    out.line(format!("Size of i32: {} bytes", size_of::<i32>()));
    out.line(format!("Size of i64: {} bytes", size_of::<i64>()));
    out.line(format!(
        "Size of isize: {} bytes (the machine word)",
        size_of::<isize>()
    ));
    out.line(format!("Size of usize: {} bytes", size_of::<usize>()));
    out.line(format!("Size of &i32: {} bytes", size_of::<&i32>()));
}

pub fn zero_value(out: &mut LessonOut) {
    let a = i32::default();
    let b = String::default();
    let c: Option<&i32> = Default::default();
    let d = bool::default();
    let e = f64::default();

    out.line(format!("a: {}", a));
    out.line(format!("b: {:?}", b));
    out.line(format!("c: {:?}", c));
    out.line(format!("d: {}", d));
    out.line(format!("e: {}", e));
    out.line("Reading a binding before it is assigned does not compile;");
    out.line("defaults are always spelled out with Default::default().");
}

pub fn casting(out: &mut LessonOut) {
    let a: i32 = 10;
    let b = a as f32;
    let c = f64::from(a);

    out.line(format!("a: {} (type i32)", a));
    out.line(format!("b: {:.6} (type f32, via `as`)", b));
    out.line(format!("c: {:.6} (type f64, via From)", c));
    out.line(format!("3.99 as i32: {}", 3.99_f64 as i32));
    out.line(format!("300 as u8: {}", 300_i32 as u8));
    out.line(format!("-1 as u32: {}", -1_i32 as u32));
    out.line(format!(
        "u8::try_from(300) is an error: {}",
        u8::try_from(300_i32).is_err()
    ));
}

pub fn assigning(out: &mut LessonOut) {
    let a = 10;
    let b: i32 = 20;
    let c = {
        let base = 15;
        base * 2
    };
    out.line(format!("a: {}, b: {}, c: {}", a, b, c));

    let a = a * 3;
    out.line(format!("a after shadowing: {}", a));
}

#[allow(clippy::approx_constant)]
pub fn constants(out: &mut LessonOut) {
    const TI: i64 = 12345;
    const TF: f32 = 3.141592;
    let ui = 12345;
    let uf = 3.141592;

    out.line(format!("UI: {} (const i32)", UI));
    out.line(format!("UF: {:.6} (const f64)", UF));
    out.line(format!("TI: {} (const i64)", TI));
    out.line(format!("TF: {:.6} (const f32)", TF));
    out.line(format!(
        "unsuffixed literals default to i32 and f64: {} bytes, {} bytes",
        size_of_val(&ui),
        size_of_val(&uf)
    ));
}
