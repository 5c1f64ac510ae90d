//! References, raw pointer steps, and pass-by-value

use std::ptr;

use super::LessonOut;

/// Takes its own copy of `inc`; the caller's value is untouched
pub fn increment_copy(mut inc: i32) -> i32 {
    inc += 1;
    inc
}

/// Increments the caller's value through a mutable reference
pub fn increment_ref(inc: &mut i32) {
    *inc += 1;
}

pub fn pointers(out: &mut LessonOut) {
    let mut a = 10;
    let p = &mut a;
    *p = 20;
    let through_p = *p;
    out.line(format!("a: {}, *p: {}", a, through_p));

    // Pointer arithmetic is allowed on raw pointers, in units of the pointee
    let arr = [10_i32, 20];
    let first: *const i32 = &arr[0];
    let next = first.wrapping_add(1);
    out.line(format!(
        "p.wrapping_add(1) moves {} bytes",
        next as usize - first as usize
    ));
    out.line(format!(
        "and lands on arr[1]: {}",
        ptr::eq(next, &arr[1])
    ));
}

pub fn pass_by_value(out: &mut LessonOut) {
    let mut count = 10;
    out.line(format!("Before: count = {}", count));
    let _ = increment_copy(count);
    out.line(format!("After increment_copy: count = {}", count));
    increment_ref(&mut count);
    out.line(format!("After increment_ref: count = {}", count));
}
