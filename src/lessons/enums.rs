//! Enumerations with explicit and computed discriminants

use super::LessonOut;

/// Counting resumes after an explicit value: `A = 0, B, C, D = 4, E`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Letter {
    A = 0,
    B,
    C,
    D = 4,
    E,
}

impl TryFrom<i32> for Letter {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Letter::A),
            1 => Ok(Letter::B),
            2 => Ok(Letter::C),
            4 => Ok(Letter::D),
            5 => Ok(Letter::E),
            other => Err(other),
        }
    }
}

/// Discriminant for position `n` once the sequence switches to `n << 2`
pub const fn shifted(n: i32) -> i32 {
    n << 2
}

/// A counter that switches to shifted values part way: `D = 3 << 2, E = 4 << 2`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Shifted {
    A = 0,
    B = 1,
    C = 2,
    D = shifted(3),
    E = shifted(4),
}

pub fn enums(out: &mut LessonOut) {
    out.line(format!(
        "A: {}, B: {}, C: {}, D: {}, E: {}",
        Letter::A as i32,
        Letter::B as i32,
        Letter::C as i32,
        Letter::D as i32,
        Letter::E as i32
    ));
    out.line(format!("Letter::try_from(3): {:?}", Letter::try_from(3)));
    out.line(format!("Letter::try_from(4): {:?}", Letter::try_from(4)));
    out.line(format!(
        "Shifted: A: {}, B: {}, C: {}, D: {}, E: {}",
        Shifted::A as i32,
        Shifted::B as i32,
        Shifted::C as i32,
        Shifted::D as i32,
        Shifted::E as i32
    ));
}
