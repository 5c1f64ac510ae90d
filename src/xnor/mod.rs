//! XNOR of two 32-bit integers
//!
//! The routine this crate demonstrates is *named* a bitwise XNOR, but the
//! program it comes from only ever compared the two operands for equality and
//! printed that 0/1 result across 32 bits. Both readings are kept here and the
//! caller picks one with [`XnorMode`]:
//!
//! - [`XnorMode::Scalar`]: `1` if `a == b`, otherwise `0` (the shipped output)
//! - [`XnorMode::Bitwise`]: `!(a ^ b)`, one result bit per input bit pair
//!
//! ```text
//! a        = 0000 ... 1010   (10)
//! b        = 0000 ... 0101   (5)
//! bitwise  = 1111 ... 0000   (-16)
//! scalar   = 0000 ... 0000   (0)
//! ```
//!
//! Every function here is total over `i32`.

use std::fmt;

use crate::constants::WORD_BITS;

/// Which meaning of "XNOR" to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum XnorMode {
    /// Whole-value equality, broadcast into a 32-bit result (0 or 1)
    #[default]
    Scalar,
    /// Per-bit equality
    Bitwise,
}

impl XnorMode {
    /// The other mode
    pub fn toggle(self) -> Self {
        match self {
            XnorMode::Scalar => XnorMode::Bitwise,
            XnorMode::Bitwise => XnorMode::Scalar,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            XnorMode::Scalar => "scalar",
            XnorMode::Bitwise => "bitwise",
        }
    }
}

impl fmt::Display for XnorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-bit XNOR: bit `i` of the result is set iff bit `i` of `a` equals bit `i` of `b`
pub fn xnor_bits(a: i32, b: i32) -> i32 {
    !(a ^ b)
}

/// Equality of the two operands as an integer (1 or 0)
pub fn xnor_scalar(a: i32, b: i32) -> i32 {
    i32::from(a == b)
}

/// XNOR under the chosen interpretation
pub fn xnor(a: i32, b: i32, mode: XnorMode) -> i32 {
    match mode {
        XnorMode::Scalar => xnor_scalar(a, b),
        XnorMode::Bitwise => xnor_bits(a, b),
    }
}

/// Value of bit `index` (0 = least significant). Indices past 31 read as 0.
pub fn bit(value: i32, index: u32) -> bool {
    index < WORD_BITS && ((value as u32) >> index) & 1 == 1
}

/// Render all 32 bits of `value`, most significant first
pub fn to_binary32(value: i32) -> String {
    (0..WORD_BITS)
        .rev()
        .map(|i| if bit(value, i) { '1' } else { '0' })
        .collect()
}

/// One XNOR computation together with its printed form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XnorReport {
    pub a: i32,
    pub b: i32,
    pub mode: XnorMode,
    pub result: i32,
}

impl XnorReport {
    pub fn new(a: i32, b: i32, mode: XnorMode) -> Self {
        XnorReport {
            a,
            b,
            mode,
            result: xnor(a, b, mode),
        }
    }

    /// The two output lines, without trailing newlines
    pub fn lines(&self) -> [String; 2] {
        [
            format!("XNOR of {} and {} is: {}", self.a, self.b, self.result),
            format!(
                "Binary representation of result: {}",
                to_binary32(self.result)
            ),
        ]
    }

    /// Bit positions (MSB first) where the operands agree
    pub fn matching_bits(&self) -> Vec<bool> {
        (0..WORD_BITS)
            .rev()
            .map(|i| bit(self.a, i) == bit(self.b, i))
            .collect()
    }
}

impl fmt::Display for XnorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, second] = self.lines();
        writeln!(f, "{}", first)?;
        writeln!(f, "{}", second)
    }
}
