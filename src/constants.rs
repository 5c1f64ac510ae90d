// Constants shared by the CLI, lessons and viewer

use crate::xnor::XnorMode;

/// Width of the integers the XNOR demo works on
pub const WORD_BITS: u32 = i32::BITS;

/// Left operand used when none is given on the command line
pub const DEFAULT_A: i32 = 10;

/// Right operand used when none is given on the command line
pub const DEFAULT_B: i32 = 10;

/// Mode used when neither `--bitwise` nor `--scalar` is given.
/// Scalar reproduces the output of the original demo program.
pub const DEFAULT_MODE: XnorMode = XnorMode::Scalar;

/// Event poll interval for the viewer, in milliseconds
pub const VIEWER_TICK_MS: u64 = 50;
