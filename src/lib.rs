//! # Introduction
//!
//! bitlesson is a set of short, self-contained printouts of basic
//! systems-language features (primitive types, word size, zero values,
//! casting, struct layout and padding, pointers, pass-by-value, stack and
//! heap, constants, enumerations) together with one computation whose
//! output is pinned down exactly: the XNOR of two 32-bit integers.
//!
//! ## Pieces
//!
//! ```text
//! args → Config → { XnorReport | lessons → Transcript | ui::App }
//! ```
//!
//! 1. [`xnor`]: the XNOR routine in its two readings ([`xnor::XnorMode`])
//!    and the 32-bit binary rendering.
//! 2. [`lessons`]: the demonstrations, registered by name.
//! 3. [`transcript`]: collects lesson output, tagged by lesson.
//! 4. [`layout`]: C struct layout calculator used by the padding lesson.
//! 5. [`config`] and [`errors`]: command-line parsing and its errors.
//! 6. [`ui`]: ratatui-based lesson viewer; not part of the stable library API.
//!
//! ## Default output
//!
//! With no arguments the binary prints the XNOR of 10 and 10 exactly as the
//! original demo did:
//!
//! ```text
//! XNOR of 10 and 10 is: 1
//! Binary representation of result: 00000000000000000000000000000001
//! ```

pub mod config;
pub mod constants;
pub mod errors;
pub mod layout;
pub mod lessons;
pub mod transcript;
pub mod ui;
pub mod xnor;
