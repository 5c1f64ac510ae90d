//! TUI pane rendering
//!
//! - [`lessons`]: lesson list with the current selection
//! - [`output`]: what the selected lesson printed
//! - [`bits`]: the XNOR operands and result drawn bit by bit
//! - [`status`]: status bar with keybindings and the XNOR mode
//!
//! Each module exports one `render_*` function that draws into a given area
//! and holds no state of its own.

pub mod bits;
pub mod lessons;
pub mod output;
pub mod status;

pub use bits::render_bits_pane;
pub use lessons::render_lessons_pane;
pub use output::render_output_pane;
pub use status::render_status_bar;
