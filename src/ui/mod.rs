//! Terminal lesson viewer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`app`]**: viewer state, keyboard event loop, pane focus
//! - **[`panes`]**: stateless render functions for each pane (lesson list,
//!   output, XNOR bits, status bar)
//! - **[`theme`]**: color palette shared by all panes
//!
//! Construct an [`App`] and call [`App::run`] with a terminal.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
