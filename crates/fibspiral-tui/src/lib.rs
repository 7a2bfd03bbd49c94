//! # fibspiral-tui
//!
//! Interactive spiral explorer using ratatui with Elm architecture.

pub mod controls;
pub mod footer;
pub mod header;
pub mod keymap;
pub mod logs;
pub mod messages;
pub mod model;
pub mod spiral;
pub mod styles;
pub mod table;

pub use logs::ScrollState;
pub use messages::TuiMessage;
pub use model::TuiApp;
