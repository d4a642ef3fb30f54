//! Page behaviours — slider, theme, navigation, preloader, reveal, cursor.
//!
//! Nothing in this module depends on any TUI or browser crate.  Front ends
//! feed it triggers and measurements and read back the state to apply.

pub mod cursor;
pub mod events;
pub mod geometry;
pub mod nav;
pub mod page;
pub mod preloader;
pub mod reveal;
pub mod slider;
pub mod store;
pub mod theme;
