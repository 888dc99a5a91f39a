//! Input module
//!
//! Maps raw key names to gesture symbols and reads key events from the host.

pub mod keymap;
pub mod listener;

pub use keymap::symbol_for;
pub use listener::{listen_keys, ListenerExit};
