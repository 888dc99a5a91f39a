//! Cooldown Overlay - ability cooldown timers armed by key gestures
//! 
//! This library provides the countdown timers, the select/confirm gesture
//! machine that arms them, and the render loop that presents them.

pub mod config;
pub mod error;
pub mod state;
pub mod input;
pub mod render;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::OverlayError;
pub use state::AppState;
pub use utils::signals::shutdown_signal;
