//! Background tasks module
//! 
//! This module contains the long-running tasks that drive the overlay core.

pub mod render_loop;

// Re-export main functions
pub use render_loop::{render_loop_task, render_once};
