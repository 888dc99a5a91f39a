//! Render module
//!
//! Frame model built on every tick and the sinks that present it.

pub mod frame;
pub mod sink;

pub use frame::{Frame, Layout, Position, TimerLine};
pub use sink::{FrameSink, JsonSink, TextSink};
