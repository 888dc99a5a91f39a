//! State management module
//! 
//! This module contains the timers, the gesture machine and the application
//! state that owns them.

pub mod clock;
pub mod countdown;
pub mod input_machine;
pub mod timers;
pub mod app_state;

// Re-export main types
pub use clock::{Clock, ManualClock, SystemClock};
pub use countdown::CountdownTimer;
pub use input_machine::{transition, ArmRequest, InputStateMachine, InputSymbol, Mode, NightParadeKey};
pub use timers::{Ability, Timers};
pub use app_state::{AppState, Overlay, Transition};
