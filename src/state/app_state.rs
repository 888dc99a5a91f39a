//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::Notify;
use tracing::{debug, info};

use super::{
    clock::{Clock, SystemClock},
    input_machine::{InputSymbol, InputStateMachine, Mode},
    timers::{Ability, Timers},
};
use crate::{
    error::OverlayError,
    input::keymap,
    render::{Frame, Layout, TimerLine},
};

/// Core state guarded by the single overlay lock
#[derive(Debug, Default)]
pub struct Overlay {
    pub machine: InputStateMachine,
    pub timers: Timers,
}

/// Outcome of one key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Mode,
    pub to: Mode,
    /// Ability whose timer was actually armed by this key
    pub armed: Option<Ability>,
}

/// Top-level application state shared by the input and render tasks
pub struct AppState {
    /// Gesture machine and timers, behind one lock
    core: Mutex<Overlay>,
    clock: Arc<dyn Clock>,
    pub layout: Layout,
    /// Wakes the render loop for an out-of-cadence frame
    pub render_requested: Notify,
    pub start_time: Instant,
    last_action: Mutex<Option<(String, DateTime<Utc>)>>,
}

impl AppState {
    /// Create state driven by the system clock
    pub fn new(layout: Layout) -> Self {
        Self::with_clock(layout, Arc::new(SystemClock))
    }

    /// Create state driven by a custom clock
    pub fn with_clock(layout: Layout, clock: Arc<dyn Clock>) -> Self {
        Self {
            core: Mutex::new(Overlay::default()),
            clock,
            layout,
            render_requested: Notify::new(),
            start_time: Instant::now(),
            last_action: Mutex::new(None),
        }
    }

    fn lock_core(&self) -> Result<std::sync::MutexGuard<'_, Overlay>, OverlayError> {
        self.core.lock().map_err(|_| OverlayError::StatePoisoned("overlay state"))
    }

    fn record_action(&self, action: String) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some((action, self.clock.now()));
        }
    }

    /// Advance the gesture with one recognized key and apply any arming
    pub fn handle_key(&self, symbol: InputSymbol) -> Result<Transition, OverlayError> {
        let mut core = self.lock_core()?;
        let from = core.machine.mode();
        let arm = core.machine.handle_key(symbol);
        let to = core.machine.mode();

        match (from == to, symbol) {
            (_, InputSymbol::Reserved) => debug!("Reserved key pressed, no action bound"),
            (false, _) | (true, InputSymbol::SelectStart) => {
                debug!("Mode {:?} -> {:?} on {:?}", from, to, symbol);
            }
            (true, _) => debug!("Ignoring {:?} in mode {:?}", symbol, from),
        }

        let mut armed = None;
        if let Some(request) = arm {
            let ability = request.ability;
            if core.timers.arm(self.clock.as_ref(), ability, request.duration_secs)? {
                info!("{} activated ({}s)", ability.name(), request.duration_secs);
                armed = Some(ability);
            } else {
                debug!("{} already counting down, not re-armed", ability.name());
            }
        }
        drop(core);

        if let Some(ability) = armed {
            self.record_action(format!("arm {}", ability.label()));
        }

        Ok(Transition { from, to, armed })
    }

    /// Map a raw key name and feed it in. Unmapped keys are dropped.
    pub fn handle_key_name(&self, key: &str) -> Result<Option<Transition>, OverlayError> {
        match keymap::symbol_for(key) {
            Some(symbol) => self.handle_key(symbol).map(Some),
            None => {
                debug!("Dropping unmapped key {:?}", key);
                Ok(None)
            }
        }
    }

    /// Force every timer idle and ask for an immediate re-render
    pub fn reset_all(&self) -> Result<(), OverlayError> {
        self.lock_core()?.timers.reset_all();
        info!("All timers reset");
        self.record_action("reset".to_string());
        self.render_requested.notify_one();
        Ok(())
    }

    /// Render callback: display every timer in order.
    ///
    /// Querying the timers here is what moves expired ones back to idle.
    pub fn render_frame(&self) -> Result<Frame, OverlayError> {
        let mut core = self.lock_core()?;
        let rows = core.timers.display_all(self.clock.as_ref());
        drop(core);

        let timers = rows
            .into_iter()
            .map(|(ability, text, armed)| {
                let position = self.layout.position(ability);
                TimerLine {
                    label: ability.label().to_string(),
                    text,
                    armed,
                    x: position.x,
                    y: position.y,
                }
            })
            .collect();
        Ok(Frame { timers })
    }

    /// Current gesture mode
    pub fn mode(&self) -> Result<Mode, OverlayError> {
        Ok(self.lock_core()?.machine.mode())
    }

    /// Whole seconds left on one ability's timer
    pub fn remaining(&self, ability: Ability) -> Result<u64, OverlayError> {
        Ok(self.lock_core()?.timers.get_mut(ability).remaining(self.clock.as_ref()))
    }

    /// Calculate uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> Option<(String, DateTime<Utc>)> {
        self.last_action.lock().ok().and_then(|a| a.clone())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("core", &self.core)
            .field("layout", &self.layout)
            .field("start_time", &self.start_time)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::state::clock::ManualClock;

    fn state() -> (AppState, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::default());
        (AppState::with_clock(Layout::default(), clock.clone()), clock)
    }

    #[test]
    fn transition_reports_modes_and_arming() {
        let (state, _) = state();

        let t = state.handle_key(InputSymbol::SelectStart).unwrap();
        assert_eq!((t.from, t.to, t.armed), (Mode::Neutral, Mode::Changing, None));

        state.handle_key(InputSymbol::SelectTss).unwrap();
        let t = state.handle_key(InputSymbol::ConfirmTss).unwrap();
        assert_eq!((t.from, t.to, t.armed), (Mode::ArmingTss, Mode::Neutral, Some(Ability::Tss)));
        assert_eq!(state.get_last_action().map(|(a, _)| a), Some("arm TSS".to_string()));
    }

    #[test]
    fn idle_guard_blocks_rearm_but_still_returns_to_neutral() {
        let (state, clock) = state();
        for symbol in [InputSymbol::SelectStart, InputSymbol::SelectFreedShadow, InputSymbol::ConfirmFreedShadow] {
            state.handle_key(symbol).unwrap();
        }
        clock.advance(Duration::from_secs(10));

        state.handle_key(InputSymbol::SelectStart).unwrap();
        state.handle_key(InputSymbol::SelectFreedShadow).unwrap();
        let t = state.handle_key(InputSymbol::ConfirmFreedShadow).unwrap();

        assert_eq!(t.to, Mode::Neutral);
        assert_eq!(t.armed, None);
        assert_eq!(state.remaining(Ability::FreedShadow).unwrap(), 50);
    }

    #[test]
    fn unmapped_key_names_are_dropped() {
        let (state, _) = state();
        assert_eq!(state.handle_key_name("Z").unwrap(), None);
        assert_eq!(state.mode().unwrap(), Mode::Neutral);

        let t = state.handle_key_name("h").unwrap().unwrap();
        assert_eq!(t.to, Mode::Changing);
    }

    #[test]
    fn render_frame_places_rows_and_expires_timers() {
        let (state, clock) = state();
        for key in ["H", "K", "Q"] {
            state.handle_key_name(key).unwrap();
        }

        let frame = state.render_frame().unwrap();
        let texts: Vec<_> = frame.timers.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["FS is up!", "NP: 30s", "TSS is up!"]);
        assert_eq!((frame.timers[1].x, frame.timers[1].y), (100, 150));

        clock.advance(Duration::from_secs(30));
        state.render_frame().unwrap();
        let frame = state.render_frame().unwrap();
        assert_eq!(frame.timers[1].text, "NP is up!");
        assert!(!frame.timers[1].armed);
    }

    #[test]
    fn reset_all_keeps_mode_and_requests_render() {
        let (state, _) = state();
        for key in ["H", "J", "5", "H"] {
            state.handle_key_name(key).unwrap();
        }

        state.reset_all().unwrap();

        assert_eq!(state.mode().unwrap(), Mode::Changing);
        assert_eq!(state.remaining(Ability::Tss).unwrap(), 0);
        assert_eq!(state.get_last_action().map(|(a, _)| a), Some("reset".to_string()));
    }
}
