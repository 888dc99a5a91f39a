//! The fixed set of ability timers

use super::clock::Clock;
use super::countdown::CountdownTimer;
use crate::error::OverlayError;

/// Abilities with a tracked cooldown, in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ability {
    FreedShadow,
    NightParade,
    Tss,
}

impl Ability {
    pub const ALL: [Ability; 3] = [Ability::FreedShadow, Ability::NightParade, Ability::Tss];

    /// Short label shown on the overlay
    pub fn label(self) -> &'static str {
        match self {
            Ability::FreedShadow => "FS",
            Ability::NightParade => "NP",
            Ability::Tss => "TSS",
        }
    }

    /// Human-readable name used in logs
    pub fn name(self) -> &'static str {
        match self {
            Ability::FreedShadow => "Freed Shadow",
            Ability::NightParade => "Night Parade",
            Ability::Tss => "TSS",
        }
    }

    /// Cooldown armed by a confirmed gesture
    pub fn cooldown_secs(self) -> u32 {
        match self {
            Ability::FreedShadow => 60,
            Ability::NightParade | Ability::Tss => 30,
        }
    }

    /// Row the ability occupies on the overlay
    pub fn index(self) -> usize {
        match self {
            Ability::FreedShadow => 0,
            Ability::NightParade => 1,
            Ability::Tss => 2,
        }
    }
}

/// One countdown per ability, created once at startup
#[derive(Debug, Clone)]
pub struct Timers {
    timers: [CountdownTimer; 3],
}

impl Timers {
    pub fn new() -> Self {
        Self {
            timers: Ability::ALL.map(|ability| CountdownTimer::new(ability.label())),
        }
    }

    pub fn get(&self, ability: Ability) -> &CountdownTimer {
        &self.timers[ability.index()]
    }

    pub fn get_mut(&mut self, ability: Ability) -> &mut CountdownTimer {
        &mut self.timers[ability.index()]
    }

    /// Arm `ability` only if it is idle. Returns whether it was armed.
    pub fn arm(&mut self, clock: &dyn Clock, ability: Ability, duration_secs: u32) -> Result<bool, OverlayError> {
        let timer = self.get_mut(ability);
        // Query first so a countdown that already ran out counts as idle
        timer.remaining(clock);
        timer.start(clock, duration_secs)
    }

    pub fn reset_all(&mut self) {
        for timer in &mut self.timers {
            timer.reset();
        }
    }

    /// Display text for every timer, in render order
    pub fn display_all(&mut self, clock: &dyn Clock) -> [(Ability, String, bool); 3] {
        Ability::ALL.map(|ability| {
            let timer = self.get_mut(ability);
            let text = timer.display(clock);
            (ability, text, timer.is_armed())
        })
    }
}

impl Default for Timers {
    fn default() -> Self {
        Self::new()
    }
}
