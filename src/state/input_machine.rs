//! Select/confirm gesture state machine
//!
//! Confirm keys are ordinary keys that get pressed all the time, so a timer
//! is only armed after an explicit select step:
//!
//! ```text
//! Neutral --SelectStart--> Changing --SelectX--> ArmingX --ConfirmX--> Neutral (+ arm X)
//! ```
//!
//! `SelectStart` is accepted from every mode and restarts the gesture. Any
//! other symbol that does not fit the current mode is ignored. The transition
//! itself is the pure function [`transition`]; arming is handed back to the
//! caller as an [`ArmRequest`].

use super::timers::Ability;

/// Current step of the gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Neutral,
    Changing,
    ArmingFreedShadow,
    ArmingNightParade,
    ArmingTss,
}

/// The eight keys that confirm Night Parade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NightParadeKey {
    F,
    T,
    R,
    E,
    Q,
    A,
    S,
    D,
}

impl NightParadeKey {
    pub const ALL: [NightParadeKey; 8] = [
        NightParadeKey::F,
        NightParadeKey::T,
        NightParadeKey::R,
        NightParadeKey::E,
        NightParadeKey::Q,
        NightParadeKey::A,
        NightParadeKey::S,
        NightParadeKey::D,
    ];
}

/// Recognized input symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSymbol {
    SelectStart,
    SelectFreedShadow,
    SelectNightParade,
    SelectTss,
    ConfirmFreedShadow,
    ConfirmNightParade(NightParadeKey),
    ConfirmTss,
    /// Bound key with no behavior yet
    Reserved,
}

/// Instruction to arm a timer, produced by a completed gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmRequest {
    pub ability: Ability,
    pub duration_secs: u32,
}

impl ArmRequest {
    fn for_ability(ability: Ability) -> Self {
        Self {
            ability,
            duration_secs: ability.cooldown_secs(),
        }
    }
}

/// Compute the next mode and any arm request for `symbol` in `mode`
pub fn transition(mode: Mode, symbol: InputSymbol) -> (Mode, Option<ArmRequest>) {
    use InputSymbol as S;
    use Mode as M;

    match (mode, symbol) {
        (_, S::SelectStart) => (M::Changing, None),
        (M::Changing, S::SelectFreedShadow) => (M::ArmingFreedShadow, None),
        (M::Changing, S::SelectNightParade) => (M::ArmingNightParade, None),
        (M::Changing, S::SelectTss) => (M::ArmingTss, None),
        (M::ArmingFreedShadow, S::ConfirmFreedShadow) => {
            (M::Neutral, Some(ArmRequest::for_ability(Ability::FreedShadow)))
        }
        (M::ArmingNightParade, S::ConfirmNightParade(_)) => {
            (M::Neutral, Some(ArmRequest::for_ability(Ability::NightParade)))
        }
        (M::ArmingTss, S::ConfirmTss) => (M::Neutral, Some(ArmRequest::for_ability(Ability::Tss))),
        (mode, _) => (mode, None),
    }
}

/// Holder of the single in-flight gesture
#[derive(Debug, Clone, Default)]
pub struct InputStateMachine {
    mode: Mode,
}

impl InputStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Feed one key press, returning the arm request if a gesture completed
    pub fn handle_key(&mut self, symbol: InputSymbol) -> Option<ArmRequest> {
        let (next, arm) = transition(self.mode, symbol);
        self.mode = next;
        arm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODES: [Mode; 5] = [
        Mode::Neutral,
        Mode::Changing,
        Mode::ArmingFreedShadow,
        Mode::ArmingNightParade,
        Mode::ArmingTss,
    ];

    fn all_symbols() -> Vec<InputSymbol> {
        let mut symbols = vec![
            InputSymbol::SelectStart,
            InputSymbol::SelectFreedShadow,
            InputSymbol::SelectNightParade,
            InputSymbol::SelectTss,
            InputSymbol::ConfirmFreedShadow,
            InputSymbol::ConfirmTss,
            InputSymbol::Reserved,
        ];
        symbols.extend(NightParadeKey::ALL.map(InputSymbol::ConfirmNightParade));
        symbols
    }

    #[test]
    fn select_start_enters_changing_from_every_mode() {
        for mode in MODES {
            assert_eq!(transition(mode, InputSymbol::SelectStart), (Mode::Changing, None));
        }
    }

    #[test]
    fn changing_selects_each_ability() {
        assert_eq!(
            transition(Mode::Changing, InputSymbol::SelectFreedShadow),
            (Mode::ArmingFreedShadow, None)
        );
        assert_eq!(
            transition(Mode::Changing, InputSymbol::SelectNightParade),
            (Mode::ArmingNightParade, None)
        );
        assert_eq!(transition(Mode::Changing, InputSymbol::SelectTss), (Mode::ArmingTss, None));
    }

    #[test]
    fn confirms_return_to_neutral_with_arm_request() {
        let (mode, arm) = transition(Mode::ArmingFreedShadow, InputSymbol::ConfirmFreedShadow);
        assert_eq!(mode, Mode::Neutral);
        assert_eq!(
            arm,
            Some(ArmRequest {
                ability: Ability::FreedShadow,
                duration_secs: 60
            })
        );

        let (mode, arm) = transition(Mode::ArmingTss, InputSymbol::ConfirmTss);
        assert_eq!(mode, Mode::Neutral);
        assert_eq!(
            arm,
            Some(ArmRequest {
                ability: Ability::Tss,
                duration_secs: 30
            })
        );
    }

    #[test]
    fn every_night_parade_key_confirms() {
        for key in NightParadeKey::ALL {
            let (mode, arm) = transition(Mode::ArmingNightParade, InputSymbol::ConfirmNightParade(key));
            assert_eq!(mode, Mode::Neutral);
            assert_eq!(
                arm,
                Some(ArmRequest {
                    ability: Ability::NightParade,
                    duration_secs: 30
                })
            );
        }
    }

    #[test]
    fn unlisted_pairs_leave_mode_unchanged() {
        let listed = |mode: Mode, symbol: InputSymbol| {
            matches!(
                (mode, symbol),
                (_, InputSymbol::SelectStart)
                    | (Mode::Changing, InputSymbol::SelectFreedShadow)
                    | (Mode::Changing, InputSymbol::SelectNightParade)
                    | (Mode::Changing, InputSymbol::SelectTss)
                    | (Mode::ArmingFreedShadow, InputSymbol::ConfirmFreedShadow)
                    | (Mode::ArmingNightParade, InputSymbol::ConfirmNightParade(_))
                    | (Mode::ArmingTss, InputSymbol::ConfirmTss)
            )
        };

        for mode in MODES {
            for symbol in all_symbols() {
                if !listed(mode, symbol) {
                    assert_eq!(transition(mode, symbol), (mode, None), "{mode:?} + {symbol:?}");
                }
            }
        }
    }

    #[test]
    fn wrong_confirm_keeps_waiting() {
        let mut machine = InputStateMachine::new();
        machine.handle_key(InputSymbol::SelectStart);
        machine.handle_key(InputSymbol::SelectTss);

        assert_eq!(machine.handle_key(InputSymbol::ConfirmFreedShadow), None);
        assert_eq!(machine.mode(), Mode::ArmingTss);
        assert!(machine.handle_key(InputSymbol::ConfirmTss).is_some());
        assert_eq!(machine.mode(), Mode::Neutral);
    }
}
