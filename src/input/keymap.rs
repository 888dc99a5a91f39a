//! Raw key name to input symbol mapping

use crate::state::{InputSymbol, NightParadeKey};

/// Map a key name to its input symbol.
///
/// Names are matched case-insensitively after trimming. Keys outside the
/// binding table return `None` and never reach the gesture machine.
pub fn symbol_for(key: &str) -> Option<InputSymbol> {
    let key = key.trim().to_ascii_uppercase();
    let symbol = match key.as_str() {
        "H" => InputSymbol::SelectStart,
        "I" => InputSymbol::SelectFreedShadow,
        "K" => InputSymbol::SelectNightParade,
        "J" => InputSymbol::SelectTss,
        "CONTROL" | "CTRL" => InputSymbol::ConfirmFreedShadow,
        "5" => InputSymbol::ConfirmTss,
        "L" => InputSymbol::Reserved,
        "F" => InputSymbol::ConfirmNightParade(NightParadeKey::F),
        "T" => InputSymbol::ConfirmNightParade(NightParadeKey::T),
        "R" => InputSymbol::ConfirmNightParade(NightParadeKey::R),
        "E" => InputSymbol::ConfirmNightParade(NightParadeKey::E),
        "Q" => InputSymbol::ConfirmNightParade(NightParadeKey::Q),
        "A" => InputSymbol::ConfirmNightParade(NightParadeKey::A),
        "S" => InputSymbol::ConfirmNightParade(NightParadeKey::S),
        "D" => InputSymbol::ConfirmNightParade(NightParadeKey::D),
        _ => return None,
    };
    Some(symbol)
}
