//! Key event listener
//!
//! Reads key presses as text: each line holds one or more whitespace
//! separated key names. The words `reset` and `quit` are host commands.

use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

use crate::{error::OverlayError, state::AppState};

/// Why the listener stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerExit {
    EndOfInput,
    Quit,
}

/// Feed key events from `reader` into the overlay until input ends or `quit` arrives
pub async fn listen_keys<R>(state: Arc<AppState>, reader: R) -> Result<ListenerExit, OverlayError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        for word in line.split_whitespace() {
            match word.to_ascii_lowercase().as_str() {
                "quit" => {
                    info!("Quit requested from input");
                    return Ok(ListenerExit::Quit);
                }
                "reset" => {
                    if let Err(e) = state.reset_all() {
                        warn!("Failed to reset timers: {}", e);
                    }
                }
                _ => match state.handle_key_name(word) {
                    Ok(Some(transition)) => {
                        debug!("Key {:?} handled: {:?}", word, transition);
                    }
                    Ok(None) => {}
                    Err(e) => warn!("Failed to handle key {:?}: {}", word, e),
                },
            }
        }
    }

    debug!("Key input closed");
    Ok(ListenerExit::EndOfInput)
}
