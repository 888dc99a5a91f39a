//! Render loop background task

use std::{sync::Arc, time::Duration};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::{render::FrameSink, state::AppState};

/// Render one frame into `sink`
pub fn render_once(state: &AppState, sink: &mut dyn FrameSink) {
    match state.render_frame() {
        Ok(frame) => {
            if let Err(e) = sink.present(&frame) {
                warn!("Failed to present frame: {}", e);
            }
        }
        Err(e) => warn!("Failed to render frame: {}", e),
    }
}

/// Background task that renders at a fixed cadence and on reset requests
pub async fn render_loop_task(state: Arc<AppState>, frame_interval: Duration, mut sink: Box<dyn FrameSink>) {
    info!("Starting render loop at {:?} per frame", frame_interval);

    let mut ticker = interval(frame_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = state.render_requested.notified() => {
                debug!("Immediate re-render requested");
            }
        }
        render_once(&state, sink.as_mut());
    }
}
