//! Cooldown Overlay - ability cooldown timers armed by key gestures
//! 
//! This is the main entry point for the cooldown-overlay application.

use std::sync::Arc;
use tokio::io::{self, BufReader};
use tracing::info;

use cooldown_overlay::{
    config::{Config, OutputFormat},
    input::{listen_keys, ListenerExit},
    render::{FrameSink, JsonSink, TextSink},
    state::AppState,
    tasks::render_loop_task,
    utils::{reset_signal_task, shutdown_signal},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr, stdout carries the frames
    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter())
        .with_writer(std::io::stderr)
        .init();

    info!("Starting cooldown-overlay v1.0.0");
    info!("Configuration: frame_interval={}ms, format={:?}, origin=({}, {}), spacing={}",
          config.frame_interval_ms, config.format, config.origin_x, config.origin_y, config.row_spacing);

    // Create application state
    let state = Arc::new(AppState::new(config.layout()));

    let sink: Box<dyn FrameSink> = match config.format {
        OutputFormat::Text => Box::new(TextSink::new(std::io::stdout())),
        OutputFormat::Json => Box::new(JsonSink::new(std::io::stdout())),
    };

    // Start the render loop
    let render = tokio::spawn(render_loop_task(Arc::clone(&state), config.frame_interval(), sink));

    // SIGUSR1 resets all timers
    let reset_state = Arc::clone(&state);
    tokio::spawn(async move {
        if let Err(e) = reset_signal_task(reset_state).await {
            tracing::error!("Reset signal handler failed: {}", e);
        }
    });

    info!("Keys: H select, I/K/J pick FS/NP/TSS, CONTROL/F T R E Q A S D/5 confirm");
    info!("Commands: reset, quit (or SIGUSR1 to reset)");

    let listener = listen_keys(Arc::clone(&state), BufReader::new(io::stdin()));

    tokio::select! {
        result = listener => {
            match result? {
                ListenerExit::Quit => info!("Quit command received"),
                ListenerExit::EndOfInput => info!("Key input closed"),
            }
        }
        result = shutdown_signal() => {
            result?;
            info!("Shutdown signal received");
        }
    }

    render.abort();
    info!("Overlay shutdown complete after {}", state.get_uptime());

    // A pending stdin read parks a blocking thread that runtime drop would wait on
    std::process::exit(0)
}
