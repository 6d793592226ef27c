//! Pointer-Sim demo entry point.
//!
//! Loads the TOML config, wires an [`InputEngine`] over the in-memory
//! surface, and plays one scripted interaction against it.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load_config()               -- defaults if missing or unreadable
//!  └─ MockSurface                 -- [surface] size
//!  └─ LinearPathProvider          -- [path] table
//!  └─ TokioSleeper + CancelSignal -- Ctrl-C cancels in-flight delays
//!  └─ InputEngine                 -- [engine] table
//!       ├─ click_at(target)
//!       ├─ drag(back to start)
//!       ├─ scroll
//!       └─ sendln
//! ```
//!
//! Usage: `pointer-sim [x,y]`.  Without an argument the pointer aims at the
//! centre of the surface.  `pointer-sim --init-config` writes the effective
//! configuration to the platform config file and exits.
//!
//! # Surface binding
//!
//! `MockSurface` records every event instead of injecting OS input.  A real
//! deployment swaps it for a platform binding implementing `SurfaceBinding`.

use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pointer_core::{Point, Region, ScrollDirection};
use pointer_engine::infrastructure::{
    path_timing::LinearPathProvider,
    sleep::{CancelSignal, TokioSleeper},
    storage::config::{config_file_path, load_config, save_config, AppConfig},
    surface::MockSurface,
};
use pointer_engine::{EngineError, InputEngine, SurfaceBinding};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging is not up yet, so config errors go to stderr.
    let config = load_config().unwrap_or_else(|e| {
        eprintln!("pointer-sim: falling back to default config: {e}");
        AppConfig::default()
    });

    // Initialise structured logging.  RUST_LOG wins over the config file.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.engine.log_level)),
        )
        .init();

    info!("Pointer-Sim starting");

    let arg = std::env::args().nth(1);
    if arg.as_deref() == Some("--init-config") {
        save_config(&config).context("failed to write config")?;
        info!(path = %config_file_path()?.display(), "config written");
        return Ok(());
    }

    let surface_size = config.surface.size();
    let target = match arg {
        Some(arg) => arg
            .parse::<Point>()
            .with_context(|| format!("invalid target {arg:?}, expected \"x,y\""))?,
        None => Region::new(0, 0, surface_size.width, surface_size.height)
            .center()
            .context("surface has no area")?,
    };

    // ── Ports ─────────────────────────────────────────────────────────────────
    let surface = Arc::new(MockSurface::with_size(surface_size));
    let provider = Arc::new(LinearPathProvider::from_config(&config.path));
    let cancel = CancelSignal::new();
    let sleeper = Arc::new(TokioSleeper::new(cancel.clone()));

    let engine = InputEngine::new(
        Arc::clone(&surface) as Arc<dyn SurfaceBinding>,
        provider,
        sleeper,
    )
    .with_settings(config.engine_settings());
    let speed = engine.set_speed(config.engine.speed);
    info!(engine = %engine.id(), speed, %target, "engine ready");

    // ── Ctrl-C handler ────────────────────────────────────────────────────────
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown signal received");
            cancel.cancel();
        }
    });

    match run_script(&engine, &config, target).await {
        Ok(()) => {}
        Err(EngineError::Cancelled) => warn!("interaction cancelled"),
    }
    engine.set_blocking(false);
    engine.defocus();

    info!(
        events = surface.events().len(),
        position = %engine.position(),
        "Pointer-Sim stopped"
    );
    Ok(())
}

/// One click, one drag back to the start, a scroll, and a line of text.
async fn run_script(
    engine: &InputEngine,
    config: &AppConfig,
    target: Point,
) -> Result<(), EngineError> {
    let origin = engine.position();
    engine.focus();
    engine.set_blocking(true);

    let clicked = engine.click_at_primary(target, true).await?;
    info!(%target, clicked, "click");

    let dragged = engine.drag_primary(origin, true).await?;
    info!(to = %origin, dragged, "drag");

    let scrolled = engine.scroll() && engine.scroll_toward(ScrollDirection::Up);
    info!(scrolled, "scroll");

    let typed = engine.sendln(&format!("speed={}", config.engine.speed));
    info!(typed, press_at = %engine.press_position(), "text");

    Ok(())
}
