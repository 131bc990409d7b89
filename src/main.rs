//! Ray Fan entry point
//!
//! Loads settings, generates the obstacle scene and runs the render loop
//! headless against the software surface. With no window to supply pointer
//! events, a synthetic input source sweeps the pointer around the canvas.

use anyhow::{Context, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use ray_fan::platform::{LogStatus, PointerEvent, PointerState};
use ray_fan::polar_to_cartesian;
use ray_fan::renderer::SoftwareSurface;
use ray_fan::{RenderLoop, Scene, Settings};

const SETTINGS_PATH: &str = "settings.json";
/// How long the headless demo runs before stopping the loop
const RUN_DURATION: Duration = Duration::from_secs(5);
/// Pointer sampling interval of the synthetic input source
const INPUT_INTERVAL: Duration = Duration::from_millis(4);

/// Sweep the pointer on an ellipse around the canvas centre until `quit`
fn spawn_pointer_sweep(
    pointer: Arc<PointerState>,
    width: u32,
    height: u32,
    quit: Arc<AtomicBool>,
) -> Result<thread::JoinHandle<()>> {
    let handle = thread::Builder::new()
        .name("pointer-sweep".to_string())
        .spawn(move || {
            let center = glam::Vec2::new(width as f32, height as f32) / 2.0;
            let start = Instant::now();

            while !quit.load(Ordering::Acquire) {
                let theta = start.elapsed().as_secs_f32() * 0.8;
                let offset = polar_to_cartesian(1.0, theta) * center * 0.6;
                let p = center + offset;
                pointer.apply(PointerEvent::Moved { x: p.x, y: p.y });
                thread::sleep(INPUT_INTERVAL);
            }
        })
        .context("failed to spawn pointer thread")?;
    Ok(handle)
}

/// Start the loop, let it render for `duration`, then stop it
fn run_for(render_loop: &RenderLoop, duration: Duration) -> Result<()> {
    render_loop.start().context("failed to start render loop")?;
    thread::sleep(duration);
    render_loop.stop().context("failed to stop render loop")?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Ray Fan starting...");

    let settings = Settings::load(SETTINGS_PATH).context("failed to load settings")?;

    let seed = settings.seed.unwrap_or_else(rand::random);
    let scene = Scene::from_seed(settings.bound_count, settings.width, settings.height, seed);
    log::info!("Scene generated with {} bounds, seed: {}", scene.len(), seed);

    let surface = SoftwareSurface::new(settings.width, settings.height);
    let front = surface.front_buffer();
    let ray_color = settings.ray_color;
    let (width, height) = (settings.width, settings.height);

    let render_loop = RenderLoop::new(settings, scene, surface, LogStatus);
    let quit = Arc::new(AtomicBool::new(false));
    let sweep = spawn_pointer_sweep(render_loop.pointer(), width, height, Arc::clone(&quit))?;

    let run = run_for(&render_loop, RUN_DURATION);

    // The sweep thread is wound down whether or not the loop ran cleanly
    quit.store(true, Ordering::Release);
    if sweep.join().is_err() {
        log::warn!("Pointer thread panicked");
    }
    run?;

    let lit = front.with_frame(|frame| frame.count(ray_color));
    log::info!(
        "Presented {} frames in {:?}; last frame has {} ray pixels",
        front.presented(),
        RUN_DURATION,
        lit
    );
    Ok(())
}
