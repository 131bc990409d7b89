//! Fixed-rate render loop
//!
//! One dedicated thread samples the pointer, casts the ray fan, draws the
//! scene and presents, at most once per frame period. The controlling thread
//! starts and stops it:
//!
//! ```text
//! Stopped --start()--> Running --stop()--> Stopped
//! ```
//!
//! `stop` is a request/acknowledge handshake: it raises the cancel flag, then
//! blocks until the render thread sends its state back over the completion
//! channel. The flag is only checked between passes, so a pass in progress
//! always finishes.

use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use super::clock::FrameClock;
use super::error::LoopError;
use crate::consts::BUFFER_COUNT;
use crate::platform::{Canvas, PointerState, StatusSink, Surface};
use crate::settings::Settings;
use crate::sim::{Scene, Segment, cast_fan};
use crate::status_line;

/// Paint one frame: background, then bounds, then rays
pub fn draw_frame(canvas: &mut dyn Canvas, settings: &Settings, bounds: &[Segment], rays: &[Segment]) {
    canvas.fill_rect(0, 0, settings.width, settings.height, settings.background);

    for bound in bounds {
        canvas.draw_line(bound.a, bound.b, settings.bound_color);
    }
    for ray in rays {
        canvas.draw_line(ray.a, ray.b, settings.ray_color);
    }
}

/// Everything the render thread owns while running
struct Worker {
    settings: Settings,
    scene: Arc<Scene>,
    pointer: Arc<PointerState>,
    surface: Box<dyn Surface>,
    status: Box<dyn StatusSink>,
    clock: FrameClock,
}

impl Worker {
    fn run(mut self, cancel: &AtomicBool) -> Self {
        self.clock.reset(Instant::now());

        while !cancel.load(Ordering::Acquire) {
            let now = Instant::now();

            if self.clock.tick(now) {
                self.render_pass();
                self.clock.record_frame();
            }

            if let Some(fps) = self.clock.poll_fps(now) {
                log::debug!("{} FPS", fps);
                self.status.set_status(&status_line(&self.settings.title, fps));
            }

            let wait = self.clock.until_next_frame(Instant::now());
            if !wait.is_zero() {
                thread::sleep(wait);
            }
        }

        self
    }

    /// Run one pass; returns false if the pass only set up buffers
    fn render_pass(&mut self) -> bool {
        if !self.surface.has_buffers() {
            log::debug!("No buffer strategy yet, creating {} buffers", BUFFER_COUNT);
            self.surface.create_buffers(BUFFER_COUNT);
            return false;
        }

        // One snapshot per frame: every ray shares this origin
        let origin = self.pointer.snapshot();
        let rays = cast_fan(
            self.scene.bounds(),
            origin,
            self.settings.resolution,
            self.settings.max_distance,
        );
        log::trace!("Cast {} rays from ({}, {})", rays.len(), origin.x, origin.y);

        draw_frame(self.surface.canvas(), &self.settings, self.scene.bounds(), &rays);
        self.surface.present();
        true
    }
}

struct Running {
    cancel: Arc<AtomicBool>,
    done: Receiver<Worker>,
    handle: JoinHandle<()>,
}

enum Lifecycle {
    /// `None` once the worker has been lost to a panicked or unspawned thread
    Stopped(Option<Worker>),
    Running(Running),
}

/// Fixed-rate scheduler driving a scene onto a surface
pub struct RenderLoop {
    scene: Arc<Scene>,
    pointer: Arc<PointerState>,
    state: Mutex<Lifecycle>,
}

impl RenderLoop {
    /// Build a stopped loop; the pointer starts at the canvas origin
    pub fn new(
        settings: Settings,
        scene: Scene,
        surface: impl Surface + 'static,
        status: impl StatusSink + 'static,
    ) -> Self {
        let scene = Arc::new(scene);
        let pointer = Arc::new(PointerState::default());

        let worker = Worker {
            clock: FrameClock::new(settings.target_fps, Instant::now()),
            settings,
            scene: Arc::clone(&scene),
            pointer: Arc::clone(&pointer),
            surface: Box::new(surface),
            status: Box::new(status),
        };

        Self {
            scene,
            pointer,
            state: Mutex::new(Lifecycle::Stopped(Some(worker))),
        }
    }

    /// Shared pointer state for the input source to write into
    pub fn pointer(&self) -> Arc<PointerState> {
        Arc::clone(&self.pointer)
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn is_running(&self) -> bool {
        matches!(*self.state.lock(), Lifecycle::Running(_))
    }

    /// Spawn the render thread
    ///
    /// Fails with `AlreadyRunning` if it is already up, and with `WorkerLost`
    /// if an earlier run lost the render state.
    pub fn start(&self) -> Result<(), LoopError> {
        self.start_on(thread::Builder::new().name("render-loop".to_string()))
    }

    fn start_on(&self, builder: thread::Builder) -> Result<(), LoopError> {
        let mut state = self.state.lock();

        let worker = match &mut *state {
            Lifecycle::Running(_) => {
                log::warn!("start() called while the render loop is running");
                return Err(LoopError::AlreadyRunning);
            }
            Lifecycle::Stopped(worker) => worker.take().ok_or(LoopError::WorkerLost)?,
        };

        let cancel = Arc::new(AtomicBool::new(false));
        let (handoff, inbox) = mpsc::channel::<Worker>();
        let (done_tx, done) = mpsc::channel();

        // The worker is handed over only once the thread exists, so a failed
        // spawn leaves it here for the next start()
        let flag = Arc::clone(&cancel);
        let spawned = builder.spawn(move || {
            let Ok(worker) = inbox.recv() else {
                return;
            };
            let worker = worker.run(&flag);
            // The receiver only disappears if stop() is no longer waiting
            let _ = done_tx.send(worker);
        });

        let handle = match spawned {
            Ok(handle) => handle,
            Err(e) => {
                log::error!("Failed to spawn render thread: {}", e);
                *state = Lifecycle::Stopped(Some(worker));
                return Err(LoopError::Spawn(e));
            }
        };

        if let Err(mpsc::SendError(worker)) = handoff.send(worker) {
            let _ = handle.join();
            *state = Lifecycle::Stopped(Some(worker));
            return Err(LoopError::WorkerLost);
        }

        *state = Lifecycle::Running(Running {
            cancel,
            done,
            handle,
        });
        log::info!("Render loop started");
        Ok(())
    }

    /// Signal the render thread and block until it has exited
    pub fn stop(&self) -> Result<(), LoopError> {
        let mut state = self.state.lock();

        let running = match std::mem::replace(&mut *state, Lifecycle::Stopped(None)) {
            Lifecycle::Running(running) => running,
            stopped => {
                *state = stopped;
                log::warn!("stop() called while the render loop is stopped");
                return Err(LoopError::NotRunning);
            }
        };

        running.cancel.store(true, Ordering::Release);

        // Either the worker comes back, or the thread died and dropped the sender
        let ack = running.done.recv();
        if running.handle.join().is_err() {
            log::error!("Render thread panicked");
        }

        match ack {
            Ok(worker) => {
                *state = Lifecycle::Stopped(Some(worker));
                log::info!("Render loop stopped");
                Ok(())
            }
            Err(_) => {
                log::error!("Render thread exited without handing back its state");
                Err(LoopError::WorkerLost)
            }
        }
    }
}

impl Drop for RenderLoop {
    fn drop(&mut self) {
        if self.is_running() {
            if let Err(e) = self.stop() {
                log::error!("Failed to stop render loop on drop: {}", e);
            }
        }
    }
}
