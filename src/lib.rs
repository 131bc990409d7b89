//! Ray Fan - An interactive 2D ray casting visualiser
//!
//! Core modules:
//! - `sim`: Pure ray casting (segment intersection, ray fans, obstacle scenes)
//! - `runtime`: Fixed-rate render loop and frame clock
//! - `platform`: Presentation and pointer input collaborators
//! - `renderer`: CPU software surface (framebuffers and rasterization)
//! - `settings`: Data-driven configuration

pub mod platform;
pub mod renderer;
pub mod runtime;
pub mod settings;
pub mod sim;

pub use runtime::{FrameClock, LoopError, RenderLoop};
pub use settings::{Settings, SettingsError};
pub use sim::{Scene, Segment, cast_fan, intersect_distance};

use glam::Vec2;

/// Visualiser configuration constants
pub mod consts {
    /// Target render passes per second
    pub const TARGET_FPS: u32 = 60;
    /// Buffers requested when the surface has no buffer strategy yet
    pub const BUFFER_COUNT: usize = 3;

    /// Canvas defaults
    pub const DEFAULT_WIDTH: u32 = 800;
    pub const DEFAULT_HEIGHT: u32 = 600;

    /// Number of obstacles in a generated scene
    pub const DEFAULT_BOUND_COUNT: usize = 8;
    /// Rays per fan
    pub const DEFAULT_RESOLUTION: usize = 180;
    /// Ray cap length (pixels)
    pub const DEFAULT_MAX_DISTANCE: f32 = 3000.0;

    pub const DEFAULT_TITLE: &str = "Ray casting";
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Format the once-a-second status line, e.g. `Ray casting | 60 FPS`
pub fn status_line(title: &str, fps: u32) -> String {
    format!("{} | {} FPS", title, fps)
}
