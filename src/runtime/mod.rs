//! Render loop runtime
//!
//! - `clock`: fixed-timestep accumulator and FPS window
//! - `render_loop`: the render thread and its start/stop lifecycle

pub mod clock;
pub mod error;
pub mod render_loop;

pub use clock::FrameClock;
pub use error::LoopError;
pub use render_loop::{RenderLoop, draw_frame};
