//! Platform abstraction layer
//!
//! Collaborators the render loop talks to without owning their backends:
//! - Presentation (`Surface`, `Canvas`, `StatusSink`)
//! - Pointer input (`PointerState`)

pub mod input;
pub mod surface;

pub use input::{PointerEvent, PointerState};
pub use surface::{Canvas, LogStatus, Rgba, StatusSink, Surface};
