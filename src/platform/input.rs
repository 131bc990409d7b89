//! Pointer input state shared between the input source and the render loop
//!
//! Both coordinates are packed into one `AtomicU64` (x bits high, y bits low)
//! so a reader always sees a pair that was written together. Writers never
//! block the render loop; the last write wins.

use glam::Vec2;
use std::sync::atomic::{AtomicU64, Ordering};

/// Pointer events consumed by the visualiser
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Moved { x: f32, y: f32 },
    Dragged { x: f32, y: f32 },
}

/// Latest pointer position
#[derive(Debug, Default)]
pub struct PointerState {
    packed: AtomicU64,
}

#[inline]
fn pack(x: f32, y: f32) -> u64 {
    ((x.to_bits() as u64) << 32) | y.to_bits() as u64
}

#[inline]
fn unpack(bits: u64) -> Vec2 {
    Vec2::new(f32::from_bits((bits >> 32) as u32), f32::from_bits(bits as u32))
}

impl PointerState {
    /// Pointer starting at `(x, y)`
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            packed: AtomicU64::new(pack(x, y)),
        }
    }

    /// Record a new position
    pub fn set(&self, x: f32, y: f32) {
        self.packed.store(pack(x, y), Ordering::Release);
    }

    pub fn pointer_moved(&self, x: f32, y: f32) {
        self.set(x, y);
    }

    pub fn pointer_dragged(&self, x: f32, y: f32) {
        self.set(x, y);
    }

    /// Feed an input event
    pub fn apply(&self, event: PointerEvent) {
        match event {
            PointerEvent::Moved { x, y } => self.pointer_moved(x, y),
            PointerEvent::Dragged { x, y } => self.pointer_dragged(x, y),
        }
    }

    /// Most recent position visible at the time of the call
    pub fn snapshot(&self) -> Vec2 {
        unpack(self.packed.load(Ordering::Acquire))
    }
}
