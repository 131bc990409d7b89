//! Render loop errors

use thiserror::Error;

/// Errors from render loop lifecycle calls
#[derive(Debug, Error)]
pub enum LoopError {
    /// `start` while the loop is already running
    #[error("render loop is already running")]
    AlreadyRunning,

    /// `stop` while the loop is not running
    #[error("render loop is not running")]
    NotRunning,

    /// The render thread exited without handing its state back (it panicked)
    #[error("render thread terminated without acknowledging stop")]
    WorkerLost,

    /// The OS refused to spawn the render thread
    #[error("failed to spawn render thread: {0}")]
    Spawn(#[from] std::io::Error),
}
