//! Capture session error types.

use crate::session::{CapturePhase, SinkError};

/// Errors from constructing a captured frame.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// A frame must be at least one pixel in each dimension.
    #[error("frame dimensions must be at least 1x1, got {width}x{height}")]
    EmptyDimensions {
        /// Reported width in pixels.
        width: u32,
        /// Reported height in pixels.
        height: u32,
    },

    /// The byte buffer does not match `width * height * 4`.
    #[error("frame data length mismatch: expected {expected} bytes, got {actual}")]
    DataLength {
        /// Expected byte count for the given dimensions.
        expected: usize,
        /// Actual byte count supplied.
        actual: usize,
    },
}

/// Errors from driving a capture session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// An operation was attempted in the wrong phase.
    #[error("cannot {action} while the session is {actual:?} (requires {expected:?})")]
    Phase {
        /// The attempted operation.
        action: &'static str,
        /// The phase the operation requires.
        expected: CapturePhase,
        /// The session's current phase.
        actual: CapturePhase,
    },

    /// The frame sink failed to encode the captured frames.
    #[error("frame sink failed: {0}")]
    Sink(#[source] SinkError),
}
