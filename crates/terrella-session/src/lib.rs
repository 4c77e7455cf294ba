//! Frame-capture session for the host render loop.
//!
//! The host passes an owned [`CaptureSession`] into its per-frame callback.
//! Frames accumulate while the session is `Recording`; once the configured
//! duration elapses the session flips to `Finalizing`, the host hands the
//! frames to a [`FrameSink`] (the encode step lives outside this crate), and
//! `Done` tells the loop to stop. No global state, and no
//! process-terminating action from inside a callback.

mod error;
mod frame;
mod session;

pub use error::{FrameError, SessionError};
pub use frame::CapturedFrame;
pub use session::{CapturePhase, CaptureSession, FrameSink, SinkError};
