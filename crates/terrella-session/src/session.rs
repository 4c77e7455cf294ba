//! The capture session state machine.

use crate::error::SessionError;
use crate::frame::CapturedFrame;

/// Boxed error type returned by [`FrameSink`] implementations.
pub type SinkError = Box<dyn std::error::Error + Send + Sync>;

/// Where a capture session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapturePhase {
    /// Frames are being appended each host frame.
    Recording,
    /// The duration threshold has passed; the host should finalize.
    Finalizing,
    /// Frames have been handed to the sink; the host loop should stop.
    Done,
}

/// Consumer of a finished capture, typically a video encoder.
///
/// Encoding itself is an external collaborator's concern; the session only
/// guarantees the sink sees every recorded frame exactly once, in order.
pub trait FrameSink {
    /// Encode the captured frames at the given frame rate.
    fn encode(&mut self, frames: &[CapturedFrame], fps: u32) -> Result<(), SinkError>;
}

/// Owns the captured frames and the `Recording -> Finalizing -> Done`
/// lifecycle for one recording run.
#[derive(Debug)]
pub struct CaptureSession {
    phase: CapturePhase,
    frames: Vec<CapturedFrame>,
    duration_seconds: f64,
    fps: u32,
}

impl Default for CaptureSession {
    /// Twenty seconds of capture at 60 frames per second.
    fn default() -> Self {
        Self::new(20.0, 60)
    }
}

impl CaptureSession {
    /// Create a session that records until `duration_seconds` of host time
    /// has elapsed, tagging the capture with the given frame rate.
    pub fn new(duration_seconds: f64, fps: u32) -> Self {
        Self {
            phase: CapturePhase::Recording,
            frames: Vec::new(),
            duration_seconds,
            fps,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> CapturePhase {
        self.phase
    }

    /// Whether the host loop should stop.
    pub fn is_done(&self) -> bool {
        self.phase == CapturePhase::Done
    }

    /// Number of frames recorded so far.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// The frame rate the capture will be encoded at.
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// The recorded frames, in capture order.
    pub fn frames(&self) -> &[CapturedFrame] {
        &self.frames
    }

    /// Record one frame at the given elapsed host time.
    ///
    /// The frame is appended first and the threshold checked after, so the
    /// frame that crosses the threshold is still part of the capture. Once
    /// the threshold passes, the returned phase is `Finalizing` and further
    /// `record` calls are errors.
    pub fn record(
        &mut self,
        frame: CapturedFrame,
        elapsed_seconds: f64,
    ) -> Result<CapturePhase, SessionError> {
        if self.phase != CapturePhase::Recording {
            return Err(SessionError::Phase {
                action: "record a frame",
                expected: CapturePhase::Recording,
                actual: self.phase,
            });
        }
        self.frames.push(frame);
        if elapsed_seconds > self.duration_seconds {
            self.phase = CapturePhase::Finalizing;
            tracing::info!(
                frames = self.frames.len(),
                elapsed_seconds,
                "capture window elapsed, ready to finalize"
            );
        }
        Ok(self.phase)
    }

    /// Hand the recorded frames to the sink and finish the session.
    ///
    /// Only legal while `Finalizing`. On sink failure the session stays
    /// `Finalizing` so the host may retry with a fallback sink.
    pub fn finalize(&mut self, sink: &mut dyn FrameSink) -> Result<(), SessionError> {
        if self.phase != CapturePhase::Finalizing {
            return Err(SessionError::Phase {
                action: "finalize",
                expected: CapturePhase::Finalizing,
                actual: self.phase,
            });
        }
        sink.encode(&self.frames, self.fps).map_err(SessionError::Sink)?;
        self.phase = CapturePhase::Done;
        tracing::info!(frames = self.frames.len(), fps = self.fps, "capture finalized");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> CapturedFrame {
        CapturedFrame::from_rgba8(2, 2, vec![0; 16]).unwrap()
    }

    /// Records every encode call without encoding anything.
    #[derive(Default)]
    struct CountingSink {
        calls: Vec<(usize, u32)>,
    }

    impl FrameSink for CountingSink {
        fn encode(&mut self, frames: &[CapturedFrame], fps: u32) -> Result<(), SinkError> {
            self.calls.push((frames.len(), fps));
            Ok(())
        }
    }

    struct FailingSink;

    impl FrameSink for FailingSink {
        fn encode(&mut self, _frames: &[CapturedFrame], _fps: u32) -> Result<(), SinkError> {
            Err("disk full".into())
        }
    }

    #[test]
    fn test_frames_accumulate_while_recording() {
        let mut session = CaptureSession::new(10.0, 60);
        for i in 0..5 {
            let phase = session.record(frame(), i as f64).unwrap();
            assert_eq!(phase, CapturePhase::Recording);
        }
        assert_eq!(session.frame_count(), 5);
    }

    #[test]
    fn test_threshold_crossing_frame_is_recorded() {
        let mut session = CaptureSession::new(1.0, 60);
        session.record(frame(), 0.5).unwrap();
        let phase = session.record(frame(), 1.5).unwrap();
        assert_eq!(phase, CapturePhase::Finalizing);
        // The crossing frame itself is part of the capture.
        assert_eq!(session.frame_count(), 2);
    }

    #[test]
    fn test_threshold_is_strictly_greater() {
        let mut session = CaptureSession::new(1.0, 60);
        let phase = session.record(frame(), 1.0).unwrap();
        assert_eq!(phase, CapturePhase::Recording);
    }

    #[test]
    fn test_recording_after_threshold_is_an_error() {
        let mut session = CaptureSession::new(0.0, 60);
        session.record(frame(), 1.0).unwrap();
        let err = session.record(frame(), 2.0).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Phase {
                expected: CapturePhase::Recording,
                actual: CapturePhase::Finalizing,
                ..
            }
        ));
    }

    #[test]
    fn test_finalize_hands_all_frames_to_sink() {
        let mut session = CaptureSession::new(1.0, 30);
        session.record(frame(), 0.1).unwrap();
        session.record(frame(), 0.2).unwrap();
        session.record(frame(), 2.0).unwrap();

        let mut sink = CountingSink::default();
        session.finalize(&mut sink).unwrap();
        assert_eq!(sink.calls, vec![(3, 30)]);
        assert!(session.is_done());
    }

    #[test]
    fn test_finalize_before_threshold_is_an_error() {
        let mut session = CaptureSession::new(10.0, 60);
        session.record(frame(), 0.1).unwrap();
        let mut sink = CountingSink::default();
        let err = session.finalize(&mut sink).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Phase {
                expected: CapturePhase::Finalizing,
                actual: CapturePhase::Recording,
                ..
            }
        ));
        assert!(sink.calls.is_empty());
    }

    #[test]
    fn test_sink_failure_leaves_session_finalizing() {
        let mut session = CaptureSession::new(0.0, 60);
        session.record(frame(), 1.0).unwrap();

        let err = session.finalize(&mut FailingSink).unwrap_err();
        assert!(matches!(err, SessionError::Sink(_)));
        assert_eq!(session.phase(), CapturePhase::Finalizing);

        // A fallback sink can still complete the session.
        let mut fallback = CountingSink::default();
        session.finalize(&mut fallback).unwrap();
        assert!(session.is_done());
    }

    #[test]
    fn test_finalize_twice_is_an_error() {
        let mut session = CaptureSession::new(0.0, 60);
        session.record(frame(), 1.0).unwrap();
        let mut sink = CountingSink::default();
        session.finalize(&mut sink).unwrap();
        let err = session.finalize(&mut sink).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Phase {
                actual: CapturePhase::Done,
                ..
            }
        ));
        assert_eq!(sink.calls.len(), 1);
    }

    #[test]
    fn test_default_matches_capture_window() {
        let session = CaptureSession::default();
        assert_eq!(session.fps(), 60);
        assert_eq!(session.phase(), CapturePhase::Recording);
        assert_eq!(session.frame_count(), 0);
    }
}
