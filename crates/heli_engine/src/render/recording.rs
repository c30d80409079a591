//! In-memory renderer that records draw calls
//!
//! Useful headless: tests inspect the recorded frame and the demo binary
//! summarises it.

use super::{DrawCall, Primitive, RenderResult, Renderer};

/// Renderer that keeps the draw calls of the most recent frame
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    calls: Vec<DrawCall>,
    frames_begun: u64,
    frames_finished: u64,
}

impl RecordingRenderer {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls of the current (or last finished) frame
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Number of recorded calls drawing `primitive`
    pub fn count(&self, primitive: Primitive) -> usize {
        self.calls.iter().filter(|call| call.primitive == primitive).count()
    }

    /// Number of `begin_frame` calls so far
    pub fn frames_begun(&self) -> u64 {
        self.frames_begun
    }

    /// Number of `end_frame` calls so far
    pub fn frames_finished(&self) -> u64 {
        self.frames_finished
    }
}

impl Renderer for RecordingRenderer {
    fn begin_frame(&mut self) -> RenderResult<()> {
        self.calls.clear();
        self.frames_begun += 1;
        Ok(())
    }

    fn draw(&mut self, call: &DrawCall) -> RenderResult<()> {
        log::trace!("draw {:?} {:?} {:?}", call.primitive, call.mode, call.colour);
        self.calls.push(call.clone());
        Ok(())
    }

    fn end_frame(&mut self) -> RenderResult<()> {
        self.frames_finished += 1;
        Ok(())
    }
}
