//! Last-in-first-out stack of composed transforms
//!
//! The top of the stack is the active model-view transform. `push` saves it,
//! `compose` right-multiplies it in place and `pop` restores the saved copy.
//! The bottom frame (seeded once per frame with the view matrix) can never be
//! popped.

use thiserror::Error;

use crate::foundation::math::Mat4;

/// Transform stack usage errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformStackError {
    /// `pop` was called with only the base frame left
    #[error("transform stack underflow: pop with only the base frame left")]
    Underflow,
}

/// Stack of 4x4 transforms with save/restore semantics
#[derive(Debug, Clone)]
pub struct TransformStack {
    frames: Vec<Mat4>,
}

impl TransformStack {
    /// Create a stack holding a single identity frame
    pub fn new() -> Self {
        Self::with_base(Mat4::identity())
    }

    /// Create a stack holding a single frame `base`
    pub fn with_base(base: Mat4) -> Self {
        Self { frames: vec![base] }
    }

    /// Replace the whole stack with a single frame `base`
    pub fn set_base(&mut self, base: Mat4) {
        self.frames.clear();
        self.frames.push(base);
    }

    /// Duplicate the top frame
    pub fn push(&mut self) {
        let top = *self.current();
        self.frames.push(top);
    }

    /// Discard the top frame and restore the one beneath it
    pub fn pop(&mut self) -> Result<(), TransformStackError> {
        if self.frames.len() <= 1 {
            log::error!("Transform stack underflow");
            return Err(TransformStackError::Underflow);
        }
        self.frames.pop();
        Ok(())
    }

    /// The active composed transform
    pub fn current(&self) -> &Mat4 {
        // frames is never empty: construction and set_base leave one frame, pop keeps it
        &self.frames[self.frames.len() - 1]
    }

    /// Right-multiply the top frame by `transform`
    pub fn compose(&mut self, transform: &Mat4) {
        let last = self.frames.len() - 1;
        self.frames[last] *= transform;
    }

    /// Number of frames, including the base frame
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}
