//! GPU-ready uniform block for a single draw call

use bytemuck::{Pod, Zeroable};

use super::Colour;
use crate::foundation::math::Mat4;

/// Per-draw uniform data
///
/// Matrices are column-major, matching what a GL/Vulkan shader expects.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct DrawUniforms {
    /// Model-view matrix
    pub model_view: [[f32; 4]; 4],
    /// Projection matrix
    pub projection: [[f32; 4]; 4],
    /// RGB colour normalised to 0..1, alpha fixed at 1
    pub colour: [f32; 4],
}

impl DrawUniforms {
    /// Build the block from matrices and a 0..255 colour
    pub fn new(model_view: &Mat4, projection: &Mat4, colour: Colour) -> Self {
        let [r, g, b] = colour.normalized();
        Self {
            model_view: (*model_view).into(),
            projection: (*projection).into(),
            colour: [r, g, b, 1.0],
        }
    }

    /// Raw bytes for buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
