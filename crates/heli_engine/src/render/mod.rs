//! Renderer collaborator interface
//!
//! The engine never talks to a GPU. It hands fully-resolved [`DrawCall`]s to a
//! [`Renderer`] implementation, which owns primitive meshes, shader programs
//! and the frame buffer.

pub mod camera;
pub mod recording;
pub mod uniforms;

use thiserror::Error;

use crate::foundation::math::Mat4;

pub use camera::{CameraController, CameraMode, CameraParameters, ParameterRange};
pub use recording::RecordingRenderer;
pub use uniforms::DrawUniforms;

/// Result type for renderer operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors reported by renderer implementations
#[derive(Error, Debug)]
pub enum RenderError {
    /// Backend-specific failure
    #[error("Renderer backend error: {0}")]
    Backend(String),
}

/// Primitive meshes the renderer knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Unit sphere
    Sphere,
    /// Unit cube
    Cube,
    /// Unit cylinder
    Cylinder,
}

/// How a primitive is rasterised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DrawMode {
    /// Edges only
    #[default]
    Wireframe,
    /// Filled triangles
    Filled,
}

/// Flat RGB colour, 0..255 per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Colour {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Colour {
    /// Create a colour from 0..255 channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a colour from unbounded 0..255-scale channels, clamping each one
    pub fn from_unclamped(channels: [f32; 3]) -> Self {
        let clamp = |value: f32| value.round().clamp(0.0, 255.0) as u8;
        Self::rgb(clamp(channels[0]), clamp(channels[1]), clamp(channels[2]))
    }

    /// Channels as floats on the 0..255 scale
    pub fn to_array(self) -> [f32; 3] {
        [f32::from(self.r), f32::from(self.g), f32::from(self.b)]
    }

    /// Channels normalised to 0..1
    pub fn normalized(self) -> [f32; 3] {
        let [r, g, b] = self.to_array();
        [r / 255.0, g / 255.0, b / 255.0]
    }
}

/// A single draw request
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    /// Mesh to draw
    pub primitive: Primitive,
    /// Rasterisation mode
    pub mode: DrawMode,
    /// Model-view matrix (view already applied)
    pub model_view: Mat4,
    /// Projection matrix for this frame
    pub projection: Mat4,
    /// Flat colour
    pub colour: Colour,
}

impl DrawCall {
    /// Pack this call's uniforms for upload
    pub fn uniforms(&self) -> DrawUniforms {
        DrawUniforms::new(&self.model_view, &self.projection, self.colour)
    }
}

/// Renderer collaborator
///
/// Called once per frame as `begin_frame`, any number of `draw`s, then `end_frame`.
pub trait Renderer {
    /// Clear the colour and depth buffers
    fn begin_frame(&mut self) -> RenderResult<()>;

    /// Issue one draw call
    fn draw(&mut self, call: &DrawCall) -> RenderResult<()>;

    /// Finish the frame
    fn end_frame(&mut self) -> RenderResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colour_clamps_out_of_range_channels() {
        let colour = Colour::from_unclamped([-40.0, 127.6, 400.0]);
        assert_eq!(colour, Colour::rgb(0, 128, 255));
    }

    #[test]
    fn test_draw_call_packs_its_uniforms() {
        use crate::foundation::math::Mat4Ext;

        let call = DrawCall {
            primitive: Primitive::Cube,
            mode: DrawMode::Filled,
            model_view: Mat4::translation(4.0, -2.0, 0.5),
            projection: Mat4::scaling(2.0, 3.0, 4.0),
            colour: Colour::rgb(0, 51, 255),
        };
        let uniforms = call.uniforms();

        assert_eq!(uniforms.model_view[3], [4.0, -2.0, 0.5, 1.0]);
        assert_eq!(uniforms.projection[1], [0.0, 3.0, 0.0, 0.0]);
        assert_eq!(uniforms.colour[3], 1.0);
        assert!((uniforms.colour[1] - 0.2).abs() < 1e-6);
        assert_eq!(uniforms.as_bytes().len(), std::mem::size_of::<DrawUniforms>());
    }

    #[test]
    fn test_colour_normalized() {
        let [r, g, b] = Colour::rgb(255, 0, 51).normalized();
        assert!((r - 1.0).abs() < 1e-6);
        assert!(g.abs() < 1e-6);
        assert!((b - 0.2).abs() < 1e-6);
    }
}
