//! Scene hierarchy
//!
//! The transform stack, the node tree that is flattened on it, and the
//! modules that make up the scene: ground, helicopter rig, end pillars,
//! end portal and orbs.

pub mod assembler;
pub mod helicopter;
pub mod node;
pub mod palette;
pub mod pillars;
pub mod portal;
pub mod transform_stack;

pub use assembler::SceneAssembler;
pub use helicopter::CraftPose;
pub use node::{NodeContent, SceneItem, SceneNode, Shape, ShapeStyle};
pub use transform_stack::{TransformStack, TransformStackError};
