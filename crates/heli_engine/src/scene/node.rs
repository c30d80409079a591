//! Explicit scene hierarchy
//!
//! Every visual module is a [`SceneNode`]: a local transform plus either a
//! leaf [`Shape`] or a list of children. Flattening walks the tree depth-first
//! on a [`TransformStack`], so each leaf ends up with the same composed
//! transform an immediate-mode push/compose/pop traversal would produce.

use crate::foundation::math::Mat4;
use crate::render::{Colour, DrawMode, Primitive};

use super::transform_stack::{TransformStack, TransformStackError};

/// How a leaf picks its draw mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeStyle {
    /// Use the global draw mode
    #[default]
    FollowMode,
    /// Always draw edges only
    AlwaysWireframe,
}

/// Leaf draw descriptor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    /// Mesh to draw
    pub primitive: Primitive,
    /// Flat colour
    pub colour: Colour,
    /// Draw mode selection
    pub style: ShapeStyle,
}

impl Shape {
    /// Shape that follows the global draw mode
    pub fn new(primitive: Primitive, colour: Colour) -> Self {
        Self { primitive, colour, style: ShapeStyle::FollowMode }
    }

    /// Shape that ignores the global draw mode and stays wireframe
    pub fn wireframe(primitive: Primitive, colour: Colour) -> Self {
        Self { primitive, colour, style: ShapeStyle::AlwaysWireframe }
    }

    /// Draw mode this shape uses when the global mode is `global`
    pub fn resolve_mode(&self, global: DrawMode) -> DrawMode {
        match self.style {
            ShapeStyle::FollowMode => global,
            ShapeStyle::AlwaysWireframe => DrawMode::Wireframe,
        }
    }
}

/// Payload of a node
#[derive(Debug, Clone, PartialEq)]
pub enum NodeContent {
    /// A single draw
    Shape(Shape),
    /// Nested modules
    Children(Vec<SceneNode>),
}

/// Node of the scene hierarchy
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Module name, used in logs and tests
    pub name: &'static str,
    /// Transform relative to the parent
    pub local: Mat4,
    /// Leaf or children
    pub content: NodeContent,
}

/// A flattened leaf: composed transform plus draw descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct SceneItem {
    /// Name of the leaf module
    pub name: &'static str,
    /// Base frame times every local transform from the root down to this leaf
    pub transform: Mat4,
    /// What to draw
    pub shape: Shape,
}

impl SceneNode {
    /// Leaf node
    pub fn leaf(name: &'static str, local: Mat4, shape: Shape) -> Self {
        Self { name, local, content: NodeContent::Shape(shape) }
    }

    /// Group node
    pub fn group(name: &'static str, local: Mat4, children: Vec<SceneNode>) -> Self {
        Self { name, local, content: NodeContent::Children(children) }
    }

    /// Number of leaves below (and including) this node
    pub fn leaf_count(&self) -> usize {
        match &self.content {
            NodeContent::Shape(_) => 1,
            NodeContent::Children(children) => children.iter().map(SceneNode::leaf_count).sum(),
        }
    }

    /// Find the first node called `name`, depth-first
    pub fn find(&self, name: &str) -> Option<&SceneNode> {
        if self.name == name {
            return Some(self);
        }
        match &self.content {
            NodeContent::Shape(_) => None,
            NodeContent::Children(children) => children.iter().find_map(|child| child.find(name)),
        }
    }

    /// Flatten this subtree into `out`, composing on top of `stack`
    ///
    /// The stack is left at the depth it had on entry.
    pub fn flatten(
        &self,
        stack: &mut TransformStack,
        out: &mut Vec<SceneItem>,
    ) -> Result<(), TransformStackError> {
        stack.push();
        stack.compose(&self.local);

        match &self.content {
            NodeContent::Shape(shape) => out.push(SceneItem {
                name: self.name,
                transform: *stack.current(),
                shape: *shape,
            }),
            NodeContent::Children(children) => {
                for child in children {
                    child.flatten(stack, out)?;
                }
            }
        }

        stack.pop()
    }

    /// Flatten the whole tree on top of `base`
    pub fn flatten_from(&self, base: Mat4) -> Result<Vec<SceneItem>, TransformStackError> {
        let mut stack = TransformStack::with_base(base);
        let mut items = Vec::with_capacity(self.leaf_count());

        self.flatten(&mut stack, &mut items)?;
        debug_assert_eq!(stack.depth(), 1, "unbalanced scene traversal");

        Ok(items)
    }
}
