//! End portal: central pillar, black screen, four-fold border and the egg on top

use crate::foundation::math::{Mat4, Mat4Ext};
use crate::render::Primitive;

use super::node::{SceneNode, Shape};
use super::palette::*;

/// Build the portal, origin at half the border height above the ground top
pub fn end_portal() -> SceneNode {
    let borders = (0..4)
        .map(|quarter| border_module(Mat4::rotation_y_deg(90.0 * quarter as f32)))
        .collect();

    SceneNode::group(
        "end_portal",
        Mat4::translation(0.0, PORTAL_BORDER_HEIGHT / 2.0, 0.0),
        vec![
            SceneNode::leaf(
                "portal_pillar",
                Mat4::translation(0.0, PORTAL_PILLAR_HEIGHT / 2.0, 0.0)
                    * Mat4::scaling(PORTAL_PILLAR_EDGE, PORTAL_PILLAR_HEIGHT, PORTAL_PILLAR_EDGE),
                Shape::new(Primitive::Cube, STONE_COLOUR),
            ),
            SceneNode::leaf(
                "portal_screen",
                Mat4::scaling(PORTAL_SCREEN_EDGE, PORTAL_SCREEN_HEIGHT, PORTAL_SCREEN_EDGE),
                Shape::new(Primitive::Cube, PORTAL_SCREEN_COLOUR),
            ),
            SceneNode::group("portal_border", Mat4::identity(), borders),
            SceneNode::leaf(
                "dragon_egg",
                Mat4::translation(0.0, PORTAL_PILLAR_HEIGHT + DRAGON_EGG_HEIGHT / 2.0, 0.0)
                    * Mat4::scaling(DRAGON_EGG_RADIUS, DRAGON_EGG_HEIGHT, DRAGON_EGG_RADIUS),
                Shape::new(Primitive::Sphere, OBSIDIAN_COLOUR),
            ),
        ],
    )
}

fn border_module(side: Mat4) -> SceneNode {
    SceneNode::group(
        "border_module",
        side * Mat4::translation(0.0, 0.0, PORTAL_SCREEN_EDGE / 2.0 + PORTAL_BORDER_WIDTH / 2.0),
        vec![
            SceneNode::leaf(
                "portal_edge",
                Mat4::scaling(PORTAL_BORDER_EDGE_LENGTH, PORTAL_BORDER_HEIGHT, PORTAL_BORDER_WIDTH),
                Shape::new(Primitive::Cube, STONE_COLOUR),
            ),
            SceneNode::leaf(
                "portal_corner",
                Mat4::translation(
                    PORTAL_BORDER_EDGE_LENGTH / 2.0 + PORTAL_BORDER_CORNER_LENGTH / 2.0,
                    0.0,
                    -PORTAL_BORDER_WIDTH,
                ) * Mat4::scaling(PORTAL_BORDER_CORNER_LENGTH, PORTAL_BORDER_HEIGHT, PORTAL_BORDER_WIDTH),
                Shape::new(Primitive::Cube, STONE_COLOUR),
            ),
        ],
    )
}
