//! Ring of end pillars
//!
//! Six obsidian pillars stand on a ring around the portal, each crowned by a
//! pedestal and a bobbing three-layer crystal whose layers turn at their own
//! rates.

use crate::foundation::math::{utils, Mat4, Mat4Ext};
use crate::render::Primitive;

use super::node::{SceneNode, Shape};
use super::palette::*;

/// Extra yaw of each pillar after it is placed on the ring (degrees)
const PILLAR_TWIST: [f32; PILLAR_COUNT] =
    [0.0, -PILLAR_ROTATION, PILLAR_ROTATION, 0.0, -PILLAR_ROTATION, PILLAR_ROTATION];

/// Build the pillar ring for simulation time `time`
///
/// The group origin sits at half the column height above the ground top.
pub fn pillar_set(time: f64) -> SceneNode {
    let pillars = PILLAR_TWIST
        .iter()
        .enumerate()
        .map(|(index, twist)| {
            SceneNode::group(
                "end_pillar",
                Mat4::rotation_y_deg(PILLAR_ROTATION * index as f32)
                    * Mat4::translation(PILLAR_OFFSET_RADIUS, 0.0, 0.0)
                    * Mat4::rotation_y_deg(*twist),
                vec![obsidian_column(), end_crystal(time)],
            )
        })
        .collect();

    SceneNode::group(
        "pillar_set",
        Mat4::translation(0.0, OBSIDIAN_COLUMN_HEIGHT / 2.0, 0.0),
        pillars,
    )
}

fn obsidian_column() -> SceneNode {
    let outer = Mat4::scaling(OUTER_COLUMN_LENGTH, OBSIDIAN_COLUMN_HEIGHT, OUTER_COLUMN_WIDTH);
    SceneNode::group(
        "obsidian_column",
        Mat4::identity(),
        vec![
            SceneNode::leaf("outer_column", outer, Shape::new(Primitive::Cube, OBSIDIAN_COLOUR)),
            SceneNode::leaf(
                "outer_column",
                Mat4::rotation_y_deg(90.0) * outer,
                Shape::new(Primitive::Cube, OBSIDIAN_COLOUR),
            ),
            SceneNode::leaf(
                "inner_column",
                Mat4::scaling(INNER_COLUMN_EDGE, OBSIDIAN_COLUMN_HEIGHT, INNER_COLUMN_EDGE),
                Shape::new(Primitive::Cube, OBSIDIAN_COLOUR),
            ),
        ],
    )
}

fn end_crystal(time: f64) -> SceneNode {
    let bob = PEDESTAL_HEIGHT * (3.0 + time.cos() as f32) / 2.0 + 3f32.sqrt() * OUTER_CRYSTAL_EDGE / 2.0;

    SceneNode::group(
        "end_crystal",
        Mat4::translation(0.0, OBSIDIAN_COLUMN_HEIGHT / 2.0 + PEDESTAL_BASE_HEIGHT / 2.0, 0.0),
        vec![
            SceneNode::leaf(
                "pedestal_base",
                Mat4::scaling(PEDESTAL_BASE_EDGE, PEDESTAL_BASE_HEIGHT, PEDESTAL_BASE_EDGE),
                Shape::new(Primitive::Cube, STONE_COLOUR),
            ),
            SceneNode::leaf(
                "pedestal_column",
                Mat4::translation(0.0, PEDESTAL_BASE_HEIGHT / 2.0, 0.0)
                    * Mat4::scaling(PEDESTAL_COLUMN_EDGE, PEDESTAL_HEIGHT, PEDESTAL_COLUMN_EDGE),
                Shape::new(Primitive::Cube, STONE_COLOUR),
            ),
            nether_star(time, bob),
        ],
    )
}

fn nether_star(time: f64, height: f32) -> SceneNode {
    let tumble = |rps: f32| {
        let angle = utils::spin_deg(rps, time);
        Mat4::rotation_x_deg(angle) * Mat4::rotation_y_deg(angle) * Mat4::rotation_z_deg(angle)
    };
    let cube = |edge: f32| Mat4::scaling(edge, edge, edge);

    SceneNode::group(
        "nether_star",
        Mat4::translation(0.0, height, 0.0),
        vec![
            SceneNode::leaf(
                "outer_crystal",
                Mat4::rotation_y_deg(utils::spin_deg(OUTER_CRYSTAL_RPS, time))
                    * Mat4::rotation_x_deg(35.0)
                    * Mat4::rotation_z_deg(45.0)
                    * cube(OUTER_CRYSTAL_EDGE),
                Shape::wireframe(Primitive::Cube, CRYSTAL_OUTER_COLOUR),
            ),
            SceneNode::leaf(
                "middle_crystal",
                tumble(MIDDLE_CRYSTAL_RPS) * cube(MIDDLE_CRYSTAL_EDGE),
                Shape::wireframe(Primitive::Cube, CRYSTAL_OUTER_COLOUR),
            ),
            SceneNode::leaf(
                "inner_crystal",
                tumble(INNER_CRYSTAL_RPS) * cube(INNER_CRYSTAL_EDGE),
                Shape::new(Primitive::Cube, CRYSTAL_CORE_COLOUR),
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{transform_point, Vec3};
    use crate::scene::node::{NodeContent, ShapeStyle};
    use approx::assert_relative_eq;

    #[test]
    fn test_six_pillars_of_eight_draws() {
        // 3 column slabs, pedestal base and column, 3 crystal layers
        let set = pillar_set(0.0);
        assert_eq!(set.leaf_count(), PILLAR_COUNT * 8);
    }

    #[test]
    fn test_pillars_stand_on_the_ring() {
        let items = pillar_set(0.0).flatten_from(Mat4::identity()).unwrap();
        let centres: Vec<Vec3> = items
            .iter()
            .filter(|item| item.name == "inner_column")
            .map(|item| transform_point(&item.transform, Vec3::zeros()))
            .collect();

        assert_eq!(centres.len(), PILLAR_COUNT);
        for centre in centres {
            assert_relative_eq!(centre.xz().norm(), PILLAR_OFFSET_RADIUS, epsilon = 1e-3);
            assert_relative_eq!(centre.y, OBSIDIAN_COLUMN_HEIGHT / 2.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_crystal_bobs_with_time() {
        let height = |time: f64| {
            let items = pillar_set(time).flatten_from(Mat4::identity()).unwrap();
            let core = items.iter().find(|item| item.name == "inner_crystal").unwrap();
            transform_point(&core.transform, Vec3::zeros()).y
        };
        // cos swings the crystal by one pedestal height between t=0 and t=pi
        assert_relative_eq!(height(0.0) - height(std::f64::consts::PI), PEDESTAL_HEIGHT, epsilon = 1e-3);
    }

    #[test]
    fn test_outer_layers_are_always_wireframe() {
        let star = nether_star(0.0, 0.0);
        assert_eq!(star.find("outer_crystal").map(style_of), Some(ShapeStyle::AlwaysWireframe));
        assert_eq!(star.find("middle_crystal").map(style_of), Some(ShapeStyle::AlwaysWireframe));
        assert_eq!(star.find("inner_crystal").map(style_of), Some(ShapeStyle::FollowMode));
    }

    fn style_of(node: &SceneNode) -> ShapeStyle {
        match &node.content {
            NodeContent::Shape(shape) => shape.style,
            NodeContent::Children(_) => panic!("not a leaf"),
        }
    }
}
