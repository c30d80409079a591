//! Math utilities and types
//!
//! Provides the matrix and vector types used by the transform stack, the camera
//! controller and the scene assembler. All matrices follow the column-vector,
//! GL-style conventions of the immediate-mode pipeline the scene was designed for.

pub use nalgebra::{Matrix4, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Rotation angle (degrees, within one turn) reached after `time` seconds at `rps`
    ///
    /// The product is reduced in `f64` before narrowing, so angles stay exact
    /// however long the simulation has been running.
    pub fn spin_deg(rps: f32, time: f64) -> f32 {
        ((f64::from(rps) * 360.0 * time) % 360.0) as f32
    }

    /// Linear interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// Component-wise mix of two triples: `(1 - s) * u + s * v`
    ///
    /// `s` is not restricted to `[0, 1]`; values outside extrapolate.
    pub fn mix3(u: [f32; 3], v: [f32; 3], s: f32) -> [f32; 3] {
        [lerp(u[0], v[0], s), lerp(u[1], v[1], s), lerp(u[2], v[2], s)]
    }
}

/// Extension trait for Mat4 with the constructors the scene hierarchy uses
///
/// Angles are taken in degrees, matching the way every module of the scene
/// describes its local rotations.
pub trait Mat4Ext {
    /// Rotation around the X axis (degrees)
    fn rotation_x_deg(degrees: f32) -> Mat4;

    /// Rotation around the Y axis (degrees)
    fn rotation_y_deg(degrees: f32) -> Mat4;

    /// Rotation around the Z axis (degrees)
    fn rotation_z_deg(degrees: f32) -> Mat4;

    /// Translation by `(x, y, z)`
    fn translation(x: f32, y: f32, z: f32) -> Mat4;

    /// Non-uniform scale by `(x, y, z)`
    fn scaling(x: f32, y: f32, z: f32) -> Mat4;

    /// GL-convention orthographic projection
    fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4;

    /// GL-convention perspective projection, vertical field of view in degrees
    fn perspective_deg(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Mat4;

    /// Right-handed look-at view matrix
    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn rotation_x_deg(degrees: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::x_axis(), utils::deg_to_rad(degrees))
    }

    fn rotation_y_deg(degrees: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::y_axis(), utils::deg_to_rad(degrees))
    }

    fn rotation_z_deg(degrees: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::z_axis(), utils::deg_to_rad(degrees))
    }

    fn translation(x: f32, y: f32, z: f32) -> Mat4 {
        Mat4::new_translation(&Vec3::new(x, y, z))
    }

    fn scaling(x: f32, y: f32, z: f32) -> Mat4 {
        Mat4::new_nonuniform_scaling(&Vec3::new(x, y, z))
    }

    fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
        Mat4::new_orthographic(left, right, bottom, top, near, far)
    }

    fn perspective_deg(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::new_perspective(aspect, utils::deg_to_rad(fov_y_degrees), near, far)
    }

    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        Mat4::look_at_rh(&Point3::from(eye), &Point3::from(target), &up)
    }
}

/// Transform a point by a homogeneous matrix and drop the `w` component
pub fn transform_point(matrix: &Mat4, point: Vec3) -> Vec3 {
    matrix.transform_point(&Point3::from(point)).coords
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_rotation_y_quarter_turn() {
        let rotated = transform_point(&Mat4::rotation_y_deg(90.0), Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(rotated, Vec3::new(0.0, 0.0, -1.0), epsilon = EPSILON);
    }

    #[test]
    fn test_rotation_x_quarter_turn() {
        let rotated = transform_point(&Mat4::rotation_x_deg(90.0), Vec3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(rotated, Vec3::new(0.0, 0.0, 1.0), epsilon = EPSILON);
    }

    #[test]
    fn test_translation_then_scale_order() {
        let m = Mat4::translation(1.0, 2.0, 3.0) * Mat4::scaling(2.0, 2.0, 2.0);
        let p = transform_point(&m, Vec3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(p, Vec3::new(3.0, 4.0, 5.0), epsilon = EPSILON);
    }

    #[test]
    fn test_look_at_moves_eye_to_origin() {
        let eye = Vec3::new(0.0, 0.0, 10.0);
        let view = Mat4::look_at(eye, Vec3::zeros(), Vec3::y());
        assert_relative_eq!(transform_point(&view, eye), Vec3::zeros(), epsilon = EPSILON);
        // Target sits straight ahead, down the negative Z axis
        assert_relative_eq!(
            transform_point(&view, Vec3::zeros()),
            Vec3::new(0.0, 0.0, -10.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_ortho_maps_bounds_to_unit_cube() {
        let proj = Mat4::ortho(-4.0, 4.0, -2.0, 2.0, -6.0, 6.0);
        let corner = transform_point(&proj, Vec3::new(4.0, 2.0, 0.0));
        assert_relative_eq!(corner.x, 1.0, epsilon = EPSILON);
        assert_relative_eq!(corner.y, 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_spin_deg_wraps_within_a_turn() {
        assert_relative_eq!(utils::spin_deg(3.0, 0.25), 270.0, epsilon = EPSILON);
        assert_relative_eq!(utils::spin_deg(-3.0, 0.25), -270.0, epsilon = EPSILON);
        // A week in, the angle is still resolved to a fraction of a degree
        let week = 7.0 * 24.0 * 3600.0;
        assert_relative_eq!(utils::spin_deg(0.1, week + 0.5), 18.0, epsilon = 1e-3);
    }

    #[test]
    fn test_mix3_extrapolates() {
        let mixed = utils::mix3([0.0, 10.0, 20.0], [10.0, 10.0, 0.0], 2.0);
        assert_relative_eq!(mixed[0], 20.0);
        assert_relative_eq!(mixed[1], 10.0);
        assert_relative_eq!(mixed[2], -20.0);
    }
}
