//! Model, view and projection matrices used by the lessons.

use glam::{Mat4, Vec3};

pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;

/// Width over height, with a zero height (a minimised window) treated as one pixel.
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width as f32 / height.max(1) as f32
}

/// Perspective projection with the given vertical field of view.
pub fn projection(fov_degrees: f32, aspect: f32) -> Mat4 {
    Mat4::perspective_rh_gl(fov_degrees.to_radians(), aspect, NEAR_PLANE, FAR_PLANE)
}

/// The camera sits three units in front of the origin, so the scene moves back instead.
pub fn camera_view() -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.0, -3.0))
}

/// A cube at the origin turning 50 degrees per second.
pub fn spinning_cube(time: f32) -> Mat4 {
    Mat4::from_axis_angle(
        Vec3::new(0.5, 1.0, 0.0).normalize(),
        time * 50.0f32.to_radians(),
    )
}

/// Model matrix of the `index`th cube: moved to `position`, tilted by 20 degrees per index.
pub fn cube_model(index: usize, position: Vec3) -> Mat4 {
    let angle = (20.0 * index as f32).to_radians();
    Mat4::from_translation(position)
        * Mat4::from_axis_angle(Vec3::new(1.0, 0.3, 0.5).normalize(), angle)
}

/// A quad moved to the bottom right corner, turning one radian per second.
pub fn spinning_quad(time: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.5, -0.5, 0.0)) * Mat4::from_rotation_z(time)
}

/// Oscillates between 0 and 1.
pub fn pulse(time: f32) -> f32 {
    time.sin() / 2.0 + 0.5
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        a.abs_diff_eq(b, 1e-4)
    }

    #[test]
    fn test_aspect_ratio() {
        assert_eq!(aspect_ratio(800, 600), 800.0 / 600.0);
        assert_eq!(aspect_ratio(800, 0), 800.0);
    }

    #[test]
    fn test_first_cube_is_untransformed() {
        assert_eq!(cube_model(0, Vec3::ZERO), Mat4::IDENTITY);
    }

    #[test]
    fn test_cube_model_translates_after_rotating() {
        let position = Vec3::new(2.0, 5.0, -15.0);
        let model = cube_model(1, position);
        assert!(approx(model.transform_point3(Vec3::ZERO), position));
        // The rotation axis is left in place by the rotation.
        let axis = Vec3::new(1.0, 0.3, 0.5).normalize();
        assert!(approx(model.transform_vector3(axis), axis));
    }

    #[test]
    fn test_camera_view() {
        let view = camera_view();
        assert!(approx(
            view.transform_point3(Vec3::ZERO),
            Vec3::new(0.0, 0.0, -3.0)
        ));
    }

    #[test]
    fn test_projection_depth_range() {
        let proj = projection(45.0, 800.0 / 600.0);
        let near = proj * Vec4::new(0.0, 0.0, -NEAR_PLANE, 1.0);
        let far = proj * Vec4::new(0.0, 0.0, -FAR_PLANE, 1.0);
        assert!((near.z / near.w + 1.0).abs() < 1e-4);
        assert!((far.z / far.w - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_spinning_cube() {
        assert_eq!(spinning_cube(0.0), Mat4::IDENTITY);
        // After 7.2 seconds the cube has made one full turn.
        let turned = spinning_cube(7.2).transform_vector3(Vec3::X);
        assert!(approx(turned, Vec3::X));
    }

    #[test]
    fn test_spinning_quad() {
        let quad = spinning_quad(std::f32::consts::FRAC_PI_2);
        assert!(approx(
            quad.transform_point3(Vec3::new(0.5, 0.0, 0.0)),
            Vec3::new(0.5, 0.0, 0.0)
        ));
    }

    #[test]
    fn test_pulse_range() {
        assert_eq!(pulse(0.0), 0.5);
        for i in 0..100 {
            let value = pulse(i as f32 * 0.37);
            assert!((0.0..=1.0).contains(&value));
        }
    }
}
