use glam::{Mat4, Vec3};

use crate::{
    foundation::core::SourceExtent,
    transform::params::{CameraMode, TransformParameters},
};

/// Far clip plane distance, `2^21`.
///
/// Reciprocal powers of two keep floating-point depth precision maximal
/// across the whole working range.
pub const FAR_Z: f32 = 2_097_152.0;

/// Near clip plane distance for the perspective camera, `1 / 2^21`.
pub const NEAR_Z: f32 = 1.0 / FAR_Z;

/// Pixel-space orthographic projection used while capturing the upstream
/// layer: `x` in `[0, width]`, `y` in `[0, height]` top-down, depth `[-1, 1]`.
pub fn capture_projection(extent: SourceExtent) -> Mat4 {
    Mat4::orthographic_rh_gl(
        0.0,
        extent.width as f32,
        extent.height as f32,
        0.0,
        -1.0,
        1.0,
    )
}

/// Scene projection for the transform pass.
///
/// Orthographic: the fixed `[-1, 1]` box (top-down like the capture
/// projection) with depth `±FAR_Z`. Perspective: the configured vertical
/// field of view over the native aspect ratio with `NEAR_Z`/`FAR_Z` planes,
/// composed with a unit back-translation so the quad's rest plane sits at
/// depth 1.
pub fn scene_projection(params: &TransformParameters, extent: SourceExtent) -> Mat4 {
    match params.camera_mode {
        CameraMode::Orthographic => {
            Mat4::orthographic_rh_gl(-1.0, 1.0, 1.0, -1.0, -FAR_Z, FAR_Z)
        }
        CameraMode::Perspective => {
            let aspect = extent.clamped_nonzero().aspect() as f32;
            Mat4::perspective_rh_gl(params.field_of_view.to_radians(), aspect, NEAR_Z, FAR_Z)
                * Mat4::from_translation(Vec3::new(0.0, 0.0, -1.0))
        }
    }
}
