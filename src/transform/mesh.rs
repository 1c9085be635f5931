use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};

use crate::{
    foundation::core::SourceExtent,
    transform::params::{CameraMode, TransformParameters},
};

/// The stage only moves geometry, never tints it.
const OPAQUE_WHITE: u32 = 0xFFFF_FFFF;

/// One quad vertex in GPU-uploadable layout.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vertex {
    /// Transformed position.
    pub position: Vec3,
    /// Packed RGBA color; always opaque white.
    pub color: u32,
    /// Texture coordinate.
    pub uv: Vec2,
}

/// The transformed quad: exactly 4 vertices in triangle-strip order
/// (bottom-left, bottom-right, top-left, top-right).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadMesh {
    /// Strip vertices.
    pub vertices: [Vertex; 4],
}

impl QuadMesh {
    /// Build the quad for the given parameters and source extent.
    ///
    /// Zero extent axes are clamped to 1 so degenerate upstream sizes never
    /// divide by zero. In orthographic mode the aspect ratio is forced to 1:
    /// that projection normalizes to a unit square regardless of the source
    /// shape.
    pub fn build(params: &TransformParameters, extent: SourceExtent) -> Self {
        let extent = extent.clamped_nonzero();
        let aspect = match params.camera_mode {
            CameraMode::Orthographic => 1.0,
            CameraMode::Perspective => extent.aspect() as f32,
        };

        let matrix = model_matrix(params);

        let p_x = aspect * params.scale.x;
        let p_y = params.scale.y;
        let shear = params.shear;

        // Shear offsets the bottom and top edges in opposite directions,
        // turning the quad into a parallelogram before rotation/translation.
        let corners: [(Vec3, Vec2); 4] = [
            (
                Vec3::new(-p_x + shear.x, -p_y - shear.y, 0.0),
                Vec2::new(0.0, 0.0),
            ),
            (
                Vec3::new(p_x + shear.x, -p_y + shear.y, 0.0),
                Vec2::new(1.0, 0.0),
            ),
            (
                Vec3::new(-p_x - shear.x, p_y - shear.y, 0.0),
                Vec2::new(0.0, 1.0),
            ),
            (
                Vec3::new(p_x - shear.x, p_y + shear.y, 0.0),
                Vec2::new(1.0, 1.0),
            ),
        ];

        Self {
            vertices: corners.map(|(position, uv)| Vertex {
                position: matrix.transform_point3(position),
                color: OPAQUE_WHITE,
                uv,
            }),
        }
    }

    /// Raw vertex bytes for GPU upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Rotation-then-translation matrix for the given parameters.
///
/// The three axis rotations compose in the order declared by
/// `params.rotation_order` (first axis applied first), followed by the
/// translation. Column-vector convention: corners transform as `M * p`.
pub fn model_matrix(params: &TransformParameters) -> Mat4 {
    let mut matrix = Mat4::IDENTITY;
    for axis in params.rotation_order.axes() {
        matrix = Mat4::from_axis_angle(axis.unit(), params.rotation_about(axis)) * matrix;
    }
    Mat4::from_translation(params.position) * matrix
}

#[cfg(test)]
#[path = "../../tests/unit/transform/mesh.rs"]
mod tests;
