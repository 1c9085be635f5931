use glam::Vec3;

use crate::settings::{keys, store::Settings};

/// Camera projection kind.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
pub enum CameraMode {
    /// Parallel projection onto a unit square; source aspect is ignored.
    #[default]
    Orthographic,
    /// Perspective projection with a configurable vertical field of view.
    Perspective,
}

impl CameraMode {
    /// Mode for a persisted index, if valid.
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Self::Orthographic),
            1 => Some(Self::Perspective),
            _ => None,
        }
    }

    /// Persisted index for this mode.
    pub fn index(self) -> i64 {
        match self {
            Self::Orthographic => 0,
            Self::Perspective => 1,
        }
    }
}

/// A rotation axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis.
    Y,
    /// The Z axis.
    Z,
}

impl Axis {
    /// Unit vector along this axis.
    pub fn unit(self) -> Vec3 {
        match self {
            Self::X => Vec3::X,
            Self::Y => Vec3::Y,
            Self::Z => Vec3::Z,
        }
    }
}

/// The order in which the three axis rotations are composed.
///
/// Rotations do not commute, so each permutation yields a different net
/// orientation. Each variant carries its fixed application order as data via
/// [`RotationOrder::axes`].
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
pub enum RotationOrder {
    /// X, then Y, then Z.
    Xyz,
    /// X, then Z, then Y.
    Xzy,
    /// Y, then X, then Z.
    Yxz,
    /// Y, then Z, then X.
    Yzx,
    /// Z, then X, then Y.
    #[default]
    Zxy,
    /// Z, then Y, then X.
    Zyx,
}

impl RotationOrder {
    /// Order for a persisted index, if valid.
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Self::Xyz),
            1 => Some(Self::Xzy),
            2 => Some(Self::Yxz),
            3 => Some(Self::Yzx),
            4 => Some(Self::Zxy),
            5 => Some(Self::Zyx),
            _ => None,
        }
    }

    /// Persisted index for this order.
    pub fn index(self) -> i64 {
        match self {
            Self::Xyz => 0,
            Self::Xzy => 1,
            Self::Yxz => 2,
            Self::Yzx => 3,
            Self::Zxy => 4,
            Self::Zyx => 5,
        }
    }

    /// The axes in application order; the first entry is applied first.
    pub fn axes(self) -> [Axis; 3] {
        match self {
            Self::Xyz => [Axis::X, Axis::Y, Axis::Z],
            Self::Xzy => [Axis::X, Axis::Z, Axis::Y],
            Self::Yxz => [Axis::Y, Axis::X, Axis::Z],
            Self::Yzx => [Axis::Y, Axis::Z, Axis::X],
            Self::Zxy => [Axis::Z, Axis::X, Axis::Y],
            Self::Zyx => [Axis::Z, Axis::Y, Axis::X],
        }
    }
}

/// Render-facing transform configuration.
///
/// Values are stored in render units: positions, scale and shear are ratios
/// (persisted percent divided by 100), rotation is radians (persisted degrees
/// converted). Replaced wholesale by [`crate::TransformStage::update`]; never
/// partially mutated mid-frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransformParameters {
    /// Projection kind.
    pub camera_mode: CameraMode,
    /// Vertical field of view in degrees, clamped to `[1, 179]`. Only
    /// meaningful in perspective mode.
    pub field_of_view: f32,
    /// Position as a ratio of the source extent. `z` is only meaningful in
    /// perspective mode.
    pub position: Vec3,
    /// Rotation angles in radians, one per axis.
    pub rotation: Vec3,
    /// Axis composition order for the rotation.
    pub rotation_order: RotationOrder,
    /// Scale ratios; `z` is fixed at 1.
    pub scale: Vec3,
    /// Shear ratios; `z` is fixed at 0.
    pub shear: Vec3,
    /// Pre-filter through a power-of-two mipmap chain before sampling.
    pub mipmap_enabled: bool,
}

impl Default for TransformParameters {
    fn default() -> Self {
        Self {
            camera_mode: CameraMode::Orthographic,
            field_of_view: 90.0,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            rotation_order: RotationOrder::Zxy,
            scale: Vec3::new(1.0, 1.0, 1.0),
            shear: Vec3::new(0.0, 0.0, 0.0),
            mipmap_enabled: false,
        }
    }
}

impl TransformParameters {
    /// Parse a settings snapshot into render-facing parameters.
    ///
    /// Unit conversions: percent to ratio (divide by 100), degrees to
    /// radians. Invalid enum indices and out-of-range field of view are
    /// recovered here with the default value; they never reach the render
    /// path.
    pub fn from_settings(settings: &Settings) -> Self {
        let camera_mode_index = settings.get_int(keys::CAMERA_MODE);
        let camera_mode = CameraMode::from_index(camera_mode_index).unwrap_or_else(|| {
            tracing::warn!(index = camera_mode_index, "invalid camera mode, using orthographic");
            CameraMode::Orthographic
        });

        let fov_raw = settings.get_double(keys::CAMERA_FIELD_OF_VIEW);
        let field_of_view = fov_raw.clamp(1.0, 179.0);
        if field_of_view != fov_raw {
            tracing::debug!(requested = fov_raw, clamped = field_of_view, "field of view clamped");
        }

        let order_index = settings.get_int(keys::ROTATION_ORDER);
        let rotation_order = RotationOrder::from_index(order_index).unwrap_or_else(|| {
            tracing::warn!(index = order_index, "invalid rotation order, using ZXY");
            RotationOrder::default()
        });

        Self {
            camera_mode,
            field_of_view: field_of_view as f32,
            position: Vec3::new(
                (settings.get_double(keys::POSITION_X) / 100.0) as f32,
                (settings.get_double(keys::POSITION_Y) / 100.0) as f32,
                (settings.get_double(keys::POSITION_Z) / 100.0) as f32,
            ),
            rotation: Vec3::new(
                settings.get_double(keys::ROTATION_X).to_radians() as f32,
                settings.get_double(keys::ROTATION_Y).to_radians() as f32,
                settings.get_double(keys::ROTATION_Z).to_radians() as f32,
            ),
            rotation_order,
            scale: Vec3::new(
                (settings.get_double(keys::SCALE_X) / 100.0) as f32,
                (settings.get_double(keys::SCALE_Y) / 100.0) as f32,
                1.0,
            ),
            shear: Vec3::new(
                (settings.get_double(keys::SHEAR_X) / 100.0) as f32,
                (settings.get_double(keys::SHEAR_Y) / 100.0) as f32,
                0.0,
            ),
            mipmap_enabled: settings.get_bool(keys::MIPMAPPING),
        }
    }

    /// Angle in radians for one axis of [`TransformParameters::rotation`].
    pub fn rotation_about(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.rotation.x,
            Axis::Y => self.rotation.y,
            Axis::Z => self.rotation.z,
        }
    }
}

/// Seed the defaults layer of a settings snapshot with the stage defaults.
pub fn apply_defaults(settings: &mut Settings) {
    settings.set_default(keys::CAMERA_MODE, CameraMode::Orthographic.index().into());
    settings.set_default(keys::CAMERA_FIELD_OF_VIEW, 90.0.into());
    settings.set_default(keys::POSITION_X, 0.0.into());
    settings.set_default(keys::POSITION_Y, 0.0.into());
    settings.set_default(keys::POSITION_Z, 0.0.into());
    settings.set_default(keys::ROTATION_X, 0.0.into());
    settings.set_default(keys::ROTATION_Y, 0.0.into());
    settings.set_default(keys::ROTATION_Z, 0.0.into());
    settings.set_default(keys::ROTATION_ORDER, RotationOrder::Zxy.index().into());
    settings.set_default(keys::SCALE_X, 100.0.into());
    settings.set_default(keys::SCALE_Y, 100.0.into());
    settings.set_default(keys::SHEAR_X, 0.0.into());
    settings.set_default(keys::SHEAR_Y, 0.0.into());
    settings.set_default(keys::MIPMAPPING, false.into());
}

#[cfg(test)]
#[path = "../../tests/unit/transform/params.rs"]
mod tests;
