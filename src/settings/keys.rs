//! Persisted configuration keys for the transform stage.
//!
//! Legacy `Filter.Transform.*` names are only read by
//! [`crate::migrate`], which renames them to the current short keys.

/// Projection kind: 0 = orthographic, 1 = perspective.
pub const CAMERA_MODE: &str = "Camera.Mode";
/// Vertical field of view in degrees (perspective only).
pub const CAMERA_FIELD_OF_VIEW: &str = "Camera.FieldOfView";
/// Position in percent of the source extent.
pub const POSITION_X: &str = "Position.X";
/// Position in percent of the source extent.
pub const POSITION_Y: &str = "Position.Y";
/// Depth position in percent (perspective only).
pub const POSITION_Z: &str = "Position.Z";
/// Rotation about the X axis in degrees.
pub const ROTATION_X: &str = "Rotation.X";
/// Rotation about the Y axis in degrees.
pub const ROTATION_Y: &str = "Rotation.Y";
/// Rotation about the Z axis in degrees.
pub const ROTATION_Z: &str = "Rotation.Z";
/// Axis composition order, one of the six permutations (0..=5).
pub const ROTATION_ORDER: &str = "Rotation.Order";
/// Horizontal scale in percent.
pub const SCALE_X: &str = "Scale.X";
/// Vertical scale in percent.
pub const SCALE_Y: &str = "Scale.Y";
/// Horizontal shear in percent.
pub const SHEAR_X: &str = "Shear.X";
/// Vertical shear in percent.
pub const SHEAR_Y: &str = "Shear.Y";
/// Enable the power-of-two mipmap chain.
pub const MIPMAPPING: &str = "Mipmapping";

/// Pre-rename key for [`CAMERA_MODE`].
pub const LEGACY_CAMERA_MODE: &str = "Filter.Transform.Camera";
/// Pre-rename key for [`CAMERA_FIELD_OF_VIEW`].
pub const LEGACY_CAMERA_FIELD_OF_VIEW: &str = "Filter.Transform.Camera.FieldOfView";
/// Pre-rename key for [`POSITION_X`].
pub const LEGACY_POSITION_X: &str = "Filter.Transform.Position.X";
/// Pre-rename key for [`POSITION_Y`].
pub const LEGACY_POSITION_Y: &str = "Filter.Transform.Position.Y";
/// Pre-rename key for [`POSITION_Z`].
pub const LEGACY_POSITION_Z: &str = "Filter.Transform.Position.Z";
/// Pre-rename key for [`ROTATION_X`].
pub const LEGACY_ROTATION_X: &str = "Filter.Transform.Rotation.X";
/// Pre-rename key for [`ROTATION_Y`].
pub const LEGACY_ROTATION_Y: &str = "Filter.Transform.Rotation.Y";
/// Pre-rename key for [`ROTATION_Z`].
pub const LEGACY_ROTATION_Z: &str = "Filter.Transform.Rotation.Z";
/// Pre-rename key for [`ROTATION_ORDER`].
pub const LEGACY_ROTATION_ORDER: &str = "Filter.Transform.Rotation.Order";
/// Pre-rename key for [`SCALE_X`].
pub const LEGACY_SCALE_X: &str = "Filter.Transform.Scale.X";
/// Pre-rename key for [`SCALE_Y`].
pub const LEGACY_SCALE_Y: &str = "Filter.Transform.Scale.Y";
/// Pre-rename key for [`SHEAR_X`].
pub const LEGACY_SHEAR_X: &str = "Filter.Transform.Shear.X";
/// Pre-rename key for [`SHEAR_Y`].
pub const LEGACY_SHEAR_Y: &str = "Filter.Transform.Shear.Y";
/// Pre-rename key for [`MIPMAPPING`].
pub const LEGACY_MIPMAPPING: &str = "Filter.Transform.Mipmapping";
