use crate::{
    settings::keys,
    settings::store::Settings,
    transform::params::CameraMode,
};

/// Pack a `major.minor.patch` schema version into a comparable integer.
pub const fn schema_version(major: u16, minor: u16, patch: u16) -> u64 {
    ((major as u64) << 48) | ((minor as u64) << 32) | ((patch as u64) << 16)
}

/// Comparisons only consider major and minor; patch releases never migrate.
const UPDATE_MASK: u64 = 0xFFFF_FFFF_0000_0000;

/// Schema version that renamed the legacy `Filter.Transform.*` keys.
const VERSION_KEY_RENAME: u64 = schema_version(0, 11, 0);

/// Current settings schema version.
pub const CURRENT_SCHEMA_VERSION: u64 = VERSION_KEY_RENAME;

const LEGACY_RENAMES: &[(&str, &str)] = &[
    (keys::LEGACY_CAMERA_MODE, keys::CAMERA_MODE),
    (keys::LEGACY_CAMERA_FIELD_OF_VIEW, keys::CAMERA_FIELD_OF_VIEW),
    (keys::LEGACY_POSITION_X, keys::POSITION_X),
    (keys::LEGACY_POSITION_Y, keys::POSITION_Y),
    (keys::LEGACY_POSITION_Z, keys::POSITION_Z),
    (keys::LEGACY_ROTATION_X, keys::ROTATION_X),
    (keys::LEGACY_ROTATION_Y, keys::ROTATION_Y),
    (keys::LEGACY_ROTATION_Z, keys::ROTATION_Z),
    (keys::LEGACY_ROTATION_ORDER, keys::ROTATION_ORDER),
    (keys::LEGACY_SCALE_X, keys::SCALE_X),
    (keys::LEGACY_SCALE_Y, keys::SCALE_Y),
    (keys::LEGACY_SHEAR_X, keys::SHEAR_X),
    (keys::LEGACY_SHEAR_Y, keys::SHEAR_Y),
    (keys::LEGACY_MIPMAPPING, keys::MIPMAPPING),
];

/// Migrate a settings snapshot persisted by schema `version` to the current
/// schema.
///
/// Renames are value-preserving and idempotent: a legacy key's value is
/// copied to the current key name only when the current key has no user
/// value, the legacy user value is cleared either way, and missing legacy
/// keys are a no-op. Running on already-migrated data changes nothing.
pub fn migrate(settings: &mut Settings, version: u64) {
    let version = version & UPDATE_MASK;

    if version < VERSION_KEY_RENAME {
        for &(old, new) in LEGACY_RENAMES {
            copy_unset(settings, old, new);
        }

        // Instances saved before the rename may predate the camera mode key
        // entirely; seed the orthographic default as a user value so later
        // schema changes never reinterpret it.
        if !settings.has_user_value(keys::CAMERA_MODE) {
            settings.set_int(keys::CAMERA_MODE, CameraMode::Orthographic.index());
        }
    }
}

fn copy_unset(settings: &mut Settings, old: &str, new: &str) {
    let Some(value) = settings.user_value(old).cloned() else {
        return;
    };
    if !settings.has_user_value(new) {
        settings.set_value(new, value);
    }
    settings.unset_user_value(old);
}

#[cfg(test)]
#[path = "../../tests/unit/settings/migrate.rs"]
mod tests;
