use super::*;

#[test]
fn legacy_keys_are_renamed_and_cleared() {
    let mut s = Settings::new();
    s.set_double(keys::LEGACY_POSITION_X, 25.0);
    s.set_double(keys::LEGACY_ROTATION_Z, -45.0);
    s.set_int(keys::LEGACY_ROTATION_ORDER, 2);
    s.set_bool(keys::LEGACY_MIPMAPPING, true);

    migrate(&mut s, schema_version(0, 10, 0));

    assert_eq!(s.get_double(keys::POSITION_X), 25.0);
    assert_eq!(s.get_double(keys::ROTATION_Z), -45.0);
    assert_eq!(s.get_int(keys::ROTATION_ORDER), 2);
    assert!(s.get_bool(keys::MIPMAPPING));

    assert!(!s.has_user_value(keys::LEGACY_POSITION_X));
    assert!(!s.has_user_value(keys::LEGACY_ROTATION_Z));
    assert!(!s.has_user_value(keys::LEGACY_ROTATION_ORDER));
    assert!(!s.has_user_value(keys::LEGACY_MIPMAPPING));
}

#[test]
fn existing_user_value_under_new_name_wins() {
    let mut s = Settings::new();
    s.set_double(keys::LEGACY_SCALE_X, 200.0);
    s.set_double(keys::SCALE_X, 50.0);

    migrate(&mut s, schema_version(0, 10, 0));

    assert_eq!(s.get_double(keys::SCALE_X), 50.0);
    assert!(!s.has_user_value(keys::LEGACY_SCALE_X));
}

#[test]
fn missing_legacy_keys_are_a_no_op() {
    let mut s = Settings::new();
    s.set_double(keys::POSITION_Y, 10.0);

    migrate(&mut s, schema_version(0, 1, 0));

    assert_eq!(s.get_double(keys::POSITION_Y), 10.0);
    // Only the camera-mode seed appears alongside the untouched value.
    assert!(s.has_user_value(keys::CAMERA_MODE));
    assert_eq!(s.get_int(keys::CAMERA_MODE), 0);
}

#[test]
fn migration_is_idempotent() {
    let mut s = Settings::new();
    s.set_double(keys::LEGACY_SHEAR_Y, 15.0);

    migrate(&mut s, schema_version(0, 10, 0));
    let once = s.clone();
    migrate(&mut s, schema_version(0, 10, 0));

    assert_eq!(
        serde_json::to_value(&once).unwrap(),
        serde_json::to_value(&s).unwrap()
    );
}

#[test]
fn current_schema_does_not_migrate() {
    let mut s = Settings::new();
    s.set_double(keys::LEGACY_POSITION_X, 25.0);

    migrate(&mut s, CURRENT_SCHEMA_VERSION);

    // Data claiming the current schema keeps whatever keys it has.
    assert!(s.has_user_value(keys::LEGACY_POSITION_X));
    assert!(!s.has_user_value(keys::POSITION_X));
    assert!(!s.has_user_value(keys::CAMERA_MODE));
}

#[test]
fn patch_component_is_ignored_for_gating() {
    let mut s = Settings::new();
    s.set_double(keys::LEGACY_POSITION_X, 25.0);

    // 0.11.patch is the rename schema itself, regardless of patch level.
    migrate(&mut s, schema_version(0, 11, 7));
    assert!(s.has_user_value(keys::LEGACY_POSITION_X));

    migrate(&mut s, schema_version(0, 10, 7));
    assert!(s.has_user_value(keys::POSITION_X));
}

#[test]
fn camera_mode_seed_respects_migrated_value() {
    let mut s = Settings::new();
    s.set_int(keys::LEGACY_CAMERA_MODE, 1);

    migrate(&mut s, schema_version(0, 10, 0));

    assert_eq!(s.get_int(keys::CAMERA_MODE), 1);
}
