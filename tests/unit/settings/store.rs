use super::*;

#[test]
fn getters_fall_back_to_defaults_then_zero() {
    let mut s = Settings::new();
    assert_eq!(s.get_int("Camera.Mode"), 0);
    assert_eq!(s.get_double("Scale.X"), 0.0);
    assert!(!s.get_bool("Mipmapping"));

    s.set_default("Camera.Mode", 1i64.into());
    s.set_default("Scale.X", 100.0.into());
    s.set_default("Mipmapping", true.into());
    assert_eq!(s.get_int("Camera.Mode"), 1);
    assert_eq!(s.get_double("Scale.X"), 100.0);
    assert!(s.get_bool("Mipmapping"));
}

#[test]
fn user_values_shadow_defaults() {
    let mut s = Settings::new();
    s.set_default("Scale.X", 100.0.into());
    s.set_double("Scale.X", 25.0);
    assert_eq!(s.get_double("Scale.X"), 25.0);

    s.unset_user_value("Scale.X");
    assert_eq!(s.get_double("Scale.X"), 100.0);
}

#[test]
fn defaults_do_not_count_as_user_values() {
    let mut s = Settings::new();
    s.set_default("Rotation.Order", 4i64.into());
    assert!(!s.has_user_value("Rotation.Order"));

    s.set_int("Rotation.Order", 2);
    assert!(s.has_user_value("Rotation.Order"));
    assert_eq!(
        s.user_value("Rotation.Order"),
        Some(&serde_json::Value::from(2i64))
    );
}

#[test]
fn numeric_getters_coerce_across_json_number_kinds() {
    let mut s = Settings::new();
    s.set_int("Camera.FieldOfView", 90);
    assert_eq!(s.get_double("Camera.FieldOfView"), 90.0);

    s.set_double("Rotation.Order", 4.0);
    assert_eq!(s.get_int("Rotation.Order"), 4);

    // Mistyped values fall back to the type's zero, not a panic.
    s.set_bool("Position.X", true);
    assert_eq!(s.get_double("Position.X"), 0.0);
}

#[test]
fn serialization_round_trips_user_values_only() {
    let mut s = Settings::new();
    s.set_default("Scale.X", 100.0.into());
    s.set_double("Position.X", 50.0);

    let json = serde_json::to_string(&s).unwrap();
    let restored: Settings = serde_json::from_str(&json).unwrap();
    assert!(restored.has_user_value("Position.X"));
    assert_eq!(restored.get_double("Position.X"), 50.0);
    // Defaults are runtime state, reseeded by the stage, never persisted.
    assert_eq!(restored.get_double("Scale.X"), 0.0);
}
