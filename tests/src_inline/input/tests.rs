use super::*;
use crate::model::{AbsoluteAngleId, RelativeAngleId};

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("spinometer_score_input_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_parse_partial_relative() {
    let json = r#"{
        "relative_angles": {"C2_C7_vert_new": 31.3, "T12_L3_S": 170.0},
        "absolute_angles": {"C2_C7": 65.0}
    }"#;
    let alignment = parse_alignment(json.as_bytes(), Path::new("inline")).unwrap();
    assert_eq!(alignment.relative_angles.len(), 2);
    assert_eq!(alignment.relative_angles[&RelativeAngleId::T12L3S], 170.0);
    assert_eq!(alignment.absolute_angles[&AbsoluteAngleId::C2C7], 65.0);
}

#[test]
fn test_parse_missing_maps_default_empty() {
    let alignment = parse_alignment("{}".as_bytes(), Path::new("inline")).unwrap();
    assert!(alignment.relative_angles.is_empty());
    assert!(alignment.absolute_angles.is_empty());
}

#[test]
fn test_parse_legacy_relative_name() {
    let json = r#"{"relative_angles": {"C7_T3_vert": 41.7}}"#;
    let alignment = parse_alignment(json.as_bytes(), Path::new("inline")).unwrap();
    assert!((alignment.relative_angles[&RelativeAngleId::C7T3VertNew] - 41.7).abs() < 1e-6);
}

#[test]
fn test_parse_error_names_origin() {
    let err = parse_alignment("{not json".as_bytes(), Path::new("bad.json")).unwrap_err();
    assert!(matches!(err, InputError::Parse { .. }));
    assert!(err.to_string().contains("bad.json"));
}

#[test]
fn test_load_from_file() {
    let path = temp_file(
        "measurements.json",
        r#"{"absolute_angles": {"L3_S": 90.0, "T3_T8": 80.5}}"#,
    );
    let alignment = load_alignment(Some(path.as_path())).unwrap();
    assert_eq!(alignment.absolute_angles.len(), 2);
    assert_eq!(alignment.absolute_angles[&AbsoluteAngleId::T3T8], 80.5);
}

#[test]
fn test_load_missing_file() {
    let mut path = std::env::temp_dir();
    path.push("spinometer_score_does_not_exist.json");
    let err = load_alignment(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, InputError::Io { .. }));
}
