use super::*;
use crate::model::RelativeAngleId;
use crate::model::angles::absolute_angle_order;
use crate::model::calibration::relative_normal;

fn upright_absolutes(alignment: SpinalAlignment) -> SpinalAlignment {
    // 90° measured is 0° from the vertical.
    absolute_angle_order()
        .iter()
        .fold(alignment, |a, &id| a.with_absolute(id, VERTICAL_DEG))
}

#[test]
fn test_centered_relative_angle() {
    let alignment = SpinalAlignment::new().with_relative(RelativeAngleId::C2C7VertNew, 31.3);
    let mut score = SpinalAlignmentScore::new();
    let err = calculate_score(&alignment, &mut score).unwrap_err();
    assert_eq!(err, ScoreError::MissingAbsoluteAngle(AbsoluteAngleId::C2C7));

    assert_eq!(
        score.normalized_relative_angles[&RelativeAngleId::C2C7VertNew],
        0.0
    );
    assert_eq!(score.relative_angle_scores[&RelativeAngleId::C2C7VertNew], 1.0);
}

#[test]
fn test_relative_angle_at_lower_edge() {
    let alignment = SpinalAlignment::new().with_relative(RelativeAngleId::C7T3T8, 150.4);
    let mut score = SpinalAlignmentScore::new();
    let err = calculate_score(&alignment, &mut score).unwrap_err();
    assert_eq!(err, ScoreError::MissingAbsoluteAngle(AbsoluteAngleId::C2C7));

    let normalized = score.normalized_relative_angles[&RelativeAngleId::C7T3T8];
    let value = score.relative_angle_scores[&RelativeAngleId::C7T3T8];
    assert!((normalized + 1.0).abs() < 1e-5);
    assert!(value.abs() < 1e-5);
}

#[test]
fn test_relative_scores_not_clamped() {
    let alignment =
        upright_absolutes(SpinalAlignment::new().with_relative(RelativeAngleId::T3T8T12, 160.0));
    let score = score_alignment(&alignment).unwrap();
    assert_eq!(score.normalized_relative_angles[&RelativeAngleId::T3T8T12], 5.0);
    assert_eq!(score.relative_angle_scores[&RelativeAngleId::T3T8T12], -4.0);
}

#[test]
fn test_relative_formula_for_all_present() {
    let alignment = upright_absolutes(
        SpinalAlignment::new()
            .with_relative(RelativeAngleId::C2C7VertNew, 28.0)
            .with_relative(RelativeAngleId::C7T3VertNew, 50.0)
            .with_relative(RelativeAngleId::C7T3T8, 161.0)
            .with_relative(RelativeAngleId::T3T8T12, 154.2)
            .with_relative(RelativeAngleId::T8T12L3, 180.0)
            .with_relative(RelativeAngleId::T12L3S, 170.0),
    );
    let score = score_alignment(&alignment).unwrap();

    for (&id, &measured) in &alignment.relative_angles {
        let normal = relative_normal(id).unwrap();
        let normalized = score.normalized_relative_angles[&id];
        assert!((normalized - (measured - normal.center) / normal.half_width).abs() < 1e-6);
        assert_eq!(score.relative_angle_scores[&id], 1.0 - normalized.abs());
    }
}

#[test]
fn test_absent_relative_angles_untouched() {
    let alignment =
        upright_absolutes(SpinalAlignment::new().with_relative(RelativeAngleId::T12L3S, 172.0));
    let score = score_alignment(&alignment).unwrap();

    assert_eq!(score.normalized_relative_angles.len(), 1);
    assert_eq!(score.relative_angle_scores.len(), 1);
    assert!(!score
        .relative_angle_scores
        .contains_key(&RelativeAngleId::C7T3T8));
}

#[test]
fn test_neck_absolute_at_center() {
    let alignment = SpinalAlignment::new().with_absolute(AbsoluteAngleId::C2C7, 65.0);
    let mut score = SpinalAlignmentScore::new();
    let err = calculate_score(&alignment, &mut score).unwrap_err();

    assert_eq!(score.absolute_angle_scores[&AbsoluteAngleId::C2C7], 1.0);
    assert_eq!(err, ScoreError::MissingAbsoluteAngle(AbsoluteAngleId::C7T3));
}

#[test]
fn test_lumbar_absolute_center_and_edge() {
    let upright = upright_absolutes(SpinalAlignment::new());
    let score = score_alignment(&upright).unwrap();
    assert_eq!(score.absolute_angle_scores[&AbsoluteAngleId::L3S], 1.0);

    let leaning = upright.with_absolute(AbsoluteAngleId::L3S, 74.0);
    let score = score_alignment(&leaning).unwrap();
    assert_eq!(score.absolute_angle_scores[&AbsoluteAngleId::L3S], 0.0);
}

#[test]
fn test_all_absolute_scores_written() {
    let alignment = upright_absolutes(SpinalAlignment::new());
    let score = score_alignment(&alignment).unwrap();
    assert_eq!(score.absolute_angle_scores.len(), 5);
    // Upright: neck plateau, thoracic waist segments at their lower edge.
    assert_eq!(score.absolute_angle_scores[&AbsoluteAngleId::C2C7], 1.0);
    assert_eq!(score.absolute_angle_scores[&AbsoluteAngleId::C7T3], 1.0);
    assert_eq!(score.absolute_angle_scores[&AbsoluteAngleId::T3T8], 0.0);
    assert_eq!(score.absolute_angle_scores[&AbsoluteAngleId::T8T12], 0.0);
    assert!(score
        .absolute_angle_scores
        .values()
        .all(|v| (0.0..=1.0).contains(v)));
}

#[test]
fn test_missing_absolute_is_error_even_with_relative_only() {
    let alignment = SpinalAlignment::new().with_relative(RelativeAngleId::C7T3T8, 158.4);
    let mut score = SpinalAlignmentScore::new();
    let err = calculate_score(&alignment, &mut score).unwrap_err();

    assert_eq!(err, ScoreError::MissingAbsoluteAngle(AbsoluteAngleId::C2C7));
    assert_eq!(err.to_string(), "missing absolute angle C2_C7");
    // Relative angles are scored before the fault.
    assert_eq!(score.relative_angle_scores[&RelativeAngleId::C7T3T8], 1.0);
    assert!(score.absolute_angle_scores.is_empty());
}

#[test]
fn test_repeated_calls_accumulate() {
    let mut score = SpinalAlignmentScore::new();
    let first =
        upright_absolutes(SpinalAlignment::new().with_relative(RelativeAngleId::C2C7VertNew, 31.3));
    calculate_score(&first, &mut score).unwrap();

    let second =
        upright_absolutes(SpinalAlignment::new().with_relative(RelativeAngleId::T12L3S, 173.5));
    calculate_score(&second, &mut score).unwrap();

    assert_eq!(score.relative_angle_scores.len(), 2);
    assert_eq!(score.relative_angle_scores[&RelativeAngleId::C2C7VertNew], 1.0);
    assert_eq!(score.relative_angle_scores[&RelativeAngleId::T12L3S], 0.0);
    assert_eq!(
        score
            .normalized_relative_angles
            .keys()
            .collect::<Vec<_>>(),
        score.relative_angle_scores.keys().collect::<Vec<_>>()
    );

    score.clear();
    assert!(score.is_empty());
}

#[test]
fn test_overwrite_keeps_latest_value() {
    let mut score = SpinalAlignmentScore::new();
    let a = upright_absolutes(SpinalAlignment::new().with_relative(RelativeAngleId::T3T8T12, 155.0));
    calculate_score(&a, &mut score).unwrap();
    let b = upright_absolutes(SpinalAlignment::new().with_relative(RelativeAngleId::T3T8T12, 155.5));
    calculate_score(&b, &mut score).unwrap();
    assert_eq!(score.normalized_relative_angles[&RelativeAngleId::T3T8T12], 0.5);
    assert_eq!(score.relative_angle_scores[&RelativeAngleId::T3T8T12], 0.5);
}
