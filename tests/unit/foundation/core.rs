use super::*;

#[test]
fn new_accepts_ordered_and_degenerate_bounds() {
    let b = Bounds::new(0.0, 10.0).unwrap();
    assert_eq!(b, Bounds { lo: 0.0, hi: 10.0 });
    assert!(Bounds::new(4, 4).is_ok());
}

#[test]
fn new_rejects_inverted_and_nan() {
    let err = Bounds::new(10, 0).unwrap_err();
    assert!(matches!(err, ClampError::Validation(_)));
    assert!(err.to_string().contains("lo must be <= hi"));

    assert!(matches!(
        Bounds::new(f64::NAN, 1.0),
        Err(ClampError::Validation(_))
    ));
    assert!(matches!(
        Bounds::new(0.0, f64::NAN),
        Err(ClampError::Validation(_))
    ));
}

#[test]
fn from_raw_keeps_inverted_bounds() {
    let b = Bounds::from_raw(10, 0);
    assert!(b.is_inverted());
    assert!(b.validate().is_err());
    assert!(!Bounds::from_raw(0, 10).is_inverted());
}

#[test]
fn contains_is_inclusive() {
    let b = Bounds::from_raw(2, 5);
    assert!(!b.contains(1));
    assert!(b.contains(2));
    assert!(b.contains(5));
    assert!(!b.contains(6));
    assert!(!Bounds::from_raw(0.0, 1.0).contains(f64::NAN));
}

#[test]
fn clamp_matches_free_function() {
    let b = Bounds::from_raw(0, 10);
    assert_eq!(b.clamp(5), 5);
    assert_eq!(b.clamp(-3), 0);
    assert_eq!(b.clamp(15), 10);
    assert_eq!(Bounds::from_raw(10, 0).clamp(7), 0);
}

#[test]
fn json_roundtrip_and_errors() {
    let b: Bounds<f64> = Bounds::from_json(r#"{"lo": -1.5, "hi": 2}"#).unwrap();
    assert_eq!(b, Bounds::from_raw(-1.5, 2.0));
    assert_eq!(
        serde_json::to_string(&Bounds::from_raw(1, 3)).unwrap(),
        r#"{"lo":1,"hi":3}"#
    );

    let inverted: Bounds<i32> = Bounds::from_json(r#"{"lo": 3, "hi": 1}"#).unwrap();
    assert!(inverted.is_inverted());

    let err = Bounds::<f64>::from_json(r#"{"lo": 0}"#).unwrap_err();
    assert!(matches!(err, ClampError::Serde(_)));
}
