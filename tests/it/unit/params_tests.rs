//! Unit tests for startup parameter parsing.
//!
//! Parameter lines and error messages use inline insta snapshots so the
//! expected text sits next to the test.

use ruler::app::Ruler;
use ruler::constants::MAX_DIMENSION;
use ruler::params::{PARAM_COUNT, ParamsError, StartupParams};

#[test]
fn test_no_arguments_gives_defaults() {
    let args: [&str; 0] = [];
    let params = StartupParams::from_args(&args).unwrap();
    assert_eq!(params, StartupParams::default());
    insta::assert_snapshot!(params.to_string(), @"400 75 False 0.7 False False");
}

#[test]
fn test_full_parameter_line() {
    let params = StartupParams::parse("250 40 True 0.5 True False").unwrap();
    assert_eq!(params.width, 250);
    assert_eq!(params.height, 40);
    assert!(params.settings.is_vertical);
    assert!(params.settings.is_locked);
    assert!(!params.settings.stay_on_top);
    assert!((params.settings.opacity - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_flags_are_case_insensitive() {
    let params = StartupParams::parse("100 100 true 1 FALSE tRuE").unwrap();
    assert!(params.settings.is_vertical);
    assert!(!params.settings.is_locked);
    assert!(params.settings.stay_on_top);
}

#[test]
fn test_duplicate_round_trip() {
    let original = StartupParams::parse("321 54 True 0.3 False True").unwrap();
    let args = original.to_args();
    assert_eq!(args.len(), PARAM_COUNT);
    insta::assert_snapshot!(args.join(" "), @"321 54 True 0.3 False True");
    assert_eq!(StartupParams::from_args(&args).unwrap(), original);
}

#[test]
fn test_wrong_count_is_an_error() {
    let err = StartupParams::parse("400 75 False").unwrap_err();
    assert_eq!(
        err,
        ParamsError::WrongCount {
            expected: 6,
            actual: 3
        }
    );
    insta::assert_snapshot!(
        err.to_string(),
        @"expected 6 parameters (width height isVertical opacity isLocked topMost), got 3"
    );
}

#[test]
fn test_non_numeric_width() {
    let err = StartupParams::parse("wide 75 False 0.7 False False").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"width: 'wide' is not an integer");
}

#[test]
fn test_zero_height() {
    let err = StartupParams::parse("400 0 False 0.7 False False").unwrap_err();
    assert_eq!(
        err,
        ParamsError::NonPositiveDimension {
            field: "height",
            value: 0
        }
    );
}

#[test]
fn test_bad_opacity() {
    let err = StartupParams::parse("400 75 False opaque False False").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"opacity: 'opaque' is not a number");

    let err = StartupParams::parse("400 75 False 1.5 False False").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"opacity: 1.5 is outside 0..=1");
}

#[test]
fn test_bad_flag_names_the_field() {
    let err = StartupParams::parse("400 75 False 0.7 yes False").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"isLocked: 'yes' is not True or False");
}

#[test]
fn test_fields_are_trimmed() {
    let params = StartupParams::from_args(&[" 300", "60 ", "False", "0.7", "False", "False"]).unwrap();
    assert_eq!((params.width, params.height), (300, 60));
}

#[test]
fn test_oversized_width_rejected() {
    let err = StartupParams::parse("2147483647 75 False 0.7 False False").unwrap_err();
    assert_eq!(
        err,
        ParamsError::DimensionTooLarge {
            field: "width",
            value: i32::MAX,
            max: MAX_DIMENSION
        }
    );
    insta::assert_snapshot!(err.to_string(), @"width: 2147483647 exceeds the maximum of 16384");

    let params = StartupParams::parse("16384 16384 False 0.7 False False").unwrap();
    assert_eq!((params.width, params.height), (MAX_DIMENSION, MAX_DIMENSION));
}

#[test]
fn test_constructed_params_are_clamped() {
    let params = StartupParams {
        width: i32::MAX,
        height: 0,
        ..StartupParams::default()
    };
    let ruler = Ruler::new(params);
    assert_eq!((ruler.bounds().width, ruler.bounds().height), (MAX_DIMENSION, 1));
}
