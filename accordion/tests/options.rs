use std::time::Duration;

use accordion::{AccordionError, AccordionOptions, IdPrefix};
use pagedom::Easing;

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn test_defaults() {
    let options = AccordionOptions::default();
    assert_eq!(options.duration, Duration::from_millis(200));
    assert_eq!(options.easing, Easing::Linear);
    assert_eq!(options.details_selector, "details");
    assert_eq!(options.content_selector, ".content");
    assert!(options.create_multiple);
    assert_eq!(options.id_prefix, IdPrefix::Text("accordion".into()));
    assert!(options.manage_aria);
}

#[test]
fn test_empty_json_gives_defaults() {
    let options = AccordionOptions::from_json_str("{}").unwrap();
    assert_eq!(options, AccordionOptions::default());
}

// =============================================================================
// JSON Parsing
// =============================================================================

#[test]
fn test_full_json() {
    let options = AccordionOptions::from_json_str(
        r#"{
            "duration": 350,
            "easing": "ease-in-out",
            "detailsSelector": ".collapse",
            "contentSelector": ".collapse__content",
            "createMultiple": false,
            "idPrefix": "faq",
            "manageAria": false
        }"#,
    )
    .unwrap();

    assert_eq!(options.duration, Duration::from_millis(350));
    assert_eq!(options.easing, Easing::EaseInOut);
    assert_eq!(options.details_selector, ".collapse");
    assert_eq!(options.content_selector, ".collapse__content");
    assert!(!options.create_multiple);
    assert_eq!(options.id_prefix.to_string(), "faq");
    assert!(!options.manage_aria);
}

#[test]
fn test_numeric_id_prefix() {
    let options = AccordionOptions::from_json_str(r#"{ "idPrefix": 12 }"#).unwrap();
    assert_eq!(options.id_prefix, IdPrefix::Number(12));
    assert_eq!(options.id_prefix.to_string(), "12");
}

#[test]
fn test_cubic_bezier_easing() {
    let options =
        AccordionOptions::from_json_str(r#"{ "easing": "cubic-bezier(0.2, 0, 0, 1)" }"#).unwrap();
    assert_eq!(options.easing, Easing::CubicBezier(0.2, 0.0, 0.0, 1.0));
}

#[test]
fn test_unknown_easing_is_rejected() {
    let err = AccordionOptions::from_json_str(r#"{ "easing": "wobble" }"#).unwrap_err();
    assert!(matches!(err, AccordionError::Options(_)));
    assert!(err.to_string().contains("wobble"));
}

#[test]
fn test_negative_duration_is_rejected() {
    let err = AccordionOptions::from_json_str(r#"{ "duration": -5 }"#).unwrap_err();
    assert!(matches!(err, AccordionError::Options(_)));
    assert!(err.to_string().contains("non-negative"));
}

#[test]
fn test_fractional_duration() {
    let options = AccordionOptions::from_json_str(r#"{ "duration": 250.5 }"#).unwrap();
    assert_eq!(options.duration, Duration::from_micros(250_500));

    let options = AccordionOptions::from_json_str(r#"{ "duration": 0 }"#).unwrap();
    assert!(options.duration.is_zero());
}

#[test]
fn test_non_finite_easing_is_rejected() {
    let err =
        AccordionOptions::from_json_str(r#"{ "easing": "cubic-bezier(0.5, NaN, 0.5, 1)" }"#)
            .unwrap_err();
    assert!(matches!(err, AccordionError::Options(_)));
}

// =============================================================================
// Files
// =============================================================================

#[test]
fn test_from_path() {
    let path = std::env::temp_dir().join(format!("accordion-options-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "duration": 120 }"#).unwrap();

    let options = AccordionOptions::from_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(options.duration, Duration::from_millis(120));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = AccordionOptions::from_path("/nonexistent/accordion.json").unwrap_err();
    assert!(matches!(err, AccordionError::Io(_)));
}

// =============================================================================
// Settings
// =============================================================================

#[test]
fn test_settings_carry_options() {
    let options = AccordionOptions::new()
        .duration(Duration::from_millis(90))
        .easing(Easing::EaseOut)
        .manage_aria(false);
    let settings = options.settings("faq-2");

    assert_eq!(settings.id, "faq-2");
    assert_eq!(settings.duration, Duration::from_millis(90));
    assert_eq!(settings.easing, Easing::EaseOut);
    assert!(!settings.manage_aria);
}
