//! Tests for pipeline profile handling

extern crate std;

use crate::pipeline::profile::PipelineProfile;

#[test]
fn test_embedded_defaults_load() {
    let profile = PipelineProfile::default();

    std::assert_eq!(profile.red_band, "band_1");
    std::assert_eq!(profile.green_band, "band_2");
    std::assert_eq!(profile.blue_band, "band_3");
    std::assert_eq!(profile.stretch_low, 0.02);
    std::assert_eq!(profile.stretch_high, 0.98);
    std::assert_eq!(profile.color_name, "RGB");
    std::assert_eq!(profile.hue_band, "HUE");
    std::assert_eq!(profile.quantile, 0.5);
    std::assert_eq!(profile.label_name, "label");
    std::assert_eq!(profile.window, 3);
}

#[test]
fn test_partial_profile_keeps_other_defaults() {
    let profile = PipelineProfile::from_str(
        r#"
        [threshold]
        quantile = 0.7

        [denoise]
        window = 5
        "#,
    )
    .unwrap();

    std::assert_eq!(profile.quantile, 0.7);
    std::assert_eq!(profile.window, 5);
    // Untouched sections keep their defaults
    std::assert_eq!(profile.stretch_low, 0.02);
    std::assert_eq!(profile.hue_band, "HUE");
}

#[test]
fn test_band_section_override() {
    let profile = PipelineProfile::from_str(
        r#"
        [bands]
        red = "red"
        green = "green"
        blue = "blue"
        "#,
    )
    .unwrap();

    let mapping = profile.band_mapping();
    std::assert_eq!(mapping[0], ("red".to_string(), "R".to_string()));
    std::assert_eq!(mapping[1], ("green".to_string(), "G".to_string()));
    std::assert_eq!(mapping[2], ("blue".to_string(), "B".to_string()));
}

#[test]
fn test_invalid_toml_is_rejected() {
    let result = PipelineProfile::from_str("not valid [ toml");
    std::assert!(result.is_err());
}
