//! Pipeline profile handling
//!
//! This module provides the knob set driving a pipeline run: band
//! mapping, stretch percentiles, threshold quantile, denoise window and
//! layer names. Defaults are compiled in from `pipeline_defaults.toml`
//! and can be overridden by a profile file and then by CLI flags.

use lazy_static::lazy_static;

use std::fs;

use crate::raster::errors::{RasterError, RasterResult};

lazy_static! {
    // Parse the embedded defaults at startup
    static ref DEFAULT_PROFILE: PipelineProfile = {
        let content = include_str!("../../pipeline_defaults.toml");
        PipelineProfile::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse embedded pipeline defaults: {}", e);
            PipelineProfile::fallback()
        })
    };
}

/// The full set of knobs for one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineProfile {
    /// Source band holding the red channel
    pub red_band: String,
    /// Source band holding the green channel
    pub green_band: String,
    /// Source band holding the blue channel
    pub blue_band: String,
    /// Low percentile clip point for the contrast stretch
    pub stretch_low: f64,
    /// High percentile clip point for the contrast stretch
    pub stretch_high: f64,
    /// Name of the composite color attribute
    pub color_name: String,
    /// Name of the derived hue band
    pub hue_band: String,
    /// Quantile of the hue distribution used as the vegetation cutoff
    pub quantile: f64,
    /// Name of the boolean label attribute
    pub label_name: String,
    /// Mode-filter window size
    pub window: u32,
}

impl PipelineProfile {
    /// Hardcoded fallback matching the shipped defaults file
    fn fallback() -> Self {
        PipelineProfile {
            red_band: "band_1".to_string(),
            green_band: "band_2".to_string(),
            blue_band: "band_3".to_string(),
            stretch_low: 0.02,
            stretch_high: 0.98,
            color_name: "RGB".to_string(),
            hue_band: "HUE".to_string(),
            quantile: 0.5,
            label_name: "label".to_string(),
            window: 3,
        }
    }

    /// Parse a profile from a TOML string
    ///
    /// Keys that are absent keep their fallback values.
    pub fn from_str(content: &str) -> RasterResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(RasterError::GenericError(format!("Failed to parse TOML: {}", e))),
        };

        let mut profile = PipelineProfile::fallback();
        profile.apply(&toml_value);
        Ok(profile)
    }

    /// Load a profile file, layered over the compiled-in defaults
    ///
    /// Keys that are absent from the file keep their default values.
    pub fn from_file(path: &str) -> RasterResult<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => return Err(RasterError::IoError(e)),
        };

        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => {
                return Err(RasterError::GenericError(format!(
                    "Failed to parse profile {}: {}",
                    path, e
                )))
            }
        };

        let mut profile = PipelineProfile::default();
        profile.apply(&toml_value);
        Ok(profile)
    }

    /// Overlay values found in a parsed TOML document
    fn apply(&mut self, toml_value: &toml::Value) {
        if let Some(table) = toml_value.get("bands").and_then(|v| v.as_table()) {
            Self::apply_string(table, "red", &mut self.red_band);
            Self::apply_string(table, "green", &mut self.green_band);
            Self::apply_string(table, "blue", &mut self.blue_band);
        }

        if let Some(table) = toml_value.get("stretch").and_then(|v| v.as_table()) {
            Self::apply_float(table, "low", &mut self.stretch_low);
            Self::apply_float(table, "high", &mut self.stretch_high);
            Self::apply_string(table, "color_name", &mut self.color_name);
        }

        if let Some(table) = toml_value.get("hue").and_then(|v| v.as_table()) {
            Self::apply_string(table, "band_name", &mut self.hue_band);
        }

        if let Some(table) = toml_value.get("threshold").and_then(|v| v.as_table()) {
            Self::apply_float(table, "quantile", &mut self.quantile);
            Self::apply_string(table, "label_name", &mut self.label_name);
        }

        if let Some(table) = toml_value.get("denoise").and_then(|v| v.as_table()) {
            if let Some(window) = table.get("window").and_then(|v| v.as_integer()) {
                self.window = window as u32;
            }
        }
    }

    fn apply_string(table: &toml::value::Table, key: &str, target: &mut String) {
        if let Some(value) = table.get(key).and_then(|v| v.as_str()) {
            *target = value.to_string();
        }
    }

    fn apply_float(table: &toml::value::Table, key: &str, target: &mut f64) {
        if let Some(value) = table.get(key).and_then(|v| v.as_float()) {
            *target = value;
        }
    }

    /// The (source, target) band mapping for the selection stage
    ///
    /// Targets are the conventional R, G, B working names the rest of
    /// the pipeline refers to.
    pub fn band_mapping(&self) -> Vec<(String, String)> {
        vec![
            (self.red_band.clone(), "R".to_string()),
            (self.green_band.clone(), "G".to_string()),
            (self.blue_band.clone(), "B".to_string()),
        ]
    }
}

impl Default for PipelineProfile {
    fn default() -> Self {
        DEFAULT_PROFILE.clone()
    }
}
