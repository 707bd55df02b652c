//! Canvas configuration.
//!
//! All the tunables of the view transform and the gesture engine live here,
//! so a host can override them with a JSON blob instead of recompiling.

use crate::error::DocumentError;
use serde::{Deserialize, Serialize};

/// Tunables for zoom, fit-to-content, and lasso hit-testing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasConfig {
    /// Zoom restored by `reset`.
    pub default_zoom: f64,
    /// Pan restored by `reset` (screen pixels).
    pub default_pan: (f64, f64),
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Multiplier applied when the wheel scrolls in (delta ≤ 0).
    pub zoom_in_factor: f64,
    /// Multiplier applied when the wheel scrolls out (delta > 0).
    pub zoom_out_factor: f64,
    /// World units of padding added on each side by fit-to-content.
    pub fit_margin: f64,
    /// Fraction of the container the fitted content may occupy.
    pub fit_scale: f64,
    /// Lassos smaller than this (screen pixels) are treated as misclicks.
    pub lasso_min_radius: f64,
    /// World-space y offset of the first element row, used for hit-testing.
    pub row_offset: f64,
    /// World-space distance between element rows, used for hit-testing.
    pub row_pitch: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            default_zoom: 1.0,
            default_pan: (0.0, 0.0),
            min_zoom: 0.05,
            max_zoom: 8.0,
            zoom_in_factor: 1.1,
            zoom_out_factor: 0.9,
            fit_margin: 100.0,
            fit_scale: 0.9,
            lasso_min_radius: 10.0,
            row_offset: 80.0,
            row_pitch: 60.0,
        }
    }
}

impl CanvasConfig {
    /// Parse a (possibly partial) JSON config; missing keys keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, DocumentError> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| DocumentError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the transform math cannot work with.
    pub fn validate(&self) -> Result<(), DocumentError> {
        if !(self.min_zoom > 0.0) {
            return Err(DocumentError::Config("minZoom must be positive".into()));
        }
        if self.max_zoom < self.min_zoom {
            return Err(DocumentError::Config("maxZoom must be >= minZoom".into()));
        }
        if !(self.default_zoom >= self.min_zoom && self.default_zoom <= self.max_zoom) {
            return Err(DocumentError::Config(
                "defaultZoom must lie within [minZoom, maxZoom]".into(),
            ));
        }
        if !(self.zoom_in_factor > 1.0)
            || !(self.zoom_out_factor > 0.0 && self.zoom_out_factor < 1.0)
        {
            return Err(DocumentError::Config(
                "zoomInFactor must be > 1 and zoomOutFactor in (0, 1)".into(),
            ));
        }
        if !(self.fit_scale > 0.0 && self.fit_scale <= 1.0) {
            return Err(DocumentError::Config("fitScale must be in (0, 1]".into()));
        }
        if self.fit_margin < 0.0 || self.lasso_min_radius < 0.0 || !(self.row_pitch > 0.0) {
            return Err(DocumentError::Config(
                "fitMargin and lassoMinRadius must be >= 0, rowPitch > 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(CanvasConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = CanvasConfig::from_json(r#"{ "maxZoom": 4.0 }"#).unwrap();
        assert_eq!(config.max_zoom, 4.0);
        assert_eq!(config.min_zoom, 0.05);
        assert_eq!(config.fit_margin, 100.0);
    }

    #[test]
    fn rejects_inverted_zoom_bounds() {
        let err = CanvasConfig::from_json(r#"{ "minZoom": 2.0, "maxZoom": 1.0 }"#).unwrap_err();
        assert!(matches!(err, DocumentError::Config(_)));
    }

    #[test]
    fn rejects_non_numeric_values() {
        assert!(CanvasConfig::from_json(r#"{ "rowPitch": "wide" }"#).is_err());
    }
}
