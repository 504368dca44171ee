//! # Engine Configuration
//!
//! One configuration record replaces the two near-duplicate particle
//! systems of old: the footprint and paw-print presets differ only in
//! renderer strategy and a handful of tuning constants.
//!
//! Loaded once at startup (TOML), validated before use. The two values a
//! host may change at runtime - scale factor and gap - go through
//! [`crate::Engine::set_style`] instead of a config reload.

use std::path::Path;

use serde::{Deserialize, Serialize};

use sandtrail_shared::constants;

use crate::error::ConfigError;

/// Which shape renderer strategy the engine uses.
///
/// The choice never affects input or lifecycle logic - it is a pluggable
/// back end selected at construction time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RendererKind {
    /// Procedurally stroke-and-fill the fixed footprint silhouette polygon.
    #[default]
    Polygon,
    /// Stamp a pre-loaded sprite image.
    Sprite,
}

/// Tuning for one print engine instance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Shape renderer strategy.
    pub renderer: RendererKind,
    /// Minimum travel distance (logical px) between consecutive prints,
    /// before the dynamic scale factor is applied.
    pub stride: f32,
    /// Lateral gap (logical px) between alternating left/right prints.
    pub gap: f32,
    /// Print lifetime before removal (milliseconds).
    pub expiry_ms: f64,
    /// Initial dynamic scale factor for print size and stride.
    pub scale_factor: f32,
    /// Rendered print height (logical px) before the scale factor.
    pub print_size: f32,
    /// Height (local units) the silhouette/sprite artwork was authored at.
    pub reference_size: f32,
    /// Base opacity for sprite stamps, multiplied into the age fade.
    pub sprite_opacity: f32,
    /// Hard cap on concurrent live prints; oldest is evicted beyond this.
    pub max_live: usize,
}

impl EngineConfig {
    /// Beach footprint preset: procedural silhouette, long stride.
    #[must_use]
    pub fn footprints() -> Self {
        Self {
            renderer: RendererKind::Polygon,
            stride: constants::FOOTPRINT_STRIDE,
            gap: constants::FOOTPRINT_GAP,
            expiry_ms: constants::FOOTPRINT_EXPIRY_MS,
            scale_factor: 1.0,
            print_size: constants::FOOTPRINT_SIZE,
            reference_size: constants::REFERENCE_SIZE,
            sprite_opacity: constants::SPRITE_BASE_OPACITY,
            max_live: constants::MAX_LIVE_PRINTS,
        }
    }

    /// Cat paw-print preset: sprite stamp, short stride, slower fade.
    #[must_use]
    pub fn paw_prints() -> Self {
        Self {
            renderer: RendererKind::Sprite,
            stride: constants::PAW_STRIDE,
            gap: constants::PAW_GAP,
            expiry_ms: constants::PAW_EXPIRY_MS,
            scale_factor: 1.0,
            print_size: constants::PAW_SIZE,
            reference_size: constants::REFERENCE_SIZE,
            sprite_opacity: constants::SPRITE_BASE_OPACITY,
            max_live: constants::MAX_LIVE_PRINTS,
        }
    }

    /// Parses and validates a configuration from a TOML string.
    ///
    /// Missing fields fall back to the footprint preset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::InvalidValue`] for out-of-range fields.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise
    /// as [`Self::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Checks every field is in the range the engine can operate with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::require_positive("stride", f64::from(self.stride))?;
        Self::require_positive("gap", f64::from(self.gap))?;
        Self::require_positive("expiry_ms", self.expiry_ms)?;
        Self::require_positive("scale_factor", f64::from(self.scale_factor))?;
        Self::require_positive("print_size", f64::from(self.print_size))?;
        Self::require_positive("reference_size", f64::from(self.reference_size))?;

        if !self.sprite_opacity.is_finite()
            || self.sprite_opacity < 0.0
            || self.sprite_opacity > 1.0
        {
            return Err(ConfigError::InvalidValue {
                field: "sprite_opacity",
                value: f64::from(self.sprite_opacity),
            });
        }

        if self.max_live == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_live",
                value: 0.0,
            });
        }

        Ok(())
    }

    fn require_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue { field, value })
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::footprints()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert!(EngineConfig::footprints().validate().is_ok());
        assert!(EngineConfig::paw_prints().validate().is_ok());
    }

    #[test]
    fn test_presets_differ_only_in_skin_and_tuning() {
        let feet = EngineConfig::footprints();
        let paws = EngineConfig::paw_prints();

        assert_eq!(feet.renderer, RendererKind::Polygon);
        assert_eq!(paws.renderer, RendererKind::Sprite);
        assert!(feet.stride > paws.stride);
        assert!(paws.expiry_ms > feet.expiry_ms);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            renderer = "sprite"
            stride = 48.0
            "#,
        )
        .unwrap();

        assert_eq!(config.renderer, RendererKind::Sprite);
        assert_eq!(config.stride, 48.0);
        assert_eq!(config.gap, EngineConfig::footprints().gap);
    }

    #[test]
    fn test_rejects_non_positive_stride() {
        let err = EngineConfig::from_toml_str("stride = 0.0").unwrap_err();
        match err {
            ConfigError::InvalidValue { field, .. } => assert_eq!(field, "stride"),
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_opacity_above_one() {
        let err = EngineConfig::from_toml_str("sprite_opacity = 1.5").unwrap_err();
        match err {
            ConfigError::InvalidValue { field, .. } => assert_eq!(field, "sprite_opacity"),
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(matches!(
            EngineConfig::from_toml_str("stride = ["),
            Err(ConfigError::Parse(_))
        ));
    }
}
