#![forbid(unsafe_code)]

//! Dock configuration.
//!
//! Two layers:
//!
//! - [`DockOptions`] is the inbound, serde-friendly shape hosts write in JSON
//!   (camelCase keys, every field optional).
//! - [`DockConfig`] is the validated form the engine runs on.
//!
//! `DockOptions → DockConfig` goes through `TryFrom` and rejects values that
//! can only be typos (non-finite numbers, a scale below 1, a non-positive
//! mass). A non-positive magnification range is *not* an error: it is
//! accepted and simply turns magnification off. The `with_*` builders on
//! `DockConfig` never fail; they clamp instead.

use fdock_core::animation::Spring;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::magnify::Magnifier;
use crate::orientation::{Orientation, OrientationLayout};

pub const DEFAULT_MAGNIFICATION_SCALE: f64 = 1.5;
pub const DEFAULT_MAGNIFICATION_RANGE: f64 = 150.0;

/// Item size preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DockSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl DockSize {
    /// Base item size in pixels.
    #[must_use]
    pub const fn pixels(self) -> f64 {
        match self {
            Self::Sm => 40.0,
            Self::Md => 52.0,
            Self::Lg => 64.0,
        }
    }
}

/// Spring constants for item size smoothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MotionParams {
    pub mass: f64,
    pub stiffness: f64,
    pub damping: f64,
    /// Distance to target (px) under which an item may come to rest.
    pub rest_threshold: f64,
    /// Speed (px/s) under which an item may come to rest.
    pub velocity_threshold: f64,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            mass: 0.1,
            stiffness: 150.0,
            damping: 12.0,
            rest_threshold: 0.5,
            velocity_threshold: 5.0,
        }
    }
}

impl MotionParams {
    /// A resting spring at `size` configured with these constants.
    #[must_use]
    pub fn spring(&self, size: f64) -> Spring {
        Spring::resting(size)
            .with_mass(self.mass)
            .with_stiffness(self.stiffness)
            .with_damping(self.damping)
            .with_rest_threshold(self.rest_threshold)
            .with_velocity_threshold(self.velocity_threshold)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        finite("motion.mass", self.mass)?;
        finite("motion.stiffness", self.stiffness)?;
        finite("motion.damping", self.damping)?;
        finite("motion.restThreshold", self.rest_threshold)?;
        finite("motion.velocityThreshold", self.velocity_threshold)?;
        if self.mass <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "motion.mass",
                value: self.mass,
            });
        }
        if self.stiffness <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "motion.stiffness",
                value: self.stiffness,
            });
        }
        if self.rest_threshold <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "motion.restThreshold",
                value: self.rest_threshold,
            });
        }
        if self.velocity_threshold <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "motion.velocityThreshold",
                value: self.velocity_threshold,
            });
        }
        if self.damping < 0.0 {
            return Err(ConfigError::Negative {
                field: "motion.damping",
                value: self.damping,
            });
        }
        Ok(())
    }
}

/// Errors from [`DockConfig::try_from`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("magnificationScale must be >= 1.0, got {value}")]
    ScaleBelowOne { value: f64 },

    #[error("{field} must be > 0, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must be >= 0, got {value}")]
    Negative { field: &'static str, value: f64 },
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

/// Host-facing options, as found in a JSON config or component props.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DockOptions {
    pub orientation: Orientation,
    pub size: DockSize,
    pub magnification: bool,
    pub magnification_scale: f64,
    pub magnification_range: f64,
    pub show_labels: bool,
    pub auto_hide: bool,
    pub motion: MotionParams,
}

impl Default for DockOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            size: DockSize::default(),
            magnification: true,
            magnification_scale: DEFAULT_MAGNIFICATION_SCALE,
            magnification_range: DEFAULT_MAGNIFICATION_RANGE,
            show_labels: true,
            auto_hide: false,
            motion: MotionParams::default(),
        }
    }
}

/// Validated dock configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DockConfig {
    orientation: Orientation,
    size: DockSize,
    magnification: bool,
    scale: f64,
    range: f64,
    show_labels: bool,
    auto_hide: bool,
    motion: MotionParams,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            size: DockSize::default(),
            magnification: true,
            scale: DEFAULT_MAGNIFICATION_SCALE,
            range: DEFAULT_MAGNIFICATION_RANGE,
            show_labels: true,
            auto_hide: false,
            motion: MotionParams::default(),
        }
    }
}

impl TryFrom<DockOptions> for DockConfig {
    type Error = ConfigError;

    fn try_from(options: DockOptions) -> Result<Self, Self::Error> {
        finite("magnificationScale", options.magnification_scale)?;
        finite("magnificationRange", options.magnification_range)?;
        if options.magnification_scale < 1.0 {
            return Err(ConfigError::ScaleBelowOne {
                value: options.magnification_scale,
            });
        }
        options.motion.validate()?;

        #[cfg(feature = "tracing")]
        if options.magnification && options.magnification_range <= 0.0 {
            tracing::warn!(
                message = "dock.config.degenerate_range",
                range = options.magnification_range
            );
        }

        Ok(Self {
            orientation: options.orientation,
            size: options.size,
            magnification: options.magnification,
            scale: options.magnification_scale,
            range: options.magnification_range,
            show_labels: options.show_labels,
            auto_hide: options.auto_hide,
            motion: options.motion,
        })
    }
}

impl From<&DockConfig> for DockOptions {
    fn from(config: &DockConfig) -> Self {
        Self {
            orientation: config.orientation,
            size: config.size,
            magnification: config.magnification,
            magnification_scale: config.scale,
            magnification_range: config.range,
            show_labels: config.show_labels,
            auto_hide: config.auto_hide,
            motion: config.motion,
        }
    }
}

impl DockConfig {
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: DockSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_magnification(mut self, enabled: bool) -> Self {
        self.magnification = enabled;
        self
    }

    /// Peak scale factor. Clamped to `>= 1.0`; NaN becomes `1.0`.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        let clamped = if scale.is_nan() { 1.0 } else { scale.max(1.0) };
        #[cfg(feature = "tracing")]
        if clamped != scale {
            tracing::debug!(
                message = "dock.config.clamped_scale",
                requested = scale,
                scale = clamped
            );
        }
        self.scale = clamped;
        self
    }

    /// Falloff radius in pixels. Non-positive values disable magnification.
    #[must_use]
    pub fn with_range(mut self, range: f64) -> Self {
        self.range = range;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    #[must_use]
    pub fn with_auto_hide(mut self, auto_hide: bool) -> Self {
        self.auto_hide = auto_hide;
        self
    }

    #[must_use]
    pub fn with_motion(mut self, motion: MotionParams) -> Self {
        self.motion = motion;
        self
    }

    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub const fn layout(&self) -> OrientationLayout {
        self.orientation.layout()
    }

    #[must_use]
    pub const fn size(&self) -> DockSize {
        self.size
    }

    /// Unmagnified item size in pixels.
    #[must_use]
    pub const fn base_size(&self) -> f64 {
        self.size.pixels()
    }

    #[must_use]
    pub const fn magnification(&self) -> bool {
        self.magnification
    }

    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub const fn range(&self) -> f64 {
        self.range
    }

    #[must_use]
    pub const fn show_labels(&self) -> bool {
        self.show_labels
    }

    #[must_use]
    pub const fn auto_hide(&self) -> bool {
        self.auto_hide
    }

    #[must_use]
    pub const fn motion(&self) -> MotionParams {
        self.motion
    }

    /// The magnification curve this configuration describes.
    #[must_use]
    pub fn magnifier(&self) -> Magnifier {
        Magnifier::new(self.base_size(), self.scale, self.range, self.magnification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_presets() {
        assert_eq!(DockSize::Sm.pixels(), 40.0);
        assert_eq!(DockSize::Md.pixels(), 52.0);
        assert_eq!(DockSize::Lg.pixels(), 64.0);
    }

    #[test]
    fn defaults_match_options_defaults() {
        let from_options = DockConfig::try_from(DockOptions::default()).unwrap();
        assert_eq!(from_options, DockConfig::default());
        assert_eq!(from_options.base_size(), 52.0);
        assert_eq!(from_options.scale(), 1.5);
        assert_eq!(from_options.range(), 150.0);
        assert!(!from_options.auto_hide());
    }

    #[test]
    fn parses_camel_case_json() {
        let options: DockOptions = serde_json::from_str(
            r#"{
                "orientation": "left",
                "size": "lg",
                "magnification": true,
                "magnificationScale": 2.0,
                "magnificationRange": 120,
                "showLabels": false,
                "autoHide": true
            }"#,
        )
        .unwrap();
        let config = DockConfig::try_from(options).unwrap();
        assert_eq!(config.orientation(), Orientation::Left);
        assert_eq!(config.base_size(), 64.0);
        assert_eq!(config.magnifier().peak(), 128.0);
        assert!(!config.show_labels());
        assert!(config.auto_hide());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let options: DockOptions = serde_json::from_str(r#"{"size":"sm"}"#).unwrap();
        assert_eq!(options.magnification_scale, 1.5);
        assert_eq!(options.motion, MotionParams::default());
    }

    #[test]
    fn scale_below_one_rejected() {
        let options = DockOptions {
            magnification_scale: 0.8,
            ..DockOptions::default()
        };
        assert_eq!(
            DockConfig::try_from(options),
            Err(ConfigError::ScaleBelowOne { value: 0.8 })
        );
    }

    #[test]
    fn non_finite_rejected() {
        let options = DockOptions {
            magnification_range: f64::INFINITY,
            ..DockOptions::default()
        };
        let err = DockConfig::try_from(options).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonFinite {
                field: "magnificationRange",
                ..
            }
        ));
    }

    #[test]
    fn zero_range_accepted_but_inactive() {
        let options = DockOptions {
            magnification_range: 0.0,
            ..DockOptions::default()
        };
        let config = DockConfig::try_from(options).unwrap();
        assert!(!config.magnifier().is_active());
    }

    #[test]
    fn bad_motion_rejected() {
        let options = DockOptions {
            motion: MotionParams {
                mass: 0.0,
                ..MotionParams::default()
            },
            ..DockOptions::default()
        };
        assert!(matches!(
            DockConfig::try_from(options),
            Err(ConfigError::NonPositive {
                field: "motion.mass",
                ..
            })
        ));
    }

    #[test]
    fn zero_rest_thresholds_rejected() {
        for (json, field) in [
            (r#"{"motion":{"restThreshold":0}}"#, "motion.restThreshold"),
            (r#"{"motion":{"velocityThreshold":0}}"#, "motion.velocityThreshold"),
            (r#"{"motion":{"restThreshold":-1}}"#, "motion.restThreshold"),
        ] {
            let options: DockOptions = serde_json::from_str(json).unwrap();
            match DockConfig::try_from(options) {
                Err(ConfigError::NonPositive { field: got, .. }) => assert_eq!(got, field),
                other => panic!("{json}: expected NonPositive, got {other:?}"),
            }
        }
    }

    #[test]
    fn tiny_thresholds_still_let_items_settle() {
        let params = MotionParams {
            rest_threshold: 1e-12,
            velocity_threshold: 1e-12,
            ..MotionParams::default()
        };
        let mut spring = params.spring(52.0);
        spring.set_target(78.0);
        spring.advance(std::time::Duration::from_secs(5));
        assert!(spring.is_at_rest());
    }

    #[test]
    fn builder_clamps_scale() {
        assert_eq!(DockConfig::default().with_scale(0.2).scale(), 1.0);
        assert_eq!(DockConfig::default().with_scale(f64::NAN).scale(), 1.0);
        assert_eq!(DockConfig::default().with_scale(2.5).scale(), 2.5);
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = ConfigError::NonFinite {
            field: "magnificationScale",
            value: f64::NAN,
        };
        assert!(err.to_string().contains("magnificationScale"));
    }

    #[test]
    fn options_roundtrip_through_config() {
        let config = DockConfig::default()
            .with_orientation(Orientation::Right)
            .with_auto_hide(true);
        let options = DockOptions::from(&config);
        assert_eq!(DockConfig::try_from(options).unwrap(), config);
    }

    #[test]
    fn motion_spring_starts_at_rest() {
        let spring = MotionParams::default().spring(52.0);
        assert!(spring.is_at_rest());
        assert_eq!(spring.position(), 52.0);
        assert_eq!(spring.mass(), 0.1);
    }
}
