//! Site configuration.
//!
//! The landing page embeds a small TOML document at build time:
//!
//! ```toml
//! log_level = "info"
//!
//! [reveal]
//! threshold = 0.1
//! root_margin = "0px 0px -50px 0px"
//!
//! [carousels]
//! moments_step = 400.0
//! events_step = 350.0
//!
//! [nav]
//! condensed_after = 50.0
//! ```
//!
//! Every field is optional; missing ones take the defaults shown above.

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;
use tracing::warn;

use crate::carousel::{CarouselController, EVENTS_STEP, MOMENTS_STEP};
use crate::nav::NavSettings;
use crate::reveal::RevealOptions;

/// Errors raised while loading or validating a [`SiteConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Malformed TOML, unknown keys, or an unparseable root margin
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),
    /// Reveal threshold outside `0..=1`
    #[error("reveal threshold must be within 0..=1, got {0}")]
    Threshold(f64),
    /// Carousel step that is not a positive, finite pixel count
    #[error("carousel step must be a positive number of pixels, got {0}")]
    Step(f64),
    /// Nav condense offset that is negative or not finite
    #[error("nav condense offset must be a non-negative number of pixels, got {0}")]
    NavOffset(f64),
    /// Log level other than trace, debug, info, warn or error
    #[error("unknown log level `{0}` (expected trace, debug, info, warn or error)")]
    LogLevel(String),
}

/// Carousel step sizes in CSS pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselSettings {
    /// Moments carousel step
    pub moments_step: f64,
    /// Events carousel step
    pub events_step: f64,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            moments_step: MOMENTS_STEP,
            events_step: EVENTS_STEP,
        }
    }
}

impl CarouselSettings {
    /// Controller for the moments carousel.
    pub fn moments(&self) -> CarouselController {
        controller_or(self.moments_step, MOMENTS_STEP)
    }

    /// Controller for the events carousel.
    pub fn events(&self) -> CarouselController {
        controller_or(self.events_step, EVENTS_STEP)
    }
}

fn controller_or(step: f64, fallback: f64) -> CarouselController {
    CarouselController::new(step).unwrap_or_else(|err| {
        warn!(%err, fallback, "using default carousel step");
        CarouselController::fixed(fallback)
    })
}

/// Everything the landing page reads at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Console log level
    pub log_level: String,
    /// Scroll reveal observer
    pub reveal: RevealOptions,
    /// Carousel steps
    pub carousels: CarouselSettings,
    /// Navigation bar
    pub nav: NavSettings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            reveal: RevealOptions::default(),
            carousels: CarouselSettings::default(),
            nav: NavSettings::default(),
        }
    }
}

impl SiteConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks ranges the type system cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.reveal.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::Threshold(threshold));
        }

        CarouselController::new(self.carousels.moments_step)?;
        CarouselController::new(self.carousels.events_step)?;

        let offset = self.nav.condensed_after;
        if !offset.is_finite() || offset < 0.0 {
            return Err(ConfigError::NavOffset(offset));
        }

        self.log_filter()?;
        Ok(())
    }

    /// The configured log level as a `tracing` filter.
    pub fn log_filter(&self) -> Result<LevelFilter, ConfigError> {
        match self.log_level.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LevelFilter::TRACE),
            "debug" => Ok(LevelFilter::DEBUG),
            "info" => Ok(LevelFilter::INFO),
            "warn" => Ok(LevelFilter::WARN),
            "error" => Ok(LevelFilter::ERROR),
            _ => Err(ConfigError::LogLevel(self.log_level.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::RootMargin;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_yields_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.reveal.threshold, 0.1);
        assert_eq!(config.carousels.moments().step(), 400.0);
        assert_eq!(config.carousels.events().step(), 350.0);
        assert_eq!(config.nav.condensed_after, 50.0);
        assert_eq!(config.log_filter().unwrap(), LevelFilter::INFO);
    }

    #[test]
    fn overrides_are_read() {
        let config = SiteConfig::from_toml_str(
            r#"
            log_level = "debug"

            [reveal]
            threshold = 0.25
            root_margin = "10px 0px"

            [carousels]
            events_step = 320.0
            "#,
        )
        .unwrap();

        assert_eq!(config.log_filter().unwrap(), LevelFilter::DEBUG);
        assert_eq!(config.reveal.threshold, 0.25);
        assert_eq!(config.reveal.root_margin, RootMargin::new(10.0, 0.0, 10.0, 0.0));
        assert_eq!(config.carousels.events_step, 320.0);
        assert_eq!(config.carousels.moments_step, 400.0);
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let err = SiteConfig::from_toml_str("[reveal]\nthreshold = 1.5").unwrap_err();
        assert!(matches!(err, ConfigError::Threshold(t) if t == 1.5));
    }

    #[test]
    fn rejects_zero_carousel_step() {
        let err = SiteConfig::from_toml_str("[carousels]\nmoments_step = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::Step(_)));
    }

    #[test]
    fn rejects_negative_nav_offset() {
        let err = SiteConfig::from_toml_str("[nav]\ncondensed_after = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::NavOffset(_)));
    }

    #[test]
    fn rejects_unknown_log_level() {
        let err = SiteConfig::from_toml_str("log_level = \"loud\"").unwrap_err();
        assert!(matches!(err, ConfigError::LogLevel(level) if level == "loud"));
    }

    #[test]
    fn only_named_log_levels_are_accepted() {
        for level in ["5", "off", "OFF", ""] {
            let source = format!("log_level = \"{level}\"");
            assert!(
                matches!(SiteConfig::from_toml_str(&source), Err(ConfigError::LogLevel(_))),
                "{level:?} should be rejected"
            );
        }
        let config = SiteConfig::from_toml_str("log_level = \" Warn \"").unwrap();
        assert_eq!(config.log_filter().unwrap(), LevelFilter::WARN);
    }

    #[test]
    fn rejects_bad_root_margin_and_unknown_keys() {
        assert!(matches!(
            SiteConfig::from_toml_str("[reveal]\nroot_margin = \"10%\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SiteConfig::from_toml_str("[nav]\nsticky = true"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn invalid_steps_fall_back_to_defaults() {
        let settings = CarouselSettings {
            moments_step: -1.0,
            events_step: f64::INFINITY,
        };
        assert_eq!(settings.moments().step(), MOMENTS_STEP);
        assert_eq!(settings.events().step(), EVENTS_STEP);
    }
}
