//! # nkc-config
//!
//! Layered configuration loading for the institution directory using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`NKC_*` prefix, `__` as separator)
//! 2. Project-level `.nkc/config.toml`
//! 3. User-level `~/.config/nkc/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `NKC_LISTING__ITEMS_PER_PAGE` -> `listing.items_per_page`,
//! `NKC_GEO__RADIUS` -> `geo.radius`, etc. The `__` (double underscore)
//! separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use nkc_config::NkcConfig;
//!
//! let config = NkcConfig::load_with_dotenv().expect("config");
//!
//! if config.geo.is_configured() {
//!     println!("radius: {} km", config.geo.radius);
//! }
//! ```

mod detail;
mod error;
mod geo;
mod listing;
mod map;
mod search;
mod view;

pub use detail::DetailConfig;
pub use error::ConfigError;
pub use geo::GeoConfig;
pub use listing::ListingConfig;
pub use map::MapConfig;
pub use search::SearchConfig;
pub use view::ViewConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NkcConfig {
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub geo: GeoConfig,
    #[serde(default)]
    pub detail: DetailConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

impl NkcConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`NkcConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] when a value fails [`NkcConfig::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`NkcConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load configuration with an explicit project-level file instead of
    /// `.nkc/config.toml`.
    ///
    /// # Errors
    ///
    /// Same as [`NkcConfig::load`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_with_project_file(path).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with_project_file(Path::new(".nkc/config.toml"))
    }

    fn figment_with_project_file(project_file: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        if project_file.exists() {
            figment = figment.merge(Toml::file(project_file));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("NKC_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("nkc").join("config.toml"))
    }

    /// Reject values no listing can work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero page size or a
    /// negative radius.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.listing.items_per_page == 0 {
            return Err(ConfigError::InvalidValue {
                field: "listing.items_per_page".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.geo.radius < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "geo.radius".into(),
                reason: format!("must not be negative, got {}", self.geo.radius),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = NkcConfig::default();
        assert!(!config.geo.is_configured());
        assert!(config.detail.opening_hours);
        assert_eq!(config.listing.items_per_page, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = NkcConfig::figment();
        let config: NkcConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.map.info_template, "Institution/MapInfo");
        assert!(config.search.page_ids.is_empty());
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let mut config = NkcConfig::default();
        config.listing.items_per_page = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("listing.items_per_page"));
    }

    #[test]
    fn negative_radius_is_rejected() {
        let mut config = NkcConfig::default();
        config.geo.radius = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "geo.radius"
        ));
    }
}
