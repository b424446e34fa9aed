//! Geo-radius search configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeoConfig {
    /// Whether listings are restricted to a radius around a center point.
    #[serde(default)]
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// Search radius in kilometres.
    #[serde(default)]
    pub radius: f64,
}

impl GeoConfig {
    /// Enabled, both coordinates present, and a positive radius.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.enabled && self.latitude.is_some() && self.longitude.is_some() && self.radius > 0.0
    }
}
