//! Template lookup paths.

use serde::{Deserialize, Serialize};

pub const DEFAULT_TEMPLATE_ROOT: &str = "resources/private/templates";
pub const DEFAULT_LAYOUT_ROOT: &str = "resources/private/layouts";
pub const DEFAULT_PARTIAL_ROOT: &str = "resources/private/partials";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ViewConfig {
    #[serde(default)]
    pub template_root_paths: Vec<String>,
    #[serde(default)]
    pub layout_root_paths: Vec<String>,
    #[serde(default)]
    pub partial_root_paths: Vec<String>,
}

impl ViewConfig {
    /// Template roots, or the built-in default when none are configured.
    #[must_use]
    pub fn template_roots(&self) -> Vec<String> {
        or_default(&self.template_root_paths, DEFAULT_TEMPLATE_ROOT)
    }

    #[must_use]
    pub fn layout_roots(&self) -> Vec<String> {
        or_default(&self.layout_root_paths, DEFAULT_LAYOUT_ROOT)
    }

    #[must_use]
    pub fn partial_roots(&self) -> Vec<String> {
        or_default(&self.partial_root_paths, DEFAULT_PARTIAL_ROOT)
    }
}

fn or_default(paths: &[String], fallback: &str) -> Vec<String> {
    if paths.is_empty() {
        vec![fallback.to_string()]
    } else {
        paths.to_vec()
    }
}
