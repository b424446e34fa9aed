use std::path::PathBuf;

use anyhow::Context;
use nkc_config::NkcConfig;
use nkc_view::InstitutionController;
use nkc_view::assets::LocalAssets;
use nkc_view::memory::{Dataset, InMemoryCategories, InMemorySource};
use nkc_view::template::FileTemplateRenderer;

use crate::cli::GlobalFlags;

/// Collaborators shared by every command of one invocation.
pub struct AppContext {
    config: NkcConfig,
    source: InMemorySource,
    categories: InMemoryCategories,
    renderer: FileTemplateRenderer,
    assets: LocalAssets,
}

impl AppContext {
    /// Load the data file and wire collaborators relative to `project_root`.
    pub fn init(
        project_root: PathBuf,
        config: NkcConfig,
        flags: &GlobalFlags,
    ) -> anyhow::Result<Self> {
        let dataset = match flags.data.as_deref() {
            Some(path) => load_dataset(&project_root.join(path))?,
            None => {
                tracing::warn!("no --data file given; serving an empty directory");
                Dataset::default()
            }
        };
        let (source, categories) = dataset.into_parts();

        Ok(Self {
            renderer: FileTemplateRenderer::new(&project_root),
            assets: LocalAssets::new(project_root.join(&config.map.asset_root)),
            config,
            source,
            categories,
        })
    }

    #[must_use]
    pub fn controller(&self) -> InstitutionController<'_> {
        InstitutionController::new(
            &self.config,
            &self.source,
            &self.categories,
            &self.renderer,
            &self.assets,
        )
    }
}

fn load_dataset(path: &std::path::Path) -> anyhow::Result<Dataset> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read data file {}", path.display()))?;
    Dataset::from_json(&json).with_context(|| format!("invalid data file {}", path.display()))
}
