use std::path::Path;

use anyhow::Context;
use nkc_config::NkcConfig;

/// Load `.env` and the layered configuration for `project_root`.
pub fn load_config(project_root: &Path) -> anyhow::Result<NkcConfig> {
    load_project_dotenv(project_root)?;

    let config_file = project_root.join(".nkc").join("config.toml");
    NkcConfig::load_from(&config_file)
        .with_context(|| format!("failed to load configuration for {}", project_root.display()))
}

fn load_project_dotenv(project_root: &Path) -> anyhow::Result<()> {
    let env_path = project_root.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::load_config;

    #[test]
    fn project_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".nkc")).unwrap();
        std::fs::write(
            dir.path().join(".nkc/config.toml"),
            "[detail]\nother_group_label = \"Sonstige\"\n",
        )
        .unwrap();

        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.detail.other_group_label, "Sonstige");
    }

    #[test]
    fn invalid_project_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".nkc")).unwrap();
        std::fs::write(
            dir.path().join(".nkc/config.toml"),
            "[listing]\nitems_per_page = 0\n",
        )
        .unwrap();

        let error = load_config(dir.path()).unwrap_err();
        assert!(format!("{error:#}").contains("failed to load configuration"));
    }
}
