use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub(crate) fn default_user_prefix() -> Result<PathBuf> {
    if cfg!(windows) {
        let app_data = std::env::var("LOCALAPPDATA")
            .context("LOCALAPPDATA is not set; cannot resolve Windows user prefix")?;
        return Ok(PathBuf::from(app_data).join("Pakt"));
    }

    let home = std::env::var("HOME").context("HOME is not set; cannot resolve user prefix")?;
    Ok(PathBuf::from(home).join(".pakt"))
}

pub(crate) fn global_package_dir(user_prefix: &Path) -> PathBuf {
    user_prefix.join("lib").join("pkgs")
}

pub(crate) fn config_path(user_prefix: &Path) -> PathBuf {
    user_prefix.join("config.toml")
}
