use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlatOptions {
    #[serde(default)]
    pub global: bool,
    #[serde(default)]
    pub depth: u32,
    #[serde(flatten)]
    pub rest: BTreeMap<String, serde_json::Value>,
}

impl FlatOptions {
    pub fn from_toml_str(input: &str) -> anyhow::Result<Self> {
        toml::from_str(input).context("failed to parse pakt configuration")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineOptions {
    pub path: PathBuf,
    #[serde(flatten)]
    pub flat: FlatOptions,
}

impl EngineOptions {
    pub fn assemble(flat: &FlatOptions, root: &Path) -> Self {
        let mut flat = flat.clone();
        // `path` is owned by the assembler; a passthrough value never survives.
        flat.rest.remove("path");
        Self {
            path: root.to_path_buf(),
            flat,
        }
    }
}
