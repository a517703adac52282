use std::path::{Path, PathBuf};

use pakt_core::{EngineOptions, FlatOptions, UpdateDirective, UpdateError};
use pakt_engine::{Engine, ReifyRequest};

pub(crate) const DEPTH_DEPRECATION_WARNING: &str =
    "the --depth option no longer has any effect; updates always apply to top-level packages";

pub(crate) fn resolve_update_root(
    flat: &FlatOptions,
    local_prefix: &Path,
    global_package_dir: &Path,
) -> PathBuf {
    if !flat.global {
        return local_prefix.to_path_buf();
    }

    // In global mode the engine is rooted one level above the package-storage
    // leaf under the user prefix.
    match global_package_dir.parent() {
        Some(parent) => parent.to_path_buf(),
        None => global_package_dir.to_path_buf(),
    }
}

// Deprecated flags follow one contract: detect, warn once, forward unchanged.
pub(crate) fn apply_legacy_option_shims<W>(flat: &FlatOptions, warn: &mut W)
where
    W: FnMut(&str, &str),
{
    if flat.depth != 0 {
        warn("update", DEPTH_DEPRECATION_WARNING);
    }
}

pub(crate) fn run_update<E, F, W, H>(
    packages: &[String],
    flat: &FlatOptions,
    local_prefix: &Path,
    global_package_dir: &Path,
    build_engine: F,
    mut warn: W,
    finish: H,
) -> Result<(), UpdateError>
where
    E: Engine,
    F: FnOnce(EngineOptions) -> anyhow::Result<E>,
    W: FnMut(&str, &str),
    H: FnOnce(&mut E) -> anyhow::Result<()>,
{
    apply_legacy_option_shims(flat, &mut warn);

    let root = resolve_update_root(flat, local_prefix, global_package_dir);
    let options = EngineOptions::assemble(flat, &root);
    let mut engine = build_engine(options).map_err(UpdateError::Construction)?;

    let update = UpdateDirective::from_args(packages);
    engine
        .reify(ReifyRequest { update })
        .map_err(UpdateError::Reification)?;

    finish(&mut engine).map_err(UpdateError::Finalization)
}
