use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rigsmith_core::config::{AppConfig, ConfigOverrides, LoadOptions};
use rigsmith_core::{ApplicationError, Build, Catalog, PartId};

/// Catalog location and selected part IDs shared by every build command.
#[derive(Clone, Debug, Default)]
pub struct BuildInput {
    pub catalog: Option<PathBuf>,
    pub parts: Vec<String>,
}

/// Everything a build command needs after the input has been resolved.
#[derive(Debug)]
pub struct LoadedBuild {
    pub config: AppConfig,
    pub catalog: Catalog,
    pub build: Build,
}

pub fn load_config(catalog: Option<PathBuf>) -> Result<AppConfig, ApplicationError> {
    AppConfig::load(LoadOptions {
        overrides: ConfigOverrides { catalog_path: catalog, ..ConfigOverrides::default() },
        ..LoadOptions::default()
    })
    .map_err(|error| ApplicationError::Configuration(error.to_string()))
}

pub fn read_catalog(path: &Path) -> Result<Catalog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("could not read catalog `{}`", path.display()))?;
    let catalog: Catalog = serde_json::from_str(&raw)
        .with_context(|| format!("could not parse catalog `{}`", path.display()))?;
    Ok(catalog)
}

pub fn read_weights(path: &Path) -> Result<HashMap<PartId, f64>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("could not read weights `{}`", path.display()))?;
    let weights = serde_json::from_str(&raw)
        .with_context(|| format!("could not parse weights `{}`", path.display()))?;
    Ok(weights)
}

/// Places each selected part into a build. A later part replaces an earlier one
/// in a single-part slot.
pub fn assemble_build(catalog: &Catalog, ids: &[String]) -> Result<Build, ApplicationError> {
    let mut build = Build::new();
    for id in ids {
        let part_id = PartId::new(id.trim());
        let part = catalog.find(&part_id).ok_or_else(|| {
            ApplicationError::Catalog(format!("part `{part_id}` is not in the catalog"))
        })?;
        if let Some(replaced) = build.insert(part.clone())? {
            tracing::warn!(
                event_name = "cli.build.slot_replaced",
                replaced = %replaced.id,
                part_id = %part_id,
                "part replaced an earlier selection in the same slot"
            );
        }
    }
    Ok(build)
}

pub fn load_build(input: &BuildInput) -> Result<LoadedBuild, ApplicationError> {
    let config = load_config(input.catalog.clone())?;
    let path = config.catalog.path.clone().ok_or_else(|| {
        ApplicationError::Configuration(
            "no catalog given; pass --catalog or set catalog.path".to_string(),
        )
    })?;
    let catalog = read_catalog(&path).map_err(catalog_error)?;
    let build = assemble_build(&catalog, &input.parts)?;

    tracing::debug!(
        event_name = "cli.build.loaded",
        catalog = %path.display(),
        catalog_size = catalog.len(),
        selected = input.parts.len(),
        "build input loaded"
    );

    Ok(LoadedBuild { config, catalog, build })
}

pub fn catalog_error(error: anyhow::Error) -> ApplicationError {
    ApplicationError::Catalog(format!("{error:#}"))
}

pub fn part_ids(build: &Build) -> Vec<&str> {
    build.parts().map(|part| part.id.as_str()).collect()
}
