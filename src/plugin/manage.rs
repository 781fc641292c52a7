use crate::error::BumpError;
use crate::plugin::report;
use crate::types::bump::BumpKind;
use crate::types::registry::{Registry, set_manifest_version};
use crate::utils::logger::{LogLevel, Logger};
use crate::utils::{fs, path, semver};
use std::path::{Path, PathBuf};

/// What a successful bump changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    pub name: String,
    pub old_version: String,
    pub new_version: String,
    pub registry_path: PathBuf,
    /// `None` when the plugin has no manifest on disk.
    pub manifest_path: Option<PathBuf>,
}

/// Checks the raw arguments before anything touches the disk.
pub fn validate_args(
    plugin_name: Option<&str>,
    bump_type: Option<&str>,
) -> Result<(String, BumpKind), BumpError> {
    let (Some(name), Some(bump)) = (
        plugin_name.filter(|s| !s.is_empty()),
        bump_type.filter(|s| !s.is_empty()),
    ) else {
        return Err(BumpError::Usage);
    };
    let kind = bump.parse::<BumpKind>()?;
    Ok((name.to_string(), kind))
}

/// Bumps the version of `name` in the registry under `root`, then mirrors the
/// new version into the plugin's manifest when one exists.
///
/// The registry is written before the manifest. Nothing is written when the
/// record is missing or its current version is malformed.
pub async fn bump_version(
    root: &Path,
    name: &str,
    kind: BumpKind,
    logger: &Logger,
) -> Result<BumpOutcome, BumpError> {
    let registry_path = path::registry_path(root);
    logger.log_message(
        LogLevel::Debug,
        &format!("Reading registry {}", path::normalize_path(&registry_path)),
    );
    let mut registry = Registry::new(&registry_path, fs::read_json(&registry_path).await?);

    let Some(index) = registry.position(name)? else {
        return Err(BumpError::RecordNotFound {
            name: name.to_string(),
            available: registry.records()?,
        });
    };

    let record = registry.record(index)?;
    let old_version = record.version.clone().ok_or_else(|| BumpError::InvalidDocument {
        path: registry_path.clone(),
        reason: format!("plugin \"{}\" has no string \"version\"", name),
    })?;
    let new_version = semver::compute_next_version(&old_version, kind)?;
    let source = record
        .source_path()
        .map_err(|reason| registry.invalid(format!("plugin \"{}\": {}", name, reason)))?
        .map(str::to_string);

    registry.set_version(index, &new_version)?;
    fs::write_json_pretty(registry.path(), registry.document()).await?;

    let manifest_path = match source.as_deref() {
        Some(source) => update_manifest(root, source, &new_version, logger).await?,
        None => {
            logger.log_message(
                LogLevel::Debug,
                &format!("Plugin \"{}\" has no source, skipping manifest", name),
            );
            None
        }
    };

    Ok(BumpOutcome {
        name: name.to_string(),
        old_version,
        new_version,
        registry_path,
        manifest_path,
    })
}

async fn update_manifest(
    root: &Path,
    source: &str,
    new_version: &str,
    logger: &Logger,
) -> Result<Option<PathBuf>, BumpError> {
    let manifest_path = path::manifest_path(root, source);
    if !fs::is_file(&manifest_path).await? {
        logger.log_message(
            LogLevel::Debug,
            &format!("No manifest at {}, skipping", path::normalize_path(&manifest_path)),
        );
        return Ok(None);
    }

    let mut manifest = fs::read_json(&manifest_path).await?;
    set_manifest_version(&manifest_path, &mut manifest, new_version)?;
    fs::write_json_pretty(&manifest_path, &manifest).await?;
    logger.log_message(
        LogLevel::Debug,
        &format!("Updated manifest {}", path::normalize_path(&manifest_path)),
    );
    Ok(Some(manifest_path))
}

/// Prints what a validation failure means to the user.
pub fn report_validation(err: &BumpError, logger: &Logger) {
    match err {
        BumpError::Usage => report::print_usage(),
        BumpError::RecordNotFound { available, .. } => {
            logger.log_message(LogLevel::Error, &err.to_string());
            report::print_available(available);
        }
        other => logger.log_message(LogLevel::Error, &other.to_string()),
    }
}
