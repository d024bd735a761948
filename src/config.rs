//! Site configuration helpers.
//!
//! This module loads, validates, and writes the site-owned config: the koji hub,
//! SCM root, upstream cache prefixes, and the per-release tag table. Every field
//! defaults to the built-in value, so a site file only lists what it changes.
use crate::constants::{
    AFS_CACHE_PREFIX, DATA_DIR, KOJI_CONF, KOJI_HUB, OLD_KOJI_CONF, SVN_ROOT, WEB_CACHE_PREFIX,
};
use crate::error::ConfigError;
use crate::release::{tag_table, RedhatRelease, ReleaseTags};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const URL_SCHEMES: [&str; 3] = ["http://", "https://", "file://"];

/// Site-wide values consumed when preparing and submitting builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub koji_hub: String,
    pub svn_root: String,
    pub afs_cache_prefix: String,
    pub web_cache_prefix: String,
    pub data_dir: String,
    pub koji_conf: String,
    pub old_koji_conf: String,
    pub releases: BTreeMap<RedhatRelease, ReleaseTags>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            koji_hub: KOJI_HUB.to_string(),
            svn_root: SVN_ROOT.to_string(),
            afs_cache_prefix: AFS_CACHE_PREFIX.to_string(),
            web_cache_prefix: WEB_CACHE_PREFIX.to_string(),
            data_dir: DATA_DIR.to_string(),
            koji_conf: KOJI_CONF.to_string(),
            old_koji_conf: OLD_KOJI_CONF.to_string(),
            releases: tag_table(),
        }
    }
}

impl SiteConfig {
    /// Tags configured for `release`.
    pub fn tags_for(&self, release: RedhatRelease) -> Result<&ReleaseTags, ConfigError> {
        self.releases.get(&release).ok_or_else(|| {
            let configured: Vec<&str> = self.releases.keys().map(RedhatRelease::as_str).collect();
            ConfigError::UnsupportedRelease(release.as_str().to_string(), configured.join(", "))
        })
    }

    /// Cache prefixes in lookup order.
    pub fn cache_prefixes(&self) -> [&str; 2] {
        [self.afs_cache_prefix.as_str(), self.web_cache_prefix.as_str()]
    }
}

/// Render a pretty JSON config stub holding the built-in defaults.
pub fn config_stub() -> Result<String> {
    serde_json::to_string_pretty(&SiteConfig::default()).context("serialize config stub")
}

/// Parse a site config from a JSON file without validating field contents.
///
/// Release keys are still checked while parsing, so an unsupported release
/// fails here rather than at first lookup.
pub fn read_config(path: &Path) -> Result<SiteConfig> {
    let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
    let config: SiteConfig = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse site config JSON {}", path.display()))?;
    Ok(config)
}

/// Load and validate a site config from a JSON file.
pub fn load_config(path: &Path) -> Result<SiteConfig> {
    let config = read_config(path)?;
    validate_config(&config)?;
    tracing::info!(
        path = %path.display(),
        releases = config.releases.len(),
        "loaded site config"
    );
    Ok(config)
}

/// Load `path` when given, otherwise fall back to the built-in defaults.
pub fn load_config_or_default(path: Option<&Path>) -> Result<SiteConfig> {
    match path {
        Some(path) => load_config(path),
        None => {
            tracing::debug!("no site config given; using built-in defaults");
            Ok(SiteConfig::default())
        }
    }
}

/// Persist a config to disk in a stable JSON format.
pub fn write_config(path: &Path, config: &SiteConfig) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir {}", parent.display()))?;
    }
    let text = serde_json::to_string_pretty(config).context("serialize site config")?;
    fs::write(path, text.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Validate URLs and tag strings in a loaded config.
pub fn validate_config(config: &SiteConfig) -> Result<(), ConfigError> {
    for (label, url) in [
        ("koji_hub", &config.koji_hub),
        ("svn_root", &config.svn_root),
        ("afs_cache_prefix", &config.afs_cache_prefix),
        ("web_cache_prefix", &config.web_cache_prefix),
    ] {
        validate_url(label, url)?;
    }
    for (label, value) in [
        ("data_dir", &config.data_dir),
        ("koji_conf", &config.koji_conf),
        ("old_koji_conf", &config.old_koji_conf),
    ] {
        if value.trim().is_empty() {
            return Err(ConfigError::Invalid(format!("{label} must be non-empty")));
        }
    }
    if config.releases.is_empty() {
        return Err(ConfigError::Invalid(
            "releases must list at least one release".to_string(),
        ));
    }
    for (release, tags) in &config.releases {
        for (field, value) in [
            ("distro_tag", &tags.distro_tag),
            ("koji_tag", &tags.koji_tag),
            ("koji_target", &tags.koji_target),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "releases.{release}.{field} must be non-empty"
                )));
            }
        }
    }
    Ok(())
}

fn validate_url(label: &str, url: &str) -> Result<(), ConfigError> {
    let rest = URL_SCHEMES
        .iter()
        .find_map(|scheme| url.strip_prefix(scheme))
        .ok_or_else(|| {
            ConfigError::Invalid(format!(
                "{label} must start with http://, https://, or file:// (got {url:?})"
            ))
        })?;
    if rest.trim().is_empty() {
        return Err(ConfigError::Invalid(format!(
            "{label} has no location after the scheme (got {url:?})"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
