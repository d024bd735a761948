//! Build options, their defaults, and the allbuild variant.
//!
//! Defaults are immutable values. Variants are produced by applying a named
//! [`OverrideSet`] to a base, so the exact set of changes stays auditable.
use crate::constants::AUTO;
use crate::error::ConfigError;
use crate::release::{RedhatRelease, ReleaseTags};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Name of every knob in [`BuildOpts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OptName {
    Autoclean,
    CachePrefix,
    FullExtract,
    Kojilogin,
    KojiWrapper,
    MockClean,
    MockConfig,
    MockConfigFromKoji,
    NoWait,
    RedhatRelease,
    RegenRepos,
    Scratch,
    Svn,
    TargetArch,
    WorkingDirectory,
}

/// Value types a build option may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptKind {
    Bool,
    OptionalBool,
    Str,
    OptionalStr,
    Release,
}

impl OptName {
    pub const ALL: [OptName; 15] = [
        OptName::Autoclean,
        OptName::CachePrefix,
        OptName::FullExtract,
        OptName::Kojilogin,
        OptName::KojiWrapper,
        OptName::MockClean,
        OptName::MockConfig,
        OptName::MockConfigFromKoji,
        OptName::NoWait,
        OptName::RedhatRelease,
        OptName::RegenRepos,
        OptName::Scratch,
        OptName::Svn,
        OptName::TargetArch,
        OptName::WorkingDirectory,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OptName::Autoclean => "autoclean",
            OptName::CachePrefix => "cache_prefix",
            OptName::FullExtract => "full_extract",
            OptName::Kojilogin => "kojilogin",
            OptName::KojiWrapper => "koji_wrapper",
            OptName::MockClean => "mock_clean",
            OptName::MockConfig => "mock_config",
            OptName::MockConfigFromKoji => "mock_config_from_koji",
            OptName::NoWait => "no_wait",
            OptName::RedhatRelease => "redhat_release",
            OptName::RegenRepos => "regen_repos",
            OptName::Scratch => "scratch",
            OptName::Svn => "svn",
            OptName::TargetArch => "target_arch",
            OptName::WorkingDirectory => "working_directory",
        }
    }

    pub fn kind(&self) -> OptKind {
        match self {
            OptName::Autoclean
            | OptName::FullExtract
            | OptName::KojiWrapper
            | OptName::MockClean
            | OptName::NoWait
            | OptName::RegenRepos
            | OptName::Scratch => OptKind::Bool,
            OptName::Svn => OptKind::OptionalBool,
            OptName::CachePrefix | OptName::MockConfig | OptName::WorkingDirectory => OptKind::Str,
            OptName::Kojilogin | OptName::MockConfigFromKoji | OptName::TargetArch => {
                OptKind::OptionalStr
            }
            OptName::RedhatRelease => OptKind::Release,
        }
    }
}

impl fmt::Display for OptName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        OptName::ALL
            .into_iter()
            .find(|name| name.as_str() == wanted)
            .ok_or_else(|| ConfigError::UnknownOption(s.to_string()))
    }
}

impl OptKind {
    fn describe(&self) -> &'static str {
        match self {
            OptKind::Bool => "a boolean",
            OptKind::OptionalBool => "a boolean or null",
            OptKind::Str => "a string",
            OptKind::OptionalStr => "a string or null",
            OptKind::Release => "a redhat release",
        }
    }
}

/// Loosely typed option value, as found in the mapping view of [`BuildOpts`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptValue {
    Null,
    Bool(bool),
    Str(String),
}

impl OptValue {
    /// Parse command-line text into the value type `name` expects.
    pub fn parse_for(name: OptName, text: &str) -> Result<OptValue, ConfigError> {
        let trimmed = text.trim();
        let lowered = trimmed.to_ascii_lowercase();
        let invalid = || ConfigError::InvalidValue {
            option: name.as_str(),
            expected: name.kind().describe(),
            got: format!("{text:?}"),
        };
        let is_null = matches!(lowered.as_str(), "none" | "null" | "");
        match name.kind() {
            OptKind::Bool | OptKind::OptionalBool => {
                if is_null && name.kind() == OptKind::OptionalBool {
                    return Ok(OptValue::Null);
                }
                match lowered.as_str() {
                    "true" | "yes" | "on" | "1" => Ok(OptValue::Bool(true)),
                    "false" | "no" | "off" | "0" => Ok(OptValue::Bool(false)),
                    _ => Err(invalid()),
                }
            }
            OptKind::OptionalStr if is_null => Ok(OptValue::Null),
            OptKind::Str if trimmed.is_empty() => Err(invalid()),
            OptKind::Str | OptKind::OptionalStr => Ok(OptValue::Str(trimmed.to_string())),
            OptKind::Release => {
                let release: RedhatRelease = trimmed.parse()?;
                Ok(OptValue::Str(release.as_str().to_string()))
            }
        }
    }
}

impl fmt::Display for OptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptValue::Null => f.write_str("null"),
            OptValue::Bool(value) => write!(f, "{value}"),
            OptValue::Str(value) => f.write_str(value),
        }
    }
}

impl From<bool> for OptValue {
    fn from(value: bool) -> Self {
        OptValue::Bool(value)
    }
}

impl From<&str> for OptValue {
    fn from(value: &str) -> Self {
        OptValue::Str(value.to_string())
    }
}

/// A named, ordered list of option assignments applied on top of a base.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverrideSet {
    pub name: String,
    pub entries: Vec<(OptName, OptValue)>,
}

impl OverrideSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Append an assignment; later entries win over earlier ones.
    pub fn with(mut self, name: OptName, value: impl Into<OptValue>) -> Self {
        self.entries.push((name, value.into()));
        self
    }

    /// Parse and append a `name=value` assignment.
    pub fn push_assignment(&mut self, assignment: &str) -> Result<(), ConfigError> {
        let (raw_name, raw_value) = assignment
            .split_once('=')
            .ok_or_else(|| ConfigError::MalformedAssignment(assignment.to_string()))?;
        let name: OptName = raw_name.parse()?;
        let value = OptValue::parse_for(name, raw_value)?;
        self.entries.push((name, value));
        Ok(())
    }

    /// Option names touched by this set, without duplicates.
    pub fn names(&self) -> Vec<OptName> {
        let mut names: Vec<OptName> = self.entries.iter().map(|(name, _)| *name).collect();
        names.sort();
        names.dedup();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Options allbuild mode lets the user override.
pub const ALLBUILD_ALLOWED_OPTNAMES: [OptName; 4] = [
    OptName::Kojilogin,
    OptName::KojiWrapper,
    OptName::NoWait,
    OptName::Scratch,
];

/// Overrides turning the common defaults into the allbuild defaults.
pub fn allbuild_overrides() -> OverrideSet {
    OverrideSet::new("allbuild")
        .with(OptName::NoWait, true)
        .with(OptName::RegenRepos, false)
        .with(OptName::Scratch, false)
        .with(OptName::Svn, true)
}

/// Reject user overrides of options allbuild mode does not allow.
pub fn restrict_to_allowed(overrides: &OverrideSet) -> Result<(), ConfigError> {
    match overrides
        .names()
        .into_iter()
        .find(|name| !ALLBUILD_ALLOWED_OPTNAMES.contains(name))
    {
        Some(name) => Err(ConfigError::NotOverridable(name.as_str())),
        None => Ok(()),
    }
}

/// Typed set of build options controlling how a package is built and submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildOpts {
    pub autoclean: bool,
    pub cache_prefix: String,
    pub full_extract: bool,
    pub kojilogin: Option<String>,
    pub koji_wrapper: bool,
    pub mock_clean: bool,
    pub mock_config: String,
    pub mock_config_from_koji: Option<String>,
    pub no_wait: bool,
    pub redhat_release: RedhatRelease,
    pub regen_repos: bool,
    pub scratch: bool,
    pub svn: Option<bool>,
    pub target_arch: Option<String>,
    pub working_directory: String,
}

impl Default for BuildOpts {
    fn default() -> Self {
        Self::common_defaults()
    }
}

impl BuildOpts {
    /// Global defaults every build starts from.
    pub fn common_defaults() -> Self {
        BuildOpts {
            autoclean: false,
            cache_prefix: AUTO.to_string(),
            full_extract: false,
            kojilogin: None,
            koji_wrapper: true,
            mock_clean: true,
            mock_config: AUTO.to_string(),
            mock_config_from_koji: None,
            no_wait: false,
            redhat_release: RedhatRelease::El5,
            regen_repos: false,
            scratch: false,
            svn: None,
            target_arch: None,
            working_directory: ".".to_string(),
        }
    }

    /// Defaults for building every package of a release in one go.
    pub fn allbuild_defaults() -> Result<Self, ConfigError> {
        Self::common_defaults().with_overrides(&allbuild_overrides())
    }

    /// Return a copy of `self` with `overrides` applied in order.
    pub fn with_overrides(&self, overrides: &OverrideSet) -> Result<Self, ConfigError> {
        let mut derived = self.clone();
        for (name, value) in &overrides.entries {
            derived.set(*name, value.clone())?;
        }
        tracing::debug!(
            overrides = %overrides.name,
            count = overrides.entries.len(),
            "applied build option overrides"
        );
        Ok(derived)
    }

    /// Look up a single option by name.
    pub fn get(&self, name: OptName) -> OptValue {
        fn opt_str(value: &Option<String>) -> OptValue {
            value.as_deref().map_or(OptValue::Null, OptValue::from)
        }
        match name {
            OptName::Autoclean => self.autoclean.into(),
            OptName::CachePrefix => self.cache_prefix.as_str().into(),
            OptName::FullExtract => self.full_extract.into(),
            OptName::Kojilogin => opt_str(&self.kojilogin),
            OptName::KojiWrapper => self.koji_wrapper.into(),
            OptName::MockClean => self.mock_clean.into(),
            OptName::MockConfig => self.mock_config.as_str().into(),
            OptName::MockConfigFromKoji => opt_str(&self.mock_config_from_koji),
            OptName::NoWait => self.no_wait.into(),
            OptName::RedhatRelease => self.redhat_release.as_str().into(),
            OptName::RegenRepos => self.regen_repos.into(),
            OptName::Scratch => self.scratch.into(),
            OptName::Svn => self.svn.map_or(OptValue::Null, OptValue::Bool),
            OptName::TargetArch => opt_str(&self.target_arch),
            OptName::WorkingDirectory => self.working_directory.as_str().into(),
        }
    }

    fn set(&mut self, name: OptName, value: OptValue) -> Result<(), ConfigError> {
        match (name, value) {
            (OptName::Autoclean, OptValue::Bool(flag)) => self.autoclean = flag,
            (OptName::FullExtract, OptValue::Bool(flag)) => self.full_extract = flag,
            (OptName::KojiWrapper, OptValue::Bool(flag)) => self.koji_wrapper = flag,
            (OptName::MockClean, OptValue::Bool(flag)) => self.mock_clean = flag,
            (OptName::NoWait, OptValue::Bool(flag)) => self.no_wait = flag,
            (OptName::RegenRepos, OptValue::Bool(flag)) => self.regen_repos = flag,
            (OptName::Scratch, OptValue::Bool(flag)) => self.scratch = flag,
            (OptName::Svn, OptValue::Bool(flag)) => self.svn = Some(flag),
            (OptName::Svn, OptValue::Null) => self.svn = None,
            (OptName::CachePrefix, OptValue::Str(text)) => self.cache_prefix = text,
            (OptName::MockConfig, OptValue::Str(text)) => self.mock_config = text,
            (OptName::WorkingDirectory, OptValue::Str(text)) => self.working_directory = text,
            (OptName::Kojilogin, OptValue::Str(text)) => self.kojilogin = Some(text),
            (OptName::Kojilogin, OptValue::Null) => self.kojilogin = None,
            (OptName::MockConfigFromKoji, OptValue::Str(text)) => {
                self.mock_config_from_koji = Some(text);
            }
            (OptName::MockConfigFromKoji, OptValue::Null) => self.mock_config_from_koji = None,
            (OptName::TargetArch, OptValue::Str(text)) => self.target_arch = Some(text),
            (OptName::TargetArch, OptValue::Null) => self.target_arch = None,
            (OptName::RedhatRelease, OptValue::Str(text)) => self.redhat_release = text.parse()?,
            (name, value) => {
                return Err(ConfigError::InvalidValue {
                    option: name.as_str(),
                    expected: name.kind().describe(),
                    got: value.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Mapping view: option name to value, ordered by name.
    pub fn to_map(&self) -> BTreeMap<&'static str, OptValue> {
        OptName::ALL
            .into_iter()
            .map(|name| (name.as_str(), self.get(name)))
            .collect()
    }

    /// Options whose values differ between `self` and `other`.
    pub fn differing(&self, other: &BuildOpts) -> Vec<OptName> {
        OptName::ALL
            .into_iter()
            .filter(|name| self.get(*name) != other.get(*name))
            .collect()
    }

    /// Tags derived from the configured release.
    pub fn release_tags(&self) -> ReleaseTags {
        self.redhat_release.tags()
    }

    pub fn cache_prefix_is_auto(&self) -> bool {
        self.cache_prefix == AUTO
    }

    pub fn mock_config_is_auto(&self) -> bool {
        self.mock_config == AUTO
    }
}

#[cfg(test)]
#[path = "buildopts_tests.rs"]
mod tests;
