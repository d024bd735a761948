//! Supported Red Hat releases and the koji tags derived from each.
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Target OS major version a build is made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RedhatRelease {
    El5,
    El6,
}

/// Tags derived from a release, used for dist tagging and koji submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReleaseTags {
    pub distro_tag: String,
    pub koji_tag: String,
    pub koji_target: String,
}

/// Identifiers of every supported release, ascending.
pub const REDHAT_RELEASES: [&str; 2] = ["5", "6"];

impl RedhatRelease {
    /// Every supported release, ascending.
    pub fn all() -> [RedhatRelease; 2] {
        [RedhatRelease::El5, RedhatRelease::El6]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RedhatRelease::El5 => "5",
            RedhatRelease::El6 => "6",
        }
    }

    pub fn tags(&self) -> ReleaseTags {
        let (distro_tag, koji_tag, koji_target) = match self {
            RedhatRelease::El5 => ("osg.el5", "el5-osg", "el5-osg"),
            RedhatRelease::El6 => ("osg.el6", "el6-osg", "el6-osg"),
        };
        ReleaseTags {
            distro_tag: distro_tag.to_string(),
            koji_tag: koji_tag.to_string(),
            koji_target: koji_target.to_string(),
        }
    }
}

impl fmt::Display for RedhatRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RedhatRelease {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RedhatRelease::all()
            .into_iter()
            .find(|release| release.as_str() == s.trim())
            .ok_or_else(|| unsupported_release(s))
    }
}

impl Serialize for RedhatRelease {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RedhatRelease {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

fn unsupported_release(raw: &str) -> ConfigError {
    ConfigError::UnsupportedRelease(raw.to_string(), REDHAT_RELEASES.join(", "))
}

/// Default per-release tag table, keyed by release.
pub fn tag_table() -> BTreeMap<RedhatRelease, ReleaseTags> {
    RedhatRelease::all()
        .into_iter()
        .map(|release| (release, release.tags()))
        .collect()
}
