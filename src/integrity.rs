//! Consistency checks across the defaults tables and a site config.
//!
//! The tables are static, but a site config can replace the release table, so
//! the checks run against whatever config is in effect.
use crate::buildopts::{allbuild_overrides, BuildOpts, ALLBUILD_ALLOWED_OPTNAMES};
use crate::config::{validate_config, SiteConfig};
use crate::release::RedhatRelease;
use serde::Serialize;

/// One failed consistency check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub check: &'static str,
    pub message: String,
}

impl Finding {
    fn new(check: &'static str, message: impl Into<String>) -> Self {
        Self {
            check,
            message: message.into(),
        }
    }
}

/// Names of the checks [`check_tables`] runs, in order.
pub const CHECKS: [&str; 5] = [
    "allbuild_keys",
    "allowed_optnames",
    "allbuild_overrides",
    "release_table",
    "site_config",
];

/// Run every check and return the failures; empty means consistent.
pub fn check_tables(config: &SiteConfig) -> Vec<Finding> {
    let common = BuildOpts::common_defaults();
    let allbuild = BuildOpts::allbuild_defaults();
    let common_map = common.to_map();
    let mut findings = Vec::new();

    if let Ok(allbuild) = &allbuild {
        let allbuild_map = allbuild.to_map();
        for key in common_map.keys() {
            if !allbuild_map.contains_key(key) {
                findings.push(Finding::new(
                    "allbuild_keys",
                    format!("allbuild defaults lack common option {key}"),
                ));
            }
        }
    }

    for name in ALLBUILD_ALLOWED_OPTNAMES {
        if !common_map.contains_key(name.as_str()) {
            findings.push(Finding::new(
                "allowed_optnames",
                format!("allow-listed option {name} has no common default"),
            ));
        }
    }

    match &allbuild {
        Ok(allbuild) => {
            let overridden = allbuild_overrides().names();
            for name in allbuild.differing(&common) {
                if !overridden.contains(&name) {
                    findings.push(Finding::new(
                        "allbuild_overrides",
                        format!("allbuild changes {name} without a documented override"),
                    ));
                }
            }
        }
        Err(err) => findings.push(Finding::new("allbuild_overrides", err.to_string())),
    }

    for release in RedhatRelease::all() {
        if let Err(err) = config.tags_for(release) {
            findings.push(Finding::new("release_table", err.to_string()));
        }
    }

    if let Err(err) = validate_config(config) {
        findings.push(Finding::new("site_config", err.to_string()));
    }

    tracing::debug!(findings = findings.len(), "checked defaults tables");
    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_are_consistent() {
        assert_eq!(check_tables(&SiteConfig::default()), Vec::new());
    }

    #[test]
    fn missing_release_and_bad_url_are_reported() {
        let mut config = SiteConfig {
            koji_hub: "ftp://koji".to_string(),
            ..SiteConfig::default()
        };
        config.releases.remove(&RedhatRelease::El5);

        let findings = check_tables(&config);
        let checks: Vec<&str> = findings.iter().map(|finding| finding.check).collect();
        assert_eq!(checks, ["release_table", "site_config"]);
        assert!(findings[0].message.contains("\"5\""));
        for finding in &findings {
            assert!(CHECKS.contains(&finding.check));
        }
    }
}
