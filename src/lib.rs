//! Build defaults and site configuration for osg-build.
//!
//! Everything here is built once and read-only afterwards: fixed names in
//! [`constants`], per-user locations in [`paths`], the release tag table in
//! [`release`], typed build options in [`buildopts`], and the loadable site
//! config in [`config`].
pub mod buildopts;
pub mod config;
pub mod constants;
pub mod error;
pub mod integrity;
pub mod paths;
pub mod release;

pub use buildopts::{
    allbuild_overrides, restrict_to_allowed, BuildOpts, OptKind, OptName, OptValue, OverrideSet,
    ALLBUILD_ALLOWED_OPTNAMES,
};
pub use config::{
    config_stub, load_config, load_config_or_default, read_config, validate_config, write_config,
    SiteConfig,
};
pub use error::ConfigError;
pub use integrity::{check_tables, Finding};
pub use paths::{data_file_search_path, find_data_file, UserPaths};
pub use release::{tag_table, RedhatRelease, ReleaseTags, REDHAT_RELEASES};
