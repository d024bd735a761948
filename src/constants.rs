//! Fixed names and locations used throughout an osg-build run.
//!
//! Working-directory names are relative to the package directory being built.
//! The remaining values are site defaults; [`crate::config::SiteConfig`]
//! carries overridable copies of the ones a site may need to change.

/// Directory receiving final build results (SRPMs, RPMs, logs).
pub const WD_RESULTS: &str = "_build_results";
/// Directory holding the final contents packed into the SRPM.
pub const WD_PREBUILD: &str = "_final_srpm_contents";
/// Directory an upstream SRPM is unpacked into.
pub const WD_UNPACKED: &str = "_upstream_srpm_contents";
/// Directory an upstream tarball is unpacked into.
pub const WD_UNPACKED_TARBALL: &str = "_upstream_tarball_contents";

// Shared by AFS_CACHE_PATH and AFS_CACHE_PREFIX; concat! needs a literal.
macro_rules! afs_cache_path {
    () => {
        "/p/vdt/public/html/upstream"
    };
}

/// Upstream source cache on AFS.
pub const AFS_CACHE_PATH: &str = afs_cache_path!();
/// `file://` URL prefix for [`AFS_CACHE_PATH`].
pub const AFS_CACHE_PREFIX: &str = concat!("file://", afs_cache_path!());
/// Web mirror of the upstream source cache.
pub const WEB_CACHE_PREFIX: &str = "http://vdt.cs.wisc.edu/upstream";

/// Koji client config shipped with osg-build.
pub const KOJI_CONF: &str = "osg-koji-site.conf";
/// Pre-rename name of [`KOJI_CONF`], still honored when present.
pub const OLD_KOJI_CONF: &str = "osg-koji.conf";
/// System-wide data directory.
pub const DATA_DIR: &str = "/usr/share/osg-build";

pub const KOJI_HUB: &str = "http://koji-hub.batlab.org";
pub const SVN_ROOT: &str = "https://vdt.cs.wisc.edu/svn";

/// Home-relative name of the user config file.
pub const DEFAULT_CONFIG_FILE_NAME: &str = ".osg-build.ini";
/// Home-relative name of the legacy user config file.
pub const ALT_DEFAULT_CONFIG_FILE_NAME: &str = ".vdt-build.ini";
/// Home-relative name of the stock koji client config directory.
pub const KOJI_USER_CONFIG_DIR_NAME: &str = ".koji";
/// Home-relative name of the OSG koji client config directory.
pub const OSG_KOJI_USER_CONFIG_DIR_NAME: &str = ".osg-koji";
/// Client certificate file inside the koji config directory.
pub const KOJI_CLIENT_CERT_NAME: &str = "client.crt";
/// Subdirectory of the program directory searched for data files.
pub const PROGRAM_DATA_SUBDIR: &str = "data";

/// Sentinel meaning "let osg-build pick" for string-valued options.
pub const AUTO: &str = "AUTO";
