//! Typed paths into the user's home directory and the data-file search path.
//!
//! Centralizing path construction keeps the koji and config file locations
//! consistent between the build and the commands that report on it.
use crate::constants::{
    ALT_DEFAULT_CONFIG_FILE_NAME, DATA_DIR, DEFAULT_CONFIG_FILE_NAME, KOJI_CLIENT_CERT_NAME,
    KOJI_USER_CONFIG_DIR_NAME, OSG_KOJI_USER_CONFIG_DIR_NAME, PROGRAM_DATA_SUBDIR,
};
use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Convenience wrapper for locating per-user osg-build and koji files.
#[derive(Debug, Clone)]
pub struct UserPaths {
    home: PathBuf,
}

impl UserPaths {
    /// Create a path helper rooted at an explicit home directory.
    pub fn new(home: PathBuf) -> Self {
        Self { home }
    }

    /// Create a path helper rooted at the current user's home directory.
    pub fn from_home() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
        tracing::debug!(home = %home.display(), "resolved home directory");
        Ok(Self::new(home))
    }

    /// Return the home directory used for path derivation.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Return the `~/.osg-build.ini` path.
    pub fn default_config_file(&self) -> PathBuf {
        self.home.join(DEFAULT_CONFIG_FILE_NAME)
    }

    /// Return the legacy `~/.vdt-build.ini` path.
    pub fn alt_default_config_file(&self) -> PathBuf {
        self.home.join(ALT_DEFAULT_CONFIG_FILE_NAME)
    }

    /// Return the `~/.koji` directory path.
    pub fn koji_user_config_dir(&self) -> PathBuf {
        self.home.join(KOJI_USER_CONFIG_DIR_NAME)
    }

    /// Return the `~/.osg-koji` directory path.
    pub fn osg_koji_user_config_dir(&self) -> PathBuf {
        self.home.join(OSG_KOJI_USER_CONFIG_DIR_NAME)
    }

    /// Return the `~/.koji/client.crt` path.
    pub fn koji_client_cert(&self) -> PathBuf {
        self.koji_user_config_dir().join(KOJI_CLIENT_CERT_NAME)
    }

    /// Return the first user config file that exists, preferring the current name.
    pub fn existing_config_file(&self) -> Option<PathBuf> {
        [self.default_config_file(), self.alt_default_config_file()]
            .into_iter()
            .find(|path| path.is_file())
    }
}

/// Directories searched for data files, in priority order.
pub fn data_file_search_path(program_dir: &Path) -> Vec<PathBuf> {
    vec![
        program_dir.to_path_buf(),
        program_dir.join(PROGRAM_DATA_SUBDIR),
        PathBuf::from(DATA_DIR),
    ]
}

/// Locate `name` in the first search directory that contains it.
pub fn find_data_file(search_path: &[PathBuf], name: &str) -> Option<PathBuf> {
    search_path
        .iter()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Directory holding the running executable, falling back to the current directory.
pub fn program_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
