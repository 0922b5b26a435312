//! # Path Validation
//!
//! Validates application archive paths. This is the only validator that
//! touches the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::{FieldError, Validation};

/// Why a leading `~` could not be expanded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HomeDirError {
    #[error("cannot expand user-specific home dir")]
    UserSpecific,
    #[error("home directory could not be determined")]
    NotFound,
}

/// Expand a leading `~` to the current user's home directory
///
/// Paths not starting with `~` are returned unchanged. `~user` forms are
/// rejected rather than looked up.
pub fn expand_home(path: &str) -> Result<PathBuf, HomeDirError> {
    let Some(rest) = path.strip_prefix('~') else {
        return Ok(PathBuf::from(path));
    };

    if !(rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\')) {
        return Err(HomeDirError::UserSpecific);
    }

    let home = dirs::home_dir().ok_or(HomeDirError::NotFound)?;
    let rest = rest.trim_start_matches(&['/', '\\'][..]);
    if rest.is_empty() {
        Ok(home)
    } else {
        Ok(home.join(rest))
    }
}

/// Validate the path to an application zip archive
///
/// The path is home-expanded first, then must exist on disk. When expansion
/// fails both the expansion error and the missing-file error are reported,
/// since nothing usable is left to check.
pub fn validate_app_zip_path(value: &str, key: &str) -> Validation {
    let mut validation = Validation::ok();

    let archive = match expand_home(value) {
        Ok(archive) => archive,
        Err(e) => {
            debug!(field = key, path = value, error = %e, "Home directory expansion failed");
            validation.push(FieldError::HomeExpansion {
                key: key.to_string(),
                path: value.to_string(),
            });
            PathBuf::new()
        }
    };

    if !exists(&archive) {
        validation.push(FieldError::PathNotFound {
            key: key.to_string(),
            path: value.to_string(),
        });
    }

    validation
}

// Directories count: only a failing stat means "missing".
fn exists(path: &Path) -> bool {
    let found = fs::metadata(path).is_ok();
    debug!(path = %path.display(), found, "Checked archive path");
    found
}
