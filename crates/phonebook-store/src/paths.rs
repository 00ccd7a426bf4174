use crate::error::{Result, StoreError};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "phonebook";
const DB_FILENAME: &str = "phonebook.sqlite3";

/// `--db-path` when given, else `phonebook.sqlite3` under
/// `$XDG_DATA_HOME/phonebook` or `~/.local/share/phonebook`.
pub fn resolve_db_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = custom {
        if path.as_os_str().is_empty() {
            return Err(StoreError::InvalidDataPath(path));
        }
        return Ok(path);
    }
    let base = match env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        Some(dir) if dir.as_os_str().is_empty() => return Err(StoreError::InvalidDataPath(dir)),
        Some(dir) => dir,
        None => dirs::home_dir()
            .ok_or(StoreError::MissingHomeDir)?
            .join(".local")
            .join("share"),
    };
    Ok(base.join(APP_DIR).join(DB_FILENAME))
}

/// Creates the missing parent directory of `path`, private to the user.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    if !parent.exists() {
        fs::create_dir_all(parent)?;
        restrict_dir_permissions(parent)?;
    }
    Ok(())
}

#[cfg(unix)]
fn restrict_dir_permissions(dir: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(dir, fs::Permissions::from_mode(0o700))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_dir_permissions(_dir: &Path) -> Result<()> {
    Ok(())
}
