use std::{fs, path::PathBuf};

use crate::error::{ClyperError, Result};

pub const DATA_FILE_NAME: &str = "clyper_data.json";

/// Resolves where the store lives.
///
/// An explicit path wins. Otherwise the file sits next to the executable, or
/// under `~/.clyper/` when the executable location is unknown.
pub fn data_file_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    match std::env::current_exe() {
        Ok(exe) => {
            if let Some(dir) = exe.parent() {
                return Ok(dir.join(DATA_FILE_NAME));
            }
        }
        Err(e) => log::debug!("could not locate executable: {e}"),
    }

    let home = dirs::home_dir().ok_or(ClyperError::HomeDirNotFound)?;
    let dir = home.join(".clyper");
    fs::create_dir_all(&dir)?;
    Ok(dir.join(DATA_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let path = PathBuf::from("/tmp/elsewhere.json");
        assert_eq!(data_file_path(Some(path.clone())).unwrap(), path);
    }

    #[test]
    fn default_is_named_data_file() {
        let path = data_file_path(None).unwrap();
        assert_eq!(path.file_name().unwrap(), DATA_FILE_NAME);
    }
}
