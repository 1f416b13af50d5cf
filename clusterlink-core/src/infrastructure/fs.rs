// clusterlink-core/src/infrastructure/fs.rs

use crate::infrastructure::error::InfrastructureError;
use std::ffi::OsString;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Write content to a file atomically using a temporary file.
///
/// The temporary file lives in the target's directory so the final rename
/// never crosses filesystems. Readers see either the old or the new content,
/// never a half-written config. Missing parent directories are created.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    content: C,
) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
    temp_file.write_all(content.as_ref())?;

    temp_file
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}

/// Reads a file's raw bytes, `Ok(None)` if it does not exist.
pub fn read_optional(path: &Path) -> Result<Option<Vec<u8>>, InfrastructureError> {
    match std::fs::read(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(InfrastructureError::Io(e)),
    }
}

/// `config.json` + `bak` -> `config.json.bak`, in the same directory.
pub fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("config"));
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}

/// Expands a leading `~/` using `$HOME`. Other paths are returned as-is.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write_creates_parent_dirs() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join(".sparkmagic/config.json");

        atomic_write(&file_path, "{}")?;

        assert_eq!(fs::read_to_string(file_path)?, "{}");
        Ok(())
    }

    #[test]
    fn test_atomic_write_overwrites_existing() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("config.json");

        atomic_write(&file_path, "Initial")?;
        atomic_write(&file_path, "Updated")?;

        assert_eq!(fs::read_to_string(file_path)?, "Updated");
        Ok(())
    }

    #[test]
    fn test_read_optional_missing_file() -> Result<()> {
        let dir = tempdir()?;
        assert!(read_optional(&dir.path().join("nope.json"))?.is_none());
        Ok(())
    }

    #[test]
    fn test_read_optional_accepts_non_utf8() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.json");
        fs::write(&path, [0xff, 0xfe, b'{', b'}'])?;

        assert_eq!(read_optional(&path)?, Some(vec![0xff, 0xfe, b'{', b'}']));
        Ok(())
    }

    #[test]
    fn test_sibling_path() {
        let p = sibling_path(Path::new("/home/u/.sparkmagic/config.json"), "bak");
        assert_eq!(p, PathBuf::from("/home/u/.sparkmagic/config.json.bak"));
    }

    #[test]
    fn test_expand_home_leaves_absolute_paths() {
        assert_eq!(expand_home("/etc/cfg.json"), PathBuf::from("/etc/cfg.json"));
        assert_eq!(expand_home("relative/cfg.json"), PathBuf::from("relative/cfg.json"));
    }
}
