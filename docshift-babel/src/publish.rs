//! Writing conversion output to disk
//!
//! Output is staged in a temporary file next to the destination and renamed over it
//! only once the writer has finished. A staged file that is never committed is removed
//! when dropped, so a failed conversion leaves neither a partial destination nor a
//! stray temporary behind.

use crate::error::{ConvertError, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile, TempPath};

const STAGING_PREFIX: &str = ".docshift-";

/// Directory that will hold the destination (the current directory for bare file names).
fn parent_dir(destination: &Path) -> PathBuf {
    match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Create an empty staging file beside `destination`, keeping its extension.
pub fn stage_for(destination: &Path) -> Result<NamedTempFile> {
    let dir = parent_dir(destination);
    let suffix = destination
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    Builder::new()
        .prefix(STAGING_PREFIX)
        .suffix(&suffix)
        .tempfile_in(&dir)
        .map_err(|err| ConvertError::io(dir, err))
}

/// Move a finished staging file over the destination, replacing any existing file.
pub fn commit(staged: TempPath, destination: &Path) -> Result<()> {
    staged
        .persist(destination)
        .map_err(|err| ConvertError::io(destination, err.error))
}

/// Stage, fill with `write`, and commit in one step.
pub fn write_with<F>(destination: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut File) -> Result<()>,
{
    let mut staged = stage_for(destination)?;
    write(staged.as_file_mut())?;
    staged
        .as_file_mut()
        .flush()
        .map_err(|err| ConvertError::io(destination, err))?;
    commit(staged.into_temp_path(), destination)
}

pub fn write_bytes(destination: &Path, bytes: &[u8]) -> Result<()> {
    write_with(destination, |file| {
        file.write_all(bytes)
            .map_err(|err| ConvertError::io(destination, err))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn writes_bytes_to_destination() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_bytes(&path, b"hello").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
        assert_eq!(entries(dir.path()), vec!["out.txt"]);
    }

    #[test]
    fn overwrites_existing_destination() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "old contents").unwrap();
        write_bytes(&path, b"new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn failed_write_leaves_nothing_behind() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.pdf");
        let result = write_with(&path, |_| Err(ConvertError::Pdf("boom".to_string())));
        assert!(matches!(result, Err(ConvertError::Pdf(_))));
        assert!(entries(dir.path()).is_empty());
    }

    #[test]
    fn staging_file_keeps_extension() {
        let dir = tempdir().unwrap();
        let staged = stage_for(&dir.path().join("report.pdf")).unwrap();
        let name = staged.path().file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(STAGING_PREFIX));
        assert!(name.ends_with(".pdf"));
    }

    #[test]
    fn bare_file_name_stages_in_current_dir() {
        assert_eq!(parent_dir(Path::new("out.txt")), PathBuf::from("."));
        assert_eq!(parent_dir(Path::new("a/out.txt")), PathBuf::from("a"));
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        let err = write_bytes(&path, b"x").unwrap_err();
        assert!(matches!(err, ConvertError::Io { .. }));
    }
}
