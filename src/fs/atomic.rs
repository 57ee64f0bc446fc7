use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use log::debug;
use tempfile::{Builder, NamedTempFile};
use crate::error::types::{FileSystemError, Result, ToolError};
use crate::fs_err;

/// Writes `path` through a temp file in the same directory, so the target is
/// either fully replaced or left untouched.
///
/// An existing target is resolved first: writing through a symlink replaces the
/// file it points at and leaves the link in place. The target's mode is kept;
/// new files get the process umask applied like any other created file.
pub fn write_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let existing = std::fs::metadata(path).ok();
    let target = match existing {
        Some(_) => fs_err!(std::fs::canonicalize(path), WriteFile, path)?,
        None => path.to_path_buf(),
    };
    let dir = staging_dir(&target);

    let temp = fs_err!(create_staging_file(&dir), CreateFile, path)?;
    debug!("Staging output for {} in {}", target.display(), temp.path().display());

    let mut writer = BufWriter::new(temp);
    write(&mut writer)?;
    let temp = writer.into_inner().map_err(|e| {
        ToolError::FileSystem(FileSystemError::WriteFile {
            path: path.to_path_buf(),
            reason: e.error().to_string(),
        })
    })?;
    fs_err!(temp.as_file().sync_all(), WriteFile, path)?;
    if let Some(metadata) = existing {
        fs_err!(temp.as_file().set_permissions(metadata.permissions()), WriteFile, path)?;
    }

    temp.persist(&target).map_err(|e| {
        ToolError::FileSystem(FileSystemError::Persist {
            path: path.to_path_buf(),
            reason: e.error.to_string(),
        })
    })?;
    debug!("Wrote {}", target.display());
    Ok(())
}

fn staging_dir(target: &Path) -> PathBuf {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

// tempfile defaults to 0600; asking for 0666 lets the umask decide, as File::create does.
fn create_staging_file(dir: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".asset_tools");
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::types::CityError;
    use tempfile::tempdir;

    #[test]
    fn test_writes_and_replaces() {
        let temp = tempdir().unwrap();
        let target = temp.path().join("out.txt");
        std::fs::write(&target, "old contents").unwrap();

        write_atomically(&target, |w| {
            fs_err!(w.write_all(b"new"), WriteFile, target)
        })
        .unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "new");
    }

    #[test]
    fn test_failed_write_leaves_target_untouched() {
        let temp = tempdir().unwrap();
        let target = temp.path().join("out.txt");
        std::fs::write(&target, "old contents").unwrap();

        let result = write_atomically(&target, |w| {
            w.write_all(b"partial").ok();
            Err(ToolError::Cities(CityError::Write("stop".to_string())))
        });

        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "old contents");
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_missing_parent_directory() {
        let temp = tempdir().unwrap();
        let target = temp.path().join("no/such/dir/out.txt");
        let result = write_atomically(&target, |_| Ok(()));
        assert!(matches!(
            result,
            Err(ToolError::FileSystem(FileSystemError::CreateFile { .. }))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_target_is_written_through() {
        let temp = tempdir().unwrap();
        let real = temp.path().join("real.h");
        let link = temp.path().join("link.h");
        std::fs::write(&real, "old").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        write_atomically(&link, |w| fs_err!(w.write_all(b"new"), WriteFile, link)).unwrap();

        assert!(std::fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(std::fs::read_link(&link).unwrap(), real);
        assert_eq!(std::fs::read_to_string(&real).unwrap(), "new");
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_mode_follows_umask() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        let reference = temp.path().join("reference.h");
        std::fs::File::create(&reference).unwrap();
        let target = temp.path().join("out.h");

        write_atomically(&target, |_| Ok(())).unwrap();

        let mode = |p: &Path| std::fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&target), mode(&reference));
    }

    #[cfg(unix)]
    #[test]
    fn test_existing_mode_is_kept() {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        let target = temp.path().join("out.h");
        std::fs::write(&target, "old").unwrap();
        std::fs::set_permissions(&target, Permissions::from_mode(0o640)).unwrap();

        write_atomically(&target, |_| Ok(())).unwrap();

        assert_eq!(std::fs::metadata(&target).unwrap().permissions().mode() & 0o777, 0o640);
    }
}
