//! Deletion of invalid files

use std::fs;
use std::io;
use std::path::Path;

/// Delete a file from the filesystem.
///
/// An already-absent file counts as success, so repeated removal of the
/// same path cannot introduce a new failure mode. Other errors (for
/// example permission denied) are returned to the caller.
pub fn remove_file(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_remove_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doomed.pdf");
        File::create(&path).unwrap();

        remove_file(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_remove_missing_file_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("never_existed.pdf");

        remove_file(&path).unwrap();
        // Removing twice behaves the same.
        remove_file(&path).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_remove_surfaces_permission_errors() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let locked = temp_dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        let path = locked.join("stuck.pdf");
        File::create(&path).unwrap();

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();
        let result = remove_file(&path);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        match result {
            // Privileged users can unlink regardless of directory bits.
            Ok(()) => assert!(!path.exists()),
            Err(e) => {
                assert_eq!(e.kind(), io::ErrorKind::PermissionDenied);
                assert!(path.exists());
            }
        }
    }
}
