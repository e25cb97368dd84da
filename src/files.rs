use std::fs;
use std::io;
use std::path::Path;

/// Ensures the directory that will hold `path` exists.
///
/// A path with an extension is treated as a file and its parent is created;
/// anything else is created as a directory.
pub fn with_dir<P: AsRef<Path>>(path: P) -> io::Result<()> {
    let path = path.as_ref();

    let dir = if path.extension().is_some() {
        match path.parent() {
            Some(parent) => parent,
            None => return Ok(()),
        }
    } else {
        path
    };

    if dir.as_os_str().is_empty() || dir.exists() {
        return Ok(());
    }
    fs::create_dir_all(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_dir_for_file_and_dir() {
        let root = tempfile::tempdir().unwrap();
        with_dir(root.path().join("a/b/out.wav")).unwrap();
        assert!(root.path().join("a/b").is_dir());
        assert!(!root.path().join("a/b/out.wav").exists());

        with_dir(root.path().join("plain")).unwrap();
        assert!(root.path().join("plain").is_dir());
    }

    #[test]
    fn test_with_dir_bare_file_name() {
        with_dir("out.wav").unwrap();
    }
}
