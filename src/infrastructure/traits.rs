//! I/O boundary traits for testability
//!
//! Services reach the filesystem only through these traits, so tests can
//! point them at temporary directories or substitute fakes.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Filesystem abstraction for the session's command file and state script.
pub trait FileSystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Open a file for line-oriented reading.
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead>>;

    /// Write string content to file, replacing any previous content.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// Real filesystem implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead>> {
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn given_written_file_when_opened_then_reads_lines_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("commands");
        let fs = RealFileSystem;

        fs.write(&path, "CREATE a\nLIST\n").unwrap();

        assert!(fs.exists(&path));
        let lines: Vec<String> = fs.open(&path).unwrap().lines().map(Result::unwrap).collect();
        assert_eq!(lines, vec!["CREATE a", "LIST"]);
    }

    #[test]
    fn given_missing_file_when_opened_then_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent");
        let fs = RealFileSystem;

        assert!(!fs.exists(&path));
        let err = fs.open(&path).err().map(|e| e.kind());
        assert_eq!(err, Some(io::ErrorKind::NotFound));
    }
}
