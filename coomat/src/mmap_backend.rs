//! Memory-mapped reads for text-format matrix files
//!
//! Maps a matrix file and parses it in place, avoiding an intermediate
//! heap copy of the file contents. Useful for large coordinate lists
//! where the buffered read path would double peak memory.

use std::fs::File;
use std::io;
use std::path::Path;

use coomat_core::format::parse_matrix;
use coomat_core::matrix::CooMatrix;
use memmap2::Mmap;

use crate::error::Result;

/// Read-only memory-mapped view over a text matrix file
pub struct MmapSource {
    map: Mmap,
}

impl MmapSource {
    /// Map an existing matrix file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;

        // SAFETY: the mapping is read-only and private to this process;
        // the file must not be truncated while the view is alive.
        let map = unsafe { Mmap::map(&file)? };

        log::debug!("mapped {} ({} bytes)", path.display(), map.len());

        Ok(Self { map })
    }

    /// View the mapped bytes as UTF-8 text
    pub fn as_str(&self) -> Result<&str> {
        std::str::from_utf8(&self.map)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err).into())
    }

    /// Parse the mapped file into a matrix
    pub fn parse(&self) -> Result<CooMatrix> {
        Ok(parse_matrix(self.as_str()?)?)
    }

    /// Size of the mapped file in bytes
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the mapped file is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_backend::{load_matrix, save_matrix};
    use std::fs;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("coomat-mmap-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_mmap_parse_matches_buffered_load() {
        let dir = scratch_dir("parse");
        let path = dir.join("matrix.txt");

        let matrix = CooMatrix::from_entries(10, 10, [(0, 0, 1.0), (9, 9, -2.5)]).unwrap();
        save_matrix(&path, &matrix).unwrap();

        let source = MmapSource::open(&path).unwrap();
        assert!(!source.is_empty());
        assert_eq!(source.parse().unwrap(), load_matrix(&path).unwrap());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_mmap_rejects_non_utf8() {
        let dir = scratch_dir("utf8");
        let path = dir.join("binary.txt");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x01]).unwrap();

        let source = MmapSource::open(&path).unwrap();
        assert!(source.as_str().is_err());

        let _ = fs::remove_dir_all(&dir);
    }
}
