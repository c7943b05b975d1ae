use std::path::{Path, PathBuf};
use std::{fs, io};

use spdlog::{debug, info};

pub const INDEX_FILE_NAME: &str = "index.html";

/// Writes generated documents into the output directory. Existing files are
/// overwritten and nothing is rolled back when a write fails.
pub struct SiteWriter {
    pub output_dir: PathBuf,
}

impl SiteWriter {
    pub fn create(output_dir: &Path) -> io::Result<SiteWriter> {
        if !output_dir.exists() {
            debug!("Creating output directory {}", output_dir.display());
        }
        match fs::create_dir_all(output_dir) {
            Ok(_) => Ok(SiteWriter {
                output_dir: output_dir.to_path_buf(),
            }),
            Err(e) => Err(io::Error::new(e.kind(), format!("Error creating output directory {}: {}", output_dir.display(), e))),
        }
    }

    pub fn write(&self, file_name: &str, contents: &[u8]) -> io::Result<PathBuf> {
        let path = self.output_dir.join(file_name);
        if let Err(e) = fs::write(&path, contents) {
            return Err(io::Error::new(e.kind(), format!("Error writing {}: {}", path.display(), e)));
        }

        info!("Generated {}", file_name);
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_nested_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dist").join("blog");
        let writer = SiteWriter::create(&out).unwrap();
        assert!(out.is_dir());

        let path = writer.write("p1.html", b"<p>1</p>").unwrap();
        assert_eq!(path, out.join("p1.html"));
        assert_eq!(fs::read_to_string(path).unwrap(), "<p>1</p>");
    }

    #[test]
    fn test_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let writer = SiteWriter::create(dir.path()).unwrap();
        writer.write(INDEX_FILE_NAME, b"old").unwrap();
        writer.write(INDEX_FILE_NAME, b"new").unwrap();
        assert_eq!(fs::read_to_string(dir.path().join(INDEX_FILE_NAME)).unwrap(), "new");
    }

    #[test]
    fn test_output_dir_is_a_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let res = SiteWriter::create(file.path());
        assert!(res.is_err());
    }
}
