//! Fixed-width input reading.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Iterator over the lines of a fixed-width input file.
///
/// Line terminators are stripped; padding to the mapping's line width is
/// the dispatcher's job, not the reader's.
#[derive(Debug)]
pub struct LineReader {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
}

impl LineReader {
    /// Opens the input file for sequential line reading.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| IngestError::open(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            lines: BufReader::new(file).lines(),
        })
    }
}

impl Iterator for LineReader {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        Some(line.map_err(|source| IngestError::FileRead {
            path: self.path.clone(),
            source,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_lines_without_terminators() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "John      Smith").expect("write");
        writeln!(file, "Jane      Doe").expect("write");
        file.flush().expect("flush");

        let lines: Vec<String> = LineReader::open(file.path())
            .expect("open")
            .collect::<Result<_>>()
            .expect("read");
        assert_eq!(lines, vec!["John      Smith", "Jane      Doe"]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = LineReader::open(Path::new("does-not-exist.txt")).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
