//! A single CSV sink with an explicit lifecycle.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::{OutputError, Result};

enum SinkState {
    /// Registered but not yet backed by a file.
    Unopened,
    /// File created, header written, rows appending.
    Open(Box<csv::Writer<File>>),
    /// Flushed and released; no further writes.
    Closed,
}

/// One CSV output stream.
///
/// The sink is registered with its path and header up front; the file is
/// created and the header written exactly once, on the first row. `close`
/// flushes and forbids any later write. An `Unopened` sink closes without
/// ever touching the filesystem, so untriggered quarantine sinks leave no
/// empty files behind.
pub struct CsvSink {
    path: PathBuf,
    header: Vec<String>,
    state: SinkState,
    rows: usize,
}

impl CsvSink {
    pub fn new(path: PathBuf, header: Vec<String>) -> Self {
        Self {
            path,
            header,
            state: SinkState::Unopened,
            rows: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rows written so far (header excluded).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the sink's header.
    pub fn header_len(&self) -> usize {
        self.header.len()
    }

    /// True once the first row has opened the file.
    pub fn is_open(&self) -> bool {
        matches!(self.state, SinkState::Open(_))
    }

    /// Appends one row, opening the sink on first use.
    pub fn write_row<I, S>(&mut self, row: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        if matches!(self.state, SinkState::Closed) {
            return Err(OutputError::Closed {
                path: self.path.clone(),
            });
        }
        if matches!(self.state, SinkState::Unopened) {
            let mut writer =
                csv::Writer::from_path(&self.path).map_err(|e| OutputError::CreateSink {
                    path: self.path.clone(),
                    source: std::io::Error::other(e.to_string()),
                })?;
            writer
                .write_record(&self.header)
                .map_err(|e| self.write_error(e))?;
            tracing::debug!(path = %self.path.display(), "sink opened");
            self.state = SinkState::Open(Box::new(writer));
        }

        let SinkState::Open(writer) = &mut self.state else {
            unreachable!("sink transitioned to Open above");
        };
        if let Err(e) = writer.write_record(row) {
            return Err(OutputError::Write {
                path: self.path.clone(),
                message: e.to_string(),
            });
        }
        self.rows += 1;
        Ok(())
    }

    /// Flushes and releases the sink. Idempotent; an `Unopened` sink just
    /// transitions to `Closed`.
    pub fn close(&mut self) -> Result<()> {
        match std::mem::replace(&mut self.state, SinkState::Closed) {
            SinkState::Open(mut writer) => {
                writer.flush().map_err(|e| OutputError::Write {
                    path: self.path.clone(),
                    message: e.to_string(),
                })?;
                tracing::debug!(path = %self.path.display(), rows = self.rows, "sink closed");
                Ok(())
            }
            SinkState::Unopened | SinkState::Closed => Ok(()),
        }
    }

    fn write_error(&self, e: csv::Error) -> OutputError {
        OutputError::Write {
            path: self.path.clone(),
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_written_once_on_first_row() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.csv");
        let mut sink = CsvSink::new(path.clone(), vec!["a".into(), "b".into()]);
        assert!(!sink.is_open());

        sink.write_row(["1", "2"]).expect("write");
        sink.write_row(["3", "4"]).expect("write");
        sink.close().expect("close");

        let content = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(content, "a,b\n1,2\n3,4\n");
        assert_eq!(sink.rows(), 2);
    }

    #[test]
    fn unopened_sink_closes_without_creating_a_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("never.csv");
        let mut sink = CsvSink::new(path.clone(), vec!["a".into()]);
        sink.close().expect("close");
        assert!(!path.exists());
    }

    #[test]
    fn write_after_close_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut sink = CsvSink::new(dir.path().join("out.csv"), vec!["a".into()]);
        sink.write_row(["1"]).expect("write");
        sink.close().expect("close");
        assert!(matches!(
            sink.write_row(["2"]),
            Err(OutputError::Closed { .. })
        ));
    }

    #[test]
    fn close_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut sink = CsvSink::new(dir.path().join("out.csv"), vec!["a".into()]);
        sink.write_row(["1"]).expect("write");
        sink.close().expect("close");
        sink.close().expect("second close");
    }
}
