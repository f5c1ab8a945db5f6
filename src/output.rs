//! Output writing
//!
//! Buffered line output to a file or stdout. The pipeline materializes
//! the complete list before anything is handed to a writer, so a failed
//! run never leaves a partial list behind.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Where finished list lines go.
pub enum Sink {
    Stdout(io::Stdout),
    File { writer: BufWriter<File>, path: PathBuf },
}

impl Sink {
    /// A sink for `path`, or stdout when no path is given.
    pub fn create(path: Option<&Path>) -> io::Result<Self> {
        match path {
            None => Ok(Sink::Stdout(io::stdout())),
            Some(path) => {
                let file = OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(true)
                    .open(path)?;
                Ok(Sink::File {
                    writer: BufWriter::new(file),
                    path: path.to_path_buf(),
                })
            }
        }
    }

    /// Write every line and flush.
    pub fn write_lines<I, S>(&mut self, lines: I) -> io::Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut written = 0;
        match self {
            Sink::Stdout(stdout) => {
                let mut lock = stdout.lock();
                for line in lines {
                    writeln!(lock, "{}", line.as_ref())?;
                    written += 1;
                }
                lock.flush()?;
            }
            Sink::File { writer, .. } => {
                for line in lines {
                    writeln!(writer, "{}", line.as_ref())?;
                    written += 1;
                }
                writer.flush()?;
            }
        }
        Ok(written)
    }

    /// Target description for log messages.
    pub fn describe(&self) -> String {
        match self {
            Sink::Stdout(_) => "<stdout>".to_string(),
            Sink::File { path, .. } => path.display().to_string(),
        }
    }
}
