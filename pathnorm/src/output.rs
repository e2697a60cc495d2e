use std::io::{self, Write};

use pathnorm::{NormalizedPath, PathError, PathRecord};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Serialized path bytes, one per line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

#[derive(Debug, Error)]
pub enum OutputError {
    /// The result cannot be represented in this format; the batch goes on.
    #[error(transparent)]
    Path(#[from] PathError),

    #[error("write output: {0}")]
    Io(#[from] io::Error),
}

/// Serialized form for json lines (injects the raw input)
#[derive(Serialize)]
struct JsonLine<'a> {
    input: &'a str,
    #[serde(flatten)]
    record: &'a PathRecord,
}

/// Line-oriented writer for normalized paths.
pub struct OutputSink<W: Write> {
    format: OutputFormat,
    out: W,
}

impl<W: Write> OutputSink<W> {
    pub fn new(format: OutputFormat, out: W) -> Self {
        Self { format, out }
    }

    /// Write one line for `normalized`. Nothing is written when the result
    /// is rejected with [`OutputError::Path`].
    pub fn write(&mut self, raw: &[u8], normalized: &NormalizedPath) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Text => {
                let mut line = normalized.to_bytes();
                line.push(b'\n');
                self.out.write_all(&line)?;
            }
            OutputFormat::Json => {
                let record = PathRecord::try_from(normalized)?;
                let input = String::from_utf8_lossy(raw);
                let line = JsonLine {
                    input: &input,
                    record: &record,
                };
                let mut json = serde_json::to_vec(&line).map_err(io::Error::from)?;
                json.push(b'\n');
                self.out.write_all(&json)?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
