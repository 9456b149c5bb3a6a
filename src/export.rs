//! Write-only sinks for the current output text (file export, clipboard,
//! test capture). Sinks never feed anything back into the engine.

use std::fs;
use std::io;
use std::path::PathBuf;

pub trait TextSink {
    fn write_text(&mut self, text: &str) -> io::Result<()>;
}

/// Writes the text to a UTF-8 file, replacing any previous contents.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TextSink for FileSink {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        fs::write(&self.path, text.as_bytes())
    }
}

/// In-memory sink recording every write, for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub writes: Vec<String>,
}

impl TextSink for MemorySink {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.writes.push(text.to_string());
        Ok(())
    }
}
