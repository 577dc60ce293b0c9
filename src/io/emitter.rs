//! Location output - writes one record per processed location
//!
//! Text records are `<path>\t<rack_slot>`; JSON records are one object per
//! line (JSONL).

use crate::infra::config::OutputFormat;
use crate::services::location_map::LocationUpdate;
use anyhow::Context;
use std::io::Write;
use tracing::debug;

/// Record writer for location updates
pub struct Emitter<W: Write> {
    writer: W,
    format: OutputFormat,
    written: usize,
}

impl<W: Write> Emitter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format, written: 0 }
    }

    /// Write a single update
    pub fn emit(&mut self, update: &LocationUpdate) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(
                self.writer,
                "{}\t{}",
                update.location.path(),
                update.location.rack_slot_descriptor()
            )
            .context("Failed to write location record")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.writer, update)
                    .context("Failed to serialize location record")?;
                writeln!(self.writer).context("Failed to write location record")?;
            }
        }

        self.written += 1;
        debug!(device_id = %update.device_id, format = %self.format.as_str(), "location_emitted");
        Ok(())
    }

    pub fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush().context("Failed to flush output")
    }

    /// Number of records written so far
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
