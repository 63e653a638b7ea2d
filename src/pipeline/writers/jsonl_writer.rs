use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::data_model::{PaperRecord, ScoredPaper, Topic};
use crate::error::{LensError, Result};
use crate::pipeline::writers::BaseWriter;

/// One exported line: the record's fields, its detailed-answer scores keyed
/// by topic, and the export time.
#[derive(Serialize)]
struct ExportRow<'a> {
    #[serde(flatten)]
    record: &'a PaperRecord,
    quality_scores: BTreeMap<Topic, f64>,
    exported_at: DateTime<Utc>,
}

/// Writes scored papers as JSON Lines.
pub struct JsonlWriter<W: Write = BufWriter<File>> {
    writer: Option<W>,
    exported_at: DateTime<Utc>,
    written: usize,
}

impl JsonlWriter<BufWriter<File>> {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }
}

impl<W: Write> JsonlWriter<W> {
    pub fn from_writer(writer: W) -> Self {
        JsonlWriter {
            writer: Some(writer),
            exported_at: Utc::now(),
            written: 0,
        }
    }

    pub fn written(&self) -> usize {
        self.written
    }

    /// Flushes and hands back the underlying writer.
    pub fn into_inner(mut self) -> Result<W> {
        let mut writer = self
            .writer
            .take()
            .ok_or_else(|| LensError::Unexpected("JSONL writer already closed".to_string()))?;
        writer.flush()?;
        Ok(writer)
    }
}

impl<W: Write> BaseWriter for JsonlWriter<W> {
    fn write_batch(&mut self, papers: &[&ScoredPaper]) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LensError::Unexpected("JSONL writer already closed".to_string()))?;
        for paper in papers {
            let row = ExportRow {
                record: &paper.record,
                quality_scores: Topic::ALL
                    .iter()
                    .map(|&topic| (topic, paper.scores.get(topic)))
                    .collect(),
                exported_at: self.exported_at,
            };
            serde_json::to_writer(&mut *writer, &row)?;
            writer.write_all(b"\n")?;
            self.written += 1;
        }
        debug!(batch = papers.len(), total = self.written, "Wrote JSONL batch");
        Ok(())
    }

    fn close(self) -> Result<()> {
        self.into_inner().map(|_| ())
    }
}
