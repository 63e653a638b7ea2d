use crate::data_model::ScoredPaper;
use crate::error::Result;

/// Trait for writing batches of scored papers to an output sink (e.g. file).
pub trait BaseWriter {
    /// Write a batch of papers to the sink.
    fn write_batch(&mut self, papers: &[&ScoredPaper]) -> Result<()>;

    /// Finalize and close the output writer.
    fn close(self) -> Result<()>;
}
