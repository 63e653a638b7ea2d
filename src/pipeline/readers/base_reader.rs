use crate::data_model::PaperRecord;
use crate::error::Result;

/// A source of paper records, read once per session.
pub trait BaseReader {
    fn read_records(&self) -> Result<Vec<PaperRecord>>;
}
