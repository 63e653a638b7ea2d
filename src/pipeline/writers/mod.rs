pub mod base_writer;
pub mod jsonl_writer;

pub use base_writer::BaseWriter;
pub use jsonl_writer::JsonlWriter;
