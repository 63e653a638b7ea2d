// src/pipeline/readers/csv_reader.rs

use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use tracing::{info, instrument, warn};

use crate::data_model::{PaperRecord, CONCISE_QUESTIONS, DETAILED_QUESTIONS};
use crate::error::{LensError, Result};
use crate::pipeline::readers::BaseReader;

pub const TITLE_COLUMN: &str = "Title";
pub const CATEGORY_COLUMN: &str = "Category";
pub const AUTHORS_COLUMN: &str = "Authors";
pub const PUBLICATION_DATE_COLUMN: &str = "Publication Date";
pub const ABSTRACT_COLUMN: &str = "Abstract";
pub const GENERATED_SUMMARY_COLUMN: &str = "Generated Summary";
pub const FULL_TEXT_COLUMN: &str = "Full Text";

/// Column positions resolved from the header row. Optional columns that are
/// absent resolve to `None`, making every value in them missing.
#[derive(Debug)]
struct ColumnMap {
    title: usize,
    category: usize,
    authors: Option<usize>,
    publication_date: Option<usize>,
    abstract_text: Option<usize>,
    generated_summary: Option<usize>,
    full_text: Option<usize>,
    concise: [Option<usize>; 4],
    detailed: [Option<usize>; 4],
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord, source: &str) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| LensError::MissingColumn {
                column: name.to_string(),
                path: source.to_string(),
            })
        };
        let optional = |name: &str| {
            let idx = find(name);
            if idx.is_none() {
                warn!(column = name, source, "Optional column not found; values treated as missing");
            }
            idx
        };

        Ok(ColumnMap {
            title: require(TITLE_COLUMN)?,
            category: require(CATEGORY_COLUMN)?,
            authors: optional(AUTHORS_COLUMN),
            publication_date: optional(PUBLICATION_DATE_COLUMN),
            abstract_text: optional(ABSTRACT_COLUMN),
            generated_summary: optional(GENERATED_SUMMARY_COLUMN),
            full_text: optional(FULL_TEXT_COLUMN),
            concise: CONCISE_QUESTIONS.map(|q| optional(q)),
            detailed: DETAILED_QUESTIONS.map(|q| optional(q)),
        })
    }
}

/// Cell text, or `None` when the column is absent, the row is short, or the
/// cell is blank.
fn cell(row: &StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| row.get(i))
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
}

fn key(row: &StringRecord, idx: usize) -> String {
    row.get(idx).unwrap_or_default().to_string()
}

/// Parses CSV data whose first row is the header.
pub fn read_records_from<R: Read>(input: R, source: &str) -> Result<Vec<PaperRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);
    let columns = ColumnMap::from_headers(reader.headers()?, source)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(PaperRecord {
            title: key(&row, columns.title),
            category: key(&row, columns.category),
            authors: cell(&row, columns.authors),
            publication_date: cell(&row, columns.publication_date),
            abstract_text: cell(&row, columns.abstract_text),
            generated_summary: cell(&row, columns.generated_summary),
            full_text: cell(&row, columns.full_text),
            concise_answers: columns.concise.map(|idx| cell(&row, idx)),
            detailed_answers: columns.detailed.map(|idx| cell(&row, idx)),
        });
    }
    Ok(records)
}

/// Reads [`PaperRecord`]s from a delimited text file with a header row.
#[derive(Debug, Clone)]
pub struct CsvReader {
    path: PathBuf,
}

impl CsvReader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        CsvReader {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BaseReader for CsvReader {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn read_records(&self) -> Result<Vec<PaperRecord>> {
        let file = std::fs::File::open(&self.path)?;
        let records = read_records_from(file, &self.path.display().to_string())?;
        info!(count = records.len(), "Loaded paper records");
        Ok(records)
    }
}
