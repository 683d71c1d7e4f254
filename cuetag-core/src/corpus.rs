//! Gold corpus reader
//!
//! The corpus is a CSV file with a header row. Only the `user_prompt` and
//! `output` columns are read; any other column is ignored. A UTF-8 byte
//! order mark in front of the first header name is tolerated.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::Result;
use crate::labels::GoldLabel;

pub const PROMPT_COLUMN: &str = "user_prompt";
pub const LABEL_COLUMN: &str = "output";

const BOM: char = '\u{feff}';

/// One raw corpus record, before any validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusRecord {
    pub user_prompt: String,
    pub output: String,
}

impl CorpusRecord {
    pub fn new(user_prompt: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            user_prompt: user_prompt.into(),
            output: output.into(),
        }
    }
}

/// A record that survived validation: non-empty text and a four-token gold label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledRow<'a> {
    pub text: &'a str,
    pub gold: GoldLabel,
}

impl<'a> LabeledRow<'a> {
    /// `None` for rows the evaluation must skip.
    pub fn from_record(record: &'a CorpusRecord) -> Option<Self> {
        let text = record.user_prompt.trim();
        let label = record.output.trim();
        if text.is_empty() || label.is_empty() {
            tracing::debug!("Skipping row with empty prompt or label");
            return None;
        }
        match GoldLabel::parse(label) {
            Some(gold) => Some(Self { text, gold }),
            None => {
                tracing::debug!("Skipping row with malformed label: {}", label);
                None
            }
        }
    }
}

/// Valid rows of `records`, in input order.
pub fn labeled_rows<'a, I>(records: I) -> impl Iterator<Item = LabeledRow<'a>>
where
    I: IntoIterator<Item = &'a CorpusRecord>,
{
    records.into_iter().filter_map(LabeledRow::from_record)
}

/// Read every record from CSV data.
pub fn read_records<R: Read>(input: R) -> Result<Vec<CorpusRecord>> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(input);

    let headers: StringRecord = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches(BOM))
        .collect();
    let column = |name: &str| {
        let idx = headers.iter().position(|h| h == name);
        if idx.is_none() {
            tracing::warn!("Corpus has no '{}' column; every row will be skipped", name);
        }
        idx
    };
    let prompt_idx = column(PROMPT_COLUMN);
    let label_idx = column(LABEL_COLUMN);

    // ragged rows read missing fields as empty
    let field = |record: &StringRecord, idx: Option<usize>| {
        idx.and_then(|i| record.get(i)).unwrap_or_default().to_string()
    };

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record?;
        records.push(CorpusRecord {
            user_prompt: field(&record, prompt_idx),
            output: field(&record, label_idx),
        });
    }
    tracing::debug!("Read {} corpus records", records.len());
    Ok(records)
}

/// Open and read a corpus file.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<CorpusRecord>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    tracing::info!("Loading corpus from {}", path.display());
    read_records(file)
}
