// crates/infra/src/source/json.rs
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use recipe_stats_ports::source::{DeliveryRecordDto, RecordSource};
use recipe_stats_shared_kernel::{InfraResult, InfrastructureError, Result};
use serde::Deserialize;
use serde_json::error::Category;

/// Streaming decoder for a JSON array of delivery-record objects.
///
/// Records are decoded one element at a time; the array is never
/// materialized in memory. Structural problems (input is not an array,
/// an element is not an object, truncated input) are fatal framing
/// errors. Missing or mistyped fields inside an element are not: they
/// decode as empty strings and the record still counts.
#[derive(Debug)]
pub struct JsonRecordSource<R> {
    reader: R,
    path: PathBuf,
    state: DecoderState,
}

/// Where the decoder sits inside the top-level array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecoderState {
    AtStart,
    InArray { first: bool },
    Finished,
}

impl JsonRecordSource<BufReader<File>> {
    /// Opens the file at `path` for streaming decode.
    pub fn open(path: impl Into<PathBuf>) -> InfraResult<Self> {
        let path = path.into();
        let file = File::open(&path).map_err(|err| source_unavailable(&path, err))?;
        Ok(Self::from_reader(path, BufReader::new(file)))
    }
}

impl<R: BufRead> JsonRecordSource<R> {
    /// Wraps an already-open reader. `path` appears only in error messages.
    pub fn from_reader(path: impl Into<PathBuf>, reader: R) -> Self {
        Self { reader, path: path.into(), state: DecoderState::AtStart }
    }

    fn advance(&mut self) -> InfraResult<Option<DeliveryRecordDto>> {
        match self.step() {
            Ok(next) => Ok(next),
            Err(err) => {
                // A fatal error ends the stream; later calls yield no records.
                self.state = DecoderState::Finished;
                Err(err)
            }
        }
    }

    fn step(&mut self) -> InfraResult<Option<DeliveryRecordDto>> {
        let first = match self.state {
            DecoderState::Finished => return Ok(None),
            DecoderState::AtStart => {
                self.expect_array_start()?;
                true
            }
            DecoderState::InArray { first } => first,
        };

        self.skip_whitespace()?;
        match self.peek_byte()? {
            Some(b']') => {
                self.reader.consume(1);
                self.state = DecoderState::Finished;
                return Ok(None);
            }
            Some(b',') if !first => {
                self.reader.consume(1);
                self.skip_whitespace()?;
            }
            Some(b'{') if first => {}
            Some(found) => {
                let expected = if first { "'{' or ']'" } else { "',' or ']'" };
                return Err(framing_unexpected(found, expected));
            }
            None => return Err(unexpected_end()),
        }

        match self.peek_byte()? {
            Some(b'{') => {}
            Some(found) => return Err(framing_unexpected(found, "'{'")),
            None => return Err(unexpected_end()),
        }

        let element = self.read_element()?;
        self.state = DecoderState::InArray { first: false };
        Ok(Some(record_from_value(&element)))
    }

    fn expect_array_start(&mut self) -> InfraResult<()> {
        self.skip_whitespace()?;
        match self.peek_byte()? {
            Some(b'[') => {
                self.reader.consume(1);
                self.state = DecoderState::InArray { first: true };
                Ok(())
            }
            Some(found) => Err(framing_unexpected(found, "'['")),
            None => Err(InfrastructureError::Framing { details: "input is empty".to_string() }),
        }
    }

    /// Parses exactly one JSON value off the reader. Object parsing
    /// stops at the closing brace, so the separator that follows stays
    /// in the buffer for the framing checks.
    fn read_element(&mut self) -> InfraResult<serde_json::Value> {
        let parsed = {
            let mut deserializer = serde_json::Deserializer::from_reader(&mut self.reader);
            serde_json::Value::deserialize(&mut deserializer)
        };
        parsed.map_err(|err| element_error(&self.path, err))
    }

    fn skip_whitespace(&mut self) -> InfraResult<()> {
        loop {
            let (skip, more) = match self.reader.fill_buf() {
                Ok(buffered) => {
                    match buffered.iter().position(|byte| !is_json_whitespace(*byte)) {
                        Some(len) => (len, false),
                        None => (buffered.len(), !buffered.is_empty()),
                    }
                }
                Err(err) => return Err(source_unavailable(&self.path, err)),
            };
            self.reader.consume(skip);
            if !more {
                return Ok(());
            }
        }
    }

    fn peek_byte(&mut self) -> InfraResult<Option<u8>> {
        match self.reader.fill_buf() {
            Ok(buffered) => Ok(buffered.first().copied()),
            Err(err) => Err(source_unavailable(&self.path, err)),
        }
    }
}

impl<R: BufRead + Send + Sync> RecordSource for JsonRecordSource<R> {
    fn next_record(&mut self) -> Result<Option<DeliveryRecordDto>> {
        Ok(self.advance()?)
    }
}

const fn is_json_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

fn record_from_value(element: &serde_json::Value) -> DeliveryRecordDto {
    DeliveryRecordDto {
        postcode: string_field(element, "postcode"),
        recipe: string_field(element, "recipe"),
        delivery: string_field(element, "delivery"),
    }
}

/// Missing or non-string fields decode as empty strings so a sloppy
/// record still counts toward the totals.
fn string_field(element: &serde_json::Value, key: &str) -> String {
    element.get(key).and_then(serde_json::Value::as_str).unwrap_or_default().to_string()
}

fn source_unavailable(path: &Path, err: std::io::Error) -> InfrastructureError {
    InfrastructureError::SourceUnavailable { path: path.to_path_buf(), source: err }
}

fn element_error(path: &Path, err: serde_json::Error) -> InfrastructureError {
    if err.classify() == Category::Io {
        return source_unavailable(path, std::io::Error::other(err));
    }
    InfrastructureError::Framing { details: err.to_string() }
}

fn framing_unexpected(found: u8, expected: &str) -> InfrastructureError {
    InfrastructureError::Framing {
        details: format!("expected {expected}, found '{}'", char::from(found)),
    }
}

fn unexpected_end() -> InfrastructureError {
    InfrastructureError::Framing {
        details: "unexpected end of input inside the array".to_string(),
    }
}
