//! Card catalog text format.
//!
//! One header line, then one `;`-delimited record per line:
//!
//! ```text
//! id;name;up;left;down;right;type
//! 1;Geezard;1;5;1;4;NONE
//! 11;Bomb;2;1;3;6;FIRE
//! ```
//!
//! Note the column order: left comes before down. Fields are trimmed, blank
//! lines are skipped and a name may be quoted to carry a `;`. Every record
//! must have exactly as many fields as the header. An unrecognised type tag
//! is tolerated and loads as `Element::None`.
//!
//! The engine never reads files; callers hand this module the text.

use csv::{ErrorKind, ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use tracing::{debug, warn};

use super::definition::{CardDefinition, CardId, Element, Sides};
use super::registry::CardRegistry;
use crate::core::CatalogError;

const FIELDS: [&str; 7] = ["id", "name", "up", "left", "down", "right", "type"];

/// One catalog row, deserialized by column position.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: u32,
    name: String,
    up: u8,
    left: u8,
    down: u8,
    right: u8,
    #[serde(rename = "type")]
    tag: String,
}

/// Parse a full catalog into a registry.
///
/// Line numbers in errors are 1-based and count the header.
pub fn parse_catalog(text: &str) -> Result<CardRegistry, CatalogError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(false)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut registry = CardRegistry::new();
    for record in reader.records() {
        let record = record.map_err(read_error)?;
        let card = card_from_record(&record)?;
        debug!(card = %card.id, name = %card.name, "loaded catalog card");
        registry.register(card)?;
    }

    if registry.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(registry)
}

fn card_from_record(record: &StringRecord) -> Result<CardDefinition, CatalogError> {
    let line = line_of(record.position());
    let row: CatalogRow = record
        .deserialize(None)
        .map_err(|err| field_error(line, record, &err))?;

    let element = row.tag.parse::<Element>().unwrap_or_else(|_| {
        warn!(line, tag = %row.tag, "unknown element tag, loading as NONE");
        Element::None
    });

    Ok(CardDefinition::new(
        CardId::new(row.id),
        row.name,
        Sides::new(row.up, row.down, row.left, row.right),
        element,
    ))
}

fn line_of(position: Option<&csv::Position>) -> usize {
    position.map_or(0, |p| p.line() as usize)
}

/// Reader-level failures: wrong field count, bad UTF-8, I/O.
fn read_error(err: csv::Error) -> CatalogError {
    let line = line_of(err.position());
    match err.kind() {
        ErrorKind::UnequalLengths { expected_len, len, .. } => CatalogError::FieldCount {
            line,
            expected: *expected_len as usize,
            found: *len as usize,
        },
        _ => CatalogError::Malformed {
            line,
            message: err.to_string(),
        },
    }
}

/// A field that would not deserialize is reported by column name and raw text.
fn field_error(line: usize, record: &StringRecord, err: &csv::Error) -> CatalogError {
    if let ErrorKind::Deserialize { err: de, .. } = err.kind() {
        if let Some(index) = de.field().map(|i| i as usize) {
            if let (Some(field), Some(value)) = (FIELDS.get(index), record.get(index)) {
                return CatalogError::InvalidNumber {
                    line,
                    field,
                    value: value.to_string(),
                };
            }
        }
    }
    CatalogError::Malformed {
        line,
        message: err.to_string(),
    }
}
