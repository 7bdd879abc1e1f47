//! Edgelist file parser
//!
//! One edge per line, `source<delim>destination[<delim>ignored...]`.
//! Comment lines, blank lines and an optional header line are skipped.

use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::config::EdgelistConfig;
use crate::domain::{Edge, EdgeTable, VertexId};
use crate::{InputError, Result};

/// Parser for delimited (source, destination) text
pub struct EdgelistParser {
    delimiter: u8,
    comment: u8,
    has_header: bool,
}

impl EdgelistParser {
    /// Build a parser from a validated config
    pub fn new(config: &EdgelistConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            delimiter: config.delimiter_byte(),
            comment: config.comment_byte(),
            has_header: config.has_header,
        })
    }

    pub fn parse_file(&self, path: &Path) -> Result<EdgeTable> {
        let file = File::open(path)
            .map_err(|e| InputError::access(path, &e).with_source(e))?;
        self.parse_reader(file)
    }

    pub fn parse_str(&self, content: &str) -> Result<EdgeTable> {
        self.parse_reader(content.as_bytes())
    }

    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<EdgeTable> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .comment(Some(self.comment))
            .has_headers(self.has_header)
            .flexible(true) // Extra columns are allowed and ignored
            .trim(Trim::All)
            .from_reader(reader);

        let mut table = EdgeTable::new();
        let mut record = StringRecord::new();

        while reader.read_record(&mut record)? {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            table.push(parse_record(&record, line)?);
        }

        debug!("Parsed {} edges", table.len());
        Ok(table)
    }
}

fn parse_record(record: &StringRecord, line: u64) -> Result<Edge> {
    if record.len() < 2 {
        return Err(InputError::parse(
            line,
            format!("expected at least 2 fields, found {}", record.len()),
        ));
    }
    let source = parse_vertex(&record[0], line)?;
    let destination = parse_vertex(&record[1], line)?;
    Ok(Edge::new(source, destination))
}

fn parse_vertex(field: &str, line: u64) -> Result<VertexId> {
    field.parse::<VertexId>().map_err(|e| {
        InputError::parse(line, format!("invalid vertex ID {:?}: {}", field, e)).with_source(e)
    })
}
