//! Multi-line GWA documents.
//!
//! Lists such as `all` resolve against the indices the document itself
//! defines, so decoding takes two passes: the first reads only keywords and
//! headers to build an [`IndexUniverse`], the second decodes every line
//! against it.

use indexmap::IndexMap;
use log::{debug, info, warn};

use gwa_codec::{
    Context,
    error::ErrorCode,
    peek_header,
    record::{decode_any, encode_any, keyword_kind},
};
use gwa_core::{entity::IndexUniverse, record::Record};

use crate::{
    config::AppConfig,
    error::{GwaError, LineFailure},
};

/// A decoded record and the line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    line_number: usize,
    line: String,
    record: Record,
}

impl Entry {
    /// 1-based line number.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn record(&self) -> &Record {
        &self.record
    }
}

/// A decoded document: records in source order plus the universe they were
/// decoded against.
#[derive(Debug, Clone)]
pub struct Document {
    entries: Vec<Entry>,
    warnings: Vec<LineFailure>,
    universe: IndexUniverse,
    delimiter: char,
}

impl Document {
    /// Decode every record line of `source`.
    ///
    /// # Errors
    ///
    /// Returns [`GwaError::Document`] with every failing line. Unknown
    /// keywords are only failures when the configuration does not skip them.
    pub(crate) fn decode(source: &str, config: &AppConfig) -> Result<Self, GwaError> {
        let delimiter = config.codec().delimiter();
        let document_config = config.document();
        let lines: Vec<(usize, &str)> = source
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line))
            .filter(|(_, line)| !document_config.is_ignored(line))
            .collect();
        info!(lines = lines.len(); "Decoding document");

        let universe = scan_universe(&lines, delimiter);
        debug!(universe:?; "Index universe built");

        let context = Context::new(delimiter, &universe);
        let mut entries = Vec::new();
        let mut warnings = Vec::new();
        let mut failures = Vec::new();
        for (line_number, line) in lines {
            match decode_any(line, &context) {
                Ok(record) => entries.push(Entry {
                    line_number,
                    line: line.to_string(),
                    record,
                }),
                Err(diag)
                    if diag.code() == Some(ErrorCode::E104)
                        && document_config.skip_unknown_keywords() =>
                {
                    warn!(line_number; "Skipping line with unknown keyword");
                    warnings.push(LineFailure::new(line_number, line, diag.into_warning()));
                }
                Err(diag) => failures.push(LineFailure::new(line_number, line, diag)),
            }
        }

        if !failures.is_empty() {
            return Err(GwaError::Document { failures });
        }
        info!(records = entries.len(), warnings = warnings.len(); "Document decoded");

        Ok(Self {
            entries,
            warnings,
            universe,
            delimiter,
        })
    }

    /// Decoded records in source order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.entries.iter().map(Entry::record)
    }

    /// Decoded records with their source lines.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Lines that were skipped, as warning diagnostics.
    pub fn warnings(&self) -> &[LineFailure] {
        &self.warnings
    }

    /// Indices defined by the document, per entity kind.
    pub fn universe(&self) -> &IndexUniverse {
        &self.universe
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of records per keyword, in order of first appearance.
    pub fn keyword_counts(&self) -> IndexMap<&'static str, usize> {
        let mut counts = IndexMap::new();
        for record in self.records() {
            *counts.entry(record.keyword()).or_insert(0) += 1;
        }
        counts
    }

    /// Re-encode every record in order, against the document's universe.
    ///
    /// # Errors
    ///
    /// Returns [`GwaError::Document`] with every record that cannot be
    /// written.
    pub fn encode_all(&self) -> Result<Vec<String>, GwaError> {
        let context = Context::new(self.delimiter, &self.universe);
        let mut lines = Vec::with_capacity(self.entries.len());
        let mut failures = Vec::new();
        for entry in &self.entries {
            match encode_any(&entry.record, &context) {
                Ok(line) => lines.push(line),
                Err(diag) => failures.push(LineFailure::new(entry.line_number, &entry.line, diag)),
            }
        }

        if failures.is_empty() {
            Ok(lines)
        } else {
            Err(GwaError::Document { failures })
        }
    }
}

/// First pass: collect the index of every known record.
///
/// Lines whose header does not decode are left for the second pass to report.
fn scan_universe(lines: &[(usize, &str)], delimiter: char) -> IndexUniverse {
    let mut universe = IndexUniverse::new();
    for (line_number, line) in lines {
        let Ok((keyword, header)) = peek_header(line, delimiter) else {
            continue;
        };
        let (Some(kind), Some(index)) = (keyword_kind(&keyword), header.index()) else {
            continue;
        };
        if !universe.insert(kind, index) {
            debug!(line_number = *line_number, index; "Index defined more than once");
        }
    }
    universe
}

#[cfg(test)]
mod tests {
    use gwa_core::entity::EntityKind;

    use super::*;
    use crate::config::{CodecConfig, DocumentConfig};

    const SOURCE: &str = "\
! two nodes and a bar
NODE.3\tSET\t1\t\tNO_RGB\t0\t0\t0\tfix
NODE.3\tSET\t2\t\tNO_RGB\t1\t0\t0

EL.4\tSET\t1\t\tNO_RGB\tBAR\t1\t0\t1\t2\t0\t0\tNO_RLS\t0\t0\t0\t0
PROP_SEC.3\tSET\t1\tI-beam
LOAD_BEAM_UDL.2\tSET\t1\t\tall\t1\tGLOBAL\tNO\tZ\t-1
";

    #[test]
    fn test_two_pass_decoding() {
        let document = Document::decode(SOURCE, &AppConfig::default()).unwrap();

        assert_eq!(document.len(), 4);
        assert!(document.universe().contains(EntityKind::Node, 2));
        assert!(document.universe().contains(EntityKind::Element, 1));
        assert_eq!(document.entries()[2].line_number(), 5);

        let Some(Record::LoadBeam(load)) = document.records().last() else {
            panic!("expected a beam load last");
        };
        assert_eq!(load.target, gwa_core::record::LoadTarget::Elements(vec![1]));
    }

    #[test]
    fn test_unknown_keyword_is_a_warning() {
        let document = Document::decode(SOURCE, &AppConfig::default()).unwrap();

        assert_eq!(document.warnings().len(), 1);
        assert_eq!(document.warnings()[0].line_number(), 6);
        assert!(document.warnings()[0].diagnostic().severity().is_warning());
    }

    #[test]
    fn test_unknown_keyword_can_fail() {
        let config = AppConfig::new(CodecConfig::default(), DocumentConfig::new(false, "!"));

        let Err(GwaError::Document { failures }) = Document::decode(SOURCE, &config) else {
            panic!("expected a document error");
        };
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].diagnostic().code(), Some(ErrorCode::E104));
    }

    #[test]
    fn test_every_failure_is_collected() {
        let source = "NODE.3\tSET\t1\t\tNO_RGB\tx\t0\t0\nNODE.3\tSET\t2\t\tNO_RGB\t0\t0\t0\nNODE.3\tSET\tone";

        let Err(GwaError::Document { failures }) = Document::decode(source, &AppConfig::default())
        else {
            panic!("expected a document error");
        };
        let lines: Vec<_> = failures.iter().map(LineFailure::line_number).collect();
        assert_eq!(lines, vec![1, 3]);
    }

    #[test]
    fn test_keyword_counts_keep_first_seen_order() {
        let document = Document::decode(SOURCE, &AppConfig::default()).unwrap();
        let counts: Vec<_> = document.keyword_counts().into_iter().collect();

        assert_eq!(counts, vec![("NODE", 2), ("EL", 1), ("LOAD_BEAM_UDL", 1)]);
    }

    #[test]
    fn test_encode_all_is_canonical() {
        let document = Document::decode(SOURCE, &AppConfig::default()).unwrap();
        let lines = document.encode_all().unwrap();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "NODE.3\tSET\t1\t\tNO_RGB\t0\t0\t0\tfix");
        assert_eq!(lines[3], "LOAD_BEAM_UDL.2\tSET\t1\t\tall\t1\tGLOBAL\tNO\tZ\t-1");
    }
}
