//! GWA - Decode and encode GSA structural-model records.
//!
//! A facade over [`gwa_codec`]: keyword dispatch over every supported
//! record type, multi-line document decoding, and configuration.

pub mod config;

mod document;
mod error;

pub use gwa_core::{entity, enums, header, record, release, topology, wire};

pub use document::{Document, Entry};
pub use error::{GwaError, LineFailure};

use log::{debug, trace};

use gwa_codec::{
    Context,
    record::{decode_any, encode_any},
};
use gwa_core::{entity::IndexResolver, record::Record};

use config::AppConfig;

/// Decoder and encoder for GWA lines and documents.
///
/// # Examples
///
/// ```rust
/// use gwa::{Codec, config::AppConfig, entity::IndexUniverse, record::Record};
///
/// let codec = Codec::new(AppConfig::default());
/// let universe = IndexUniverse::new();
///
/// let line = "NODE.3\tSET\t1\tN1\tNO_RGB\t0\t0\t0\tpin";
/// let record = codec.decode(line, &universe).expect("Failed to decode");
/// assert!(matches!(record, Record::Node(_)));
///
/// assert_eq!(codec.encode(&record, &universe).expect("Failed to encode"), line);
/// ```
#[derive(Debug, Default)]
pub struct Codec {
    config: AppConfig,
}

impl Codec {
    /// Create a new codec with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Delimiter and document settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Decode one line, dispatching on its keyword.
    ///
    /// # Arguments
    ///
    /// * `line` - A single GWA line without its line break
    /// * `resolver` - Known indices used to expand `all`
    ///
    /// # Errors
    ///
    /// Returns [`GwaError::Codec`] with the failing diagnostic and the line.
    pub fn decode(&self, line: &str, resolver: &dyn IndexResolver) -> Result<Record, GwaError> {
        let context = Context::new(self.config.codec().delimiter(), resolver);
        let record =
            decode_any(line, &context).map_err(|err| GwaError::new_codec_error(err, line))?;
        trace!(record:?; "Decoded record");
        Ok(record)
    }

    /// Encode one record.
    ///
    /// # Errors
    ///
    /// Returns [`GwaError::Codec`] when the record cannot be written. The
    /// diagnostic carries no spans since there is no source line.
    pub fn encode(&self, record: &Record, resolver: &dyn IndexResolver) -> Result<String, GwaError> {
        let context = Context::new(self.config.codec().delimiter(), resolver);
        encode_any(record, &context).map_err(|err| GwaError::new_codec_error(err, String::new()))
    }

    /// Decode a whole document.
    ///
    /// Blank lines and comments are ignored. `all` in list fields resolves
    /// against the indices the document defines.
    ///
    /// # Errors
    ///
    /// Returns [`GwaError::Config`] for an invalid configuration and
    /// [`GwaError::Document`] listing every line that failed.
    pub fn decode_document(&self, source: &str) -> Result<Document, GwaError> {
        self.config.validate()?;
        let document = Document::decode(source, &self.config)?;
        debug!(records = document.len(); "Document ready");
        Ok(document)
    }
}
