//! CLI logic for the GWA round-trip checker.
//!
//! Decodes a GWA file, re-encodes every record, decodes the result again and
//! reports every record that does not survive the trip.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{debug, info, warn};

use gwa::{Codec, Document, GwaError, LineFailure};
use gwa_codec::error::Diagnostic;

/// Run the GWA CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `GwaError` for:
/// - File I/O errors
/// - Configuration loading or validation errors
/// - Lines that fail to decode
/// - Records that fail to re-encode or change on the round trip
pub fn run(args: &Args) -> Result<(), GwaError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Checking GWA file"
    );

    // Load configuration, then apply command-line overrides
    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(delimiter) = &args.delimiter {
        app_config = app_config.with_delimiter(config::parse_delimiter(delimiter)?);
    }
    app_config.validate()?;

    let source = fs::read_to_string(&args.input)?;

    let codec = Codec::new(app_config);
    let document = codec.decode_document(&source)?;
    for warning in document.warnings() {
        warn!(line_number = warning.line_number(); "{}", warning.diagnostic());
    }

    let lines = round_trip(&codec, &document)?;

    for (keyword, count) in document.keyword_counts() {
        info!(keyword, count; "Records checked");
    }

    if let Some(output) = &args.output {
        let mut canonical = lines.join("\n");
        canonical.push('\n');
        fs::write(output, canonical)?;
        info!(output_file = output; "Canonical lines written");
    }

    Ok(())
}

/// Re-encode every record and decode it again.
///
/// Returns the re-encoded lines when every record comes back unchanged.
fn round_trip(codec: &Codec, document: &Document) -> Result<Vec<String>, GwaError> {
    let lines = document.encode_all()?;

    let mut failures = Vec::new();
    for (entry, line) in document.entries().iter().zip(&lines) {
        match codec.decode(line, document.universe()) {
            Ok(record) if record == *entry.record() => {}
            Ok(_) => failures.push(LineFailure::new(
                entry.line_number(),
                entry.line(),
                Diagnostic::error("record changes when re-encoded")
                    .with_help(format!("re-encoded as `{}`", line.escape_debug())),
            )),
            Err(GwaError::Codec { err, src }) => {
                failures.push(LineFailure::new(entry.line_number(), src, err));
            }
            Err(err) => return Err(err),
        }
    }

    if !failures.is_empty() {
        return Err(GwaError::Document { failures });
    }
    debug!(records = lines.len(); "Round trip stable");
    Ok(lines)
}
