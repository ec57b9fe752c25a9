use std::fmt;
use std::path::Path;

use serde::Serialize;

use super::columns::{self, Column, ColumnKind};
use super::record::ResultRecord;
use crate::error::DecodeError;
use crate::sanitize::redact_path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Controls how cell-level problems are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, serde::Deserialize)]
pub struct DecodeOptions {
    /// Abort on the first unparsable numeric or JSON cell instead of
    /// leaving the field at its default.
    #[serde(default)]
    pub strict: bool,
}

impl DecodeOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// A cell that could not be decoded into its field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDiagnostic {
    /// 1-based index of the data row (the header is row 0).
    pub row: usize,
    pub column: String,
    pub kind: ColumnKind,
    pub value: String,
    pub reason: String,
}

impl fmt::Display for FieldDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {}, column '{}' ({}): {}",
            self.row, self.column, self.kind, self.reason
        )
    }
}

/// Records decoded from one result file, plus any cells that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DecodedResults {
    pub records: Vec<ResultRecord>,
    pub diagnostics: Vec<FieldDiagnostic>,
}

/// Reads a job's CSV result file into [`ResultRecord`]s.
///
/// The first row is the header; its names select fields through the static
/// column table, so column order is free and unknown columns are ignored.
#[derive(Debug, Clone, Default)]
pub struct ResultDecoder {
    options: DecodeOptions,
}

impl ResultDecoder {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// Reads and decodes the file at `path`. The whole file is buffered
    /// before parsing starts.
    pub fn decode(&self, path: &Path) -> Result<DecodedResults, DecodeError> {
        let _span = tracing::info_span!("results.decode", file = %redact_path(path)).entered();

        let bytes = std::fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DecodeError::NotFound(path.to_path_buf())
            } else {
                DecodeError::Read {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        self.decode_bytes(path, &bytes)
    }

    /// Decodes an in-memory CSV document. `path` is only used in errors.
    pub fn decode_bytes(&self, path: &Path, bytes: &[u8]) -> Result<DecodedResults, DecodeError> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes);

        let rows = reader
            .records()
            .collect::<Result<Vec<csv::StringRecord>, csv::Error>>()
            .map_err(|e| DecodeError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;

        let Some((header, data)) = rows.split_first() else {
            return Ok(DecodedResults::default());
        };

        let columns: Vec<Option<&'static Column>> = header.iter().map(columns::lookup).collect();
        let unknown: Vec<&str> = header
            .iter()
            .zip(&columns)
            .filter(|(_, c)| c.is_none())
            .map(|(name, _)| name)
            .collect();
        if !unknown.is_empty() {
            log::debug!(
                "Ignoring unknown result columns in {}: {:?}",
                redact_path(path),
                unknown
            );
        }

        let mut results = DecodedResults {
            records: Vec::with_capacity(data.len()),
            diagnostics: Vec::new(),
        };

        for (index, row) in data.iter().enumerate() {
            let mut record = ResultRecord::default();

            // Cells past the end of a short row are simply absent.
            for (column, value) in columns.iter().zip(row.iter()) {
                let Some(column) = column else {
                    continue;
                };
                if let Err(err) = column.apply(&mut record, value) {
                    let diagnostic = FieldDiagnostic {
                        row: index + 1,
                        column: column.name.to_string(),
                        kind: column.kind,
                        value: value.to_string(),
                        reason: err.to_string(),
                    };
                    if self.options.strict {
                        return Err(DecodeError::Field(diagnostic));
                    }
                    log::debug!("Skipping cell in {}: {}", redact_path(path), diagnostic);
                    results.diagnostics.push(diagnostic);
                }
            }

            results.records.push(record);
        }

        tracing::debug!(
            records = results.records.len(),
            skipped_cells = results.diagnostics.len(),
            "decoded result file"
        );

        Ok(results)
    }
}
