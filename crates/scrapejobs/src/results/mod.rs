//! Decoding of per-job CSV result files into typed records.

pub mod columns;
pub mod decoder;
pub mod record;

pub use columns::{canonical_header, Column, ColumnKind, COLUMNS};
pub use decoder::{DecodeOptions, DecodedResults, FieldDiagnostic, ResultDecoder};
pub use record::{About, AboutOption, Address, Image, LinkSource, Owner, ResultRecord, Review};
