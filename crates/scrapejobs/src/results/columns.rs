//! The canonical column vocabulary of a result file.
//!
//! Each recognised header name maps to a [`Column`]: its value kind and a
//! setter that writes a raw cell into a [`ResultRecord`]. The table is
//! static; [`lookup`] indexes it by name once per process.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::de::DeserializeOwned;

use super::record::ResultRecord;
use crate::error::CellError;

/// How a column's cell text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Copied verbatim; an empty cell is a real (empty) value.
    Text,
    /// Base-10 signed integer.
    Integer,
    /// Floating point number.
    Float,
    /// A JSON document decoded into a nested structure.
    Json,
    /// Comma-separated list, split without trimming.
    List,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColumnKind::Text => "text",
            ColumnKind::Integer => "integer",
            ColumnKind::Float => "float",
            ColumnKind::Json => "json",
            ColumnKind::List => "list",
        };
        f.write_str(s)
    }
}

type Setter = fn(&mut ResultRecord, &str) -> Result<(), CellError>;

/// One entry of the column vocabulary.
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
    set: Setter,
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

impl Column {
    /// Writes `value` into `record`.
    ///
    /// Empty cells leave non-text fields at their current value. On error
    /// the field is left untouched.
    pub fn apply(&self, record: &mut ResultRecord, value: &str) -> Result<(), CellError> {
        if value.is_empty() && self.kind != ColumnKind::Text {
            return Ok(());
        }
        (self.set)(record, value)
    }
}

fn integer(slot: &mut i64, value: &str) -> Result<(), CellError> {
    *slot = value.parse().map_err(|source| CellError::Integer {
        value: value.to_string(),
        source,
    })?;
    Ok(())
}

fn float(slot: &mut f64, value: &str) -> Result<(), CellError> {
    *slot = value.parse().map_err(|source| CellError::Float {
        value: value.to_string(),
        source,
    })?;
    Ok(())
}

/// The writer marshals empty collections as `null`; that reads as the
/// field's default.
fn json<T: DeserializeOwned + Default>(slot: &mut T, value: &str) -> Result<(), CellError> {
    *slot = serde_json::from_str::<Option<T>>(value)?.unwrap_or_default();
    Ok(())
}

fn list(slot: &mut Vec<String>, value: &str) -> Result<(), CellError> {
    *slot = value.split(',').map(str::to_string).collect();
    Ok(())
}

macro_rules! text {
    ($name:literal, $field:ident) => {
        Column {
            name: $name,
            kind: ColumnKind::Text,
            set: |r, v| {
                r.$field = v.to_string();
                Ok(())
            },
        }
    };
}

macro_rules! typed {
    ($name:literal, $kind:ident, $parse:ident, $field:ident) => {
        Column {
            name: $name,
            kind: ColumnKind::$kind,
            set: |r, v| $parse(&mut r.$field, v),
        }
    };
}

/// Every recognised column, in the order the result writer emits them.
pub static COLUMNS: &[Column] = &[
    text!("input_id", id),
    text!("link", link),
    text!("title", title),
    text!("category", category),
    text!("address", address),
    typed!("open_hours", Json, json, open_hours),
    typed!("popular_times", Json, json, popular_times),
    text!("website", website),
    text!("phone", phone),
    text!("plus_code", plus_code),
    typed!("review_count", Integer, integer, review_count),
    typed!("review_rating", Float, float, review_rating),
    typed!("reviews_per_rating", Json, json, reviews_per_rating),
    typed!("latitude", Float, float, latitude),
    typed!("longitude", Float, float, longitude),
    text!("cid", cid),
    text!("status", status),
    text!("descriptions", description),
    text!("reviews_link", reviews_link),
    text!("thumbnail", thumbnail),
    text!("timezone", timezone),
    text!("price_range", price_range),
    text!("data_id", data_id),
    typed!("images", Json, json, images),
    typed!("reservations", Json, json, reservations),
    typed!("order_online", Json, json, order_online),
    typed!("menu", Json, json, menu),
    typed!("owner", Json, json, owner),
    typed!("complete_address", Json, json, complete_address),
    typed!("about", Json, json, about),
    typed!("user_reviews", Json, json, user_reviews),
    typed!("user_reviews_extended", Json, json, user_reviews_extended),
    typed!("emails", List, list, emails),
];

/// Finds the column definition for a header name. Unknown names yield
/// `None`; matching is exact (case-sensitive, untrimmed).
pub fn lookup(name: &str) -> Option<&'static Column> {
    static INDEX: OnceLock<HashMap<&'static str, &'static Column>> = OnceLock::new();
    INDEX
        .get_or_init(|| COLUMNS.iter().map(|c| (c.name, c)).collect())
        .get(name)
        .copied()
}

/// Header names in writer order.
pub fn canonical_header() -> Vec<&'static str> {
    COLUMNS.iter().map(|c| c.name).collect()
}
