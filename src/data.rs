use std::fmt;

use calamine::Data;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A raw source cell as delivered by the reader stage.
///
/// CSV cells are always [`Cell::Text`]; spreadsheet cells surface the
/// workbook's native typing. The reader never coerces values; string
/// conversion happens in the materializer under a [`CellFormat`] policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    DateTime(NaiveDateTime),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<&Data> for Cell {
    fn from(value: &Data) -> Self {
        match value {
            Data::Empty => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Int(i) => Cell::Integer(*i),
            Data::Float(f) => Cell::Float(*f),
            Data::Bool(b) => Cell::Boolean(*b),
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(parsed) => Cell::DateTime(parsed),
                None => Cell::Float(dt.as_f64()),
            },
            Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
            Data::Error(e) => Cell::Text(e.to_string()),
        }
    }
}

/// String-coercion policy for materialized records.
///
/// Spreadsheet date cells have no canonical text form, so the format is an
/// explicit knob rather than a hard-coded guess. Defaults are ISO 8601;
/// date-valued cells (midnight timestamps) render through `date_format`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellFormat {
    pub date_format: String,
    pub datetime_format: String,
}

impl Default for CellFormat {
    fn default() -> Self {
        Self {
            date_format: "%Y-%m-%d".to_string(),
            datetime_format: "%Y-%m-%d %H:%M:%S".to_string(),
        }
    }
}

impl CellFormat {
    pub fn new(date_format: Option<&str>, datetime_format: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            date_format: date_format
                .map(str::to_string)
                .unwrap_or(defaults.date_format),
            datetime_format: datetime_format
                .map(str::to_string)
                .unwrap_or(defaults.datetime_format),
        }
    }

    /// Coerce a cell to its stored string form. Text is trimmed, absent
    /// values become the empty string, numbers and booleans use their
    /// natural rendering.
    pub fn render(&self, cell: &Cell) -> String {
        match cell {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.trim().to_string(),
            Cell::Integer(i) => i.to_string(),
            Cell::Float(f) => {
                if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                    (*f as i64).to_string()
                } else {
                    f.to_string()
                }
            }
            Cell::Boolean(b) => b.to_string(),
            Cell::DateTime(dt) => {
                if dt.time() == chrono::NaiveTime::MIN {
                    dt.format(&self.date_format).to_string()
                } else {
                    dt.format(&self.datetime_format).to_string()
                }
            }
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", CellFormat::default().render(self))
    }
}
