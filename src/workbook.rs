//! Spreadsheet workbook parsing for the reader stage.
//!
//! Only the first worksheet is read. Row 1 is the header row; header cells
//! without a value stay as empty-string placeholders so column positions
//! keep lining up, but only columns with a non-empty header ever become row
//! keys. Data rows that populate no key at all are dropped outright.

use std::io::Cursor;

use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};

use crate::{
    data::Cell,
    error::{IngestError, IngestResult},
    reader::{RawRow, RawTable},
};

pub fn read_table(buffer: &[u8]) -> IngestResult<RawTable> {
    let cursor = Cursor::new(buffer.to_vec());
    let mut workbook = open_workbook_auto_from_rs(cursor)?;

    let sheet_names = workbook.sheet_names();
    let first_sheet = sheet_names.first().ok_or(IngestError::NoWorksheet)?.clone();
    let range = workbook.worksheet_range(&first_sheet)?;

    Ok(table_from_range(&range))
}

/// Shape a worksheet cell range into the raw row model. Split out from the
/// workbook plumbing so header and row semantics are testable without
/// fabricating an archive.
pub fn table_from_range(range: &Range<Data>) -> RawTable {
    let mut rows_iter = range.rows();

    let headers: Vec<String> = match rows_iter.next() {
        Some(first_row) => first_row
            .iter()
            .map(|cell| match cell {
                Data::Empty => String::new(),
                other => other.to_string().trim().to_string(),
            })
            .collect(),
        None => Vec::new(),
    };

    let mut rows = Vec::new();
    for sheet_row in rows_iter {
        let row: RawRow = headers
            .iter()
            .zip(sheet_row.iter())
            .filter(|(header, cell)| !header.is_empty() && !matches!(cell, Data::Empty))
            .map(|(header, cell)| (header.clone(), Cell::from(cell)))
            .collect();
        if row.is_empty() {
            continue;
        }
        rows.push(row);
    }

    RawTable { headers, rows }
}
