//! Delimited-text parsing for the reader stage.
//!
//! The first line is always the header row. Headers and cell values are
//! trimmed of surrounding whitespace; fully empty lines never become rows.

use encoding_rs::Encoding;

use crate::{
    data::Cell,
    error::IngestResult,
    io_utils::{self, DEFAULT_CSV_DELIMITER},
    reader::{RawRow, RawTable},
};

pub fn read_table(buffer: &[u8], encoding: &'static Encoding) -> IngestResult<RawTable> {
    let mut reader = io_utils::open_csv_reader(buffer, DEFAULT_CSV_DELIMITER);

    let header_record = reader.byte_headers()?.clone();
    let headers: Vec<String> = io_utils::decode_record(&header_record, encoding)?
        .into_iter()
        .map(|header| header.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    let mut record = csv::ByteRecord::new();
    while reader.read_byte_record(&mut record)? {
        let decoded = io_utils::decode_record(&record, encoding)?;
        // The csv crate already skips blank lines; a row of empty fields is
        // real data and must survive to the materializer.
        let row: RawRow = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let value = decoded.get(idx).map(|s| s.trim()).unwrap_or("");
                (header.clone(), Cell::Text(value.to_string()))
            })
            .collect();
        rows.push(row);
    }

    Ok(RawTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::UTF_8;

    fn read(content: &str) -> RawTable {
        read_table(content.as_bytes(), UTF_8).expect("parse csv")
    }

    #[test]
    fn headers_and_cells_are_trimmed() {
        let table = read(" Email , Name \n a@x.com , Ann \n");
        assert_eq!(table.headers, vec!["Email", "Name"]);
        assert_eq!(
            table.rows[0],
            vec![
                ("Email".to_string(), Cell::Text("a@x.com".to_string())),
                ("Name".to_string(), Cell::Text("Ann".to_string())),
            ]
        );
    }

    #[test]
    fn blank_lines_are_skipped_but_empty_fields_survive() {
        let table = read("Email,Name\n\na@x.com,Ann\n,Bob\n\n");
        assert_eq!(table.rows.len(), 2);
        assert_eq!(
            table.rows[1],
            vec![
                ("Email".to_string(), Cell::Text(String::new())),
                ("Name".to_string(), Cell::Text("Bob".to_string())),
            ]
        );
    }

    #[test]
    fn short_rows_pad_with_empty_cells() {
        let table = read("a,b,c\n1,2\n");
        assert_eq!(
            table.rows[0],
            vec![
                ("a".to_string(), Cell::Text("1".to_string())),
                ("b".to_string(), Cell::Text("2".to_string())),
                ("c".to_string(), Cell::Text(String::new())),
            ]
        );
    }

    #[test]
    fn empty_buffer_yields_no_headers_and_no_rows() {
        let table = read_table(b"", UTF_8).expect("parse empty");
        assert!(table.headers.is_empty());
        assert!(table.rows.is_empty());
    }
}
