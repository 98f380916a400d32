//! SQL to CSV export.

use std::io::Write;

use rusqlite::types::ValueRef;
use rusqlite::Connection;

use crate::error::{Error, Result};

/// Write the contents of `table_name` as CSV.
///
/// `sql` overrides the default `select * from "<table>"` when the caller
/// wants a projection or ordering. The header row carries the statement's
/// column names; values are rendered as plain text with NULL becoming an
/// empty field and numbers using their display form. Binary columns are
/// refused because the CSV bridge cannot carry them. Returns the number of
/// data rows written.
pub fn copy_table_to_csv<W: Write>(
    conn: &Connection,
    table_name: &str,
    output: W,
    sql: Option<&str>,
) -> Result<u64> {
    let sql = match sql {
        Some(sql) => sql.to_string(),
        None => format!("select * from \"{table_name}\""),
    };

    let mut stmt = conn.prepare(&sql)?;
    let column_names: Vec<String> = stmt
        .column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    let mut writer = csv::Writer::from_writer(output);
    writer.write_record(&column_names)?;

    let mut rows = stmt.query([])?;
    let mut written = 0u64;
    while let Some(row) = rows.next()? {
        let mut record = Vec::with_capacity(column_names.len());
        for (idx, name) in column_names.iter().enumerate() {
            let value = match row.get_ref(idx)? {
                ValueRef::Null => String::new(),
                ValueRef::Integer(value) => value.to_string(),
                ValueRef::Real(value) => value.to_string(),
                ValueRef::Text(bytes) => String::from_utf8_lossy(bytes).into_owned(),
                ValueRef::Blob(_) => {
                    return Err(Error::BlobColumn {
                        column: name.clone(),
                    })
                }
            };
            record.push(value);
        }
        writer.write_record(&record)?;
        written += 1;
    }
    writer.flush()?;

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE \"inventory\" (\"Name\" varchar(20), \"Qty\" integer);\n\
             INSERT INTO \"inventory\" VALUES ('Widget', 3);\n\
             INSERT INTO \"inventory\" VALUES ('Grommet', NULL);",
        )
        .unwrap();
        conn
    }

    #[test]
    fn test_header_and_rows() {
        let conn = seeded();
        let mut out = Vec::new();

        let written = copy_table_to_csv(&conn, "inventory", &mut out, None).unwrap();
        assert_eq!(written, 2);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Name,Qty\nWidget,3\nGrommet,\n");
    }

    #[test]
    fn test_sql_override() {
        let conn = seeded();
        let mut out = Vec::new();

        copy_table_to_csv(
            &conn,
            "inventory",
            &mut out,
            Some("select \"Name\" from \"inventory\" order by \"Name\""),
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Name\nGrommet\nWidget\n");
    }

    #[test]
    fn test_blob_column_is_refused() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE \"t\" (\"Sketch\" blob);\n\
             INSERT INTO \"t\" VALUES (x'0102');",
        )
        .unwrap();

        let err = copy_table_to_csv(&conn, "t", &mut Vec::new(), None).unwrap_err();
        match err {
            Error::BlobColumn { column } => assert_eq!(column, "Sketch"),
            other => panic!("expected BlobColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_table_propagates_sql_error() {
        let conn = Connection::open_in_memory().unwrap();
        let err = copy_table_to_csv(&conn, "nope", &mut Vec::new(), None).unwrap_err();
        assert!(matches!(err, Error::Sql(_)));
    }
}
