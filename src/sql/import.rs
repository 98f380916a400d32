//! CSV to SQL row copying.

use std::io::Read;

use rusqlite::Connection;

use crate::error::{Error, Result};

/// Append the rows of a CSV document to `table_name`, creating the table
/// when it does not exist.
///
/// The header row supplies the column names. When `ddl` is `None` the
/// table is created with every column typed `STRING`; pass the output of
/// [`crate::format::ddl::synthesize_ddl`] to get real column types. When
/// the table already exists it is assumed to match the header.
///
/// Every value is bound as text: no NULL handling and no type inference,
/// matching what the device itself exports. Returns the number of rows
/// inserted.
pub fn copy_csv_to_table<R: Read>(
    conn: &mut Connection,
    input: R,
    table_name: &str,
    ddl: Option<&str>,
) -> Result<u64> {
    let mut reader = csv::Reader::from_reader(input);
    let header = reader.headers()?.clone();
    if header.is_empty() {
        return Err(Error::MissingHeader);
    }

    let ddl = match ddl {
        Some(sql) => sql.to_string(),
        None => {
            let column_ddl = header
                .iter()
                .map(|name| format!("\"{name}\" STRING"))
                .collect::<Vec<_>>()
                .join(", ");
            format!("CREATE TABLE IF NOT EXISTS \"{table_name}\" ({column_ddl})")
        }
    };
    conn.execute_batch(&ddl)?;

    let bind_markers = vec!["?"; header.len()].join(", ");
    let column_names = header
        .iter()
        .map(|name| format!("\"{name}\""))
        .collect::<Vec<_>>()
        .join(", ");
    let dml = format!("INSERT INTO \"{table_name}\" ({column_names}) VALUES ({bind_markers})");

    let tx = conn.transaction()?;
    let mut rows = 0u64;
    {
        let mut stmt = tx.prepare(&dml)?;
        for record in reader.records() {
            let record = record?;
            stmt.execute(rusqlite::params_from_iter(record.iter()))?;
            rows += 1;
        }
    }
    tx.commit()?;

    Ok(rows)
}
