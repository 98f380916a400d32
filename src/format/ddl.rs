//! CREATE TABLE synthesis from decoded metadata.

use crate::error::{Error, Result};
use crate::format::constants::NOTE_MAX_LENGTH;
use crate::format::field_type::FieldType;
use crate::format::metadata::Metadata;

/// Render a `CREATE TABLE` statement for the decoded columns.
///
/// `table_name` overrides the embedded name when the caller already knows
/// the target table. Identifiers are double-quoted so reserved words and
/// embedded spaces survive. Every column is nullable; no keys, defaults,
/// or NOT NULL constraints are inferred.
///
/// Length clauses: Note fields always get `(2000)` regardless of their
/// stored length byte, Text fields use the stored byte (omitted when
/// zero), and every other type gets none.
pub fn synthesize_ddl(metadata: &Metadata, table_name: Option<&str>) -> Result<String> {
    let table_name = table_name.unwrap_or(&metadata.table_name);

    let mut column_lines = Vec::with_capacity(metadata.columns.len());
    for column in &metadata.columns {
        let keyword = column
            .field_type
            .sql_keyword()
            .ok_or(Error::UnmappedSqlType {
                field_type: column.field_type,
            })?;
        let length = match column.field_type {
            FieldType::Note => Some(NOTE_MAX_LENGTH),
            FieldType::Text => Some(u16::from(column.length)),
            _ => None,
        };
        let sql_type = match length {
            Some(length) if length != 0 => format!("{keyword}({length})"),
            _ => keyword.to_string(),
        };
        column_lines.push(format!("    \"{}\" {}", column.name, sql_type));
    }

    Ok(format!(
        "CREATE TABLE \"{}\" (\n{}\n);",
        table_name,
        column_lines.join(",\n")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::metadata::ColumnDescriptor;

    fn column(name: &str, field_type: FieldType, length: u8) -> ColumnDescriptor {
        ColumnDescriptor {
            name: name.to_string(),
            type_code: field_type.code(),
            field_type,
            length,
        }
    }

    fn orders() -> Metadata {
        Metadata {
            table_name: "Orders".to_string(),
            columns: vec![column("Notes", FieldType::Text, 50)],
        }
    }

    #[test]
    fn test_text_uses_stored_length() {
        let ddl = synthesize_ddl(&orders(), None).unwrap();
        assert_eq!(ddl, "CREATE TABLE \"Orders\" (\n    \"Notes\" varchar(50)\n);");
    }

    #[test]
    fn test_note_length_is_always_2000() {
        let metadata = Metadata {
            table_name: "Memos".to_string(),
            columns: vec![column("Body", FieldType::Note, 5)],
        };
        let ddl = synthesize_ddl(&metadata, None).unwrap();
        assert!(ddl.contains("\"Body\" varchar(2000)"));
        assert!(!ddl.contains("varchar(5)"));
    }

    #[test]
    fn test_other_types_have_no_length_clause() {
        let metadata = Metadata {
            table_name: "T".to_string(),
            columns: vec![
                column("Count", FieldType::Integer, 9),
                column("Done", FieldType::CheckBox, 4),
                column("When", FieldType::Date, 8),
            ],
        };
        let ddl = synthesize_ddl(&metadata, None).unwrap();
        assert_eq!(
            ddl,
            "CREATE TABLE \"T\" (\n    \"Count\" integer,\n    \"Done\" bool,\n    \"When\" date\n);"
        );
    }

    #[test]
    fn test_zero_length_text_has_no_clause() {
        let metadata = Metadata {
            table_name: "T".to_string(),
            columns: vec![column("Tag", FieldType::Text, 0)],
        };
        let ddl = synthesize_ddl(&metadata, None).unwrap();
        assert!(ddl.contains("\"Tag\" varchar\n"));
    }

    #[test]
    fn test_table_name_override() {
        let ddl = synthesize_ddl(&orders(), Some("orders_import")).unwrap();
        assert!(ddl.starts_with("CREATE TABLE \"orders_import\" ("));
    }

    #[test]
    fn test_multi_column_layout() {
        let metadata = Metadata {
            table_name: "Time Billing".to_string(),
            columns: vec![
                column("Client", FieldType::Text, 30),
                column("Hours", FieldType::Float, 0),
            ],
        };
        let ddl = synthesize_ddl(&metadata, None).unwrap();
        assert_eq!(
            ddl,
            "CREATE TABLE \"Time Billing\" (\n    \"Client\" varchar(30),\n    \"Hours\" float\n);"
        );
    }

    #[test]
    fn test_unmapped_type_is_rejected() {
        let metadata = Metadata {
            table_name: "T".to_string(),
            columns: vec![column("Autograph", FieldType::Sketch, 0)],
        };
        let err = synthesize_ddl(&metadata, None).unwrap_err();
        match err {
            Error::UnmappedSqlType { field_type } => assert_eq!(field_type, FieldType::Sketch),
            other => panic!("expected UnmappedSqlType, got {other:?}"),
        }
    }
}
