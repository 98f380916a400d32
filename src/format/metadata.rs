//! Metadata extraction from a raw database file.
//!
//! A HanDBase file opens with the NUL padded table name and, further in,
//! carries one fixed-size descriptor slot per column. The slots hold no
//! count and no terminator: the scanner walks exactly
//! `ScanOptions::max_columns` of them and lets a short buffer surface as a
//! truncation error.

use crate::error::{Error, Result};
use crate::format::buffer::ReadBuffer;
use crate::format::constants::{
    DESCRIPTOR_LEN, DESCRIPTOR_MARKER, DESCRIPTOR_MARKER_DISPLACEMENT, MAX_FIELD_LENGTH,
    SLOT_LENGTH_OFFSET, SLOT_NAME_OFFSET, SLOT_TYPE_OFFSET,
};
use crate::format::decode;
use crate::format::field_type::FieldType;

/// One decoded column-descriptor slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Column name, NUL truncated and decoded from the legacy encoding.
    pub name: String,
    /// Raw type code as stored.
    pub type_code: u8,
    /// Semantic type the code resolves to.
    pub field_type: FieldType,
    /// Stored length byte. Only meaningful for Text fields.
    pub length: u8,
}

/// Decoded table metadata: the embedded table name plus the descriptor
/// slots in physical order.
///
/// Physical order is all the format has; there is no display-order field.
/// The sequence may contain Unused padding slots and Heading pseudo-columns
/// unless they were filtered at scan time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// Table name from the start of the file.
    pub table_name: String,
    /// Column descriptors in physical order.
    pub columns: Vec<ColumnDescriptor>,
}

impl Metadata {
    /// Get column names in physical order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Scan parameters for [`extract_metadata_with_options`].
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Number of descriptor slots to walk. The format stores no column
    /// count, so the scanner always attempts exactly this many.
    pub max_columns: usize,
    /// Keep Unused padding slots in the result.
    pub include_unused: bool,
    /// Keep Heading pseudo-columns in the result.
    pub include_heading: bool,
    /// Absolute offset of the first descriptor slot. `None` locates the
    /// descriptor marker and applies the marker displacement; the
    /// displacement is version dependent, so callers with older files pass
    /// [`crate::format::constants::LEGACY_DESCRIPTOR_OFFSET`] here.
    pub descriptor_offset: Option<usize>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_columns: 100,
            include_unused: true,
            include_heading: true,
            descriptor_offset: None,
        }
    }
}

/// Extract metadata from a whole-file buffer with default options.
pub fn extract_metadata(data: &[u8]) -> Result<Metadata> {
    extract_metadata_with_options(data, &ScanOptions::default())
}

/// Extract metadata from a whole-file buffer.
///
/// Pure function over its inputs: no I/O, and the same buffer always
/// yields the same result. Fails with [`Error::MarkerNotFound`] when
/// marker search is requested and the marker is absent, never guessing an
/// offset; with [`Error::Truncated`] when a slot runs past the buffer;
/// with [`Error::Decode`] on invalid name bytes; and with
/// [`Error::UnknownType`] on a type code outside the taxonomy. No partial
/// metadata is returned on error.
pub fn extract_metadata_with_options(data: &[u8], options: &ScanOptions) -> Result<Metadata> {
    let mut buf = ReadBuffer::new(data);

    let table_name = decode::field_string(buf.read_bytes(MAX_FIELD_LENGTH)?, "table name")?;

    let start = match options.descriptor_offset {
        Some(offset) => offset,
        None => {
            let marker = buf.find(&DESCRIPTOR_MARKER).ok_or(Error::MarkerNotFound)?;
            marker + DESCRIPTOR_MARKER_DISPLACEMENT
        }
    };
    buf.seek(start)?;

    let mut columns = Vec::new();
    for _ in 0..options.max_columns {
        let slot = buf.read_bytes(DESCRIPTOR_LEN)?;
        let type_code = slot[SLOT_TYPE_OFFSET];
        let length = slot[SLOT_LENGTH_OFFSET];
        let name = decode::field_string(
            &slot[SLOT_NAME_OFFSET..SLOT_NAME_OFFSET + MAX_FIELD_LENGTH],
            "column name",
        )?;
        let field_type = FieldType::from_code(type_code)?;

        // Filtering happens after the slot is consumed so it never shifts
        // the offset arithmetic for the slots that follow.
        if field_type == FieldType::Unused && !options.include_unused {
            continue;
        }
        if field_type == FieldType::Heading && !options.include_heading {
            continue;
        }
        columns.push(ColumnDescriptor {
            name,
            type_code,
            field_type,
            length,
        });
    }

    Ok(Metadata {
        table_name,
        columns,
    })
}
