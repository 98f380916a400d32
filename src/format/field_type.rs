//! HanDBase field type taxonomy.
//!
//! Two fixed tables, both immutable: raw type code to semantic field type,
//! and semantic field type to SQL keyword. Neither covers the full 0-255
//! code range; an unmapped code is a hard error, never a default.

use std::fmt;

use crate::error::{Error, Result};
use crate::format::constants::*;

/// Semantic field type a descriptor slot's type code resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Padding slot with no data behind it.
    Unused,
    /// Variable-length text; the slot's length byte applies.
    Text,
    Integer,
    Float,
    /// Pop-up value list.
    PopUp,
    CheckBox,
    /// Record id scheme from pre-4.x databases.
    UniqueLegacy,
    /// Signature or sketch bitmap.
    Sketch,
    Date,
    Time,
    /// Link key into another database.
    Linked,
    /// Long text, up to [`NOTE_MAX_LENGTH`] bytes.
    Note,
    /// Display-only label row, not a data column.
    Heading,
    /// Pop-up whose values live in another database.
    DbPopUp,
    Calculated,
    Conditional,
    External,
}

/// SQL rendering of each field type. Sketch is deliberately absent: binary
/// sketch payloads cannot ride the CSV bridge.
const SQL_KEYWORDS: &[(FieldType, &str)] = &[
    (FieldType::Unused, "dummy_unused"),
    (FieldType::Text, "varchar"),
    (FieldType::Integer, "integer"),
    (FieldType::Float, "float"),
    (FieldType::PopUp, "string"),
    (FieldType::CheckBox, "bool"),
    (FieldType::UniqueLegacy, "integer"),
    (FieldType::Date, "date"),
    (FieldType::Time, "time"),
    (FieldType::Linked, "varchar"),
    (FieldType::Note, "varchar"),
    (FieldType::Heading, "dummy_unused_heading"),
    (FieldType::DbPopUp, "string"),
    (FieldType::Calculated, "varchar"),
    (FieldType::Conditional, "varchar"),
    (FieldType::External, "varchar"),
];

impl FieldType {
    /// Resolve a raw type code.
    ///
    /// Returns `Err(Error::UnknownType)` for codes outside the taxonomy.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            FIELD_TYPE_UNUSED => Ok(FieldType::Unused),
            FIELD_TYPE_TEXT => Ok(FieldType::Text),
            FIELD_TYPE_INTEGER => Ok(FieldType::Integer),
            FIELD_TYPE_FLOAT => Ok(FieldType::Float),
            FIELD_TYPE_POPUP => Ok(FieldType::PopUp),
            FIELD_TYPE_CHECKBOX => Ok(FieldType::CheckBox),
            FIELD_TYPE_UNIQUE_LEGACY => Ok(FieldType::UniqueLegacy),
            FIELD_TYPE_SKETCH => Ok(FieldType::Sketch),
            FIELD_TYPE_DATE => Ok(FieldType::Date),
            FIELD_TYPE_TIME => Ok(FieldType::Time),
            FIELD_TYPE_LINKED => Ok(FieldType::Linked),
            FIELD_TYPE_NOTE => Ok(FieldType::Note),
            FIELD_TYPE_HEADING => Ok(FieldType::Heading),
            FIELD_TYPE_DB_POPUP => Ok(FieldType::DbPopUp),
            FIELD_TYPE_CALCULATED => Ok(FieldType::Calculated),
            FIELD_TYPE_CONDITIONAL => Ok(FieldType::Conditional),
            FIELD_TYPE_EXTERNAL => Ok(FieldType::External),
            _ => Err(Error::UnknownType { code }),
        }
    }

    /// Get the raw type code.
    pub fn code(&self) -> u8 {
        match self {
            FieldType::Unused => FIELD_TYPE_UNUSED,
            FieldType::Text => FIELD_TYPE_TEXT,
            FieldType::Integer => FIELD_TYPE_INTEGER,
            FieldType::Float => FIELD_TYPE_FLOAT,
            FieldType::PopUp => FIELD_TYPE_POPUP,
            FieldType::CheckBox => FIELD_TYPE_CHECKBOX,
            FieldType::UniqueLegacy => FIELD_TYPE_UNIQUE_LEGACY,
            FieldType::Sketch => FIELD_TYPE_SKETCH,
            FieldType::Date => FIELD_TYPE_DATE,
            FieldType::Time => FIELD_TYPE_TIME,
            FieldType::Linked => FIELD_TYPE_LINKED,
            FieldType::Note => FIELD_TYPE_NOTE,
            FieldType::Heading => FIELD_TYPE_HEADING,
            FieldType::DbPopUp => FIELD_TYPE_DB_POPUP,
            FieldType::Calculated => FIELD_TYPE_CALCULATED,
            FieldType::Conditional => FIELD_TYPE_CONDITIONAL,
            FieldType::External => FIELD_TYPE_EXTERNAL,
        }
    }

    /// Look up the SQL keyword for this type, if it has one.
    pub fn sql_keyword(&self) -> Option<&'static str> {
        SQL_KEYWORDS
            .iter()
            .find(|(field_type, _)| field_type == self)
            .map(|(_, keyword)| *keyword)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::Unused => "UNUSED",
            FieldType::Text => "Text",
            FieldType::Integer => "Integer",
            FieldType::Float => "Float",
            FieldType::PopUp => "Pop-Up",
            FieldType::CheckBox => "Check-Box",
            FieldType::UniqueLegacy => "UniqueLegacy",
            FieldType::Sketch => "Signature or Sketch",
            FieldType::Date => "Date",
            FieldType::Time => "Time",
            FieldType::Linked => "Linked",
            FieldType::Note => "Note",
            FieldType::Heading => "Heading",
            FieldType::DbPopUp => "DB Pop-Up",
            FieldType::Calculated => "Calculated",
            FieldType::Conditional => "Conditional",
            FieldType::External => "External",
        };
        write!(f, "{name}")
    }
}
