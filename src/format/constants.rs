//! HanDBase on-disk format constants.
//!
//! These constants are reverse engineered from databases created with
//! HanDBase 4.x for Android. The format carries no column count and no
//! version field; everything here is a fixed offset observed in sample
//! files.

/// Size of the NUL padded name window used for both the table name and
/// each column name. Usable name length is 19 bytes.
pub const MAX_FIELD_LENGTH: usize = 20;

/// Size of one column-descriptor slot.
pub const DESCRIPTOR_LEN: usize = 116;

/// Offset of the type code byte within a descriptor slot.
pub const SLOT_TYPE_OFFSET: usize = 0;

/// Offset of the length byte within a descriptor slot. Only meaningful for
/// Text fields.
pub const SLOT_LENGTH_OFFSET: usize = 2;

/// Offset of the NUL padded name window within a descriptor slot.
pub const SLOT_NAME_OFFSET: usize = 0x41;

/// Marker preceding the column-descriptor run: the leading bytes of the
/// type/creator pair HanDBase stamps into the PDB header.
pub const DESCRIPTOR_MARKER: [u8; 5] = *b"DataH";

/// Distance from the start of the marker to the first descriptor slot.
/// Observed on files written by HanDBase 4.x for Android; older files use
/// [`LEGACY_DESCRIPTOR_OFFSET`] instead.
pub const DESCRIPTOR_MARKER_DISPLACEMENT: usize = 609;

/// Absolute offset of the first descriptor slot in older files that
/// predate the marker layout. Pass as `ScanOptions::descriptor_offset`
/// when the marker search fails on such a file.
pub const LEGACY_DESCRIPTOR_OFFSET: usize = 1599;

/// Maximum byte length of a Note field. The length byte in the descriptor
/// is not meaningful for Notes.
pub const NOTE_MAX_LENGTH: u16 = 2000;

// Field type codes. 0x0a and 0x10 do not occur in any sampled database
// and have no mapping.
pub const FIELD_TYPE_UNUSED: u8 = 0x00;
pub const FIELD_TYPE_TEXT: u8 = 0x01;
pub const FIELD_TYPE_INTEGER: u8 = 0x02;
pub const FIELD_TYPE_FLOAT: u8 = 0x03;
pub const FIELD_TYPE_POPUP: u8 = 0x04;
pub const FIELD_TYPE_CHECKBOX: u8 = 0x05;
pub const FIELD_TYPE_UNIQUE_LEGACY: u8 = 0x06;
pub const FIELD_TYPE_SKETCH: u8 = 0x07;
pub const FIELD_TYPE_DATE: u8 = 0x08;
pub const FIELD_TYPE_TIME: u8 = 0x09;
pub const FIELD_TYPE_LINKED: u8 = 0x0b;
pub const FIELD_TYPE_NOTE: u8 = 0x0c;
pub const FIELD_TYPE_HEADING: u8 = 0x0d;
pub const FIELD_TYPE_DB_POPUP: u8 = 0x0e;
pub const FIELD_TYPE_CALCULATED: u8 = 0x0f;
pub const FIELD_TYPE_CONDITIONAL: u8 = 0x11;
pub const FIELD_TYPE_EXTERNAL: u8 = 0x12;
