//! HanDBase on-disk format decoding.

pub mod buffer;
pub mod constants;
pub mod ddl;
pub mod decode;
pub mod field_type;
pub mod metadata;

pub use buffer::ReadBuffer;
pub use ddl::synthesize_ddl;
pub use field_type::FieldType;
pub use metadata::{
    extract_metadata, extract_metadata_with_options, ColumnDescriptor, Metadata, ScanOptions,
};
