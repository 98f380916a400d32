//! HanDBase bridge for Rust
//!
//! Connects the HanDBase mobile database's proprietary PDB file format
//! with relational and CSV tooling: decodes the table metadata embedded in
//! a database file, derives `CREATE TABLE` statements from it, copies rows
//! between CSV documents and a SQLite database, and talks to the HanDBase
//! 4.x web export server.
//!
//! # Example
//!
//! ```no_run
//! use handbase_bridge_rs::{extract_metadata, synthesize_ddl, Result};
//!
//! fn main() -> Result<()> {
//!     let data = std::fs::read("Untitled.PDB")?;
//!
//!     let metadata = extract_metadata(&data)?;
//!     println!("{} columns in {}", metadata.len(), metadata.table_name);
//!
//!     let ddl = synthesize_ddl(&metadata, None)?;
//!     println!("{ddl}");
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod format;
pub mod sql;
pub mod web;

// Re-export main types
pub use error::{Error, Result};
pub use format::ddl::synthesize_ddl;
pub use format::field_type::FieldType;
pub use format::metadata::{
    extract_metadata, extract_metadata_with_options, ColumnDescriptor, Metadata, ScanOptions,
};
pub use sql::{copy_csv_to_table, copy_table_to_csv};
pub use web::client::{DbKind, RemoteClient};
pub use web::database_name_from_path;
pub use web::listing::ListingEntry;
