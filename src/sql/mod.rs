//! Row copying between CSV documents and a SQLite database.

pub mod export;
pub mod import;

pub use export::copy_table_to_csv;
pub use import::copy_csv_to_table;
