//! Remote access to the HanDBase web export server.

pub mod client;
pub mod listing;

pub use client::{DbKind, RemoteClient};
pub use listing::{parse_listing, parse_listing_timestamp, ListingEntry};

/// Derive the database name from a local filename: directories and the
/// final extension are dropped.
pub fn database_name_from_path(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    let file = match normalized.rsplit_once('/') {
        Some((_, file)) => file,
        None => normalized.as_str(),
    };
    match file.rsplit_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => file.to_string(),
    }
}
