//! HTTP client for the HanDBase web export server.
//!
//! HanDBase 4.x for Android serves a small HTTP site: an index page
//! listing the shared databases, direct `.PDB` downloads, an
//! `export.csv` endpoint, and two multipart upload forms. No
//! authentication anywhere; the server trusts its LAN.

use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::web::listing::{self, ListingEntry};

/// Upload size cap advertised by the server's own forms.
const MAX_FILE_SIZE: &str = "3000000";

/// A PDB download at or below this size is the server's way of answering
/// "empty" without an error status.
const MIN_PDB_SIZE: usize = 30;

/// Database flavors the server exchanges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    /// The device's own database file.
    Pdb,
    /// Comma separated export, Windows-1252 encoded by the server.
    Csv,
}

impl DbKind {
    /// File extension as the server spells it; case matters in URLs.
    pub fn extension(&self) -> &'static str {
        match self {
            DbKind::Pdb => ".PDB",
            DbKind::Csv => ".csv",
        }
    }

    fn content_type(&self) -> &'static str {
        match self {
            DbKind::Pdb => "application/octet-stream",
            DbKind::Csv => "text/csv",
        }
    }
}

/// Client for one HanDBase web export server.
pub struct RemoteClient {
    /// Server URL, normalized to end with a slash.
    base_url: String,
    http: reqwest::Client,
}

impl RemoteClient {
    /// Create a client for `server_url`, e.g. `http://192.168.1.20:8000`.
    pub fn new(server_url: impl Into<String>) -> Self {
        let mut base_url = server_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Download one database.
    ///
    /// Returns the suggested local filename and the raw body. The server
    /// keys both flavors on the `.PDB` name: CSV goes through the
    /// `export.csv` endpoint, the database file is fetched directly.
    pub async fn fetch_database(&self, dbname: &str, kind: DbKind) -> Result<(String, Bytes)> {
        let server_dbname = server_name_escape(&format!("{}{}", dbname, DbKind::Pdb.extension()));
        let url = match kind {
            DbKind::Csv => format!("{}export.csv?db={}", self.base_url, server_dbname),
            DbKind::Pdb => format!("{}{}", self.base_url, server_dbname),
        };

        debug!(%url, "fetching database");
        let response = check_status(self.http.get(&url).send().await?)?;
        let body = response.bytes().await?;
        Ok((format!("{}{}", dbname, kind.extension()), body))
    }

    /// Scrape the index page into listing entries.
    pub async fn list_databases(&self) -> Result<Vec<ListingEntry>> {
        debug!(url = %self.base_url, "fetching database listing");
        let response = check_status(self.http.get(&self.base_url).send().await?)?;
        let html = response.text().await?;
        listing::parse_listing(&html)
    }

    /// Upload `content` as database `dbname` through the server's import
    /// forms. CSV content must already be in the encoding the device
    /// expects; it treats uploads as Windows-1252.
    pub async fn upload_database(&self, dbname: &str, content: Vec<u8>, kind: DbKind) -> Result<()> {
        let (url, button_name, button_label) = match kind {
            DbKind::Csv => (
                format!("{}csv_import.html", self.base_url),
                "UpCSV",
                "Add CSV Data",
            ),
            DbKind::Pdb => (
                format!("{}applet_add.html", self.base_url),
                "UpPDB",
                "Add File",
            ),
        };
        let filename = format!("{}{}", dbname, kind.extension());

        debug!(%url, %filename, bytes = content.len(), "uploading database");
        let form = Form::new()
            .text("MAX_FILE_SIZE", MAX_FILE_SIZE)
            .text("appletname", dbname.to_string())
            .text(button_name, button_label)
            .part(
                "localfile",
                Part::bytes(content)
                    .file_name(filename)
                    .mime_str(kind.content_type())?,
            );

        check_status(self.http.post(&url).multipart(form).send().await?)?;
        Ok(())
    }

    /// Download every shared database in the listing.
    ///
    /// Entries the server refuses to share are skipped, as are bodies the
    /// server returns empty: a blank CSV, or a PDB below the smallest
    /// plausible file.
    pub async fn fetch_all(&self, kind: DbKind) -> Result<Vec<(String, Bytes)>> {
        let mut results = Vec::new();
        for entry in self.list_databases().await? {
            let Some(stem) = entry.file_stem.as_deref() else {
                info!(name = %entry.name, "skipping database that is not shared");
                continue;
            };
            let (filename, body) = self.fetch_database(stem, kind).await?;
            if !has_content(kind, &body) {
                info!(%filename, bytes = body.len(), "skipping empty download");
                continue;
            }
            results.push((filename, body));
        }
        Ok(results)
    }
}

/// Escape a database name the way the server expects inside URLs: it
/// substitutes underscores for spaces rather than percent-encoding.
fn server_name_escape(name: &str) -> String {
    name.replace(' ', "_")
}

fn has_content(kind: DbKind, body: &[u8]) -> bool {
    match kind {
        DbKind::Csv => body.iter().any(|b| !b.is_ascii_whitespace()),
        DbKind::Pdb => body.len() > MIN_PDB_SIZE,
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if !status.is_success() {
        return Err(Error::HttpStatus {
            status: status.as_u16(),
            url: response.url().to_string(),
        });
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_name_escape() {
        assert_eq!(server_name_escape("time billing detail.PDB"), "time_billing_detail.PDB");
        assert_eq!(server_name_escape("plain.PDB"), "plain.PDB");
    }

    #[test]
    fn test_extensions() {
        assert_eq!(DbKind::Pdb.extension(), ".PDB");
        assert_eq!(DbKind::Csv.extension(), ".csv");
    }

    #[test]
    fn test_has_content() {
        assert!(!has_content(DbKind::Csv, b"  \r\n "));
        assert!(has_content(DbKind::Csv, b"Name,Qty\n"));
        assert!(!has_content(DbKind::Pdb, &[0u8; 30]));
        assert!(has_content(DbKind::Pdb, &[0u8; 31]));
    }

    #[test]
    fn test_base_url_normalization() {
        let client = RemoteClient::new("http://localhost:8000");
        assert_eq!(client.base_url, "http://localhost:8000/");
        let client = RemoteClient::new("http://localhost:8000/");
        assert_eq!(client.base_url, "http://localhost:8000/");
    }
}
