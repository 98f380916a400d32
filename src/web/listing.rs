//! Scraper for the web export server's index page.
//!
//! HanDBase 4.x for Android renders its database listing as one HTML
//! table. The extraction is line oriented and exactly as fragile as the
//! page it targets: it recognizes the cell classes and row shape that
//! server emits and nothing else.

use chrono::NaiveDateTime;

use crate::error::{Error, Result};

const TABLE_START: &str = "<table";
const TABLE_END: &str = "</table>";

/// Cell texts of the listing's header row, used to recognize and drop it.
const HEADER_CELLS: [&str; 5] = ["Database", "Date/Time", "File Size", "Records", "Download"];

/// Fragment the server embeds in the download cell of an unshared
/// database.
const NOT_SHARED_FRAGMENT: &str = "\"This database does not permit full access to sharing";

/// One data row of the server's database listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    /// Display name of the database; may differ from the filename.
    pub name: String,
    /// Download filename without its `.PDB` extension, or `None` when the
    /// database does not permit sharing.
    pub file_stem: Option<String>,
    /// Last modification timestamp reported by the device.
    pub modified: NaiveDateTime,
    /// Human readable size string as the server prints it.
    pub size: String,
    /// Record count.
    pub records: u64,
}

/// Scrape the index page into listing entries, header row dropped.
///
/// Only the first `<table>` block is examined. A page without one yields
/// an empty listing.
pub fn parse_listing(html: &str) -> Result<Vec<ListingEntry>> {
    let table = match html.find(TABLE_START) {
        Some(start) => {
            let rest = &html[start..];
            match rest.find(TABLE_END) {
                Some(end) => &rest[..end],
                None => rest,
            }
        }
        None => return Ok(Vec::new()),
    };

    let mut cells: Vec<Cell> = Vec::new();
    let mut entries = Vec::new();
    for line in table.lines() {
        if line.contains(" class=\"tdbody\">")
            || line.contains(" class=\"thbody\">")
            || line.contains("<td class=\"dlip\">")
        {
            cells.push(extract_cell(line));
        } else if line.contains("</tr>") {
            let row = std::mem::take(&mut cells);
            if row.is_empty() || is_header_row(&row) {
                continue;
            }
            entries.push(build_entry(row)?);
        }
    }
    Ok(entries)
}

/// One extracted table cell.
enum Cell {
    Text(String),
    /// Download link stem, or `None` for an unshared database.
    Download(Option<String>),
}

impl Cell {
    fn text(&self) -> Option<&str> {
        match self {
            Cell::Text(text) => Some(text),
            Cell::Download(_) => None,
        }
    }
}

/// Pull the value out of one cell line.
///
/// Handles the two shapes the server emits: a download cell like
/// `<td class="dlip"><a href="test.PDB" class="hb"><img ...></a>` and a
/// plain `<anytag>VALUE</anytag>` cell.
fn extract_cell(line: &str) -> Cell {
    if line.contains(NOT_SHARED_FRAGMENT) {
        return Cell::Download(None);
    }
    if let Some(rest) = line.strip_prefix("<td class=\"dlip\"><a href=\"") {
        let target = match rest.find('"') {
            Some(end) => &rest[..end],
            None => rest,
        };
        let stem = if target.to_uppercase().ends_with(".PDB") {
            &target[..target.len() - ".PDB".len()]
        } else {
            target
        };
        return Cell::Download(Some(stem.to_string()));
    }

    let after_tag = match line.find('>') {
        Some(idx) => &line[idx + 1..],
        None => line,
    };
    let value = match after_tag.find('<') {
        Some(idx) => &after_tag[..idx],
        None => after_tag,
    };
    Cell::Text(value.to_string())
}

fn is_header_row(row: &[Cell]) -> bool {
    row.len() == HEADER_CELLS.len()
        && row
            .iter()
            .zip(HEADER_CELLS)
            .all(|(cell, expected)| cell.text() == Some(expected))
}

/// Assemble one entry from a row's cells, in the order the server emits
/// them: name, date/time, size, record count, download link.
fn build_entry(row: Vec<Cell>) -> Result<ListingEntry> {
    let [name, modified, size, records, download] = match <[Cell; 5]>::try_from(row) {
        Ok(cells) => cells,
        Err(row) => {
            return Err(Error::malformed_listing(format!(
                "expected 5 cells, found {}",
                row.len()
            )))
        }
    };

    let text = |cell: Cell, what: &str| -> Result<String> {
        match cell {
            Cell::Text(text) => Ok(text),
            Cell::Download(_) => {
                Err(Error::malformed_listing(format!("{what} cell is a download link")))
            }
        }
    };

    let name = text(name, "name")?;
    let modified = parse_listing_timestamp(&text(modified, "date/time")?)?;
    let size = text(size, "size")?;
    let records = text(records, "records")?;
    let records: u64 = records
        .trim()
        .parse()
        .map_err(|_| Error::malformed_listing(format!("record count {records:?}")))?;
    let file_stem = match download {
        Cell::Download(stem) => stem,
        Cell::Text(text) => {
            return Err(Error::malformed_listing(format!(
                "download cell holds text {text:?}"
            )))
        }
    };

    Ok(ListingEntry {
        name,
        file_stem,
        modified,
        size,
        records,
    })
}

/// Parse the listing's locale timestamp, e.g. `Wed Jan 10 20:18:44 PST
/// 2024`.
///
/// chrono has no parser for abbreviated zone names, so the zone token is
/// dropped before reading the rest as a naive timestamp. Zone-less
/// strings are accepted as-is.
pub fn parse_listing_timestamp(value: &str) -> Result<NaiveDateTime> {
    let mut tokens: Vec<&str> = value.split_whitespace().collect();
    if tokens.len() == 6 {
        tokens.remove(4);
    }
    let normalized = tokens.join(" ");
    NaiveDateTime::parse_from_str(&normalized, "%a %b %d %H:%M:%S %Y").map_err(|_| {
        Error::InvalidTimestamp {
            value: value.to_string(),
        }
    })
}
