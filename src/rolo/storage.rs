//! # Persistence Layer
//!
//! The whole address book is persisted as a single JSON file with an
//! explicit schema, so the on-disk format stays stable across rewrites and
//! is readable by other tools:
//!
//! ```text
//! {
//!   "contacts": [
//!     { "name": "John", "phones": ["123-456-7890"], "birthday": "1990-06-15" },
//!     { "name": "Jane", "phones": [], "birthday": null }
//!   ]
//! }
//! ```
//!
//! Contacts appear in book insertion order, phones in record insertion
//! order, and birthdays as ISO dates.
//!
//! ## Failure contract
//!
//! - [`save`] creates missing parent directories and returns any I/O or
//!   encode failure to the caller; it never panics. The in-memory book stays
//!   authoritative after a failed save.
//! - [`load`] never fails: a missing file is the first-run case and yields
//!   an empty book; an unreadable or undecodable file yields an empty book
//!   plus the cause in [`LoadReport::fallback`] so the caller can surface a
//!   diagnostic. Corruption drops the file's contents wholesale; there is no
//!   partial recovery.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::book::AddressBook;
use crate::error::{Result, RoloError};
use crate::model::{Birthday, Name, Record};

/// Default storage file, resolved against the working directory. Callers
/// pass the path explicitly; this is only the conventional choice.
pub const DEFAULT_STORAGE_FILE: &str = "rolo.json";

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct BookFile {
    contacts: Vec<ContactEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ContactEntry {
    name: String,
    phones: Vec<String>,
    birthday: Option<NaiveDate>,
}

/// Outcome of [`load`]: the book to start with, and the reason the stored
/// file was abandoned, if it was.
#[derive(Debug)]
pub struct LoadReport {
    pub book: AddressBook,
    pub fallback: Option<RoloError>,
}

/// Writes the book to `path`, creating missing parent directories first.
pub fn save(book: &AddressBook, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = to_file(book);
    let content = serde_json::to_string_pretty(&file)?;
    fs::write(path, content)?;
    Ok(())
}

/// Reads the book from `path`. Missing file: empty book, no fallback.
/// Anything else that goes wrong: empty book, cause in the report.
pub fn load(path: &Path) -> LoadReport {
    if !path.exists() {
        return LoadReport {
            book: AddressBook::new(),
            fallback: None,
        };
    }
    match read_book(path) {
        Ok(book) => LoadReport {
            book,
            fallback: None,
        },
        Err(cause) => LoadReport {
            book: AddressBook::new(),
            fallback: Some(cause),
        },
    }
}

fn to_file(book: &AddressBook) -> BookFile {
    BookFile {
        contacts: book
            .iter()
            .map(|record| ContactEntry {
                name: record.name().as_str().to_string(),
                phones: record.phones().iter().map(|p| p.as_str().to_string()).collect(),
                birthday: record.birthday().map(|b| b.date()),
            })
            .collect(),
    }
}

fn read_book(path: &Path) -> Result<AddressBook> {
    let content = fs::read_to_string(path)?;
    let file: BookFile = serde_json::from_str(&content)?;

    // Entries are re-validated through the same operations the dispatcher
    // uses, so a hand-edited file that violates an invariant (bad phone,
    // duplicate name) is treated as corruption of the whole file.
    let mut book = AddressBook::new();
    for entry in file.contacts {
        let mut record = Record::new(Name::parse(&entry.name)?);
        for phone in &entry.phones {
            record.add_phone(phone)?;
        }
        if let Some(date) = entry.birthday {
            record.set_birthday(Birthday::from(date));
        }
        book.add_record(record)?;
    }
    Ok(book)
}
