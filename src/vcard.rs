//! vCard 3.0 export of the contact record
//!
//! Fields are passed through verbatim: no escaping or line folding is done,
//! so a record containing raw line breaks yields a malformed card. Callers
//! can check `ContactRecord::multiline_fields` first.

use std::path::{Path, PathBuf};

use crate::contact::ContactRecord;
use crate::{Error, Result};

/// MIME type of the exported file
pub const VCARD_MIME: &str = "text/vcard";

/// Notification shown after the contact file is written
pub const SAVED_MESSAGE: &str = "Contact saved successfully!";

/// Serialize `record` as a ten-line vCard 3.0 document (no trailing newline).
pub fn export_vcard(record: &ContactRecord) -> String {
    [
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("FN:{}", record.name),
        format!("ORG:{}", record.company),
        format!("TITLE:{}", record.title),
        format!("TEL;TYPE=CELL:{}", record.phone),
        format!("EMAIL:{}", record.email),
        format!("URL:{}", record.website),
        format!("ADR;TYPE=HOME:;;{};;;;", record.address),
        "END:VCARD".to_string(),
    ]
    .join("\n")
}

/// File name for the download: whitespace runs become `_`, plus `.vcf`.
pub fn vcard_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut in_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out.push_str(".vcf");
    out
}

/// Write the exported card into `dir` and return the file path.
pub fn save_vcard(record: &ContactRecord, dir: &Path) -> Result<PathBuf> {
    if !dir.is_dir() {
        return Err(Error::ExportError(format!(
            "output directory does not exist: {}",
            dir.display()
        )));
    }
    let fields = record.multiline_fields();
    if !fields.is_empty() {
        log::warn!("exporting vCard with multi-line fields: {:?}", fields);
    }

    let path = dir.join(vcard_filename(&record.name));
    std::fs::write(&path, export_vcard(record))?;
    log::info!("wrote {} ({})", path.display(), VCARD_MIME);
    Ok(path)
}
