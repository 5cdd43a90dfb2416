use crate::error::{IoResultExt, Result};
use crate::types::CatalogRecord;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;

/// Serializes records as a JSON array indented with four spaces
pub fn to_json(records: &[CatalogRecord]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes the catalog to `path`, replacing any existing file
///
/// The document is fully serialized before the file is touched, so a
/// serialization failure leaves any previous catalog in place.
pub fn write_catalog(records: &[CatalogRecord], path: &Path) -> Result<()> {
    let json = to_json(records)?;
    fs::write(path, json).with_path(path)
}
