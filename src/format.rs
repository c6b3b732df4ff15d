use crate::convert::buffer_to_json;
use crate::interpreter::Buffer;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Indentation of pretty-printed documents
pub const INDENT: &[u8] = b"    ";

/// Renders the buffer as a JSON object, pretty-printed with four-space
/// indentation unless `compact`.
pub fn buffer_to_json_string(buffer: &Buffer, compact: bool) -> serde_json::Result<String> {
    let document = buffer_to_json(buffer);
    if compact {
        return Ok(document.to_string());
    }

    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    document.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Writes the rendered document to `path`, replacing anything already there.
///
/// The document is rendered before the file is opened, so a failure to render
/// never leaves a truncated file behind.
pub fn write_document(buffer: &Buffer, path: &Path, compact: bool) -> io::Result<()> {
    let mut rendered = buffer_to_json_string(buffer, compact)?;
    rendered.push('\n');

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    file.write_all(rendered.as_bytes())?;
    file.flush()
}
