//! Document rendering.
//!
//! Documents are printed as single-line relaxed Extended JSON, fields in
//! stored order, with `", "` between entries and `": "` after keys:
//!
//! ```text
//! {"_id": 1, "item": "pen", "qty": 10}
//! ```
//!
//! Parsing a rendered line as JSON gives back the relaxed Extended JSON
//! value of the stored document.

use std::io::{self, Write};

use bson::{Bson, Document};
use serde::Serialize;
use serde_json::ser::Formatter;

use crate::errors::{AppError, AppResult};

/// Renders documents to the output format.
pub struct DocumentFormatter;

impl DocumentFormatter {
    /// Renders a document to a string without a trailing newline.
    pub fn render(doc: &Document) -> AppResult<String> {
        let mut buf = Vec::new();
        Self::write(&mut buf, doc)?;
        String::from_utf8(buf).map_err(|e| AppError::Serialization(e.to_string()))
    }

    /// Writes a document followed by a newline.
    pub fn write_line<W: Write + ?Sized>(out: &mut W, doc: &Document) -> AppResult<()> {
        Self::write(out, doc)?;
        out.write_all(b"\n")?;
        Ok(())
    }

    fn write<W: Write + ?Sized>(out: &mut W, doc: &Document) -> AppResult<()> {
        let value = Bson::Document(doc.clone()).into_relaxed_extjson();
        let mut ser = serde_json::Serializer::with_formatter(out, SpacedFormatter);
        value.serialize(&mut ser)?;
        Ok(())
    }
}

/// Compact JSON with a space after separators.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }
}
