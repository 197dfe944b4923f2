//! Reading and writing documents as XML
//!
//! Whitespace-only text is dropped on read and the tree is re-indented on write, so a
//! document survives a read/write cycle with the same elements, attributes and text.

use std::io::Write as _;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tempfile::NamedTempFile;

use super::{Document, NodeId};
use crate::error::fs::{file_read_error, file_write_error};
use crate::error::input::document_parse_failed;
use crate::error::{CollageError, Result};

/// Parse XML text into a document
pub fn parse(content: &str) -> std::result::Result<Document, String> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut document: Option<Document> = None;
    let mut open: Vec<NodeId> = Vec::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| format!("at byte {}: {}", reader.buffer_position(), e))?;
        match event {
            Event::Start(start) => {
                let id = open_element(&mut document, &open, &start)?;
                open.push(id);
            }
            Event::Empty(start) => {
                open_element(&mut document, &open, &start)?;
            }
            Event::End(_) => {
                open.pop();
            }
            Event::Text(text) => {
                let value = text.unescape().map_err(|e| e.to_string())?;
                append_text(&mut document, &open, &value);
            }
            Event::CData(data) => {
                let value = String::from_utf8_lossy(&data.into_inner()).into_owned();
                append_text(&mut document, &open, &value);
            }
            Event::Eof => break,
            Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {}
        }
    }

    if !open.is_empty() {
        return Err("unexpected end of document".to_string());
    }
    document.ok_or_else(|| "document has no root element".to_string())
}

fn open_element(
    document: &mut Option<Document>,
    open: &[NodeId],
    start: &BytesStart<'_>,
) -> std::result::Result<NodeId, String> {
    let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();

    let id = match (document.as_mut(), open.last()) {
        (None, _) => {
            let doc = document.insert(Document::new(tag));
            doc.root()
        }
        (Some(doc), Some(&parent)) => doc.append_element(parent, tag),
        (Some(_), None) => return Err(format!("second root element <{tag}>")),
    };

    let Some(doc) = document.as_mut() else {
        return Err("document has no root element".to_string());
    };
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| e.to_string())?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute.unescape_value().map_err(|e| e.to_string())?;
        doc.set_attribute(id, &key, value.into_owned());
    }
    Ok(id)
}

fn append_text(document: &mut Option<Document>, open: &[NodeId], value: &str) {
    let (Some(doc), Some(&id)) = (document.as_mut(), open.last()) else {
        return;
    };
    let text = match doc.text(id) {
        Some(existing) => format!("{existing}{value}"),
        None => value.to_string(),
    };
    doc.set_text(id, text);
}

/// Serialize the part of the document reachable from the root
pub fn to_bytes(document: &Document) -> std::io::Result<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(std::io::Error::other)?;
    write_node(&mut writer, document, document.root())?;
    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    Ok(bytes)
}

fn write_node(
    writer: &mut Writer<Vec<u8>>,
    document: &Document,
    id: NodeId,
) -> std::io::Result<()> {
    let tag = document.tag(id);
    let mut start = BytesStart::new(tag);
    for (key, value) in document.attributes(id) {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    let children = document.children(id);
    let text = document.text(id);
    if children.is_empty() && text.is_none() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(std::io::Error::other);
    }

    writer
        .write_event(Event::Start(start))
        .map_err(std::io::Error::other)?;
    if let Some(text) = text {
        writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(std::io::Error::other)?;
    }
    for &child in children {
        write_node(writer, document, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(tag)))
        .map_err(std::io::Error::other)
}

/// Read and parse a document from disk
pub fn load(path: &Path) -> Result<Document> {
    let content = std::fs::read_to_string(path).map_err(|e| file_read_error(path, e))?;
    parse(&content).map_err(|reason| document_parse_failed(path.display().to_string(), reason))
}

/// Write a document to disk, replacing any existing file in one step
pub fn save(document: &Document, path: &Path) -> Result<()> {
    let bytes = to_bytes(document).map_err(|e| file_write_error(path, e))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir).map_err(|e| file_write_error(path, e))?;
    staged
        .write_all(&bytes)
        .map_err(|e| file_write_error(path, e))?;
    staged
        .persist(path)
        .map_err(|e| CollageError::FileWriteFailed {
            path: path.display().to_string(),
            reason: e.error.to_string(),
        })?;
    Ok(())
}
