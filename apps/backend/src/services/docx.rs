//! Docx container boundary.
//!
//! The core never touches the container format: this module extracts the
//! ordered paragraph texts from an uploaded `.docx` and packs generated
//! table blocks back into a minimal OOXML package. Only body-level
//! paragraph text is extracted; tables, images, and embedded objects in
//! the source are invisible to the parser.

use std::io::{Cursor, Read, Write};

use quick_xml::escape::escape;
use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

use cbt_core::TableBlock;

/// Errors crossing the container boundary.
#[derive(Debug, Error)]
pub enum DocxError {
    #[error("not a valid docx container: {0}")]
    Container(String),

    #[error("container is missing word/document.xml")]
    MissingDocument,

    #[error("malformed document xml: {0}")]
    Xml(String),

    #[error("failed to assemble output container: {0}")]
    Assemble(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

/// Extract the ordered body-level paragraph texts from a docx upload.
pub fn extract_paragraphs(bytes: &[u8]) -> Result<Vec<String>, DocxError> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).map_err(|e| DocxError::Container(e.to_string()))?;
    let mut entry = archive
        .by_name("word/document.xml")
        .map_err(|_| DocxError::MissingDocument)?;

    let mut xml = String::new();
    entry.read_to_string(&mut xml)?;

    parse_document_xml(&xml)
}

/// Walk the document XML collecting paragraph text from `<w:t>` runs.
/// `<w:tab/>` becomes a tab, `<w:br/>` a newline. Anything nested in a
/// `<w:tbl>` is skipped.
fn parse_document_xml(xml: &str) -> Result<Vec<String>, DocxError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();

    let mut current = String::new();
    let mut in_paragraph = false;
    let mut in_text = false;
    let mut table_depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"tbl" => table_depth += 1,
                b"p" if table_depth == 0 => {
                    in_paragraph = true;
                    current.clear();
                }
                b"t" if in_paragraph => in_text = true,
                b"tab" if in_paragraph => current.push('\t'),
                b"br" if in_paragraph => current.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"p" if table_depth == 0 => paragraphs.push(String::new()),
                b"tab" if in_paragraph => current.push('\t'),
                b"br" if in_paragraph => current.push('\n'),
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_text {
                    let text = e.unescape().map_err(|e| DocxError::Xml(e.to_string()))?;
                    current.push_str(&text);
                }
            }
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"tbl" => table_depth = table_depth.saturating_sub(1),
                b"p" if in_paragraph => {
                    in_paragraph = false;
                    paragraphs.push(std::mem::take(&mut current));
                }
                b"t" => in_text = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(DocxError::Xml(e.to_string())),
            Ok(_) => {}
        }
    }

    Ok(paragraphs)
}

/// Pack the generated table blocks into a downloadable docx. One bordered
/// two-column table per block, a blank paragraph after each.
pub fn write_tables(blocks: &[TableBlock]) -> Result<Vec<u8>, DocxError> {
    let document = render_document_xml(blocks);

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    let parts = [
        ("[Content_Types].xml", CONTENT_TYPES_XML),
        ("_rels/.rels", PACKAGE_RELS_XML),
        ("word/document.xml", document.as_str()),
    ];
    for (name, content) in parts {
        zip.start_file(name, options)
            .map_err(|e| DocxError::Assemble(e.to_string()))?;
        zip.write_all(content.as_bytes())
            .map_err(|e| DocxError::Assemble(e.to_string()))?;
    }

    let cursor = zip.finish().map_err(|e| DocxError::Assemble(e.to_string()))?;
    Ok(cursor.into_inner())
}

fn render_document_xml(blocks: &[TableBlock]) -> String {
    let mut out = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#,
    );
    for block in blocks {
        render_table(block, &mut out);
        out.push_str("<w:p/>");
    }
    out.push_str("</w:body></w:document>");
    out
}

fn render_table(block: &TableBlock, out: &mut String) {
    out.push_str(r#"<w:tbl><w:tblPr><w:tblStyle w:val="TableGrid"/><w:tblW w:w="0" w:type="auto"/><w:tblBorders>"#);
    for side in ["top", "left", "bottom", "right", "insideH", "insideV"] {
        out.push_str(&format!(
            r#"<w:{side} w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#
        ));
    }
    out.push_str(r#"</w:tblBorders></w:tblPr><w:tblGrid><w:gridCol w:w="1526"/><w:gridCol w:w="7796"/></w:tblGrid>"#);

    for row in &block.rows {
        out.push_str("<w:tr>");
        render_cell(&row.label, out);
        render_cell(&row.value, out);
        out.push_str("</w:tr>");
    }
    out.push_str("</w:tbl>");
}

fn render_cell(text: &str, out: &mut String) {
    out.push_str("<w:tc><w:p>");
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push_str("<w:r><w:br/></w:r>");
        }
        if !line.is_empty() {
            out.push_str(r#"<w:r><w:t xml:space="preserve">"#);
            out.push_str(&escape(line));
            out.push_str("</w:t></w:r>");
        }
    }
    out.push_str("</w:p></w:tc>");
}
