//! Builders for docx fixtures used by the API tests.

use std::io::{Cursor, Read, Write};

use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

/// Assemble an in-memory docx whose document body is the given XML
/// fragment. Fragment text must already be XML-safe.
pub fn docx_with_body(body_xml: &str) -> Vec<u8> {
    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body_xml}</w:body></w:document>"#
    );

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(CONTENT_TYPES_XML.as_bytes()).unwrap();
    zip.start_file("_rels/.rels", options).unwrap();
    zip.write_all(PACKAGE_RELS_XML.as_bytes()).unwrap();
    zip.start_file("word/document.xml", options).unwrap();
    zip.write_all(document.as_bytes()).unwrap();

    zip.finish().unwrap().into_inner()
}

/// Docx with one plain paragraph per input string.
pub fn docx_from_paragraphs(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|text| format!(r#"<w:p><w:r><w:t xml:space="preserve">{text}</w:t></w:r></w:p>"#))
        .collect();
    docx_with_body(&body)
}

/// A small well-formed exam: two questions with options and key lines.
pub fn sample_exam_docx() -> Vec<u8> {
    docx_from_paragraphs(&[
        "1. Apa ibukota Indonesia?",
        "A. Jakarta",
        "B. Surabaya",
        "C. Medan",
        "Kunci: A",
        "",
        "2. Siapakah presiden pertama Indonesia?",
        "A. Soekarno",
        "B. Hatta",
        "Jawaban: B",
    ])
}

/// Pull word/document.xml back out of generated docx bytes.
pub fn read_document_xml(bytes: &[u8]) -> String {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("output is not a zip");
    let mut entry = archive
        .by_name("word/document.xml")
        .expect("output has no word/document.xml");
    let mut document = String::new();
    entry.read_to_string(&mut document).unwrap();
    document
}
