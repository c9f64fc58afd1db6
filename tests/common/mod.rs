//! Shared test utilities for integration tests.
//!
//! Fixture documents are minimal docx-style packages: a ZIP container with a
//! content-types part, a relationships part, and the text payload at
//! `word/document.xml`. That is enough structure for the pipeline; no
//! word-processor needs to open these.
//!
//! Note: `#![allow(dead_code)]` is required because each integration test
//! file compiles as a separate crate and may only use a subset of these
//! helpers.

#![allow(dead_code)]

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#;

const RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

/// Writes a minimal document package whose payload is exactly `payload`.
///
/// Returns the path of the created document.
pub fn fixture_docx(dir: &Path, name: &str, payload: &str) -> PathBuf {
    write_package(
        dir,
        name,
        &[
            ("[Content_Types].xml", CONTENT_TYPES),
            ("_rels/.rels", RELS),
            ("word/document.xml", payload),
        ],
    )
}

/// Writes a document package with no `word/document.xml` part.
pub fn fixture_docx_without_payload(dir: &Path, name: &str) -> PathBuf {
    write_package(
        dir,
        name,
        &[("[Content_Types].xml", CONTENT_TYPES), ("_rels/.rels", RELS)],
    )
}

fn write_package(dir: &Path, name: &str, entries: &[(&str, &str)]) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).expect("failed to create fixture package");
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for (entry_name, content) in entries {
        writer
            .start_file(*entry_name, options)
            .expect("failed to start fixture entry");
        writer
            .write_all(content.as_bytes())
            .expect("failed to write fixture entry");
    }
    writer.finish().expect("failed to finish fixture package");
    path
}

/// Reads the payload part back out of a document package.
///
/// Returns `None` if the package has no entry at `word/document.xml`.
pub fn read_payload(document: &Path) -> Option<String> {
    let file = File::open(document).expect("failed to open output package");
    let mut archive =
        ZipArchive::new(BufReader::new(file)).expect("output is not a valid package");
    let mut entry = match archive.by_name(docstamp::PAYLOAD_PATH) {
        Ok(entry) => entry,
        Err(_) => return None,
    };
    let mut content = String::new();
    entry
        .read_to_string(&mut content)
        .expect("payload is not UTF-8 text");
    Some(content)
}

/// Lists the entry names of a document package, sorted.
pub fn entry_names(document: &Path) -> Vec<String> {
    let file = File::open(document).expect("failed to open package");
    let archive = ZipArchive::new(BufReader::new(file)).expect("not a valid package");
    let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
    names.sort();
    names
}
