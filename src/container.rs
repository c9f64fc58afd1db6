//! Container pack/unpack for the document's internal archive.
//!
//! A word-processing document package is a ZIP container wrapping a tree of
//! internal parts. This module provides the two whole-tree operations the
//! rewrite pipeline needs: [`unpack`] a container into a directory, and
//! [`repack`] a directory back into a container. No streaming or incremental
//! behavior — each call processes the complete tree.
//!
//! Repacking walks the tree in name order and writes Deflated file entries
//! with forward-slash relative names. Directory entries are not written;
//! document packages imply directories through file paths, and archive
//! readers reconstruct them on extraction.

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Component, Path};

use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::{Error, Result};

/// Extracts the full contents of the container at `archive` into `dest`.
///
/// `dest` and any missing parents are created. Entry paths are sanitized by
/// the ZIP reader, so a crafted container cannot escape `dest`.
pub fn unpack(archive: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive).map_err(|e| Error::Extraction {
        archive: archive.to_path_buf(),
        reason: e.to_string(),
    })?;
    let mut container = ZipArchive::new(BufReader::new(file)).map_err(|e| Error::Extraction {
        archive: archive.to_path_buf(),
        reason: e.to_string(),
    })?;
    log::debug!(
        "unpacking {} ({} entries) into {}",
        archive.display(),
        container.len(),
        dest.display()
    );
    container.extract(dest).map_err(|e| Error::Extraction {
        archive: archive.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Compresses the contents of `tree` into a new container at `archive`.
///
/// Targets the tree's contents, not the tree itself: a file at
/// `<tree>/word/document.xml` becomes the entry `word/document.xml`. The walk
/// is sorted by name so identical trees produce identically ordered
/// containers.
pub fn repack(tree: &Path, archive: &Path) -> Result<()> {
    let compression_error = |reason: String| Error::Compression {
        dir: tree.to_path_buf(),
        reason,
    };

    let file = File::create(archive).map_err(|e| compression_error(e.to_string()))?;
    let mut writer = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut entries = 0usize;
    for entry in WalkDir::new(tree).sort_by_file_name() {
        let entry = entry.map_err(|e| compression_error(e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry_name(tree, entry.path()).map_err(compression_error)?;
        writer
            .start_file(name.as_str(), options)
            .map_err(|e| compression_error(format!("entry {name}: {e}")))?;
        let mut source =
            File::open(entry.path()).map_err(|e| compression_error(format!("entry {name}: {e}")))?;
        io::copy(&mut source, &mut writer)
            .map_err(|e| compression_error(format!("entry {name}: {e}")))?;
        entries += 1;
    }

    writer
        .finish()
        .map_err(|e| compression_error(e.to_string()))?;
    log::debug!(
        "repacked {} entries from {} into {}",
        entries,
        tree.display(),
        archive.display()
    );
    Ok(())
}

/// Converts a file path inside `tree` into a forward-slash entry name.
fn entry_name(tree: &Path, path: &Path) -> std::result::Result<String, String> {
    let rel = path
        .strip_prefix(tree)
        .map_err(|_| format!("{} is outside the tree", path.display()))?;
    let parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        return Err(format!("{} has no relative name", path.display()));
    }
    Ok(parts.join("/"))
}
