//! The document rewrite pipeline.
//!
//! [`DocumentRewriter`] owns one conversion: duplicate the source document,
//! toggle the copy into its archive form, unpack it, substitute placeholders
//! in the text payload, repack, and toggle back into a document at the output
//! path. The source document is never touched.
//!
//! Working artifacts (the copy, the archive, the extracted tree) live in a
//! temporary directory allocated per invocation, so concurrent conversions of
//! the same source cannot collide and every exit path, fatal or not, releases
//! the intermediate state.
//!
//! # Example
//!
//! ```rust,no_run
//! use docstamp::{DocumentRewriter, LogFacade, Result, SubstitutionMap};
//!
//! fn main() -> Result<()> {
//!     let map: SubstitutionMap = [("{{NAME}}", "World")].into_iter().collect();
//!     let outcome = DocumentRewriter::new("letter.docx", map).execute(&LogFacade)?;
//!     println!("wrote {}", outcome.output.display());
//!     Ok(())
//! }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::event_log::{EventLog, stamp};
use crate::substitute::{SubstitutionMap, substitute};
use crate::{Error, Result, container};

/// Relative path of the text payload inside a docx-style container.
pub const PAYLOAD_PATH: &str = "word/document.xml";

/// What to do when the text payload cannot be read or written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PayloadErrorPolicy {
    /// Log the failure and run the pipeline to completion anyway.
    ///
    /// The produced document may carry an unmodified or empty payload; the
    /// degradation is reported through [`PayloadOutcome::Degraded`]. This is
    /// the behavior of the system this crate replaces, kept as the default
    /// so existing callers still receive a document.
    #[default]
    Degrade,
    /// Abort the pipeline with [`Error::Read`] / [`Error::Write`].
    Fail,
}

/// How the payload substitution step actually fared.
///
/// A completed pipeline does not by itself guarantee the substitution
/// happened; under [`PayloadErrorPolicy::Degrade`] a payload failure only
/// shows up here and in the event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadOutcome {
    /// The payload was read, substituted, and written back.
    Substituted,
    /// A payload step failed and the pipeline continued; the string says
    /// which step and why.
    Degraded(String),
}

impl PayloadOutcome {
    /// Returns `true` if a payload step failed.
    pub fn is_degraded(&self) -> bool {
        matches!(self, PayloadOutcome::Degraded(_))
    }
}

/// The result of a completed rewrite.
#[derive(Debug)]
pub struct RewriteOutcome {
    /// Path of the finished document; ownership transfers to the caller.
    pub output: PathBuf,
    /// Whether the substitution actually reached the payload.
    pub payload: PayloadOutcome,
}

/// Configuration for one rewrite.
#[derive(Debug, Clone)]
pub struct RewriteOptions {
    payload_policy: PayloadErrorPolicy,
    payload_path: String,
    output: Option<PathBuf>,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            payload_policy: PayloadErrorPolicy::default(),
            payload_path: PAYLOAD_PATH.to_string(),
            output: None,
        }
    }
}

impl RewriteOptions {
    /// Creates options with the defaults: degrade on payload failures, the
    /// docx payload path, and an output named `copy_<name>` next to the
    /// source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the payload failure policy.
    pub fn payload_policy(mut self, policy: PayloadErrorPolicy) -> Self {
        self.payload_policy = policy;
        self
    }

    /// Sets the relative path of the text payload inside the container.
    ///
    /// Defaults to [`PAYLOAD_PATH`]. Containers in other layouts need the
    /// matching path here; this is the compatibility contract with the
    /// container format.
    pub fn payload_path(mut self, path: impl Into<String>) -> Self {
        self.payload_path = path.into();
        self
    }

    /// Sets the output path for the finished document.
    ///
    /// Defaults to `copy_<name>` in the source's directory. The pipeline
    /// refuses to overwrite an existing file at the output path.
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }
}

/// Rewrites one document package by substituting placeholders in its text
/// payload.
///
/// One instance performs one conversion; nothing is shared across instances.
pub struct DocumentRewriter {
    source: PathBuf,
    map: SubstitutionMap,
    options: RewriteOptions,
}

impl DocumentRewriter {
    /// Creates a rewriter for `source` with default [`RewriteOptions`].
    pub fn new(source: impl Into<PathBuf>, map: SubstitutionMap) -> Self {
        Self {
            source: source.into(),
            map,
            options: RewriteOptions::default(),
        }
    }

    /// Replaces the options.
    pub fn options(mut self, options: RewriteOptions) -> Self {
        self.options = options;
        self
    }

    /// Runs the pipeline to completion.
    ///
    /// The sequence is strict and non-retried: copy, rename to archive,
    /// unpack, read payload, substitute, write payload, drop the old
    /// archive, repack, drop the tree, rename back, place at the output
    /// path. Copy/rename/unpack/repack/cleanup failures are fatal; payload
    /// read/write failures follow the configured [`PayloadErrorPolicy`] and
    /// are reported through `log`.
    pub fn execute(&self, log: &dyn EventLog) -> Result<RewriteOutcome> {
        let work = WorkPaths::allocate(&self.source, &self.options.payload_path)?;
        let mut degraded: Option<String> = None;

        fs::copy(&self.source, &work.copy).map_err(|e| Error::Copy {
            src: self.source.clone(),
            dest: work.copy.clone(),
            source: e,
        })?;

        // Document -> archive. From here until the final rename, exactly one
        // of the two forms exists.
        rename(&work.copy, &work.archive)?;

        container::unpack(&work.archive, &work.tree)?;

        let content = match fs::read_to_string(&work.payload) {
            Ok(content) => content,
            Err(e) => {
                let err = Error::Read {
                    path: work.payload.clone(),
                    source: e,
                };
                log.log(&stamp(&format!("Error reading file: {err}")));
                if self.options.payload_policy == PayloadErrorPolicy::Fail {
                    return Err(err);
                }
                degraded = Some(err.to_string());
                String::new()
            }
        };

        let content = substitute(&content, &self.map);

        if let Err(e) = write_payload(&work.payload, &content) {
            let err = Error::Write {
                path: work.payload.clone(),
                source: e,
            };
            log.log(&stamp(&format!("Error writing file: {err}")));
            if self.options.payload_policy == PayloadErrorPolicy::Fail {
                return Err(err);
            }
            degraded = Some(match degraded {
                Some(earlier) => format!("{earlier}; {err}"),
                None => err.to_string(),
            });
        }

        fs::remove_file(&work.archive).map_err(|e| Error::Cleanup {
            path: work.archive.clone(),
            source: e,
        })?;

        container::repack(&work.tree, &work.archive)?;

        fs::remove_dir_all(&work.tree).map_err(|e| Error::Cleanup {
            path: work.tree.clone(),
            source: e,
        })?;

        // Archive -> document, then hand the result to the caller.
        rename(&work.archive, &work.copy)?;
        let output = self.output_path()?;
        place(&work.copy, &output)?;

        log::debug!(
            "rewrote {} -> {}",
            self.source.display(),
            output.display()
        );
        Ok(RewriteOutcome {
            output,
            payload: match degraded {
                Some(reason) => PayloadOutcome::Degraded(reason),
                None => PayloadOutcome::Substituted,
            },
        })
    }

    fn output_path(&self) -> Result<PathBuf> {
        if let Some(output) = &self.options.output {
            return Ok(output.clone());
        }
        let (name, _) = split_name(&self.source)?;
        let parent = self.source.parent().unwrap_or_else(|| Path::new(""));
        Ok(parent.join(format!("copy_{name}")))
    }
}

/// The per-invocation working paths, all inside one temporary directory.
///
/// Dropping this drops the directory and whatever artifacts a failed run
/// left in it.
struct WorkPaths {
    #[allow(dead_code)] // held for its Drop
    workdir: TempDir,
    copy: PathBuf,
    archive: PathBuf,
    tree: PathBuf,
    payload: PathBuf,
}

impl WorkPaths {
    fn allocate(source: &Path, payload_rel: &str) -> Result<Self> {
        let (name, stem) = split_name(source)?;
        let workdir = tempfile::Builder::new().prefix("docstamp-").tempdir()?;
        let copy = workdir.path().join(format!("copy_{name}"));
        let archive = workdir.path().join(format!("copy_{stem}.zip"));
        let tree = workdir.path().join(format!("extract_{stem}"));
        let payload = tree.join(payload_rel);
        Ok(Self {
            workdir,
            copy,
            archive,
            tree,
            payload,
        })
    }
}

/// Splits a source path into its full file name and its stem.
fn split_name(source: &Path) -> Result<(String, String)> {
    let name = source
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "source path has no file name"))?
        .to_string_lossy()
        .into_owned();
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.clone());
    Ok((name, stem))
}

fn rename(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|e| Error::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source: e,
    })
}

/// Writes the payload back, creating parent directories so a degraded run
/// still produces a document with an (empty) payload.
fn write_payload(payload: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = payload.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(payload, content)
}

/// Moves the finished document to the output path, refusing to overwrite.
///
/// The working directory may sit on a different filesystem than the output,
/// so a failed rename falls back to copy-and-remove.
fn place(from: &Path, to: &Path) -> Result<()> {
    let rename_error = |source: io::Error| Error::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };
    if to.exists() {
        return Err(rename_error(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "output path already exists",
        )));
    }
    if fs::rename(from, to).is_ok() {
        return Ok(());
    }
    fs::copy(from, to).map_err(rename_error)?;
    let _ = fs::remove_file(from);
    Ok(())
}
