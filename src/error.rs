//! Error types for document rewrite operations.
//!
//! This module provides the [`Error`] enum which represents all possible
//! failure modes of the rewrite pipeline, along with a convenient
//! [`Result<T>`] type alias.
//!
//! All fallible operations in this crate return `Result<T, Error>`:
//!
//! ```rust,no_run
//! use docstamp::{DocumentRewriter, LogFacade, Result, SubstitutionMap};
//!
//! fn fill(path: &str, map: SubstitutionMap) -> Result<std::path::PathBuf> {
//!     let outcome = DocumentRewriter::new(path, map).execute(&LogFacade)?;
//!     Ok(outcome.output)
//! }
//! ```
//!
//! Payload read/write failures are special: under the default
//! [`PayloadErrorPolicy::Degrade`] they are reported through the event log and
//! the [`PayloadOutcome`] of the result rather than as an `Err`. Only the
//! `Fail` policy turns them into [`Error::Read`] / [`Error::Write`].
//!
//! [`PayloadErrorPolicy::Degrade`]: crate::PayloadErrorPolicy::Degrade
//! [`PayloadOutcome`]: crate::PayloadOutcome

use std::io;
use std::path::PathBuf;

/// Convenience alias for `Result<T, docstamp::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rewriting a document package.
///
/// Each variant corresponds to one step of the pipeline, so a failure names
/// both what was being attempted and the paths involved.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Duplicating the source document into the working copy failed.
    ///
    /// Common causes: source unreadable, working directory unwritable.
    #[error("failed to copy {} to {}: {source}", src.display(), dest.display())]
    Copy {
        /// The source document path.
        src: PathBuf,
        /// The intended working-copy path.
        dest: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// One of the extension-toggle renames or the final placement failed.
    ///
    /// The final placement refuses to overwrite an existing output file, in
    /// which case the underlying error kind is `AlreadyExists`.
    #[error("failed to rename {} to {}: {source}", from.display(), to.display())]
    Rename {
        /// The path being renamed.
        from: PathBuf,
        /// The target path.
        to: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The container could not be unpacked.
    ///
    /// The working copy is not a valid ZIP container (corrupt, truncated, or
    /// not an archive at all), or extraction to the working tree failed.
    #[error("failed to extract {}: {reason}", archive.display())]
    Extraction {
        /// The container file being unpacked.
        archive: PathBuf,
        /// A description of what went wrong.
        reason: String,
    },

    /// The text payload could not be read.
    ///
    /// Returned only under [`PayloadErrorPolicy::Fail`]; the default policy
    /// degrades instead.
    ///
    /// [`PayloadErrorPolicy::Fail`]: crate::PayloadErrorPolicy::Fail
    #[error("failed to read payload {}: {source}", path.display())]
    Read {
        /// The payload path inside the extracted tree.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The substituted text payload could not be written back.
    ///
    /// Returned only under [`PayloadErrorPolicy::Fail`]; the default policy
    /// degrades instead.
    ///
    /// [`PayloadErrorPolicy::Fail`]: crate::PayloadErrorPolicy::Fail
    #[error("failed to write payload {}: {source}", path.display())]
    Write {
        /// The payload path inside the extracted tree.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Repacking the extracted tree into a container failed.
    #[error("failed to compress {}: {reason}", dir.display())]
    Compression {
        /// The tree being repacked.
        dir: PathBuf,
        /// A description of what went wrong.
        reason: String,
    },

    /// A working artifact could not be removed.
    ///
    /// Covers deleting the superseded container file and the extracted tree.
    #[error("failed to clean up {}: {source}", path.display())]
    Cleanup {
        /// The artifact that could not be removed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An I/O error outside the named pipeline steps.
    ///
    /// Covers working-directory allocation and path derivation.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
