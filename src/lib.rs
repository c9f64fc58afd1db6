//! # docstamp
//!
//! Template-style placeholder substitution inside word-processing document
//! packages.
//!
//! A docx-style document is a ZIP container holding a tree of internal
//! parts, one of which is the text payload. This crate copies a document,
//! unpacks the copy, replaces literal placeholder strings in the payload
//! with caller-supplied values, repacks the tree, and hands back the path of
//! the finished document. The source document is never modified.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docstamp::{DocumentRewriter, LogFacade, Result, SubstitutionMap};
//!
//! fn main() -> Result<()> {
//!     let map: SubstitutionMap = [
//!         ("{{NAME}}", "World"),
//!         ("{{DATE}}", "2026-08-30"),
//!     ]
//!     .into_iter()
//!     .collect();
//!
//!     let outcome = DocumentRewriter::new("letter.docx", map).execute(&LogFacade)?;
//!     println!("wrote {}", outcome.output.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Degraded runs
//!
//! By default a payload that cannot be read or written does not abort the
//! pipeline; the run completes, the failure goes to the [`EventLog`], and the
//! result carries [`PayloadOutcome::Degraded`]. Callers that prefer an error
//! opt in with [`PayloadErrorPolicy::Fail`]:
//!
//! ```rust,no_run
//! use docstamp::{
//!     DocumentRewriter, MemoryLog, PayloadErrorPolicy, RewriteOptions, SubstitutionMap,
//! };
//!
//! # fn main() -> docstamp::Result<()> {
//! let log = MemoryLog::new();
//! let options = RewriteOptions::new()
//!     .payload_policy(PayloadErrorPolicy::Fail)
//!     .output("out/final.docx");
//!
//! let outcome = DocumentRewriter::new("letter.docx", SubstitutionMap::new())
//!     .options(options)
//!     .execute(&log)?;
//! assert!(!outcome.payload.is_degraded());
//! # Ok(())
//! # }
//! ```
//!
//! ## Substitution semantics
//!
//! Replacement is flat and literal: no placeholder syntax, no loops or
//! conditionals. Pairs apply in insertion order, and a later pair can
//! consume text injected by an earlier one — see [`substitute`].

pub mod container;
pub mod error;
pub mod event_log;
pub mod rewrite;
pub mod substitute;

pub use error::{Error, Result};
pub use event_log::{EventLog, LogFacade, MemoryLog};
pub use rewrite::{
    DocumentRewriter, PAYLOAD_PATH, PayloadErrorPolicy, PayloadOutcome, RewriteOptions,
    RewriteOutcome,
};
pub use substitute::{SubstitutionMap, substitute};
