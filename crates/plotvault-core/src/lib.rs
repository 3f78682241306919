//! Plotvault - a lightweight versioned store for generated plots.
//!
//! A plotting script opens a writer session, saves one or more plots, and
//! optionally annotates the session with a comment and a tag. All saves
//! from one session land in a namespace keyed by the session's time bucket,
//! and repeated saves of the same name accumulate revisions instead of
//! overwriting. The `pv` CLI lists namespaces and exports a chosen
//! namespace's plots to files.
//!
//! # Example
//!
//! ```rust,no_run
//! use plotvault_core::{Plot, PlotWriter, Series};
//!
//! fn main() -> Result<(), plotvault_core::WriterError> {
//!     let mut pv = PlotWriter::open_default()?;
//!
//!     let h1 = Plot::new("h1", "Track multiplicity")
//!         .with_series(Series::from_values("h1", &[5.0, 9.0, 4.0]));
//!     pv.save(&h1)?;
//!
//!     pv.comment("Fixed plot style issues")?;
//!     pv.tag("This seems to be good!")?;
//!     pv.close()
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod export;
pub mod plot;
pub mod storage;
pub mod writer;

pub use catalog::{CatalogError, NamespaceSummary, list_namespaces, resolve_id};
pub use export::{
    ExportError, ExportFormat, ExportOptions, ExportReport, export_namespace, resolve_outdir,
};
pub use plot::{Plot, Series};
pub use storage::{Container, Entry, NamespaceId, NamespaceRow, OpenMode, StorageError};
pub use writer::{PlotWriter, WriterError};
