//! Namespace listing and id resolution for the reader commands.

use serde::Serialize;
use thiserror::Error;

use crate::config::{COMMENT_NAME, TAG_NAME};
use crate::storage::{Container, NamespaceRow, StorageError};

/// Errors that can occur while listing or resolving namespaces.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The id is neither a namespace key nor a valid 1-based index.
    #[error("Invalid id: {0}")]
    InvalidId(String),

    /// Storage-related errors.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for catalog operations.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// One row of the `list` output.
#[derive(Debug, Clone, Serialize)]
pub struct NamespaceSummary {
    /// 1-based position in container order.
    pub index: usize,
    /// Namespace key.
    pub key: String,
    /// Newest comment; empty if the session was never commented.
    pub comment: String,
    /// Newest tag message; `Some` exactly when the session was tagged,
    /// even with an empty message.
    pub tag: Option<String>,
}

impl NamespaceSummary {
    /// Whether the namespace carries a tag object at all.
    pub fn is_tagged(&self) -> bool {
        self.tag.is_some()
    }
}

/// Summaries for every namespace, in the container's native order.
///
/// Metadata absence is not an error: an uncommented namespace renders with
/// an empty comment, an untagged one with no tag.
pub fn list_namespaces(container: &Container) -> CatalogResult<Vec<NamespaceSummary>> {
    let mut summaries = Vec::new();
    for (position, row) in container.namespaces()?.into_iter().enumerate() {
        let comment = container.read_latest(row.id, COMMENT_NAME)?.unwrap_or_default();
        let tag = container.read_latest(row.id, TAG_NAME)?;
        summaries.push(NamespaceSummary { index: position + 1, key: row.key, comment, tag });
    }
    Ok(summaries)
}

/// Resolves a `get` id to a namespace.
///
/// Precedence: an exact key match wins; otherwise the id is parsed as a
/// 1-based index into the enumeration order shown by `list`. A key that
/// looks numeric therefore shadows the index with that value. Anything
/// else is an invalid id.
pub fn resolve_id(container: &Container, id: &str) -> CatalogResult<NamespaceRow> {
    let rows = container.namespaces()?;

    if let Some(row) = rows.iter().find(|row| row.key == id) {
        return Ok(row.clone());
    }

    let index: usize = id.parse().map_err(|_| CatalogError::InvalidId(id.to_string()))?;
    if index == 0 || index > rows.len() {
        return Err(CatalogError::InvalidId(id.to_string()));
    }
    Ok(rows[index - 1].clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> Container {
        Container::open_in_memory().unwrap()
    }

    #[test]
    fn test_summaries_follow_container_order() {
        let container = setup();
        container.ensure_namespace("2024-01-02_09-00-00").unwrap();
        container.ensure_namespace("2024-01-01_12-00-00").unwrap();

        let summaries = list_namespaces(&container).unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].index, 1);
        assert_eq!(summaries[0].key, "2024-01-02_09-00-00");
        assert_eq!(summaries[1].index, 2);
        assert_eq!(summaries[1].key, "2024-01-01_12-00-00");
    }

    #[test]
    fn test_missing_metadata_is_not_an_error() {
        let container = setup();
        container.ensure_namespace("bare").unwrap();

        let summaries = list_namespaces(&container).unwrap();
        assert_eq!(summaries[0].comment, "");
        assert!(!summaries[0].is_tagged());
    }

    #[test]
    fn test_empty_tag_still_counts_as_tagged() {
        let container = setup();
        let ns = container.ensure_namespace("ns").unwrap();
        container.write_object(ns, TAG_NAME, "").unwrap();

        let summaries = list_namespaces(&container).unwrap();
        assert!(summaries[0].is_tagged());
        assert_eq!(summaries[0].tag.as_deref(), Some(""));
    }

    #[test]
    fn test_summary_reads_latest_metadata_revision() {
        let container = setup();
        let ns = container.ensure_namespace("ns").unwrap();
        container.write_object(ns, COMMENT_NAME, "draft").unwrap();
        container.write_object(ns, COMMENT_NAME, "final").unwrap();

        let summaries = list_namespaces(&container).unwrap();
        assert_eq!(summaries[0].comment, "final");
    }

    #[test]
    fn test_resolve_by_literal_key() {
        let container = setup();
        container.ensure_namespace("2024-01-01_12-00-00").unwrap();

        let row = resolve_id(&container, "2024-01-01_12-00-00").unwrap();
        assert_eq!(row.key, "2024-01-01_12-00-00");
    }

    #[test]
    fn test_resolve_by_positional_index() {
        let container = setup();
        container.ensure_namespace("a").unwrap();
        container.ensure_namespace("b").unwrap();

        assert_eq!(resolve_id(&container, "1").unwrap().key, "a");
        assert_eq!(resolve_id(&container, "2").unwrap().key, "b");
    }

    #[test]
    fn test_literal_key_takes_precedence_over_index() {
        let container = setup();
        container.ensure_namespace("2").unwrap();
        container.ensure_namespace("other").unwrap();

        // "2" matches a key exactly, so it does not resolve to position 2.
        assert_eq!(resolve_id(&container, "2").unwrap().key, "2");
    }

    #[test]
    fn test_invalid_ids_are_rejected() {
        let container = setup();
        container.ensure_namespace("only").unwrap();

        for id in ["0", "2", "-1", "nope", ""] {
            match resolve_id(&container, id) {
                Err(CatalogError::InvalidId(bad)) => assert_eq!(bad, id),
                other => panic!("expected invalid id for {id:?}, got {other:?}"),
            }
        }
    }
}
