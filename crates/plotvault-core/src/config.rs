//! Process-wide defaults and reserved names.
//!
//! Everything here is a named constant so that callers pass configuration
//! explicitly instead of relying on ambient mutable state.

/// Default container filename used when no path is given.
pub const DEFAULT_CONTAINER_FILE: &str = "_plots.db";

/// Placeholder substituted with the namespace key in output-directory
/// templates. The default template is the placeholder itself, so each
/// namespace exports into a directory named after its key.
pub const KEY_PLACEHOLDER: &str = "{key}";

/// Reserved object name holding a namespace's comment.
pub const COMMENT_NAME: &str = "comment";

/// Reserved object name holding a namespace's tag.
pub const TAG_NAME: &str = "tag";

/// Object names that carry namespace metadata. Excluded whenever plots are
/// enumerated.
pub const RESERVED_NAMES: [&str; 2] = [COMMENT_NAME, TAG_NAME];
