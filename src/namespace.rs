//! Namespace derivation from the template name and the target directory.

use std::path::Path;

use crate::config::WorkspaceContext;
use crate::constants::{
    BASE_NAMESPACE, FILE_NAME_KEY, NAMESPACE_AND_FILE_NAME_KEY, NAMESPACE_KEY,
    NAMESPACE_SEPARATOR,
};
use crate::paths::last_segment;
use crate::stubs::Extension;

/// A template name split into its namespace segments and file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub namespace_segments: Vec<String>,
    pub file_name: String,
}

impl ParsedName {
    /// Splits `raw_name` on `.`; the last segment is the file name.
    pub fn parse(raw_name: &str) -> Self {
        let mut namespace_segments: Vec<String> =
            raw_name.split(NAMESPACE_SEPARATOR).map(str::to_string).collect();
        let file_name = namespace_segments.pop().unwrap_or_default();
        Self { namespace_segments, file_name }
    }

    /// The namespace spelled out in the name, if any.
    pub fn explicit_namespace(&self) -> Option<String> {
        let separator = NAMESPACE_SEPARATOR.to_string();
        let joined = self.namespace_segments.join(separator.as_str());
        (!joined.is_empty()).then_some(joined)
    }
}

/// Namespace and file name every artifact of a request is rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    pub namespace: String,
    pub file_name: String,
}

impl ResolvedName {
    /// `namespace.file_name`
    pub fn qualified(&self) -> String {
        format!("{}{}{}", self.namespace, NAMESPACE_SEPARATOR, self.file_name)
    }

    /// Name of the artifact generated for `extension`, e.g. `Foo.jsx`.
    pub fn artifact_file_name(&self, extension: Extension) -> String {
        format!("{}.{}", self.file_name, extension)
    }

    /// Placeholder values keyed by token name.
    pub fn to_context(&self) -> serde_json::Value {
        serde_json::json!({
            NAMESPACE_AND_FILE_NAME_KEY: self.qualified(),
            NAMESPACE_KEY: self.namespace,
            FILE_NAME_KEY: self.file_name,
        })
    }
}

/// Resolves the namespace for `parsed` generated into `target_dir`.
///
/// An explicit namespace wins. Otherwise files placed directly in the root
/// directory get `Base` and everything else is named after its directory.
pub fn resolve_namespace<P: AsRef<Path>>(
    parsed: &ParsedName,
    target_dir: P,
    workspace: &WorkspaceContext,
) -> ResolvedName {
    let namespace = parsed.explicit_namespace().unwrap_or_else(|| {
        let target_dir = workspace.resolve(target_dir);
        if target_dir == workspace.root_directory() {
            BASE_NAMESPACE.to_string()
        } else {
            last_segment(target_dir)
        }
    });

    ResolvedName { namespace, file_name: parsed.file_name.clone() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_on_last_separator() {
        let parsed = ParsedName::parse("A.B.Foo");
        assert_eq!(parsed.namespace_segments, vec!["A", "B"]);
        assert_eq!(parsed.file_name, "Foo");
        assert_eq!(parsed.explicit_namespace().as_deref(), Some("A.B"));
    }

    #[test]
    fn test_parse_without_namespace() {
        let parsed = ParsedName::parse("Foo");
        assert!(parsed.namespace_segments.is_empty());
        assert_eq!(parsed.explicit_namespace(), None);
    }

    #[test]
    fn test_parse_keeps_empty_trailing_segment() {
        let parsed = ParsedName::parse("NS.");
        assert_eq!(parsed.file_name, "");
        assert_eq!(parsed.explicit_namespace().as_deref(), Some("NS"));
    }
}
