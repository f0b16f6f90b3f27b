use std::path::{Component, Path, PathBuf};

/// Lexically normalizes a path: drops `.` components and trailing separators,
/// folds `..` into the preceding segment. The filesystem is never consulted,
/// so the path does not need to exist.
pub fn normalize<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.as_ref().components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let after_segment =
                    matches!(normalized.components().next_back(), Some(Component::Normal(_)));
                let popped = after_segment && normalized.pop();
                // `..` above the root stays at the root
                if !popped && !normalized.has_root() {
                    normalized.push(Component::ParentDir);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Final segment of a normalized directory path, empty when there is none.
pub fn last_segment<P: AsRef<Path>>(path: P) -> String {
    normalize(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("/work/./src/www/"), PathBuf::from("/work/src/www"));
        assert_eq!(normalize("/work/src/tmp/../www"), PathBuf::from("/work/src/www"));
        assert_eq!(normalize("/../www"), PathBuf::from("/www"));
        assert_eq!(normalize("../a/../../b"), PathBuf::from("../../b"));
    }

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("/work/src/www/Widgets/"), "Widgets");
        assert_eq!(last_segment("/work/Widgets/sub/.."), "Widgets");
        assert_eq!(last_segment("/"), "");
    }
}
