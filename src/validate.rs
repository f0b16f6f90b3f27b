//! Template name validation.

use std::sync::LazyLock;

use crate::constants::{NAME_PATTERN, NAMESPACE_SEPARATOR};
use crate::error::{Error, Result};
use regex::Regex;

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NAME_PATTERN).expect("NAME_PATTERN is a valid regex"));

/// Checks that `name` is 3 to 50 ASCII letters, digits, `_` or `.`
/// and that it ends with a file name rather than a separator.
///
/// # Errors
/// * `Error::InvalidNameError` if the name does not match the pattern
/// * `Error::EmptyFileNameError` if the name ends with `.`
pub fn validate_name(name: &str) -> Result<()> {
    if !NAME_REGEX.is_match(name) {
        return Err(Error::InvalidNameError { name: name.to_string() });
    }
    if name.ends_with(NAMESPACE_SEPARATOR) {
        return Err(Error::EmptyFileNameError { name: name.to_string() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_regex_compiles() {
        assert!(NAME_REGEX.is_match("NS.Foo"));
    }
}
