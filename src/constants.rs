//! Common constants used throughout apractool.

/// Supported configuration file names, in lookup order
pub const CONFIG_FILES: [&str; 3] = ["apractool.json", "apractool.yml", "apractool.yaml"];

/// Root directory used when the configuration does not set `rootDir`
pub const DEFAULT_ROOT_DIR: &str = "./src/www";

/// Namespace given to files generated directly in the root directory
pub const BASE_NAMESPACE: &str = "Base";

/// Accepted shape of a template name
pub const NAME_PATTERN: &str = r"^[a-zA-Z0-9_.]{3,50}$";

/// Separator between namespace segments and the file name
pub const NAMESPACE_SEPARATOR: char = '.';

/// Placeholder keys substituted into stubs as `{key}`
pub const NAMESPACE_AND_FILE_NAME_KEY: &str = "NamespaceAndFileName";
pub const NAMESPACE_KEY: &str = "Namespace";
pub const FILE_NAME_KEY: &str = "FileName";

/// Order in which placeholders are substituted
pub const PLACEHOLDER_KEYS: [&str; 3] = [NAMESPACE_AND_FILE_NAME_KEY, NAMESPACE_KEY, FILE_NAME_KEY];
