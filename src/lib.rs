//! apractool generates the boilerplate for a new view: a `.gspx` markup file
//! plus its `.js` and `.jsx` scripts, rendered from bundled stubs with a
//! namespace and file name derived from a dotted template name.

/// Command-line interface module
pub mod cli;

/// Workspace configuration (apractool.json, apractool.yml, apractool.yaml)
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling
pub mod error;

/// Logging setup
pub mod logger;

/// Namespace derivation from template names and directories
pub mod namespace;

/// Lexical path helpers
pub mod paths;

/// User input and notices
pub mod prompt;

/// Placeholder substitution
pub mod renderer;

/// Request orchestration
pub mod scaffold;

/// Bundled and on-disk stubs
pub mod stubs;

/// Template name validation
pub mod validate;

/// Artifact persistence
pub mod writer;
