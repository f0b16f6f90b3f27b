//! Stub loading.
//! Stubs ship inside the binary; a directory on disk can stand in for them.
use crate::error::{Error, Result};
use log::debug;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Kind of artifact generated for every template name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extension {
    /// View markup
    Gspx,
    /// Plain script
    Js,
    /// Component script
    Jsx,
}

impl Extension {
    /// Every extension, in generation order.
    pub const ALL: [Extension; 3] = [Extension::Gspx, Extension::Js, Extension::Jsx];

    pub fn as_str(&self) -> &'static str {
        match self {
            Extension::Gspx => "gspx",
            Extension::Js => "js",
            Extension::Jsx => "jsx",
        }
    }

    /// File name of the stub for this extension, e.g. `stub.gspx`.
    pub fn stub_file_name(&self) -> String {
        format!("stub.{}", self.as_str())
    }

    fn bundled_stub(&self) -> &'static str {
        match self {
            Extension::Gspx => include_str!("../static/stub.gspx"),
            Extension::Js => include_str!("../static/stub.js"),
            Extension::Jsx => include_str!("../static/stub.jsx"),
        }
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for loading stub contents.
pub trait StubLoader {
    /// Returns the raw stub text for `extension`.
    ///
    /// # Errors
    /// * `Error::StubReadError` if the stub cannot be read
    fn load(&self, extension: Extension) -> Result<String>;
}

/// Loader for the stubs compiled into the binary.
#[derive(Debug, Default)]
pub struct BundledStubs;

impl BundledStubs {
    pub fn new() -> Self {
        Self
    }
}

impl StubLoader for BundledStubs {
    fn load(&self, extension: Extension) -> Result<String> {
        debug!("Using bundled stub for '{}'.", extension);
        Ok(extension.bundled_stub().to_string())
    }
}

/// Loader for stubs stored as `stub.<extension>` in a directory.
pub struct DirectoryStubs<P: AsRef<Path>> {
    dir: P,
}

impl<P: AsRef<Path>> DirectoryStubs<P> {
    pub fn new(dir: P) -> Self {
        Self { dir }
    }

    pub fn stub_path(&self, extension: Extension) -> PathBuf {
        self.dir.as_ref().join(extension.stub_file_name())
    }
}

impl<P: AsRef<Path>> StubLoader for DirectoryStubs<P> {
    fn load(&self, extension: Extension) -> Result<String> {
        let path = self.stub_path(extension);
        debug!("Reading stub from '{}'.", path.display());
        fs::read_to_string(&path).map_err(|source| Error::StubReadError { extension, source })
    }
}

/// Returns the loader for the given stub directory, or the bundled stubs.
pub fn get_stub_loader(stub_dir: Option<PathBuf>) -> Box<dyn StubLoader> {
    match stub_dir {
        Some(dir) => Box::new(DirectoryStubs::new(dir)),
        None => Box::new(BundledStubs::new()),
    }
}
