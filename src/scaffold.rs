//! Request processing: validates a template name, resolves its namespace and
//! generates one artifact per extension.

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::config::WorkspaceContext;
use crate::error::{Error, Result};
use crate::namespace::{resolve_namespace, ParsedName, ResolvedName};
use crate::prompt::Prompter;
use crate::renderer::TemplateRenderer;
use crate::stubs::{Extension, StubLoader};
use crate::validate::validate_name;
use crate::writer::write_new_file;

/// A single scaffolding request. Either field may be missing.
#[derive(Debug, Clone, Default)]
pub struct TemplateRequest {
    pub raw_name: Option<String>,
    pub target_directory: Option<PathBuf>,
}

impl TemplateRequest {
    pub fn new(raw_name: Option<String>, target_directory: Option<PathBuf>) -> Self {
        Self { raw_name, target_directory }
    }

    /// Returns the name and directory, rejecting absent or empty values.
    fn inputs(&self) -> Result<(&str, &Path)> {
        let raw_name = self
            .raw_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(Error::MissingInputError("template name"))?;
        let target_directory = self
            .target_directory
            .as_deref()
            .filter(|dir| !dir.as_os_str().is_empty())
            .ok_or(Error::MissingInputError("target directory"))?;
        Ok((raw_name, target_directory))
    }
}

/// Outcome of generating the artifact for one extension.
#[derive(Debug)]
pub struct ArtifactReport {
    pub extension: Extension,
    pub path: PathBuf,
    pub result: Result<()>,
}

impl ArtifactReport {
    pub fn is_written(&self) -> bool {
        self.result.is_ok()
    }

    /// `Created: '<path>'` for a written artifact.
    pub fn created_message(&self) -> Option<String> {
        self.is_written().then(|| format!("Created: '{}'", self.path.display()))
    }
}

/// Generates artifacts for validated requests.
pub struct Scaffolder<'a> {
    workspace: &'a WorkspaceContext,
    stubs: &'a dyn StubLoader,
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> Scaffolder<'a> {
    pub fn new(
        workspace: &'a WorkspaceContext,
        stubs: &'a dyn StubLoader,
        renderer: &'a dyn TemplateRenderer,
    ) -> Self {
        Self { workspace, stubs, renderer }
    }

    /// Validates the request and attempts every artifact.
    ///
    /// # Returns
    /// * `Result<Vec<ArtifactReport>>` - One report per extension, in
    ///   generation order
    ///
    /// # Errors
    /// * `Error::MissingInputError` if the name or directory is absent
    /// * `Error::InvalidNameError` / `Error::EmptyFileNameError` for malformed names
    pub fn scaffold(&self, request: &TemplateRequest) -> Result<Vec<ArtifactReport>> {
        let (raw_name, target_directory) = request.inputs()?;
        validate_name(raw_name)?;

        let target_directory = self.workspace.resolve(target_directory);
        let resolved =
            resolve_namespace(&ParsedName::parse(raw_name), &target_directory, self.workspace);
        debug!(
            "Resolved '{}' to namespace '{}' in '{}'.",
            raw_name,
            resolved.namespace,
            target_directory.display()
        );

        let context = resolved.to_context();
        Ok(Extension::ALL
            .into_iter()
            .map(|extension| self.generate(&target_directory, &resolved, extension, &context))
            .collect())
    }

    fn generate(
        &self,
        target_directory: &Path,
        resolved: &ResolvedName,
        extension: Extension,
        context: &serde_json::Value,
    ) -> ArtifactReport {
        let file_name = resolved.artifact_file_name(extension);
        let path = target_directory.join(&file_name);
        let result = self.write_artifact(&path, file_name, extension, context);
        if let Err(e) = &result {
            warn!("Skipping '{}': {}", path.display(), e);
        }
        ArtifactReport { extension, path, result }
    }

    fn write_artifact(
        &self,
        path: &Path,
        file_name: String,
        extension: Extension,
        context: &serde_json::Value,
    ) -> Result<()> {
        if path.exists() {
            return Err(Error::AlreadyExistsError { file_name });
        }
        let stub = self.stubs.load(extension)?;
        let content = self.renderer.render(&stub, context)?;
        write_new_file(path, &content)
    }
}

/// Runs `request` and reports every problem through `prompt`.
///
/// Requests with missing input end silently; validation failures produce a
/// single notice; each skipped artifact produces its own notice.
pub fn run_request(
    scaffolder: &Scaffolder,
    prompt: &dyn Prompter,
    request: &TemplateRequest,
) -> Vec<ArtifactReport> {
    match scaffolder.scaffold(request) {
        Ok(reports) => {
            for report in &reports {
                if let Err(e) = &report.result {
                    prompt.notify(&e.to_string());
                }
            }
            reports
        }
        Err(Error::MissingInputError(what)) => {
            debug!("Nothing to generate: {} is missing.", what);
            Vec::new()
        }
        Err(e) => {
            prompt.notify(&e.to_string());
            Vec::new()
        }
    }
}
