//! apractool's entry point.
//! Parses arguments, builds the workspace context and runs a single request.

use std::path::{Path, PathBuf};

use apractool::{
    cli::{get_args, Args},
    config::{get_config, WorkspaceContext},
    error::{default_error_handler, Result},
    logger::init_logger,
    prompt::{get_name, DialoguerPrompter},
    renderer::TokenRenderer,
    scaffold::{run_request, Scaffolder, TemplateRequest},
    stubs::get_stub_loader,
};

fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn absolute<P: AsRef<Path>>(base: &Path, path: P) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the workspace root and loads its configuration
/// 2. Selects the stub source
/// 3. Prompts for the template name when it was not passed
/// 4. Generates the artifacts and reports the written files
fn run(args: Args) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let workspace_root = absolute(&current_dir, args.workspace.unwrap_or_default());

    let mut config = get_config(&workspace_root)?;
    if let Some(root_dir) = args.root_dir {
        config.root_dir = root_dir;
    }
    let workspace = WorkspaceContext::new(workspace_root, &config);

    let stubs = get_stub_loader(args.stub_dir);
    let renderer = TokenRenderer::new();
    let prompt = DialoguerPrompter::new();
    let scaffolder = Scaffolder::new(&workspace, &*stubs, &renderer);

    let raw_name = get_name(&prompt, args.name)?;
    let target_dir = (!args.target_dir.as_os_str().is_empty())
        .then(|| absolute(&current_dir, &args.target_dir));
    let request = TemplateRequest::new(raw_name, target_dir);

    for report in run_request(&scaffolder, &prompt, &request) {
        if let Some(message) = report.created_message() {
            println!("{}", message);
        }
    }
    Ok(())
}
