//! Command-line interface implementation for apractool.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for apractool.
#[derive(Parser, Debug)]
#[command(author, version, about = "apractool: generate view and script boilerplate from stubs", long_about = None)]
pub struct Args {
    /// Directory in which the files will be generated
    #[arg(value_name = "TARGET_DIR")]
    pub target_dir: PathBuf,

    /// Template name including its namespace, e.g. Namespace.Template.
    /// Prompted for interactively when omitted.
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Workspace root the configuration and root directory are resolved against
    /// (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    /// Root directory whose files get the "Base" namespace,
    /// overrides `rootDir` from the configuration file
    #[arg(short, long, value_name = "DIR")]
    pub root_dir: Option<PathBuf>,

    /// Load stubs from this directory instead of the bundled ones
    #[arg(long, value_name = "DIR")]
    pub stub_dir: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
