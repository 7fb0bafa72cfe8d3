//! Command-line interface implementation for stencil.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::template::TemplateOrder;

/// Command-line arguments structure for stencil.
#[derive(Parser, Debug)]
#[command(author, version, about = "stencil: generate files from YAML sources and templates", long_about = None)]
pub struct Args {
    /// Source document, or a directory whose files are all source documents
    #[arg(short, long, value_name = "SOURCE")]
    pub source: PathBuf,

    /// Order in which template and source directories are enumerated
    #[arg(long, value_enum, default_value_t = TemplateOrder::Sorted)]
    pub order: TemplateOrder,

    /// Template marker suffix stripped from output extensions (repeatable).
    /// Replaces the default set: jinja, j2, tmpl.
    #[arg(short, long = "marker", value_name = "SUFFIX")]
    pub markers: Vec<String>,

    /// Stop at the first source document that fails instead of continuing
    #[arg(long)]
    pub fail_fast: bool,

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
