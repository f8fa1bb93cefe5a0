//! Command-line interface implementation for kiln.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::answers::RequestOptions;
use crate::config::Defaults;
use crate::request::{Language, ProjectType};

/// Command-line arguments structure for kiln.
#[derive(Parser, Debug)]
#[command(author, version, about = "kiln: scaffold applications, libraries and servers", long_about = None)]
pub struct Args {
    /// Name of the project, also used as the directory name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Kind of project to create
    #[arg(short = 't', long = "type", value_enum)]
    pub project_type: Option<ProjectType>,

    /// Framework template to use
    #[arg(long)]
    pub framework: Option<String>,

    /// Application language
    #[arg(short, long, value_enum)]
    pub language: Option<Language>,

    /// Stylesheet option ("Tailwind" adds the Tailwind extras)
    #[arg(long)]
    pub css: Option<String>,

    /// Port the generated application or server listens on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory holding the template trees
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Directory the project directory is created in
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Write into an existing project directory
    #[arg(short, long)]
    pub force: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Never prompt; use defaults for anything not given
    #[arg(long)]
    pub non_interactive: bool,
}

impl Args {
    /// Merges the command-line values over the loaded defaults.
    pub fn request_options(&self, defaults: Defaults) -> RequestOptions {
        RequestOptions {
            name: self.name.clone(),
            project_type: self.project_type.or(defaults.project_type),
            framework: self.framework.clone().or(defaults.framework),
            language: self.language.or(defaults.language),
            css: self.css.clone().or(defaults.css),
            port: self.port.or(defaults.port),
        }
    }
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
