//! kiln's main application entry point.
//! Handles command-line argument parsing and runs the build pipeline.

use kiln::{
    answers::{confirm_overwrite, resolve_request},
    builder::{ensure_output_dir, ProjectBuilder},
    cli::{get_args, Args},
    config::{load_defaults, resolve_templates_root},
    error::{default_error_handler, Result},
    logger::init_logger,
    prompt::{DialoguerPrompter, Prompter},
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads defaults from the working directory
/// 2. Resolves the templates root
/// 3. Completes the build request, prompting if allowed
/// 4. Checks the destination directory, asking before writing into an existing one
/// 5. Builds the project
fn run(args: Args) -> Result<()> {
    let defaults = load_defaults(std::env::current_dir()?)?;
    let templates_root = resolve_templates_root(args.templates.clone(), &defaults)?;

    let dialoguer = DialoguerPrompter::new();
    let prompter: Option<&dyn Prompter> =
        if args.non_interactive { None } else { Some(&dialoguer) };

    let request = resolve_request(args.request_options(defaults), &templates_root, prompter)?;
    let destination = args.output_dir.join(&request.name);
    let force = confirm_overwrite(&destination, args.force, prompter)?;
    let destination = ensure_output_dir(destination, force)?;

    let report = ProjectBuilder::new(templates_root).build(&request, &destination)?;

    println!(
        "Created {} '{}' in {} ({} files templated).",
        request.project_type,
        request.name,
        report.destination.display(),
        report.templated_files
    );
    Ok(())
}
