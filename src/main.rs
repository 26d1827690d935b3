//! Christen's main application entry point and orchestration logic.
//! Handles command-line argument parsing and runs the bootstrap steps in
//! order: collect values, rewrite the tree, update metadata, verify,
//! clean up.

use std::io::IsTerminal;

use christen::{
    cleanup::{delete_artifacts, strip_docs_section},
    cli::{get_args, Args},
    config::BootstrapConfig,
    error::{default_error_handler, Error, Result},
    metadata::update_metadata,
    processor::Processor,
    prompt::DialoguerPrompter,
    values::{collect_values, validate_names, InferredDefaults},
    verify::run_verification,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Gathers defaults from the metadata record and git
/// 2. Collects and validates the replacement values
/// 3. Substitutes placeholders in file contents
/// 4. Renames placeholder paths bottom-up
/// 5. Rewrites the metadata record
/// 6. Re-locks and verifies via the external commands
/// 7. Deletes the bootstrap artifacts
///
/// Any failure stops the pipeline where it is: steps already applied are
/// left in place for inspection, and the cleanup step never runs.
fn run(args: Args) -> Result<()> {
    let config = BootstrapConfig::for_root(args.root.clone());
    let inferred = InferredDefaults::gather(&config);

    let prompter = DialoguerPrompter::new();
    let interactive = std::io::stdin().is_terminal();
    let values = collect_values(
        &args,
        &inferred,
        &config.placeholders,
        &prompter,
        interactive,
    )?;

    if values.dist_name.is_empty() || values.import_name.is_empty() {
        return Err(Error::ValidationError(
            "Distribution and import names are required".to_string(),
        ));
    }
    validate_names(&values.dist_name, &values.import_name)?;

    let processor = Processor::new(&config)?;

    let changed = processor.replace_placeholders(&values.dist_name, &values.import_name)?;
    if changed > 0 {
        println!("Updated placeholders in {} files", changed);
    }

    let renamed =
        processor.rename_placeholder_paths(&values.dist_name, &values.import_name)?;
    for (from, to) in &renamed {
        println!("Renamed '{}' -> '{}'", from.display(), to.display());
    }

    update_metadata(&config.root.join(&config.metadata_file), &values)?;
    println!("Updated {} metadata", config.metadata_file);

    if !args.no_verify {
        run_verification(&config)?;
    }

    if !args.keep_script {
        let deleted = delete_artifacts(&config.root, &config.artifacts)?;
        if !deleted.is_empty() {
            let listed: Vec<String> =
                deleted.iter().map(|p| p.display().to_string()).collect();
            println!("Deleted bootstrap artifacts: {}", listed.join(", "));
        }
        strip_docs_section(&config.root.join(&config.docs_file), &config.docs_heading)?;
    }

    println!("Bootstrap complete");
    Ok(())
}
