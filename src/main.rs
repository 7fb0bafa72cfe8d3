//! stencil's main application entry point.
//! Parses arguments, sets up logging and runs the generator over the sources.

use stencil::{
    cli::{get_args, Args},
    config::GeneratorConfig,
    error::{default_error_handler, Result},
    filters::FilterRegistry,
    logger::init_logger,
    processor::Generator,
    renderer::MiniJinjaRenderer,
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
/// 1. Builds the run configuration and the renderer with the builtin filters
/// 2. Collects the source documents
/// 3. Processes every directive of every document
/// 4. Reports written files, failing if any document failed
fn run(args: Args) -> Result<()> {
    let config = GeneratorConfig::from(&args);
    let renderer = MiniJinjaRenderer::new(FilterRegistry::builtin());
    let generator = Generator::new(&renderer, &config);

    let summary = generator.run(&args.source)?;
    for path in &summary.written {
        println!("Generated: '{}'", path.display());
    }

    let summary = summary.into_result()?;
    println!(
        "Generation completed: {} source document(s), {} file(s) written.",
        summary.documents,
        summary.written.len()
    );
    Ok(())
}
