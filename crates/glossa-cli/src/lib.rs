//! CLI logic for the Glossa model converter.
//!
//! Loads a model document, resolves it and writes the summary of the target
//! diagram.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use log::info;

use glossa::{Conversion, Converter, GlossaError};

/// Run the Glossa CLI application
///
/// Data-quality diagnostics do not fail the run; they are returned on the
/// [`Conversion`] for the caller to report.
///
/// # Errors
///
/// Returns `GlossaError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Invalid model documents
/// - Resolution or summary failures
pub fn run(args: &Args) -> Result<Conversion, GlossaError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing model"
    );

    let app_config = config::resolve_config(args)?;

    let converter = Converter::new(app_config);
    let model = converter.load_model_file(&args.input)?;
    let conversion = converter.convert(&model)?;

    converter.write_summary(&conversion, &args.output)?;

    info!(
        output_file = args.output,
        errors = conversion.error_count(),
        warnings = conversion.warning_count();
        "Summary exported"
    );

    Ok(conversion)
}
