//! Command-line argument definitions for the Glossa CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, overrides of configured values, and logging verbosity.

use clap::Parser;

use glossa_core::specification::SpecificationKind;

/// Command-line arguments for the Glossa model converter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input model document
    #[arg(help = "Path to the input model (TOML)")]
    pub input: String,

    /// Path to the output summary file
    #[arg(short, long, default_value = "summary.toml")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Name of the diagram to summarize, overriding the configuration
    #[arg(short, long)]
    pub diagram: Option<String>,

    /// Vocabulary or ApplicationProfile, overriding the configuration
    #[arg(short, long)]
    pub specification: Option<SpecificationKind>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["glossa", "model.toml"]);

        assert_eq!(args.input, "model.toml");
        assert_eq!(args.output, "summary.toml");
        assert_eq!(args.config, None);
        assert_eq!(args.specification, None);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "glossa",
            "model.toml",
            "-o",
            "out.toml",
            "--diagram",
            "Pets",
            "--specification",
            "application-profile",
        ]);

        assert_eq!(args.output, "out.toml");
        assert_eq!(args.diagram.as_deref(), Some("Pets"));
        assert_eq!(
            args.specification,
            Some(SpecificationKind::ApplicationProfile)
        );
    }

    #[test]
    fn test_unknown_specification_is_rejected() {
        let result = Args::try_parse_from(["glossa", "model.toml", "-s", "Glossary"]);

        assert!(result.is_err());
    }
}
