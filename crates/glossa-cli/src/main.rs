//! Glossa CLI entry point.

use std::{fmt::Write as _, process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};
use miette::GraphicalReportHandler;

use glossa_cli::{
    Args,
    error_adapter::{Reportable, error_reportables, to_reportables},
};

fn render(reporter: &GraphicalReportHandler, reportable: &Reportable<'_>) -> String {
    let mut writer = String::new();
    if reporter.render_report(&mut writer, reportable).is_err() {
        // Fall back to the plain message
        writer.clear();
        let _ = write!(writer, "{reportable}");
    }
    writer
}

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Glossa");
    debug!(args:?; "Parsed arguments");

    let reporter = GraphicalReportHandler::new();

    match glossa_cli::run(&args) {
        Ok(conversion) => {
            for reportable in error_reportables(conversion.diagnostics()) {
                error!("{}", render(&reporter, &reportable));
            }
            info!("Completed successfully");
        }
        Err(err) => {
            // Render each diagnostic independently
            for reportable in to_reportables(&err) {
                error!("{}", render(&reporter, &reportable));
            }

            process::exit(1);
        }
    }
}
