//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and sets up logging
//! - parses CLI arguments
//! - reads the light curve and runs the accumulator
//! - prints the text or JSON report

use clap::Parser;

use crate::cli::Cli;
use crate::domain::{OutputFormat, RunConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `photmass` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    let config = run_config_from_args(&cli);

    log::info!("Starting photmass {} ...", env!("CARGO_PKG_VERSION"));
    let result = match config.format {
        OutputFormat::Text => handle_text(&config),
        OutputFormat::Json => handle_json(&config),
    };
    log::info!("Finishing photmass ...");

    result
}

/// Route `log` records to stderr. `RUST_LOG` overrides the default `warn`.
fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("warn");
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn handle_text(config: &RunConfig) -> Result<(), AppError> {
    let ingest = pipeline::ingest(config)?;

    if config.show_samples {
        print!("{}", crate::report::format_samples(&ingest.samples));
    }
    if config.plot {
        println!(
            "{}",
            crate::plot::render_light_curve(&ingest.samples, config.plot_width, config.plot_height)
        );
    }

    let trace = pipeline::compute(&ingest, |step| {
        if config.diagnostics {
            println!("{}", crate::report::format_diagnostic_line(step));
        }
    });

    let errors = crate::report::format_row_errors(&ingest.row_errors);
    if !errors.is_empty() {
        eprint!("{errors}");
    }

    print!("{}", crate::report::format_run_summary(&config.input, &ingest, &trace));
    Ok(())
}

fn handle_json(config: &RunConfig) -> Result<(), AppError> {
    let run = pipeline::run_mass(config)?;
    let report = crate::report::build_report(&config.input, &run.ingest, &run.trace);
    println!("{}", crate::report::report_to_json(&report)?);
    Ok(())
}

pub fn run_config_from_args(cli: &Cli) -> RunConfig {
    RunConfig {
        input: cli.input.clone(),
        format: cli.format,
        diagnostics: !cli.quiet,
        show_samples: cli.show_samples,
        plot: cli.plot,
        plot_width: cli.width,
        plot_height: cli.height,
    }
}
