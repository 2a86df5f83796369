//! CLI module for wikitoc

mod args;

pub use args::{Args, Command};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::synthesize::{SynthesisReport, Synthesizer};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Run the CLI application
pub async fn run() -> ExitCode {
    let args = Args::parse_args();
    init_tracing(args.verbose());

    match execute(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the default filter
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "wikitoc=debug" } else { "wikitoc=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn execute(args: Args) -> Result<()> {
    match args.command {
        Command::Write {
            directory,
            config,
            home_file,
            exclude,
            dry_run,
            json,
            verbose,
        } => {
            // An explicit config file must load; the default one is optional
            let mut cfg = match &config {
                Some(config_path) => Config::load(config_path)?,
                None => Config::load_or_default(Path::new("wikitoc.toml")),
            };
            cfg.merge_cli(home_file, exclude, dry_run);

            if verbose {
                println!("Directory: {}", directory.display());
                println!("Home file: {}", cfg.scan.home_file);
                println!("Excluded root folders: {:?}", cfg.scan.excluded_root_folders);
                println!("Dry run: {}", cfg.dry_run);
            }

            let synthesizer = Synthesizer::new(cfg)?;
            let report = synthesizer.run(&directory).await?;

            print_report(&report, json)?;

            if !report.is_success() {
                return Err(Error::other(format!(
                    "{} home file(s) could not be written",
                    report.failed_writes.len()
                )));
            }

            Ok(())
        }

        Command::Version => {
            println!("wikitoc {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn print_report(report: &SynthesisReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    for page in &report.rendered {
        println!("==> {} <==", page.path.display());
        println!("{}", page.content);
        println!();
    }

    for issue in &report.scan_issues {
        println!("  skipped {}", issue);
    }
    for failed in &report.failed_writes {
        println!("  failed {}: {}", failed.path.display(), failed.message);
    }

    println!("{}", report.summary());
    Ok(())
}
