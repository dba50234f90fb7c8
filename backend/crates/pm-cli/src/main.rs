//! pm-bcf - BCF export CLI
//!
//! Builds BCF (BIM Collaboration Format) packages from a JSON dataset of
//! projects and issues and stores them as attachments of the project wiki.
//!
//! # Examples
//!
//! ```bash
//! # Export every issue in the dataset
//! pm-bcf --data dataset.json export --name handover --author me@example.com
//!
//! # Export two issues without saving newly allocated GUIDs
//! pm-bcf export -n review -a me@example.com -i 12 -i 7 --no-write-back
//!
//! # List topics of project 1
//! pm-bcf topics --project 1 --pretty
//! ```

use pm_cli::{
    Cli, CliResult, Commands, ExportRequest, render_json, run_export, run_projects, run_topics,
};

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pm_config::Config;
use serde::Serialize;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config = Config::load()?;
    config.validate()?;

    pm_cli::logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;
    config.log_summary();

    match cli.command {
        Commands::Export {
            name,
            author,
            issues,
            no_write_back,
        } => {
            let request = ExportRequest {
                data: cli.data,
                name,
                author,
                issue_ids: issues,
                write_back: !no_write_back,
            };
            let report = run_export(&config.bcf, &config.output_dir()?, &request)?;
            print_json(&report, cli.pretty)
        }
        Commands::Topics {
            project,
            type_name,
            no_write_back,
        } => {
            let topics = run_topics(
                &config.bcf,
                &cli.data,
                project,
                type_name.as_deref(),
                !no_write_back,
            )?;
            print_json(&topics, cli.pretty)
        }
        Commands::Projects => print_json(&run_projects(&cli.data)?, cli.pretty),
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> CliResult<()> {
    println!("{}", render_json(value, pretty)?);
    Ok(())
}
