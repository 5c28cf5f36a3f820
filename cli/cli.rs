use htmlpack_core::{CliArgs, Command as CoreCommand, CoreError, RunSummary, run};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use console::style;
use std::io::{self, Write};
use std::process::ExitCode;

fn print_completions_cli(shell: clap_complete::Shell) {
    let mut cmd = CliArgs::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
}

fn init_logger(verbose: bool) {
    use env_logger::Env;
    let env = Env::default()
        .filter_or("RUST_LOG", if verbose { "info" } else { "warn" })
        .write_style("RUST_LOG_STYLE");

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();
}

fn report_failures(summary: &RunSummary) {
    let mut failure_count = 0;
    for result in summary.failures() {
        eprintln!(
            "  {} Failed: {} - {}",
            style("⚠️").yellow(),
            style(result.path.display()).dim(),
            style(result.error.as_deref().unwrap_or_default()).red()
        );
        failure_count += 1;
    }
    eprintln!(
        "Result: {} of {} {} failed.",
        style(failure_count).red(),
        summary.processed(),
        if summary.processed() == 1 { "file" } else { "files" }
    );
}

fn main() -> Result<ExitCode> {
    let cli: CliArgs = CliArgs::parse();

    if let Some(command_enum_val) = cli.command {
        match command_enum_val {
            CoreCommand::Completion(args) => {
                print_completions_cli(args.shell);
                return Ok(ExitCode::SUCCESS);
            }
        }
    }

    let config = cli
        .main_opts
        .to_config()
        .context("A path to a file or folder is required")?;
    init_logger(config.verbose);
    log::debug!("Resolved configuration: {:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = match run(&config, &mut out) {
        Ok(summary) => summary,
        Err(e @ CoreError::InvalidPath(_)) => {
            eprintln!("{}", style(e).red());
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => {
            eprintln!("{}", style(format!("Error: {}", e)).red());
            return Ok(ExitCode::FAILURE);
        }
    };
    out.flush()?;

    if summary.has_failures() {
        report_failures(&summary);
        return Ok(ExitCode::FAILURE);
    }
    log::info!(
        "Processed {} files, rewrote {}",
        summary.processed(),
        summary.modified()
    );
    Ok(ExitCode::SUCCESS)
}
