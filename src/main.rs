mod cli;
mod settings;
mod workflow;

use std::process::ExitCode;

use anyhow::Result;
use cli::{parse_cli, print_history, print_outcome};
use scour::app_dirs;
use scour::logging::{self, LogTarget};
use workflow::ResearchWorkflow;

fn main() -> Result<ExitCode> {
    let cli = parse_cli();
    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    let workflow = ResearchWorkflow::from_config(resolved);

    if cli.history {
        logging::initialize(LogTarget::Stderr)?;
        print_history(&workflow.history(), cli.output)?;
        return Ok(ExitCode::SUCCESS);
    }

    if cli.batch {
        logging::initialize(LogTarget::Stderr)?;
        let outcome = workflow.run_batch()?;
        print_outcome(&outcome, cli.output)?;
        return Ok(if outcome.error.is_some() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        });
    }

    initialize_file_logging();
    workflow.run_interactive()?;
    Ok(ExitCode::SUCCESS)
}

/// Route logs to the data directory; the terminal belongs to the UI.
fn initialize_file_logging() {
    let target = match app_dirs::get_data_dir() {
        Ok(dir) => LogTarget::File(dir.join(app_dirs::LOG_FILE_NAME)),
        Err(err) => {
            eprintln!("scour: logging disabled: {err:#}");
            return;
        }
    };
    if let Err(err) = logging::initialize(target) {
        eprintln!("scour: logging disabled: {err:#}");
    }
}
