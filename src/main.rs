use clap::error::ErrorKind;
use scaffold_bootstrap::{cli, logging, run, BootstrapConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    let matches = match cli::build_cli().try_get_matches() {
        Ok(m) => m,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                // Usage errors, including a wrong number of arguments
                e.print().ok();
                return ExitCode::from(1);
            }
        },
    };

    logging::init_logger(matches.get_flag("verbose"));

    let config = BootstrapConfig::from_matches(&matches);
    match run(&config) {
        Ok(summary) => {
            log::info!(
                "Wrote {} replicates to {}",
                summary.replicates.len(),
                config.output_dir.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
