use std::io;
use std::process::ExitCode;

use clap_complete::Shell;
use log::{error, info, LevelFilter};

use rename_headers::cli::build_cli;
use rename_headers::{run, RenameConfig};

fn init_logging(verbosity: u8) {
    let filter_level = match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    // Logs go to stderr, stdout may be carrying the output
    env_logger::builder()
        .filter_level(filter_level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let matches = build_cli().get_matches();
    init_logging(matches.get_count("verbose"));

    if let Some(shell) = matches.get_one::<Shell>("completions") {
        let mut cmd = build_cli();
        clap_complete::generate(*shell, &mut cmd, "rename_headers", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    let result = RenameConfig::from_matches(&matches).and_then(|config| run(&config));
    match result {
        Ok(summary) => {
            info!("{}", summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
