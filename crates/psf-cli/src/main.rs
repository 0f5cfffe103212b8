//! PSF loader CLI.

use clap::Parser;

use psf_cli::cli::{Cli, Command, LogFormatArg};
use psf_cli::commands::{run_check, run_etl};
use psf_cli::logging::{LogFormat, init_logging};
use psf_cli::summary::{print_check_summary, print_run_summary};

fn main() {
    let cli = Cli::parse();
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Json => LogFormat::Json,
    };
    init_logging(cli.verbosity.tracing_level_filter(), format);

    let exit_code = match cli.command {
        Command::Run(args) => match run_etl(&args) {
            Ok(summary) => {
                print_run_summary(&summary);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Check(args) => match run_check(&args) {
            Ok(summary) => {
                let found_issues = !summary.issues.is_empty();
                print_check_summary(&summary);
                i32::from(found_issues)
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                2
            }
        },
    };
    std::process::exit(exit_code);
}
