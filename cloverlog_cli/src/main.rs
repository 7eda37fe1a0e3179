mod cli;
mod commands;
mod error_fmt;

use clap::Parser;
use cloverlog_core::CallerInfo;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::WriteArgs;

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> eyre::Result<()> {
    let cfg = commands::load_config(cli.config.as_deref());
    match cli.cmd {
        Commands::Write {
            tag,
            args,
            file,
            separator,
            caller_file,
            caller_function,
            caller_line,
        } => commands::write(
            cfg,
            WriteArgs {
                tag,
                args,
                file,
                separator,
                caller: CallerInfo::new(caller_file, caller_function, caller_line),
            },
        ),
        Commands::Config { json } => {
            println!("{}", commands::show_config(&cfg, json)?);
            Ok(())
        }
    }
}

fn main() {
    let _ = color_eyre::install();
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    if let Err(e) = run(cli) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("{}", error_fmt::humanize(&e));
        std::process::exit(error_fmt::exit_code_for_error(&e));
    }
}
