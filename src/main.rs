//! nbstripout - strip outputs and metadata from Jupyter notebooks
//!
//! With file arguments each notebook is cleaned in place (or printed with
//! `--textconv`). Without file arguments one notebook is read from standard
//! input and the cleaned result is written to standard output.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueEnum};
use nbstrip::{
    CleanConfig, ConfigFile, Logger, Pipeline, ProcessingConfig, RemoveOptions, Result,
};
use std::path::PathBuf;
use std::process;
use tracing::{debug, error, warn};

mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    /// Error messages only
    Error,
    /// Warning and error messages (default)
    Warn,
    /// Info, warning, and error messages
    Info,
    /// Debug and all messages
    Debug,
    /// Trace and all messages (most verbose)
    Trace,
}

impl LogLevel {
    fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

fn main() {
    let matches = build_cli().get_matches();

    let log_level = if matches.get_flag("quiet") {
        LogLevel::Error
    } else {
        matches
            .get_one::<LogLevel>("verbose")
            .copied()
            .unwrap_or(LogLevel::Warn)
    };
    init_logging(log_level);

    let config = match build_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            process::exit(exit_codes::FAILURE);
        }
    };
    debug!("Effective configuration: {:?}", config);

    let pipeline = Pipeline::new(config);
    let code = match pipeline.run() {
        Ok(summary) if summary.is_success() => exit_codes::SUCCESS,
        Ok(summary) => {
            warn!("{} file(s) failed to process", summary.failed);
            exit_codes::FAILURE
        }
        Err(e) => {
            error!("{}", e);
            exit_codes::FAILURE
        }
    };

    process::exit(code);
}

fn build_cli() -> Command {
    Command::new("nbstripout")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Strip out non-source cells and metadata from Jupyter notebooks")
        .long_about(
            "Strip out non-source cells and metadata from Jupyter notebooks. \
             When none of --outputs, --execution-count or --colab is given, all of them apply. \
             Without file arguments a notebook is read from standard input and the result \
             is written to standard output.",
        )
        .arg(
            Arg::new("files")
                .value_name("FILE")
                .num_args(0..)
                .value_parser(clap::value_parser!(PathBuf))
                .help("File paths to Jupyter notebooks"),
        )
        .arg(
            Arg::new("textconv")
                .short('t')
                .long("textconv")
                .action(ArgAction::SetTrue)
                .help("Print the result to standard output instead of overwriting the file"),
        )
        .arg(
            Arg::new("outputs")
                .short('o')
                .long("outputs")
                .action(ArgAction::SetTrue)
                .help("Remove outputs fields"),
        )
        .arg(
            Arg::new("execution-count")
                .short('e')
                .long("execution-count")
                .action(ArgAction::SetTrue)
                .help("Remove execution count fields"),
        )
        .arg(
            Arg::new("colab")
                .short('c')
                .long("colab")
                .action(ArgAction::SetTrue)
                .help("Remove colab related fields"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Configuration file (JSON/YAML)"),
        )
        .arg(
            Arg::new("backup")
                .short('b')
                .long("backup")
                .action(ArgAction::SetTrue)
                .help("Create a .backup copy of each file before overwriting it"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help("Report which files would change without writing anything"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .value_parser(clap::value_parser!(LogLevel))
                .default_value("warn")
                .help("Set logging verbosity"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose")
                .help("Suppress all output except errors"),
        )
}

fn init_logging(level: LogLevel) {
    let mut logger = Logger::with_level(level.as_filter());
    logger.init();
}

/// Config file first, then command-line flags on top of it.
fn build_config(matches: &ArgMatches) -> Result<ProcessingConfig> {
    let file_config = match matches.get_one::<PathBuf>("config") {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };

    let mut requested = file_config.requested();
    for (flag, option) in [
        ("outputs", RemoveOptions::OUTPUTS),
        ("execution-count", RemoveOptions::EXECUTION_COUNT),
        ("colab", RemoveOptions::COLAB),
    ] {
        if matches.get_flag(flag) {
            requested.insert(option);
        }
    }

    let paths = matches
        .get_many::<PathBuf>("files")
        .map(|files| files.cloned().collect())
        .unwrap_or_default();

    Ok(ProcessingConfig {
        paths,
        text_convert: file_config.textconv || matches.get_flag("textconv"),
        backup: file_config.backup || matches.get_flag("backup"),
        dry_run: matches.get_flag("dry-run"),
        clean: CleanConfig::from_requested(requested),
    })
}
