use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use piece_moves::{config, monitoring, report};

use monitoring::{logger, version};

/// Prints the direction labels walked by a rook, a bishop, a queen and a
/// knight for the step counts fixed at build time.
#[derive(Debug, Parser)]
#[command(name = "piece_moves", version = version::LONG_VERSION, about)]
struct Args {
    /// Log filter, e.g. `debug` or `piece_moves=trace`
    #[arg(long, default_value = logger::DEFAULT_LEVEL)]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug)]
enum Invocation {
    /// `--help` or `--version`: clap renders the text, nothing else runs.
    Display(clap::Error),
    /// Print the blocks. Arguments clap rejected are reported in `ignored`
    /// and the default log settings are used.
    Render {
        log_conf: logger::LogConf,
        ignored: Option<clap::Error>,
    },
}

fn invocation<I, T>(argv: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(argv) {
        Ok(args) => Invocation::Render {
            log_conf: logger::LogConf::new(args.log_level, args.log_file),
            ignored: None,
        },
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Invocation::Display(err)
        }
        Err(err) => Invocation::Render {
            log_conf: logger::LogConf::default(),
            ignored: Some(err),
        },
    }
}

fn main() -> ExitCode {
    let (log_conf, ignored) = match invocation(std::env::args_os()) {
        Invocation::Display(info) => {
            let _ = info.print();
            return ExitCode::SUCCESS;
        }
        Invocation::Render { log_conf, ignored } => (log_conf, ignored),
    };
    // keeps the file writer alive until the end of main
    let _guard = match logger::init(&log_conf) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("{}", err);
            None
        }
    };
    if let Some(err) = ignored {
        tracing::warn!("ignoring command line: {}", err.kind());
    }
    tracing::debug!(version = version::LONG_VERSION, "starting");

    let configuration = config::Configuration::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = report::render(&configuration, &mut out) {
        tracing::error!("{}", err);
    }
    ExitCode::SUCCESS
}
