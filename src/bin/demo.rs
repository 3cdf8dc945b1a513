//! Argument handling and the logging run behind `emolog-demo`.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;
use std::thread;

use clap::{Arg, ArgAction, Command, error::ErrorKind, value_parser};
use emolog::LogLevel;

const PROGRAM_NAME: &str = "emolog-demo";
const DEFAULT_MESSAGE: &str = "hello from emolog";

/// Options accepted by `emolog-demo`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct DemoArgs {
    pub(crate) message: String,
    pub(crate) levels: Vec<LogLevel>,
    pub(crate) threads: u16,
}

fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .about("Prints one emolog record per selected level (debug builds only).")
        .arg(
            Arg::new("message")
                .long("message")
                .short('m')
                .value_name("TEXT")
                .help("Message text to log.")
                .default_value(DEFAULT_MESSAGE),
        )
        .arg(
            Arg::new("level")
                .long("level")
                .short('l')
                .value_name("LEVEL")
                .help("Level to log (name or letter); repeatable. Defaults to all levels.")
                .action(ArgAction::Append)
                .value_parser(|text: &str| text.parse::<LogLevel>()),
        )
        .arg(
            Arg::new("threads")
                .long("threads")
                .short('j')
                .value_name("N")
                .help("Number of threads logging concurrently.")
                .default_value("1")
                .value_parser(value_parser!(u16).range(1..=256)),
        )
}

pub(crate) fn parse_args<I, S>(arguments: I) -> Result<DemoArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();
    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let message = matches
        .remove_one::<String>("message")
        .unwrap_or_else(|| DEFAULT_MESSAGE.to_owned());
    let levels = matches
        .remove_many::<LogLevel>("level")
        .map(Iterator::collect)
        .unwrap_or_else(|| LogLevel::ALL.to_vec());
    let threads = matches.remove_one::<u16>("threads").unwrap_or(1);

    Ok(DemoArgs {
        message,
        levels,
        threads,
    })
}

fn log_levels(levels: &[LogLevel], message: &str) {
    for &level in levels {
        emolog::log!(level, "{}", message);
    }
}

/// Logs every selected level, once per thread.
pub(crate) fn run(args: &DemoArgs) {
    if args.threads <= 1 {
        log_levels(&args.levels, &args.message);
        return;
    }

    // Resolve the local offset while the process is still single-threaded.
    let _ = emolog::local_offset();

    thread::scope(|scope| {
        for worker in 0..args.threads {
            let message = format!("{} #{worker}", args.message);
            let levels = &args.levels;
            scope.spawn(move || log_levels(levels, &message));
        }
    });
}

/// Parses `arguments`, runs the demo, and maps the outcome to an exit code.
pub(crate) fn run_with<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    match parse_args(arguments) {
        Ok(args) => {
            run(&args);
            ExitCode::SUCCESS
        }
        Err(error) if matches!(error.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = write!(stdout, "{}", error.render());
            ExitCode::SUCCESS
        }
        Err(error) => {
            let _ = write!(stderr, "{}", error.render());
            ExitCode::FAILURE
        }
    }
}
