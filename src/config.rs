use crate::error::{Result, TodoError};
use crate::task::parse_date;
use chrono::NaiveDate;
use clap::{Arg, ArgAction, Command};
use std::{fs::File, path::PathBuf};

#[derive(Debug, Default, Clone)]
pub struct Config {
    /// Pins "today" for past-due checks; the local clock is used otherwise.
    pub today: Option<NaiveDate>,
    pub log_file: Option<PathBuf>,
    pub print_on_exit: bool,
}

fn command() -> Command {
    Command::new("todoer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Terminal to-do list")
        .arg(
            Arg::new("today")
                .long("today")
                .value_name("mm/dd/yyyy")
                .help("Date used as today when flagging late tasks"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Write logs to this file (filtered by RUST_LOG)"),
        )
        .arg(
            Arg::new("print-on-exit")
                .long("print-on-exit")
                .action(ArgAction::SetTrue)
                .help("Print the remaining tasks as JSON when quitting"),
        )
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_args(std::env::args_os())
    }

    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = command().try_get_matches_from(args)?;

        let today = match matches.get_one::<String>("today") {
            Some(raw) => Some(parse_date(raw).ok_or_else(|| {
                TodoError::InvalidArgument(format!("--today {raw:?} is not mm/dd/yyyy"))
            })?),
            None => None,
        };

        Ok(Self {
            today,
            log_file: matches.get_one::<PathBuf>("log-file").cloned(),
            print_on_exit: matches.get_flag("print-on-exit"),
        })
    }
}

/// The terminal belongs to the UI, so logs only go to a file when one is given.
pub fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    log::info!("logging to {}", path.display());
    Ok(())
}
