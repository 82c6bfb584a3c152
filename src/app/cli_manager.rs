use super::{command::Command, writable_string::WritableString};
use anyhow::{anyhow, Result};
use clap::{App, AppSettings, Arg};
use log::{error, info};
use std::{ffi::OsString, str::FromStr, sync::Once, time::SystemTime};
use sysinfo::System;

static LOGGER_INIT: Once = Once::new();

/// The main struct used to build the app.
///
/// This helper should be used this way:
/// 1. create a new instance of this helper,
/// 2. add the commands of the app,
/// 3. call [`launch_app`](Self::launch_app).
///
/// Calling [`launch_app`](Self::launch_app) is probably the last thing you do in your app.
/// It initializes the logger, reads the CLI arguments, and executes the right command.
/// If an error is returned by a command, the error stack is displayed and a status of 1 is returned to the system.
pub(crate) struct AppHelper<'a> {
    app_name: &'a str,
    version: &'a str,
    author: &'a str,
    about: &'a str,
    commands: Vec<Box<dyn Command<'a>>>,
}

const LOGGING_LEVEL_ARG: &str = "LOGGING_LEVEL";

/// Returns the CLI argument used to set the logging level.
///
/// This argument must be added to each subcommand of the app.
pub(crate) fn logging_level_cli_arg<'a>() -> Arg<'a, 'a> {
    Arg::with_name(LOGGING_LEVEL_ARG)
        .long("logging-level")
        .multiple(false)
        .default_value("info")
        .possible_values(&["trace", "debug", "info", "warn", "error", "off"])
        .help("set the minimal logging level")
}

impl<'a> AppHelper<'a> {
    /// Creates a new instance of the helper given the app metadata.
    pub fn new(app_name: &'a str, version: &'a str, author: &'a str, about: &'a str) -> Self {
        AppHelper {
            app_name,
            version,
            author,
            about,
            commands: vec![],
        }
    }

    /// Adds a new command to the app. See [`Command`] for more information.
    pub fn add_command(&mut self, command: Box<dyn Command<'a>>) {
        self.commands.push(command);
    }

    /// Launches the application, reading the CLI arguments from `std::env::args_os()`.
    ///
    /// This function consumes the helper.
    pub fn launch_app(self) {
        if let Err(e) = self.execute_app(std::env::args_os()) {
            error!("an error occurred: {}", e);
            e.chain()
                .skip(1)
                .for_each(|err| error!("caused by: {}", err));
            std::process::exit(1);
        }
    }

    fn execute_app<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let start_time = SystemTime::now();
        let result = self.parse_cli(args);
        if result.is_ok() {
            info!(
                "exiting successfully after {:?}",
                start_time.elapsed().unwrap_or_default()
            );
        }
        result
    }

    fn parse_cli<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<T> = args.into_iter().collect();
        let mut app = App::new(self.app_name)
            .global_setting(AppSettings::DisableVersion)
            .global_setting(AppSettings::VersionlessSubcommands)
            .setting(AppSettings::NeedsSubcommandHelp)
            .setting(AppSettings::SubcommandRequired)
            .version(self.version)
            .author(self.author)
            .about(self.about);
        for c in self.commands.iter() {
            app = app.subcommand(c.clap_subcommand());
        }
        let matches_result = app.clone().get_matches_from_safe(args.clone());
        match matches_result {
            Ok(matches) => {
                for c in self.commands.iter() {
                    if let Some(matches) = matches.subcommand_matches(c.name()) {
                        let log_level = matches
                            .value_of(LOGGING_LEVEL_ARG)
                            .and_then(|s| log::LevelFilter::from_str(s).ok())
                            .unwrap_or(log::LevelFilter::Info);
                        init_logger_with_level(log_level);
                        info!("{} {}", self.app_name, self.version);
                        sys_info();
                        return c.execute(matches);
                    }
                }
                unreachable!()
            }
            Err(clap::Error {
                kind: clap::ErrorKind::HelpDisplayed,
                ..
            }) => {
                init_logger();
                self.print_help(&mut app, args.as_slice());
                Ok(())
            }
            Err(e) => {
                init_logger();
                info!("{} {}", self.app_name, self.version);
                Err(anyhow!("{}", e))
            }
        }
    }

    fn print_help<T>(&self, app: &mut App, args: &[T])
    where
        T: Into<OsString> + Clone,
    {
        const HELP_STRINGS: [&str; 3] = ["help", "-h", "--help"];
        fn print_message(message: WritableString) {
            message.to_string().split('\n').for_each(|s| info!("{}", s));
            info!("");
        }
        fn search_subcommand(commands: &[Box<dyn Command>], subcommand_arg: &str) -> bool {
            for c in commands.iter() {
                if c.name() == subcommand_arg {
                    let mut message = WritableString::default();
                    let _ = c.clap_subcommand().write_long_help(&mut message);
                    print_message(message);
                    return true;
                }
            }
            false
        }
        if args.len() >= 2 {
            let arg1 = args[1].clone().into().into_string().unwrap_or_default();
            if !HELP_STRINGS.contains(&arg1.as_str()) && search_subcommand(&self.commands, &arg1) {
                return;
            }
            if args.len() >= 3 && HELP_STRINGS.contains(&arg1.as_str()) {
                let arg2 = args[2].clone().into().into_string().unwrap_or_default();
                if search_subcommand(&self.commands, &arg2) {
                    return;
                }
            }
        }
        let mut message = WritableString::default();
        let _ = app.write_long_help(&mut message);
        print_message(message);
    }
}

fn init_logger() {
    init_logger_with_level(log::LevelFilter::Info)
}

fn init_logger_with_level(level: log::LevelFilter) {
    LOGGER_INIT.call_once(|| {
        let colors = fern::colors::ColoredLevelConfig::new().info(fern::colors::Color::Cyan);
        fern::Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "![{:5}] {} {}",
                    colors.color(record.level()),
                    chrono::Local::now().format("[%Y-%m-%d %H:%M:%S]"),
                    message
                ))
            })
            .level(level)
            .chain(std::io::stdout())
            .apply()
            .unwrap_or(());
    });
}

fn sys_info() {
    info!("----------------------------------------");
    let sys = System::new_all();
    let unknown = || "[unknown]".to_string();
    info!("running on {}", System::host_name().unwrap_or_else(unknown));
    info!(
        "OS is {} {} with kernel {}",
        System::name().unwrap_or_else(unknown),
        System::os_version().unwrap_or_else(unknown),
        System::kernel_version().unwrap_or_else(unknown)
    );
    let mut cpu_kinds: Vec<&str> = sys.cpus().iter().map(|c| c.brand()).collect();
    cpu_kinds.sort_unstable();
    cpu_kinds.dedup();
    info!(
        "physical core count: {} {:?}",
        sys.physical_core_count()
            .map(|n| n.to_string())
            .unwrap_or_else(unknown),
        cpu_kinds
    );
    info!("total memory: {} bytes", sys.total_memory());
    info!("----------------------------------------");
}
