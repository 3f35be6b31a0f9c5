//! Parses command line arguments, sets up logging and runs the
//! gate on the terminal, reading gamepad presses from stdin.
//!
//! Always exits with status 0, whatever happened, so the boot
//! chain this runs in can continue.
//!
//! Also provides CLI access to the screen and gamepad check.
use bootgate::{
    check::check_system,
    log::{init_logging, log_fatal},
    pace::ThreadPace,
    screens::TerminalSource,
    senses::keyboard_pad,
    App, Passage,
};
use clap::{self, crate_authors, crate_name, crate_version, Arg, ArgMatches, ErrorKind};
use log::{debug, info, warn};

fn main() {
    let matches = match cli().get_matches_safe() {
        Ok(matches) => Some(matches),
        Err(ref e)
            if e.kind == ErrorKind::HelpDisplayed || e.kind == ErrorKind::VersionDisplayed =>
        {
            e.exit()
        }
        Err(e) => {
            // logging is not up yet
            eprintln!("{}", e.message);
            eprintln!("Ignoring arguments, running the gate with defaults.");
            None
        }
    };

    let verbosity_level = match matches {
        Some(ref m) if m.is_present("quiet") => None,
        Some(ref m) => Some(m.occurrences_of("verbose")),
        None => Some(0),
    };
    init_logging(verbosity_level);

    match matches {
        Some(ref m) if m.is_present("check") => check(),
        Some(ref m) => gate(Some(m)),
        None => gate(None),
    }
}

fn cli<'a, 'b>() -> clap::App<'a, 'b> {
    clap::App::new(crate_name!())
        .version(crate_version!())
        .about("Passcode gate for the boot chain that never blocks it.")
        .author(crate_authors!())
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .takes_value(true)
                .value_name("FILE")
                .help("YAML file with gate timings")
                .long_help(
                    "Loads poll_period, timeout, verdict_hold and handoff_hold, \
                     in seconds, from a YAML file. If the file cannot be loaded, \
                     the defaults are used.",
                ),
        )
        .arg(
            Arg::with_name("check")
                .long("check")
                .help("Check screens and gamepad, then exit")
                .long_help(
                    "Shows a test pattern on both screens and reads the gamepad \
                     for one second instead of running the gate.",
                ),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("Silence warnings and errors")
                .long_help("Turn off logging completely, including warnings and errors."),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Verbose logging")
                .long_help(
                    "Print non-essential output with diagnostic information. \
                     Multiple occurrences increase logging verbosity. -vvv is the highest verbosity, \
                     printing trace information.",
                )
                .conflicts_with("quiet"),
        )
}

fn gate(matches: Option<&ArgMatches>) {
    let mut app = App::builder();

    if let Some(config_file) = matches.and_then(|m| m.value_of("config")) {
        app.config_file(config_file);
    }

    app.surfaces(TerminalSource)
        .pad(keyboard_pad())
        .pace(ThreadPace);

    debug!("initialization complete, starting gate");
    match app.build().run() {
        Passage::Gate(outcome) => info!("gate passed with outcome {:?}", outcome),
        Passage::Skipped => warn!("gate skipped"),
    }
}

fn check() {
    let mut pad = keyboard_pad();
    let result = check_system(&mut TerminalSource, &mut pad, &mut ThreadPace);

    if let Err(ref err) = result {
        log_fatal("System check", err);
    }
}
