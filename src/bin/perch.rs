extern crate perch as lib;

use flexi_logger::{FileSpec, Logger};
use lib::calendar::CalendarView;
use lib::events::Dispatcher;
use lib::search::detect_direction;
use lib::ui::{render_plain, App, Theme};
use nix::sys::{signal, termios};
use std::io::{stdout, Write};
use std::path::PathBuf;
use structopt::StructOpt;
use unsegen::base::Terminal;

#[derive(Debug, StructOpt)]
#[structopt(name = "perch", about = "perch - a terminal start page with a month calendar.")]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(
        short = "s",
        long = "show",
        help = "only print the current month non-interactively"
    )]
    pub show: bool,

    #[structopt(long = "search", help = "print the search url for a query and exit")]
    pub search: Option<String>,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

// xterm button-press reporting in SGR encoding
const ENABLE_MOUSE: &str = "\x1b[?1000h\x1b[?1006h";
const DISABLE_MOUSE: &str = "\x1b[?1006l\x1b[?1000l";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    let _logger = logger.start()?;

    let config = lib::config::load_suitable_config(args.configfile.as_deref())?;

    if let Some(query) = args.search {
        let direction = detect_direction(&query, &config.search_placeholder);
        match config.search_engine.submit(&query) {
            Some(url) => println!("{} [{}]", url, direction.as_str()),
            None => log::warn!("Refusing to search for an empty query"),
        }
        return Ok(());
    }

    let view = CalendarView::default();

    if args.show {
        println!("{}", render_plain(view.grid(), &Theme::from_config(&config)));
        return Ok(());
    }

    const TTY_FD: std::os::unix::io::RawFd = 0;
    let orig_attr = std::sync::Mutex::new(termios::tcgetattr(TTY_FD)?);

    std::panic::set_hook(Box::new(move |info| {
        // Switch to main terminal screen
        println!(
            "{}{}{}",
            DISABLE_MOUSE,
            termion::screen::ToMainScreen,
            termion::cursor::Show
        );

        if let Ok(attr) = orig_attr.lock() {
            let _ = termios::tcsetattr(TTY_FD, termios::SetArg::TCSANOW, &attr);
        }

        println!("perch ran into a fatal error!");
        println!(
            "Consider filing an issue with a log file and the backtrace below at {}",
            env!("CARGO_PKG_REPOSITORY")
        );

        println!("{}", info);
        println!("{:?}", backtrace::Backtrace::new());
    }));

    let mut signals_to_wait = signal::SigSet::empty();
    signals_to_wait.add(signal::SIGWINCH);
    signals_to_wait.thread_block()?;

    let dispatcher = Dispatcher::new(signals_to_wait);

    let stdout = stdout();
    {
        let mut out = stdout.lock();
        write!(out, "{}", ENABLE_MOUSE)?;
        out.flush()?;
    }

    let term = Terminal::new(stdout.lock())?;

    let mut app = App::new(&config, view);
    let result = app.run(dispatcher, term);

    let mut out = stdout.lock();
    write!(out, "{}", DISABLE_MOUSE)?;
    out.flush()?;

    result
}
