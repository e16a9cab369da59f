//! termdraw - paint on the terminal with h/j/k/l
//!
//! # Usage
//!
//! ```bash
//! # 80x40 canvas, full redraw on every key
//! termdraw
//!
//! # Paint only the cells the cursor visits
//! termdraw --mode delta
//!
//! # Settings from a file, logging to a file
//! termdraw --config termdraw.json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use termdraw::app::{self, Config};
use termdraw::RenderMode;

/// Command-line arguments
#[derive(Default)]
struct Args {
    /// Configuration file
    config: Option<PathBuf>,
    /// Canvas columns override
    cols: Option<usize>,
    /// Canvas rows override
    rows: Option<usize>,
    /// Render mode override
    mode: Option<RenderMode>,
    /// Show help
    help: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    let mut argv = std::env::args().skip(1);

    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                args.help = true;
            },
            "--config" => {
                let path = argv.next().ok_or("--config needs a path")?;
                args.config = Some(PathBuf::from(path));
            },
            "-c" | "--cols" => {
                args.cols = Some(parse_number(&arg, argv.next())?);
            },
            "-r" | "--rows" => {
                args.rows = Some(parse_number(&arg, argv.next())?);
            },
            "-m" | "--mode" => {
                let mode = argv.next().ok_or("--mode needs a value")?;
                args.mode = Some(mode.parse()?);
            },
            other => return Err(format!("unknown argument '{}'", other)),
        }
    }

    Ok(args)
}

fn parse_number(flag: &str, value: Option<String>) -> Result<usize, String> {
    let value = value.ok_or_else(|| format!("{} needs a value", flag))?;
    value
        .parse()
        .map_err(|_| format!("{} expects a number, got '{}'", flag, value))
}

fn print_help() {
    eprintln!(
        r#"termdraw - paint on the terminal

USAGE:
    termdraw [OPTIONS]

KEYS:
    h j k l                 Move left, down, up, right
    any other key           Paint the canvas with that key
    Ctrl-C, Ctrl-\          Quit and restore the terminal

OPTIONS:
    -h, --help              Show this help message
        --config <FILE>     Load settings from a JSON file
    -c, --cols <N>          Canvas columns (default: 80)
    -r, --rows <N>          Canvas rows (default: 40)
    -m, --mode <MODE>       fill, buffer or delta (default: fill)

ENVIRONMENT:
    TERMDRAW_LOG            Log filter, e.g. "termdraw=debug"
"#
    );
}

fn load_config(args: &Args) -> Result<Config, app::ConfigError> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(cols) = args.cols {
        config.screen.columns = cols;
    }
    if let Some(rows) = args.rows {
        config.screen.rows = rows;
    }
    if let Some(mode) = args.mode {
        config.render_mode = mode;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("termdraw: {}", e);
            print_help();
            return ExitCode::FAILURE;
        },
    };

    if args.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("termdraw: {}", e);
            return ExitCode::FAILURE;
        },
    };

    if let Err(e) = app::logging::init(&config.log) {
        eprintln!("termdraw: {}", e);
        return ExitCode::FAILURE;
    }

    tracing::info!("Starting termdraw");

    match app::run(&config) {
        Ok(reason) => {
            tracing::info!(?reason, "Exiting");
            ExitCode::SUCCESS
        },
        Err(e) => {
            app::logging::report(&config.log, &format!("Fatal error: {}", e));
            ExitCode::FAILURE
        },
    }
}
