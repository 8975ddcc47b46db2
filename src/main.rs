// std imports
use std::{
    io::{self, BufWriter, Write, stdout},
    process,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use wmatch::{App, Options, cli, config, error::*, input::InputReference};

const WMATCH_DEBUG_LOG: &str = "WMATCH_DEBUG_LOG";
const WMATCH_DEBUG_LOG_STYLE: &str = "WMATCH_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(WMATCH_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(logger::Env::new().filter(WMATCH_DEBUG_LOG).write_style(WMATCH_DEBUG_LOG_STYLE))
            .format_timestamp_micros()
            .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn run() -> Result<bool> {
    bootstrap();

    let opt = cli::Opt::parse_from(wild::args());

    let (offset, no_default_configs) = opt
        .config
        .iter()
        .rposition(|x| x.is_empty() || x == "-")
        .map(|x| (x + 1, true))
        .unwrap_or_default();
    let settings = config::at(&opt.config[offset..]).no_default(no_default_configs).load()?;
    log::debug!("settings: {:?}", settings);

    let (patterns, files) = opt.patterns_and_files();
    let inputs: Vec<_> = if files.is_empty() {
        vec![InputReference::Stdin]
    } else {
        files.into_iter().map(InputReference::from_arg).collect()
    };

    let defaults = Options::from(&settings);
    let options = Options {
        mode: opt.mode.unwrap_or(defaults.mode),
        ignore_case: opt.ignore_case.unwrap_or(defaults.ignore_case),
        invert_match: opt.invert_match,
        count: opt.count,
        line_number: opt.line_number.unwrap_or(defaults.line_number),
        with_filename: !opt.no_filename && (opt.with_filename || inputs.len() > 1),
        quiet: opt.quiet,
        lossy: opt.lossy.unwrap_or(defaults.lossy),
        buffer_size: opt.buffer_size.unwrap_or(defaults.buffer_size),
        max_line_size: opt.max_line_size.unwrap_or(defaults.max_line_size),
    };

    let app = App::new(options, &patterns)?;
    let mut output = BufWriter::new(stdout().lock());
    let summary = app.run(&inputs, &mut output)?;
    output.flush()?;

    for err in &summary.errors {
        eprintln!("error: {}", err);
    }
    if !summary.errors.is_empty() && !(opt.quiet && summary.selected != 0) {
        process::exit(2);
    }

    Ok(summary.selected != 0)
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(Error::Io(err)) if err.kind() == io::ErrorKind::BrokenPipe => {}
        Err(err) => {
            log::debug!("{:?}", err);
            eprintln!("error: {}", err);
            process::exit(2);
        }
    }
}
