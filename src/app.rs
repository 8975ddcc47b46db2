// std imports
use std::{
    borrow::Cow,
    io::{BufRead, Write},
    num::NonZeroUsize,
};

// third-party imports
use wildcard::{narrow, wide};

// local imports
use crate::{
    error::{Error, Result},
    input::InputReference,
    lines::LineReader,
    settings::{Mode, Settings},
};

// ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub mode: Mode,
    pub ignore_case: bool,
    pub invert_match: bool,
    pub count: bool,
    pub line_number: bool,
    pub with_filename: bool,
    pub quiet: bool,
    pub lossy: bool,
    pub buffer_size: NonZeroUsize,
    pub max_line_size: NonZeroUsize,
}

impl From<&Settings> for Options {
    fn from(settings: &Settings) -> Self {
        Self {
            mode: settings.mode,
            ignore_case: settings.ignore_case,
            invert_match: false,
            count: false,
            line_number: settings.line_number,
            with_filename: false,
            quiet: false,
            lossy: settings.lossy,
            buffer_size: settings.buffer_size.into(),
            max_line_size: settings.max_line_size.into(),
        }
    }
}

// ---

/// Result of processing all inputs.
#[derive(Debug, Default)]
pub struct Summary {
    /// Number of selected lines over all inputs.
    pub selected: u64,
    /// Errors of inputs that failed to open or read, processing continues with the next input.
    pub errors: Vec<Error>,
}

// ---

#[derive(Debug)]
pub struct App {
    options: Options,
    matcher: Matcher,
}

impl App {
    pub fn new<S: AsRef<str>>(options: Options, patterns: &[S]) -> Result<Self> {
        if patterns.is_empty() {
            return Err(Error::NoPatterns);
        }

        let matcher = Matcher::new(options.mode, patterns, options.ignore_case);
        log::debug!("{} pattern(s) in {:?} mode", patterns.len(), options.mode);

        Ok(Self { options, matcher })
    }

    pub fn run(&self, inputs: &[InputReference], output: &mut dyn Write) -> Result<Summary> {
        let mut summary = Summary::default();

        for reference in inputs {
            let input = match reference.open() {
                Ok(input) => input,
                Err(err) => {
                    summary.errors.push(err.into());
                    continue;
                }
            };

            let mut lines = input.lines(self.options.buffer_size, self.options.max_line_size);
            let name = reference.name();
            match self.process(&mut lines, &name, output) {
                Ok(selected) => {
                    log::debug!("{}: {} line(s) selected", reference.description(), selected);
                    summary.selected += selected;
                }
                Err(Error::Io(err)) if err.kind() == std::io::ErrorKind::BrokenPipe => return Err(err.into()),
                Err(err) => summary.errors.push(err),
            }

            if self.options.quiet && summary.selected != 0 {
                break;
            }
        }

        Ok(summary)
    }

    /// Processes lines of a single input and returns the number of selected lines.
    pub fn process<R: BufRead>(&self, lines: &mut LineReader<R>, name: &str, output: &mut dyn Write) -> Result<u64> {
        let mut scratch = Scratch::default();
        let mut selected = 0;
        let mut number = lines.line_number();
        let source = lines.name().to_owned();

        while let Some(line) = lines.next_line()? {
            number += 1;

            let matched = match &self.matcher {
                Matcher::Narrow(patterns) => {
                    let text = scratch.narrow(line, self.options.ignore_case);
                    patterns.iter().any(|p| narrow::matches(p, text))
                }
                Matcher::Wide(patterns) => {
                    let text = match std::str::from_utf8(line) {
                        Ok(text) => Cow::Borrowed(text),
                        Err(_) if self.options.lossy => {
                            log::warn!("{}: line {} is not valid utf-8", source, number);
                            String::from_utf8_lossy(line)
                        }
                        Err(_) => {
                            return Err(Error::InvalidUtf8 { input: source, line: number });
                        }
                    };
                    let text = scratch.wide(&text, self.options.ignore_case);
                    patterns.iter().any(|p| wide::matches(p, text))
                }
            };

            if matched == self.options.invert_match {
                continue;
            }

            selected += 1;
            if self.options.quiet {
                break;
            }
            if !self.options.count {
                if self.options.with_filename {
                    write!(output, "{}:", name)?;
                }
                if self.options.line_number {
                    write!(output, "{}:", number)?;
                }
                output.write_all(line)?;
                output.write_all(b"\n")?;
            }
        }

        if self.options.count && !self.options.quiet {
            if self.options.with_filename {
                write!(output, "{}:", name)?;
            }
            writeln!(output, "{}", selected)?;
        }

        Ok(selected)
    }
}

// ---

// Patterns prepared for the configured character domain.
#[derive(Debug)]
enum Matcher {
    Narrow(Vec<Vec<u8>>),
    Wide(Vec<Vec<char>>),
}

impl Matcher {
    fn new<S: AsRef<str>>(mode: Mode, patterns: &[S], ignore_case: bool) -> Self {
        let mut scratch = Scratch::default();
        match mode {
            Mode::Narrow => Self::Narrow(
                patterns
                    .iter()
                    .map(|p| scratch.narrow(p.as_ref().as_bytes(), ignore_case).to_vec())
                    .collect(),
            ),
            Mode::Wide => Self::Wide(
                patterns
                    .iter()
                    .map(|p| scratch.wide(p.as_ref(), ignore_case).to_vec())
                    .collect(),
            ),
        }
    }
}

// Reusable buffers for normalized texts.
#[derive(Default)]
struct Scratch {
    bytes: Vec<u8>,
    chars: Vec<char>,
}

impl Scratch {
    fn narrow<'a>(&'a mut self, text: &'a [u8], ignore_case: bool) -> &'a [u8] {
        if !ignore_case {
            return text;
        }
        self.bytes.clear();
        self.bytes.extend(text.iter().map(u8::to_ascii_lowercase));
        &self.bytes
    }

    fn wide(&mut self, text: &str, ignore_case: bool) -> &[char] {
        self.chars.clear();
        if ignore_case {
            self.chars.extend(text.chars().flat_map(char::to_lowercase));
        } else {
            self.chars.extend(text.chars());
        }
        &self.chars
    }
}
