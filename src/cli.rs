// std imports
use std::{num::NonZeroUsize, path::PathBuf};

// third-party imports
use clap::Parser;

// local imports
use crate::{boolean::parse_bool, settings::Mode, size::parse_non_zero_size};

// ---

/// Print lines that match wildcard patterns as a whole.
///
/// Patterns support '?' for any single character, '*' for any number of characters
/// and '#' for one or more consecutive digits.
#[derive(Parser)]
#[clap(version)]
pub struct Opt {
    /// Configuration file path, may be repeated, use '-' to disable the user configuration file and the files before it.
    #[arg(long, env = "WMATCH_CONFIG_FILES", value_delimiter = ',')]
    pub config: Vec<String>,

    /// Pattern to match, may be repeated, a line is selected if it matches any of them.
    #[arg(short = 'e', long = "pattern", number_of_values = 1)]
    pub patterns: Vec<String>,

    /// Character domain used for matching.
    #[arg(short, long, env = "WMATCH_MODE", overrides_with = "mode")]
    #[arg(value_enum)]
    pub mode: Option<Mode>,

    /// Ignore case of patterns and lines.
    #[arg(short, long, env = "WMATCH_IGNORE_CASE", value_parser = parse_bool, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub ignore_case: Option<bool>,

    /// Select lines that do not match any pattern.
    #[arg(short = 'v', long)]
    pub invert_match: bool,

    /// Print only the number of selected lines per input.
    #[arg(short, long)]
    pub count: bool,

    /// Prefix each selected line with its line number.
    #[arg(short = 'n', long, env = "WMATCH_LINE_NUMBER", value_parser = parse_bool, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub line_number: Option<bool>,

    /// Prefix each selected line with its input name, enabled by default for multiple inputs.
    #[arg(short = 'H', long, overrides_with = "no_filename")]
    pub with_filename: bool,

    /// Never prefix selected lines with their input name.
    #[arg(long, overrides_with = "with_filename")]
    pub no_filename: bool,

    /// Print nothing and exit with status 0 on the first selected line.
    #[arg(short, long)]
    pub quiet: bool,

    /// Replace invalid UTF-8 sequences instead of failing in wide mode.
    #[arg(long, env = "WMATCH_LOSSY", value_parser = parse_bool, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub lossy: Option<bool>,

    /// Initial size of the line buffer.
    #[arg(long, env = "WMATCH_BUFFER_SIZE", value_parser = parse_non_zero_size)]
    pub buffer_size: Option<NonZeroUsize>,

    /// Maximum line size.
    #[arg(long, env = "WMATCH_MAX_LINE_SIZE", value_parser = parse_non_zero_size)]
    pub max_line_size: Option<NonZeroUsize>,

    /// Pattern to match unless --pattern is given, followed by files to process, '-' stands for stdin.
    #[arg(name = "ARGS", value_name = "PATTERN | FILE")]
    pub args: Vec<String>,
}

impl Opt {
    /// Splits positional arguments into patterns and files.
    ///
    /// Without any --pattern option the first positional argument is the pattern.
    pub fn patterns_and_files(&self) -> (Vec<String>, Vec<PathBuf>) {
        let mut args = self.args.iter();
        let patterns = if self.patterns.is_empty() {
            args.next().cloned().into_iter().collect()
        } else {
            self.patterns.clone()
        };
        (patterns, args.map(PathBuf::from).collect())
    }
}
