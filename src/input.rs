// std imports
use std::{
    fs,
    io::{self, BufReader, Read, stdin},
    num::NonZeroUsize,
    path::PathBuf,
};

// local imports
use crate::lines::LineReader;

// ---

pub type InputStream = Box<dyn Read + Send>;

// ---

/// A reference to an input file or stdin.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum InputReference {
    Stdin,
    File(PathBuf),
}

impl InputReference {
    /// Creates a reference from a command line argument, where `-` stands for stdin.
    pub fn from_arg(arg: PathBuf) -> Self {
        if arg.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(arg)
        }
    }

    /// Opens the input for reading.
    pub fn open(&self) -> io::Result<Input> {
        let stream: InputStream = match self {
            Self::Stdin => Box::new(stdin()),
            Self::File(path) => {
                let meta = fs::metadata(path).map_err(|e| {
                    io::Error::new(
                        e.kind(),
                        format!("failed to get information on {}: {}", self.description(), e),
                    )
                })?;
                if meta.is_dir() {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("{} is a directory", self.description()),
                    ));
                }
                Box::new(fs::File::open(path).map_err(|e| {
                    io::Error::new(e.kind(), format!("failed to open {}: {}", self.description(), e))
                })?)
            }
        };

        log::debug!("opened {}", self.description());

        Ok(Input::new(self.clone(), stream))
    }

    /// Returns a description of the input reference.
    pub fn description(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".into(),
            Self::File(path) => format!("file {:?}", path),
        }
    }

    /// Returns a short name suitable for prefixing output lines.
    pub fn name(&self) -> String {
        match self {
            Self::Stdin => "(standard input)".into(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

// ---

/// Represents an opened input file or stdin.
pub struct Input {
    pub reference: InputReference,
    pub stream: InputStream,
}

impl Input {
    /// Creates an input over an already opened stream.
    pub fn new(reference: InputReference, stream: InputStream) -> Self {
        Self { reference, stream }
    }

    /// Converts the input into a line reader with the given buffer size and line size limit.
    pub fn lines(self, buffer_size: NonZeroUsize, max_line_size: NonZeroUsize) -> LineReader<BufReader<InputStream>> {
        LineReader::new(
            self.reference.description(),
            BufReader::with_capacity(buffer_size.get(), self.stream),
            buffer_size,
            max_line_size,
        )
    }
}
