// std imports
use std::path::{Path, PathBuf};

// third-party imports
use config::{Config, File, FileFormat};

// local imports
use crate::{error::Result, settings::DEFAULT_SETTINGS, settings::Settings};

// ---

pub const APP_NAME: &str = "wmatch";
pub const CONFIG_ENV: &str = "WMATCH_CONFIG";

/// Returns a loader for the embedded defaults, the user configuration file and the given files.
pub fn at<I, P>(paths: I) -> Loader
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    Loader::new(paths.into_iter().map(|p| p.as_ref().into()).collect())
}

/// Returns the path of the user configuration file.
pub fn user_config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(path.into());
    }
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.yaml"))
}

// ---

pub struct Loader {
    paths: Vec<PathBuf>,
    no_default: bool,
}

impl Loader {
    fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            no_default: false,
        }
    }

    /// Disables loading of the user configuration file.
    pub fn no_default(mut self, val: bool) -> Self {
        self.no_default = val;
        self
    }

    pub fn load(self) -> Result<Settings> {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));

        if !self.no_default {
            if let Some(path) = user_config_path() {
                log::debug!("user configuration file: {}", path.display());
                builder = builder.add_source(File::from(path).format(FileFormat::Yaml).required(false));
            }
        }

        for path in self.paths {
            log::debug!("configuration file: {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests;
