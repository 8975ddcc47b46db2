// public modules
pub mod app;
pub mod boolean;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod lines;
pub mod settings;
pub mod size;

// public uses
pub use app::{App, Options, Summary};
pub use settings::{Mode, Settings};
