use std::{fs, io::Write};

use assert_matches::assert_matches;

use super::*;
use crate::{error::Error, settings::Mode};

fn temp_config(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("wmatch-config-test-{}-{}.yaml", std::process::id(), name));
    fs::File::create(&path).unwrap().write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn test_load_defaults_only() {
    let settings = at::<_, &str>([]).no_default(true).load().unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_load_file() {
    let path = temp_config("narrow", "mode: narrow\nline-number: yes\n");
    let settings = at([&path]).no_default(true).load().unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(settings.mode, Mode::Narrow);
    assert!(settings.line_number);
    assert!(!settings.ignore_case);
}

#[test]
fn test_later_file_wins() {
    let first = temp_config("first", "mode: narrow\nignore-case: true\n");
    let second = temp_config("second", "mode: wide\n");
    let settings = at([&first, &second]).no_default(true).load().unwrap();
    fs::remove_file(&first).unwrap();
    fs::remove_file(&second).unwrap();

    assert_eq!(settings.mode, Mode::Wide);
    assert!(settings.ignore_case);
}

#[test]
fn test_missing_file() {
    let result = at(["this/config/does/not/exist.yaml"]).no_default(true).load();
    assert_matches!(result, Err(Error::Config(_)));
}
