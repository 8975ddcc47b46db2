use super::*;

fn load(yaml: &str) -> Result<Settings, config::ConfigError> {
    Config::builder()
        .add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml))
        .add_source(File::from_str(yaml, FileFormat::Yaml))
        .build()?
        .try_deserialize()
}

#[test]
fn test_default() {
    let settings = Settings::default();
    assert_eq!(settings.mode, Mode::Wide);
    assert!(!settings.ignore_case);
    assert!(!settings.line_number);
    assert!(!settings.lossy);
    assert_eq!(settings.buffer_size.0.get(), 64 * 1024);
    assert_eq!(settings.max_line_size.0.get(), 64 * 1024 * 1024);
}

#[test]
fn test_override() {
    let settings = load("mode: narrow\nignore-case: true\nbuffer-size: 4096\nmax-line-size: 1 MiB\n").unwrap();
    assert_eq!(settings.mode, Mode::Narrow);
    assert!(settings.ignore_case);
    assert_eq!(settings.buffer_size.0.get(), 4096);
    assert_eq!(settings.max_line_size.0.get(), 1024 * 1024);
}

#[test]
fn test_bool_strings() {
    let settings = load("ignore-case: \"yes\"\nline-number: \"on\"\nlossy: \"off\"\n").unwrap();
    assert!(settings.ignore_case);
    assert!(settings.line_number);
    assert!(!settings.lossy);
}

#[test]
fn test_invalid_bool() {
    let err = load("lossy: \"maybe\"\n").unwrap_err();
    assert!(err.to_string().contains("maybe"), "{}", err);
}

#[test]
fn test_invalid_size() {
    assert!(load("buffer-size: 0\n").is_err());
    assert!(load("buffer-size: lots\n").is_err());
}

#[test]
fn test_invalid_mode() {
    assert!(load("mode: medium\n").is_err());
}
