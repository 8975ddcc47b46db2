use super::*;
use assert_matches::assert_matches;

#[test]
fn test_from_config_error() {
    let config_err = ConfigError::Message("test config error".to_string());
    let err = Error::from(config_err);
    assert_matches!(err, Error::Config(ref inner) if inner.to_string().contains("test config error"));
    assert_eq!(err.to_string(), "failed to load configuration: test config error");
}

#[test]
fn test_from_io_error() {
    let err = Error::from(io::Error::other("broken pipe"));
    assert_matches!(err, Error::Io(_));
    assert_eq!(err.to_string(), "broken pipe");
}

#[test]
fn test_from_parse_bool_error() {
    let err = Error::from(crate::boolean::parse_bool("maybe").unwrap_err());
    assert_matches!(err, Error::InvalidBool(_));
    assert!(err.to_string().contains("\"maybe\""));
}

#[test]
fn test_size_parse_error() {
    let err = Error::from(NonZeroSizeParseError::from(SizeParseError::InvalidSize("abc".into())));
    assert_eq!(
        err.to_string(),
        r#"invalid size "abc", use "64K" or "64KiB" format for IEC units or "64KB" format for SI units"#
    );
    assert_eq!(Error::from(NonZeroSizeParseError::ZeroSize).to_string(), "zero size");
}

#[test]
fn test_line_errors() {
    let err = Error::LineTooLong {
        input: "<stdin>".into(),
        line: 3,
        limit: 16,
    };
    assert_eq!(err.to_string(), "<stdin>: line 3 exceeds maximum line size of 16 bytes");

    let err = Error::InvalidUtf8 {
        input: "file \"a.txt\"".into(),
        line: 1,
    };
    assert!(err.to_string().starts_with("file \"a.txt\": line 1 is not valid utf-8"));
}
