use rstest::rstest;

use super::*;

#[rstest]
#[case("true")]
#[case("TRUE")]
#[case("Yes")]
#[case("on")]
#[case("1")]
#[case("y")]
#[case("T")]
#[case("  yes\n")]
fn test_parse_true(#[case] input: &str) {
    assert_eq!(parse_bool(input), Ok(true));
}

#[rstest]
#[case("false")]
#[case("False")]
#[case("NO")]
#[case("off")]
#[case("0")]
#[case("n")]
#[case("f")]
#[case("\toff ")]
fn test_parse_false(#[case] input: &str) {
    assert_eq!(parse_bool(input), Ok(false));
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("2")]
#[case("maybe")]
#[case("yess")]
#[case("o")]
fn test_parse_invalid(#[case] input: &str) {
    assert_eq!(parse_bool(input), Err(ParseBoolError { value: input.into() }));
}

#[test]
fn test_error_message() {
    let err = parse_bool("maybe").unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"invalid boolean value "maybe", use any of ["true", "yes", "on", "1", "y", "t", "false", "no", "off", "0", "n", "f"]"#
    );
}
