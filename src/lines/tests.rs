use std::io::{BufReader, Cursor};

use assert_matches::assert_matches;

use super::*;

fn size(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn reader(data: &'static [u8], chunk: usize, limit: usize) -> LineReader<BufReader<Cursor<&'static [u8]>>> {
    LineReader::new(
        "test".into(),
        BufReader::with_capacity(chunk, Cursor::new(data)),
        size(2),
        size(limit),
    )
}

fn collect(mut lines: LineReader<impl BufRead>) -> Vec<String> {
    let mut result = Vec::new();
    while let Some(line) = lines.next_line().unwrap() {
        result.push(String::from_utf8(line.to_vec()).unwrap());
    }
    result
}

#[test]
fn test_empty_input() {
    let mut lines = reader(b"", 8, 16);
    assert_eq!(lines.next_line().unwrap(), None);
    assert_eq!(lines.line_number(), 0);
}

#[test]
fn test_lines() {
    assert_eq!(collect(reader(b"one\ntwo\nthree\n", 8, 16)), ["one", "two", "three"]);
}

#[test]
fn test_last_line_without_terminator() {
    assert_eq!(collect(reader(b"one\ntwo", 8, 16)), ["one", "two"]);
}

#[test]
fn test_empty_lines() {
    assert_eq!(collect(reader(b"\n\nx\n\n", 8, 16)), ["", "", "x", ""]);
}

#[test]
fn test_crlf() {
    assert_eq!(collect(reader(b"one\r\ntwo\r\n", 8, 16)), ["one", "two"]);
    assert_eq!(collect(reader(b"one\rtwo\n", 8, 16)), ["one\rtwo"]);
    assert_eq!(collect(reader(b"one\r", 8, 16)), ["one\r"]);
}

#[test]
fn test_lines_split_between_reads() {
    let data = b"first line\r\nsecond much longer line\nthird\n";
    assert_eq!(
        collect(reader(data, 1, 64)),
        ["first line", "second much longer line", "third"]
    );
    assert_eq!(
        collect(reader(data, 3, 64)),
        ["first line", "second much longer line", "third"]
    );
}

#[test]
fn test_line_numbers() {
    let mut lines = reader(b"a\nb\nc", 4, 16);
    lines.next_line().unwrap();
    assert_eq!(lines.line_number(), 1);
    lines.next_line().unwrap();
    lines.next_line().unwrap();
    assert_eq!(lines.line_number(), 3);
    assert_eq!(lines.next_line().unwrap(), None);
    assert_eq!(lines.line_number(), 3);
}

#[test]
fn test_line_at_limit() {
    assert_eq!(collect(reader(b"12345\n123\n", 2, 5)), ["12345", "123"]);
    assert_eq!(collect(reader(b"12345\r\n", 1, 5)), ["12345"]);
    assert_eq!(collect(reader(b"12345", 1, 5)), ["12345"]);
}

#[test]
fn test_line_too_long() {
    let mut lines = reader(b"ok\n123456\nok\n", 2, 5);
    assert_eq!(lines.next_line().unwrap(), Some(&b"ok"[..]));
    assert_matches!(
        lines.next_line(),
        Err(Error::LineTooLong { ref input, line: 2, limit: 5 }) if input == "test"
    );

    let mut lines = reader(b"123456", 64, 5);
    assert_matches!(lines.next_line(), Err(Error::LineTooLong { line: 1, .. }));
}

#[test]
fn test_buffer_reuse() {
    let mut lines = reader(b"a fairly long first line\nb\n", 4, 64);
    lines.next_line().unwrap();
    let capacity = lines.buf.capacity();
    assert_eq!(lines.next_line().unwrap(), Some(&b"b"[..]));
    assert_eq!(lines.buf.capacity(), capacity);
    assert_eq!(lines.name(), "test");
}
