use std::fmt::Debug;
use std::io::{BufReader, ErrorKind, Read};

use crate::parse::error::DecodeError;
use crate::parse::parse::{Parse, ParseResult, ParseStatus};
use crate::parse::test_util::TestParseResult::{IoErr, ParseErr, Value};
use crate::util::mock::{EndlessMockReader, MockReader};

/// The outcome of a parse call, comparable in tests.
#[derive(Debug)]
pub enum TestParseResult<T> {
    Value(T),
    IoErr(std::io::Error),
    ParseErr(DecodeError),
}

impl<T: Debug + PartialEq> TestParseResult<T> {
    /// Splits a parse result into its outcome and the suspended parser, if any.
    fn from_parse<R>(result: ParseResult<T, R>) -> (TestParseResult<T>, Option<R>) {
        match result {
            Ok(ParseStatus::Done(value)) => (Value(value), None),
            Ok(ParseStatus::IoErr(parser, err)) => (IoErr(err), Some(parser)),
            Err(err) => (ParseErr(err), None)
        }
    }

    /// Values are compared directly. Errors only carry Debug, so they are compared by it.
    fn assert_eq(self, expected: TestParseResult<T>) {
        match (self, expected) {
            (Value(actual), Value(expected)) => assert_eq!(actual, expected),
            (actual, expected) => assert_eq!(format!("{:?}", actual), format!("{:?}", expected))
        }
    }
}

impl<T> From<ErrorKind> for TestParseResult<T> {
    fn from(kind: ErrorKind) -> Self {
        IoErr(kind.into())
    }
}

impl<T> From<std::io::Error> for TestParseResult<T> {
    fn from(err: std::io::Error) -> Self {
        IoErr(err)
    }
}

impl<T> From<DecodeError> for TestParseResult<T> {
    fn from(err: DecodeError) -> Self {
        ParseErr(err)
    }
}

/// Feeds the parser one step at a time over a non-blocking reader. Each step adds its data to the
/// reader, resumes the parser and checks the outcome. Every step but the last must leave the parser suspended.
pub fn test_blocking<T: Debug + PartialEq>(parser: impl Parse<T>, steps: Vec<(Vec<&[u8]>, TestParseResult<T>)>) {
    let mut source = MockReader::from_bytes(vec![]);
    source.return_would_block_when_empty = true;
    let mut reader = BufReader::new(source);

    let mut parser = Some(parser);

    for (step, (data, expected)) in steps.into_iter().enumerate() {
        let current = match parser.take() {
            Some(current) => current,
            None => panic!("parser finished before step {}", step)
        };

        reader.get_mut().data.extend(data.into_iter().map(<[u8]>::to_vec));

        let (actual, suspended) = TestParseResult::from_parse(current.parse(&mut reader));
        parser = suspended;
        actual.assert_eq(expected);
    }
}

/// Parses the data followed by the end of the stream.
pub fn test_with_eof<T: PartialEq + Debug>(parser: impl Parse<T>, data: Vec<&str>, expected: TestParseResult<T>) {
    test_once(parser, MockReader::from_strs(data), expected);
}

/// Parses the data followed by the endless data repeating forever.
pub fn test_endless_strs<T: Debug + PartialEq>(parser: impl Parse<T>, data: Vec<&str>, endless_data: &str, expected: TestParseResult<T>) {
    test_once(parser, EndlessMockReader::from_strs(data, endless_data), expected);
}

pub fn test_endless_bytes<T: Debug + PartialEq>(parser: impl Parse<T>, data: Vec<&[u8]>, endless_data: &[u8], expected: TestParseResult<T>) {
    test_once(parser, EndlessMockReader::from_bytes(data, endless_data), expected);
}

fn test_once<T: Debug + PartialEq>(parser: impl Parse<T>, source: impl Read, expected: TestParseResult<T>) {
    let (actual, _) = TestParseResult::from_parse(parser.parse(&mut BufReader::new(source)));
    actual.assert_eq(expected);
}
