use std::fmt::{Display, Formatter};

use crate::common::token::trim_whitespace;
use crate::parse::error::DecodeError;

/// A value from a content negotiation header together with its quality ("q") weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Weighted<T> {
    pub value: T,
    /// Quality weight between 0 and 1. Defaults to 1 when the header omits it.
    pub priority: f32,
}

impl<T> Weighted<T> {
    /// Creates a weighted value with the default priority of 1.
    pub fn new(value: T) -> Weighted<T> {
        Weighted { value, priority: 1.0 }
    }

    /// Creates a weighted value with the given priority.
    pub fn with_priority(value: T, priority: f32) -> Weighted<T> {
        Weighted { value, priority }
    }
}

impl<T: Display> Display for Weighted<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)?;
        if self.priority != 1.0 {
            write!(f, ";q={}", self.priority)?;
        }
        Ok(())
    }
}

/// Parses a comma separated list of values, each optionally followed by ";q=<weight>".
/// Order is preserved. Parameters other than q are ignored.
pub fn parse_weighted_list<T>(raw: &str, parse_value: impl Fn(&str) -> Result<T, DecodeError>) -> Result<Vec<Weighted<T>>, DecodeError> {
    let mut list = vec![];

    for item in raw.split(',').map(trim_whitespace).filter(|item| !item.is_empty()) {
        let mut parts = item.split(';');
        let value = parse_value(trim_whitespace(parts.next().unwrap_or_default()))?;

        let mut priority = 1.0;
        for param in parts.map(trim_whitespace) {
            if let Some(raw_quality) = param.strip_prefix("q=").or_else(|| param.strip_prefix("Q=")) {
                priority = parse_quality(raw_quality)?;
            }
        }

        list.push(Weighted { value, priority });
    }

    if list.is_empty() {
        return Err(DecodeError::InvalidHeaderValue);
    }

    Ok(list)
}

/// Parses a quality weight. Only digits and a single dot are accepted, and the value must be in [0, 1].
pub fn parse_quality(raw: &str) -> Result<f32, DecodeError> {
    let mut dots = 0;
    for byte in raw.bytes() {
        match byte {
            b'0'..=b'9' => {}
            b'.' if dots == 0 => dots += 1,
            _ => return Err(DecodeError::InvalidHeaderValue)
        }
    }

    let quality: f32 = raw.parse().map_err(|_| DecodeError::InvalidHeaderValue)?;

    if !(0.0..=1.0).contains(&quality) {
        return Err(DecodeError::InvalidHeaderValue);
    }

    Ok(quality)
}

/// Joins values with "," and no spaces, the form used when encoding list headers.
pub fn join_list<T: Display>(list: &[T]) -> String {
    list.iter().map(|item| item.to_string()).collect::<Vec<String>>().join(",")
}
