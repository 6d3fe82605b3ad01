//! Dot-separated version string comparison
//!
//! Strings are canonicalised first: `-`, `_` and `+` become `.`, a `.` is
//! inserted wherever a run of digits meets a run of non-digits, and any other
//! punctuation becomes `.`. The resulting segments are compared left to right.
//! Numeric segments compare by value; word segments rank as
//!
//! `dev < alpha = a < beta = b < RC = rc < (number) < pl = p`
//!
//! and any unrecognised word ranks below `dev`. This is what makes
//! `1.0.0-alpha.1` sort before `1.0.0`.

use crate::error::{Result, VersionError};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Rank of special word segments, matched by prefix, first entry wins
const SPECIAL_FORMS: &[(&str, i8)] = &[
    ("dev", 0),
    ("alpha", 1),
    ("a", 1),
    ("beta", 2),
    ("b", 2),
    ("RC", 3),
    ("rc", 3),
    ("#", 4),
    ("pl", 5),
    ("p", 5),
];

const UNKNOWN_FORM: i8 = -6;

/// Stands in for "a number" when a word is compared against a numeric segment
const NUMBER_FORM: &str = "#";

/// Compare two version strings
///
/// An empty string sorts before any non-empty one.
///
/// # Example
/// ```
/// use std::cmp::Ordering;
/// use version_schema::domain::compare_versions;
///
/// assert_eq!(compare_versions("1.1.0-alpha.1", "1.0.14"), Ordering::Greater);
/// assert_eq!(compare_versions("1.0.0-rc.1", "1.0.0"), Ordering::Less);
/// ```
pub fn compare_versions(left: &str, right: &str) -> Ordering {
    match (left.is_empty(), right.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => {}
    }

    let left = canonicalize(left);
    let right = canonicalize(right);

    compare_segments(&segments(&left), &segments(&right))
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_non_digit(c: char) -> bool {
    !c.is_ascii_digit() && c != '.'
}

fn push_separator(out: &mut String) {
    if !out.ends_with('.') {
        out.push('.');
    }
}

fn canonicalize(version: &str) -> String {
    let mut out = String::with_capacity(version.len() * 2);
    let mut chars = version.chars();

    let Some(first) = chars.next() else {
        return out;
    };
    out.push(first);
    let mut last = first;

    for c in chars {
        if matches!(c, '-' | '_' | '+') {
            push_separator(&mut out);
        } else if (is_non_digit(last) && is_digit(c)) || (is_digit(last) && is_non_digit(c)) {
            push_separator(&mut out);
            out.push(c);
        } else if !c.is_ascii_alphanumeric() {
            push_separator(&mut out);
        } else {
            out.push(c);
        }
        last = c;
    }

    out
}

fn segments(canonical: &str) -> Vec<&str> {
    canonical.split('.').filter(|s| !s.is_empty()).collect()
}

fn is_numeric(segment: &str) -> bool {
    segment.chars().next().is_some_and(is_digit)
}

fn special_rank(segment: &str) -> i8 {
    SPECIAL_FORMS
        .iter()
        .find(|(name, _)| segment.starts_with(name))
        .map(|(_, rank)| *rank)
        .unwrap_or(UNKNOWN_FORM)
}

/// Compare the leading digit runs of two segments without overflowing
fn compare_numbers(left: &str, right: &str) -> Ordering {
    let digits = |s: &str| -> String {
        let run: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
        let trimmed = run.trim_start_matches('0');
        trimmed.to_string()
    };

    let left = digits(left);
    let right = digits(right);

    left.len().cmp(&right.len()).then_with(|| left.cmp(&right))
}

fn compare_segment(left: &str, right: &str) -> Ordering {
    match (is_numeric(left), is_numeric(right)) {
        (true, true) => compare_numbers(left, right),
        (false, false) => special_rank(left).cmp(&special_rank(right)),
        (true, false) => special_rank(NUMBER_FORM).cmp(&special_rank(right)),
        (false, true) => special_rank(left).cmp(&special_rank(NUMBER_FORM)),
    }
}

fn compare_segments(left: &[&str], right: &[&str]) -> Ordering {
    for (l, r) in left.iter().zip(right.iter()) {
        let ordering = compare_segment(l, r);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    let common = left.len().min(right.len());
    match (left.get(common), right.get(common)) {
        (Some(rest), None) if is_numeric(rest) => Ordering::Greater,
        (Some(_), None) => compare_segments(&left[common..], &[NUMBER_FORM]),
        (None, Some(rest)) if is_numeric(rest) => Ordering::Less,
        (None, Some(_)) => compare_segments(&[NUMBER_FORM], &right[common..]),
        _ => Ordering::Equal,
    }
}

/// Comparison operator applied to a three-way comparison result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Less,
    LessOrEqual,
    Equal,
    GreaterOrEqual,
    Greater,
    NotEqual,
}

impl Operator {
    /// Apply the operator to an ordering of `left` relative to `right`
    pub fn apply(&self, ordering: Ordering) -> bool {
        match self {
            Operator::Less => ordering == Ordering::Less,
            Operator::LessOrEqual => ordering != Ordering::Greater,
            Operator::Equal => ordering == Ordering::Equal,
            Operator::GreaterOrEqual => ordering != Ordering::Less,
            Operator::Greater => ordering == Ordering::Greater,
            Operator::NotEqual => ordering != Ordering::Equal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Less => "<",
            Operator::LessOrEqual => "<=",
            Operator::Equal => "==",
            Operator::GreaterOrEqual => ">=",
            Operator::Greater => ">",
            Operator::NotEqual => "!=",
        }
    }
}

impl FromStr for Operator {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "<" | "lt" => Ok(Operator::Less),
            "<=" | "le" => Ok(Operator::LessOrEqual),
            "=" | "==" | "eq" => Ok(Operator::Equal),
            ">=" | "ge" => Ok(Operator::GreaterOrEqual),
            ">" | "gt" => Ok(Operator::Greater),
            "!=" | "<>" | "ne" => Ok(Operator::NotEqual),
            other => Err(VersionError::UnknownOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map an ordering onto the conventional `-1`, `0`, `1`
pub fn ordering_to_int(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}
