//! A `nom`-based parser for absolute location paths.
//!
//! The grammar is a slash-anchored sequence of element names:
//! `"/" name ("/" name)*`. Axes, predicates, and attribute steps are outside
//! this engine's scope.

use crate::error::XmlPathError;
use nom::{
    IResult, Parser,
    bytes::complete::take_while1,
    character::complete::char,
    combinator::all_consuming,
    multi::separated_list1,
    sequence::preceded,
};

/// A parsed absolute path: the element names to descend through, root first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationPath {
    pub segments: Vec<String>,
}

// --- Main public parser ---

pub fn parse_path(input: &str) -> Result<LocationPath, XmlPathError> {
    if !input.starts_with('/') {
        return Err(XmlPathError::NotAbsolute(input.to_string()));
    }
    match location_path(input) {
        Ok((_, segments)) => Ok(LocationPath {
            segments: segments.iter().map(|s| s.to_string()).collect(),
        }),
        Err(e) => Err(XmlPathError::PathParse(input.to_string(), e.to_string())),
    }
}

// --- Grammar ---

fn location_path(input: &str) -> IResult<&str, Vec<&str>> {
    all_consuming(preceded(char('/'), separated_list1(char('/'), name))).parse(input)
}

fn name(input: &str) -> IResult<&str, &str> {
    take_while1(is_name_char).parse(input)
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-' || c == '.'
}
