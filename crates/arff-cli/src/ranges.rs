//! Parsing of the `-c <class> [-<attr> <min> <max>]...` argument tail.

use std::collections::BTreeSet;

use arff_model::RangeSpec;
use thiserror::Error;

/// Flag that introduces the class attribute name.
pub const CLASS_FLAG: &str = "-c";

/// Leading marker stripped from attribute tokens.
pub const ATTRIBUTE_MARKER: char = '-';

/// Problems with the range arguments. All are detected before any file I/O.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeArgsError {
    /// Input file plus arguments must come in groups of three.
    #[error(
        "invalid number of arguments: expected <INPUT> -c <CLASS> followed by \
         <-ATTR> <NEW_MIN> <NEW_MAX> triples, got {count} argument(s) after the input file"
    )]
    InvalidArgumentCount { count: usize },

    #[error("expected '-c <CLASS>' after the input file, found '{found}'")]
    MissingClassFlag { found: String },

    #[error("class attribute name is empty")]
    EmptyClassAttribute,

    #[error("expected an attribute token like '-name', found '{found}'")]
    InvalidAttributeToken { found: String },

    #[error("invalid {bound} '{value}' for attribute '{attribute}'")]
    InvalidNumber {
        attribute: String,
        bound: &'static str,
        value: String,
    },

    #[error("attribute '{attribute}' given more than one target range")]
    DuplicateRange { attribute: String },
}

/// Class attribute plus the requested target ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeArgs {
    pub class_attribute: String,
    pub ranges: Vec<RangeSpec>,
}

/// Parses the arguments that follow the input file.
///
/// Counting the input file, the argument list must have a length that is a
/// multiple of three: `<INPUT> -c <CLASS>` is the first group and every
/// `-<ATTR> <NEW_MIN> <NEW_MAX>` triple after it is one [`RangeSpec`].
pub fn parse_range_args<S: AsRef<str>>(args: &[S]) -> Result<RangeArgs, RangeArgsError> {
    if (args.len() + 1) % 3 != 0 {
        return Err(RangeArgsError::InvalidArgumentCount { count: args.len() });
    }
    let (flag, class_attribute) = (args[0].as_ref(), args[1].as_ref());
    if flag != CLASS_FLAG {
        return Err(RangeArgsError::MissingClassFlag {
            found: flag.to_string(),
        });
    }
    if class_attribute.is_empty() {
        return Err(RangeArgsError::EmptyClassAttribute);
    }

    let mut seen = BTreeSet::new();
    let mut ranges = Vec::with_capacity((args.len() - 2) / 3);
    for triple in args[2..].chunks_exact(3) {
        let token = triple[0].as_ref();
        let attribute = token
            .strip_prefix(ATTRIBUTE_MARKER)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| RangeArgsError::InvalidAttributeToken {
                found: token.to_string(),
            })?;
        let new_min = parse_bound(attribute, "new minimum", triple[1].as_ref())?;
        let new_max = parse_bound(attribute, "new maximum", triple[2].as_ref())?;
        if !seen.insert(attribute) {
            return Err(RangeArgsError::DuplicateRange {
                attribute: attribute.to_string(),
            });
        }
        ranges.push(RangeSpec::new(attribute, new_min, new_max));
    }

    Ok(RangeArgs {
        class_attribute: class_attribute.to_string(),
        ranges,
    })
}

fn parse_bound(attribute: &str, bound: &'static str, value: &str) -> Result<f64, RangeArgsError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
        .ok_or_else(|| RangeArgsError::InvalidNumber {
            attribute: attribute.to_string(),
            bound,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_only() {
        let parsed = parse_range_args(&["-c", "class"]).unwrap();
        assert_eq!(parsed.class_attribute, "class");
        assert!(parsed.ranges.is_empty());
    }

    #[test]
    fn triples_become_range_specs() {
        let parsed =
            parse_range_args(&["-c", "class", "-a1", "0", "1", "-a2", "-5", "5.5"]).unwrap();
        assert_eq!(
            parsed.ranges,
            vec![
                RangeSpec::new("a1", 0.0, 1.0),
                RangeSpec::new("a2", -5.0, 5.5)
            ]
        );
    }

    #[test]
    fn argument_count_must_complete_triples() {
        assert_eq!(
            parse_range_args(&["-c", "class", "-a1", "0"]),
            Err(RangeArgsError::InvalidArgumentCount { count: 4 })
        );
        assert_eq!(
            parse_range_args::<&str>(&[]),
            Err(RangeArgsError::InvalidArgumentCount { count: 0 })
        );
        assert_eq!(
            parse_range_args(&["-c"]),
            Err(RangeArgsError::InvalidArgumentCount { count: 1 })
        );
    }

    #[test]
    fn class_flag_comes_first() {
        assert_eq!(
            parse_range_args(&["-a1", "class"]),
            Err(RangeArgsError::MissingClassFlag {
                found: "-a1".to_string()
            })
        );
        assert_eq!(
            parse_range_args(&["-c", ""]),
            Err(RangeArgsError::EmptyClassAttribute)
        );
    }

    #[test]
    fn attribute_token_needs_marker_and_name() {
        assert_eq!(
            parse_range_args(&["-c", "class", "a1", "0", "1"]),
            Err(RangeArgsError::InvalidAttributeToken {
                found: "a1".to_string()
            })
        );
        assert_eq!(
            parse_range_args(&["-c", "class", "-", "0", "1"]),
            Err(RangeArgsError::InvalidAttributeToken {
                found: "-".to_string()
            })
        );
    }

    #[test]
    fn only_leading_marker_is_stripped() {
        let parsed = parse_range_args(&["-c", "class", "--x-y", "0", "1"]).unwrap();
        assert_eq!(parsed.ranges[0].attribute, "-x-y");
    }

    #[test]
    fn bounds_must_be_finite_numbers() {
        assert!(matches!(
            parse_range_args(&["-c", "class", "-a1", "low", "1"]),
            Err(RangeArgsError::InvalidNumber {
                bound: "new minimum",
                ..
            })
        ));
        assert!(matches!(
            parse_range_args(&["-c", "class", "-a1", "0", "inf"]),
            Err(RangeArgsError::InvalidNumber {
                bound: "new maximum",
                ..
            })
        ));
    }

    #[test]
    fn repeated_attribute_is_rejected() {
        assert_eq!(
            parse_range_args(&["-c", "class", "-a1", "0", "1", "-a1", "2", "3"]),
            Err(RangeArgsError::DuplicateRange {
                attribute: "a1".to_string()
            })
        );
    }
}
