//! Header section parsing: relation and attribute declarations.

use arff_model::Attribute;

/// Marker token that starts an attribute declaration.
pub const ATTRIBUTE_MARKER: &str = "@attribute";

/// Marker token that ends the header and starts the data section.
pub const DATA_MARKER: &str = "@data";

/// Marker token that names the relation.
pub const RELATION_MARKER: &str = "@relation";

/// Lines starting with this character are comments.
pub const COMMENT_PREFIX: char = '%';

/// True if `token` is `marker`, ignoring ASCII case.
pub fn is_marker(token: &str, marker: &str) -> bool {
    token.eq_ignore_ascii_case(marker)
}

/// Builds an attribute from a tokenized `@attribute` line.
///
/// Token 2 is the name; the declared type is token 3, with any further tokens
/// (nominal sets such as `{a, b}`) joined back by single spaces. Returns `None`
/// when the line has fewer than three tokens.
pub fn parse_declaration(tokens: &[&str]) -> Option<Attribute> {
    match tokens {
        [_, name, declared_type @ ..] if !declared_type.is_empty() => {
            Some(Attribute::new(*name, declared_type.join(" ")))
        }
        _ => None,
    }
}

/// Relation name from a tokenized `@relation` line.
pub fn parse_relation(tokens: &[&str]) -> Option<String> {
    match tokens {
        [_, rest @ ..] if !rest.is_empty() => Some(rest.join(" ")),
        _ => None,
    }
}
