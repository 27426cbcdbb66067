//! Whitespace tokenizer with explicit size bounds.

use thiserror::Error;

/// Default maximum number of tokens accepted on one line.
pub const DEFAULT_MAX_TOKENS: usize = 100;

/// Default maximum length of a single token, in characters.
///
/// Wide enough for any finite `f64` written with six fractional digits: a
/// sign, 309 integer digits, the point and six decimals.
pub const DEFAULT_MAX_TOKEN_LEN: usize = 317;

/// Bounds applied to every tokenized line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenLimits {
    pub max_tokens: usize,
    pub max_token_len: usize,
}

impl Default for TokenLimits {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            max_token_len: DEFAULT_MAX_TOKEN_LEN,
        }
    }
}

/// A line that does not fit within [`TokenLimits`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    #[error("more than {limit} tokens on one line")]
    TooManyTokens { limit: usize },

    #[error("token of {length} characters exceeds the {limit} character limit")]
    TokenTooLong { length: usize, limit: usize },
}

/// Splits `line` on whitespace, dropping empty tokens.
///
/// Tokens borrow from `line` and keep their original order.
///
/// # Errors
///
/// Fails instead of truncating when the line has more than
/// `limits.max_tokens` tokens or a token is longer than `limits.max_token_len`.
pub fn tokenize<'a>(line: &'a str, limits: &TokenLimits) -> Result<Vec<&'a str>, TokenizeError> {
    let mut tokens = Vec::new();
    for token in line.split_whitespace() {
        if tokens.len() == limits.max_tokens {
            return Err(TokenizeError::TooManyTokens {
                limit: limits.max_tokens,
            });
        }
        let length = token.chars().count();
        if length > limits.max_token_len {
            return Err(TokenizeError::TokenTooLong {
                length,
                limit: limits.max_token_len,
            });
        }
        tokens.push(token);
    }
    Ok(tokens)
}
