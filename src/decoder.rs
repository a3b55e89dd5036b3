//! Decoder: phonetic source text to the canonical opcode string.

use std::borrow::Cow;

use thiserror::Error;

use crate::dialect::Dialect;

/// Errors during decoding.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DecodeError {
    /// The filtered input does not align to token boundaries. Only raised
    /// by dialects with a length constraint.
    #[error("invalid character(s) found: {length} significant characters, expected a multiple of {alignment}")]
    InvalidInput { length: usize, alignment: usize },
}

/// Translate phonetic `source` into the canonical 8-symbol opcode string.
///
/// Matching is greedy, non-overlapping and longest-match-first; the token
/// priority order was fixed when the dialect was built, so decoding the same
/// input twice always yields the same opcode string. Spans that match no
/// token are skipped.
pub fn decode(source: &str, dialect: &Dialect) -> Result<String, DecodeError> {
    let text: Cow<'_, str> = match dialect.canonicalize {
        Some(fold) => Cow::Owned(fold(source)),
        None => Cow::Borrowed(source),
    };
    let text: Cow<'_, str> = match dialect.allowed_chars {
        Some(set) => Cow::Owned(text.chars().filter(|c| set.contains(c)).collect()),
        None => text,
    };
    if let Some(alignment) = dialect.alignment {
        let length = text.chars().count();
        if length % alignment != 0 {
            return Err(DecodeError::InvalidInput { length, alignment });
        }
    }

    let mut code = String::new();
    let mut rest = text.as_ref();
    while !rest.is_empty() {
        match dialect.match_token(rest) {
            Some((tok, op)) => {
                code.push(op.symbol());
                rest = &rest[tok.len()..];
            }
            None => {
                // No token here: skip one char and retry at the next position.
                let mut chars = rest.chars();
                chars.next();
                rest = chars.as_str();
            }
        }
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::{decode, DecodeError};
    use crate::dialect::Dialect;

    #[test]
    fn bark_simple() {
        let d = Dialect::bark();
        assert_eq!(decode("わんわんわん", &d).unwrap(), "+++");
        assert_eq!(decode("わうきゃんきゅーん", &d).unwrap(), "[-]");
    }

    #[test]
    fn bark_longest_match_wins() {
        let d = Dialect::bark();
        // きゃうん must not decode as きゃん + leftovers.
        assert_eq!(decode("きゃうんわん", &d).unwrap(), ",+");
        assert_eq!(decode("きゃんうんわん", &d).unwrap(), "-+");
    }

    #[test]
    fn bark_skips_unmatched_spans() {
        let d = Dialect::bark();
        assert_eq!(decode("わん ごはん わおん!", &d).unwrap(), "+>");
        assert_eq!(decode("にゃー", &d).unwrap(), "");
    }

    #[test]
    fn decode_is_deterministic() {
        let d = Dialect::bark();
        let src = "わんわおんきゃうんばうわうきゃんきゅーん";
        assert_eq!(decode(src, &d).unwrap(), decode(src, &d).unwrap());
    }

    #[test]
    fn kq_simple() {
        let d = Dialect::kq();
        assert_eq!(decode("ﾀﾞｧﾀﾞｧｼｴﾘｼｴﾘ", &d).unwrap(), "+-");
    }

    #[test]
    fn kq_folds_fullwidth_kana() {
        let d = Dialect::kq();
        assert_eq!(decode("ダァダァ", &d).unwrap(), "+");
    }

    #[test]
    fn kq_strips_foreign_chars_before_alignment_check() {
        let d = Dialect::kq();
        assert_eq!(decode("ﾀﾞｧﾀﾞｧ!! ｼｴﾘｲｪｽ!", &d).unwrap(), "+[");
    }

    #[test]
    fn kq_rejects_misaligned_input() {
        let d = Dialect::kq();
        assert_eq!(
            decode("ﾀﾞｧ", &d),
            Err(DecodeError::InvalidInput {
                length: 3,
                alignment: 6
            })
        );
    }
}
