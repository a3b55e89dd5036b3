//! Encoder: canonical opcode string back to phonetic text.
//!
//! Approximate inverse of the decoder: every opcode becomes the dialect's
//! canonical token, and what happens to everything else is the dialect's
//! [`EncodePolicy`]. Decoding an encoded string always yields the original
//! opcode string, since suffix marks and fillers never collide with tokens.

use thiserror::Error;

use crate::dialect::{Dialect, EncodePolicy};
use crate::Opcode;

/// Errors during encoding.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EncodeError {
    /// A byte with no phonetic representation, under a dialect without a
    /// filler rule.
    #[error("undefined operator 0x{byte:02x} at offset {offset}")]
    UndefinedOperator { byte: u8, offset: usize },
}

/// `ctype_space` equivalent: ASCII whitespace including vertical tab.
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Translate a canonical opcode string into phonetic text for `dialect`.
///
/// The input is processed per byte; canonical opcode strings are ASCII.
pub fn encode(code: &str, dialect: &Dialect) -> Result<String, EncodeError> {
    let mut out = String::new();
    match dialect.encode_policy {
        EncodePolicy::Fill { even, odd } => {
            for byte in code.bytes() {
                if let Some(op) = Opcode::from_symbol(byte as char) {
                    out.push_str(dialect.token_for(op));
                } else if is_space(byte) {
                    out.push(byte as char);
                } else {
                    out.push_str(if byte % 2 == 0 { even } else { odd });
                }
            }
        }
        EncodePolicy::Suffixed {
            suffix,
            passthrough,
        } => {
            for (offset, byte) in code.bytes().enumerate() {
                if let Some(op) = Opcode::from_symbol(byte as char) {
                    out.push_str(dialect.token_for(op));
                    out.push_str(suffix(op));
                } else if is_space(byte) || passthrough.contains(&(byte as char)) {
                    out.push(byte as char);
                } else {
                    return Err(EncodeError::UndefinedOperator { byte, offset });
                }
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{encode, EncodeError};
    use crate::decoder::decode;
    use crate::dialect::Dialect;

    #[test]
    fn bark_encodes_tokens() {
        let d = Dialect::bark();
        assert_eq!(encode("+-", &d).unwrap(), "わんきゃん");
        assert_eq!(encode("[-]", &d).unwrap(), "わうきゃんきゅーん");
    }

    #[test]
    fn bark_passes_whitespace_through() {
        let d = Dialect::bark();
        assert_eq!(encode("+ .\n", &d).unwrap(), "わん ばう\n");
    }

    #[test]
    fn bark_fills_unknown_bytes_by_parity() {
        let d = Dialect::bark();
        // '@' is 0x40 (even), '?' is 0x3f (odd).
        assert_eq!(encode("@", &d).unwrap(), "くーん");
        assert_eq!(encode("?", &d).unwrap(), "…");
    }

    #[test]
    fn kq_appends_suffix_marks() {
        let d = Dialect::kq();
        assert_eq!(encode("+", &d).unwrap(), "ﾀﾞｧﾀﾞｧ!!");
        assert_eq!(encode("-", &d).unwrap(), "ｼｴﾘｼｴﾘ!");
        assert_eq!(encode("[]", &d).unwrap(), "ｼｴﾘｲｪｽ!ｲｪｽｼｴﾘ!");
        assert_eq!(encode(".,", &d).unwrap(), "ｼｴﾘﾀﾞｧ!!ﾀﾞｧｼｴﾘ!!");
    }

    #[test]
    fn kq_passes_whitespace_and_marks_through() {
        let d = Dialect::kq();
        assert_eq!(encode("> <!", &d).unwrap(), "ﾀﾞｧｲｪｽ!! ｲｪｽﾀﾞｧ!!");
    }

    #[test]
    fn kq_rejects_unknown_bytes() {
        let d = Dialect::kq();
        assert_eq!(
            encode("+x", &d),
            Err(EncodeError::UndefinedOperator {
                byte: b'x',
                offset: 1
            })
        );
    }

    #[test]
    fn strict_round_trip() {
        let d = Dialect::kq();
        let code = "++++++++[>++++++++<-]>+.,";
        let encoded = encode(code, &d).unwrap();
        assert_eq!(decode(&encoded, &d).unwrap(), code);
    }

    #[test]
    fn bark_round_trip() {
        let d = Dialect::bark();
        let code = "[->+<].,";
        let encoded = encode(code, &d).unwrap();
        assert_eq!(decode(&encoded, &d).unwrap(), code);
    }
}
