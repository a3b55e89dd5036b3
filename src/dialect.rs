//! Dialect configuration: phonetic token tables and their side rules.
//!
//! A dialect is data, not code: the decode/parse/execute/encode engine is
//! shared, and everything vocabulary-specific lives in a [`Dialect`] value.
//! Two dialects ship with the crate, [`Dialect::bark`] and [`Dialect::kq`].

use crate::kana;
use crate::Opcode;

/// How the encoder treats bytes outside the canonical opcode alphabet.
#[derive(Debug, Clone, Copy)]
pub enum EncodePolicy {
    /// Best effort: whitespace passes through, any other unknown byte is
    /// replaced by one of two filler tokens picked by the byte's parity.
    Fill {
        even: &'static str,
        odd: &'static str,
    },
    /// Well-formed output: every token gets a per-opcode suffix appended,
    /// whitespace and the suffix mark pass through, anything else is an
    /// encoding error.
    Suffixed {
        suffix: fn(Opcode) -> &'static str,
        /// Non-whitespace characters that pass through undecorated.
        passthrough: &'static [char],
    },
}

/// A phonetic vocabulary plus its validation and formatting rules.
///
/// Construction sorts the token table once, longest-first; all later decode
/// calls reuse the prioritized table immutably.
#[derive(Debug, Clone)]
pub struct Dialect {
    name: &'static str,
    /// Token table in match priority order: descending byte length, then
    /// descending lexicographic order as a deterministic tie-break.
    pub(crate) tokens: Vec<(&'static str, Opcode)>,
    /// One canonical phonetic token per opcode, used by the encoder.
    pub(crate) reverse: Vec<(Opcode, &'static str)>,
    /// Text normalization applied before matching.
    pub(crate) canonicalize: Option<fn(&str) -> String>,
    /// If set, characters outside this set are stripped before matching.
    pub(crate) allowed_chars: Option<&'static [char]>,
    /// If set, the stripped input's char count must be a multiple of this.
    pub(crate) alignment: Option<usize>,
    pub(crate) encode_policy: EncodePolicy,
}

impl Dialect {
    fn new(
        name: &'static str,
        table: &[(&'static str, Opcode)],
        canonicalize: Option<fn(&str) -> String>,
        allowed_chars: Option<&'static [char]>,
        alignment: Option<usize>,
        encode_policy: EncodePolicy,
    ) -> Self {
        let mut tokens = table.to_vec();
        tokens.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| b.cmp(a)));
        let reverse = table.iter().map(|&(tok, op)| (op, tok)).collect();
        Self {
            name,
            tokens,
            reverse,
            canonicalize,
            allowed_chars,
            alignment,
            encode_policy,
        }
    }

    /// The dog-bark dialect: hiragana vocabulary, no structural constraints.
    ///
    /// Decoding silently skips anything that is not a token; encoding never
    /// fails (unknown bytes become whimpers or ellipses).
    pub fn bark() -> Self {
        Self::new(
            "bark",
            &[
                ("わん", Opcode::Increment),
                ("きゃん", Opcode::Decrement),
                ("わおん", Opcode::MoveRight),
                ("わーん", Opcode::MoveLeft),
                ("ばう", Opcode::Output),
                ("きゃうん", Opcode::Input),
                ("わう", Opcode::LoopStart),
                ("きゅーん", Opcode::LoopEnd),
            ],
            None,
            None,
            None,
            EncodePolicy::Fill {
                even: "くーん",
                odd: "…",
            },
        )
    }

    /// The stylized door-announcement dialect: half-width katakana
    /// vocabulary, every token exactly six chars.
    ///
    /// Decoding folds full-width kana to half-width first, strips everything
    /// outside the nine-character vocabulary alphabet, and requires the rest
    /// to align to token boundaries. Encoding appends `!`/`!!` marks so the
    /// output reads like the announcement.
    pub fn kq() -> Self {
        const KQ_CHARS: &[char] = &['ﾀ', 'ﾞ', 'ｧ', 'ｼ', 'ｴ', 'ﾘ', 'ｲ', 'ｪ', 'ｽ'];

        fn kq_suffix(op: Opcode) -> &'static str {
            match op {
                Opcode::Increment | Opcode::MoveRight | Opcode::Output | Opcode::Input => "!!",
                _ => "!",
            }
        }

        Self::new(
            "kq",
            &[
                ("ﾀﾞｧﾀﾞｧ", Opcode::Increment),
                ("ｼｴﾘｼｴﾘ", Opcode::Decrement),
                ("ﾀﾞｧｲｪｽ", Opcode::MoveRight),
                ("ｲｪｽﾀﾞｧ", Opcode::MoveLeft),
                ("ｼｴﾘﾀﾞｧ", Opcode::Output),
                ("ﾀﾞｧｼｴﾘ", Opcode::Input),
                ("ｼｴﾘｲｪｽ", Opcode::LoopStart),
                ("ｲｪｽｼｴﾘ", Opcode::LoopEnd),
            ],
            Some(kana::fold_to_halfwidth),
            Some(KQ_CHARS),
            Some(6),
            EncodePolicy::Suffixed {
                suffix: kq_suffix,
                passthrough: &['!'],
            },
        )
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The canonical phonetic token for `op`.
    pub fn token_for(&self, op: Opcode) -> &'static str {
        self.reverse
            .iter()
            .find(|(o, _)| *o == op)
            .map(|(_, tok)| *tok)
            .expect("every opcode has a token")
    }

    /// The longest (highest priority) token matching at the start of `rest`.
    pub(crate) fn match_token(&self, rest: &str) -> Option<(&'static str, Opcode)> {
        self.tokens
            .iter()
            .find(|(tok, _)| rest.starts_with(tok))
            .copied()
    }
}
