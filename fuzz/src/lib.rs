//! Fuzzing helper functions

/// Map arbitrary bytes onto the canonical opcode alphabet.
///
/// Used by the round-trip target: any byte sequence becomes a (possibly
/// unbalanced) opcode string, which is all encode/decode care about.
pub fn opcode_string(data: &[u8]) -> String {
    const ALPHABET: [char; 8] = ['+', '-', '>', '<', '.', ',', '[', ']'];
    data.iter().map(|b| ALPHABET[(*b % 8) as usize]).collect()
}
