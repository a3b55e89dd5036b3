//! Fundamental data types used throughout braindog

use std::{
    fmt::Display,
    ops::{Add, AddAssign, Sub, SubAssign},
};

/// The canonical opcode alphabet shared by every dialect.
///
/// Both dialects decode into this closed set and encode back out of it.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Opcode {
    /// `+`: increment the current cell
    Increment,
    /// `-`: decrement the current cell
    Decrement,
    /// `>`: move the tape pointer right
    MoveRight,
    /// `<`: move the tape pointer left
    MoveLeft,
    /// `.`: write the current cell to the byte sink
    Output,
    /// `,`: read one byte from the byte source
    Input,
    /// `[`: conditional forward jump
    LoopStart,
    /// `]`: unconditional backward jump
    LoopEnd,
}

impl Opcode {
    /// The single-character canonical symbol for this opcode.
    pub fn symbol(self) -> char {
        match self {
            Opcode::Increment => '+',
            Opcode::Decrement => '-',
            Opcode::MoveRight => '>',
            Opcode::MoveLeft => '<',
            Opcode::Output => '.',
            Opcode::Input => ',',
            Opcode::LoopStart => '[',
            Opcode::LoopEnd => ']',
        }
    }

    /// Map a canonical symbol back to its opcode. Anything outside the
    /// 8-symbol alphabet yields `None`.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Opcode::Increment),
            '-' => Some(Opcode::Decrement),
            '>' => Some(Opcode::MoveRight),
            '<' => Some(Opcode::MoveLeft),
            '.' => Some(Opcode::Output),
            ',' => Some(Opcode::Input),
            '[' => Some(Opcode::LoopStart),
            ']' => Some(Opcode::LoopEnd),
            _ => None,
        }
    }
}

impl Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Newtype for tape pointer / tape offset.
///
/// Unlike classic fixed-tape interpreters this may go negative: the tape is
/// sparse and extends in both directions.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TapeAddr(pub i64);

impl TapeAddr {
    pub fn new(val: i64) -> Self {
        Self(val)
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl From<i32> for TapeAddr {
    fn from(value: i32) -> Self {
        Self(value as i64)
    }
}

impl From<i64> for TapeAddr {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<TapeAddr> for i64 {
    fn from(value: TapeAddr) -> Self {
        value.0
    }
}

impl Add for TapeAddr {
    type Output = TapeAddr;

    fn add(self, rhs: Self) -> Self::Output {
        TapeAddr(self.0.wrapping_add(rhs.0))
    }
}

impl AddAssign for TapeAddr {
    fn add_assign(&mut self, rhs: Self) {
        // Unlikely to be hit in practise (good luck getting 2^63 ">" in a
        // program!), but fuzzing can trigger this.
        self.0 = self.0.wrapping_add(rhs.0);
    }
}

impl Sub for TapeAddr {
    type Output = TapeAddr;

    fn sub(self, rhs: Self) -> Self::Output {
        TapeAddr(self.0.wrapping_sub(rhs.0))
    }
}

impl SubAssign for TapeAddr {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.wrapping_sub(rhs.0);
    }
}

impl Display for TapeAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tape cell value.
///
/// Cells are unbounded signed integers: `+`/`-` never wrap, only output
/// reduces the value to a byte. This matches the reference semantics where
/// a cell can be driven past 255 (or below 0) and still compare against 0
/// exactly in loop conditions.
pub type Cell = i64;

/// Reduce a cell value to the byte that `.` emits for it.
///
/// Negative values wrap the way `chr()` does, e.g. -1 emits 0xff.
pub fn cell_to_byte(value: Cell) -> u8 {
    value.rem_euclid(256) as u8
}

#[cfg(test)]
mod tests {
    use super::{cell_to_byte, Opcode, TapeAddr};

    #[test]
    fn symbol_roundtrip() {
        for op in [
            Opcode::Increment,
            Opcode::Decrement,
            Opcode::MoveRight,
            Opcode::MoveLeft,
            Opcode::Output,
            Opcode::Input,
            Opcode::LoopStart,
            Opcode::LoopEnd,
        ] {
            assert_eq!(Opcode::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Opcode::from_symbol('x'), None);
    }

    #[test]
    fn tape_addr_arithmetic() {
        let mut a: TapeAddr = 0.into();
        a -= 3.into();
        assert!(a.is_negative());
        assert_eq!(a + 5.into(), 2.into());
    }

    #[test]
    fn byte_reduction() {
        assert_eq!(cell_to_byte(65), b'A');
        assert_eq!(cell_to_byte(256), 0);
        assert_eq!(cell_to_byte(-1), 0xff);
        assert_eq!(cell_to_byte(321), 65);
    }
}
