//! Parser: canonical opcode string to an executable instruction sequence.

use thiserror::Error;

use crate::Opcode;

/// One parsed instruction.
///
/// `jump` is only ever set on the loop brackets: for [`Opcode::LoopStart`]
/// it is the index of the matching `]`, for [`Opcode::LoopEnd`] it is the
/// index *before* the matching `[` (so the executor's pointer advance lands
/// back on the `[` and re-evaluates the condition). That back target is -1
/// when the loop opens at instruction 0, hence the signed index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    pub op: Opcode,
    pub jump: Option<isize>,
}

/// Errors during parsing.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// Too many `[` encountered.
    #[error("Too many start of loops ([) encountered")]
    TooManyStartLoop,
    /// Too many `]` encountered.
    #[error("Too many end of loops (]) encountered")]
    TooManyEndLoop,
}

/// Parse a canonical opcode string into an instruction sequence with all
/// bracket pairs resolved to jump targets.
///
/// Characters outside the 8-symbol alphabet are skipped, so this accepts
/// plain Brainfuck with comments as well as decoder output. Unbalanced
/// brackets fail parsing; an unclosed `[` at end of input is a hard error
/// rather than a silent no-op, which keeps the balance invariant simple:
/// parsing succeeds iff the brackets nest properly.
///
/// The returned program is immutable and may be executed any number of
/// times without re-parsing.
pub fn parse(code: &str) -> Result<Vec<Instruction>, ParseError> {
    let mut program: Vec<Instruction> = vec![];
    let mut pending: Vec<usize> = vec![];
    for c in code.chars() {
        let Some(op) = Opcode::from_symbol(c) else {
            continue;
        };
        let idx = program.len();
        match op {
            Opcode::LoopStart => {
                pending.push(idx);
                program.push(Instruction { op, jump: None });
            }
            Opcode::LoopEnd => {
                let start = pending.pop().ok_or(ParseError::TooManyEndLoop)?;
                program[start].jump = Some(idx as isize);
                program.push(Instruction {
                    op,
                    jump: Some(start as isize - 1),
                });
            }
            _ => program.push(Instruction { op, jump: None }),
        }
    }
    if !pending.is_empty() {
        return Err(ParseError::TooManyStartLoop);
    }
    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::{parse, ParseError};
    use crate::Opcode;

    #[test]
    fn simple_parse() {
        parse("++>->,>.").unwrap();
        parse("++>->,>.>[-]").unwrap();
        parse("++>->,>.>[-[+>]]").unwrap();

        assert_eq!(parse("++>->,>.>[-]]"), Err(ParseError::TooManyEndLoop));
        assert_eq!(parse("++>->,>.>[-]["), Err(ParseError::TooManyStartLoop));
        assert_eq!(parse("]"), Err(ParseError::TooManyEndLoop));
        assert_eq!(parse("[["), Err(ParseError::TooManyStartLoop));
    }

    #[test]
    fn jump_reciprocity() {
        let program = parse("+[>[-]<]").unwrap();
        assert_eq!(program[1].op, Opcode::LoopStart);
        assert_eq!(program[1].jump, Some(7));
        assert_eq!(program[7].op, Opcode::LoopEnd);
        assert_eq!(program[7].jump, Some(0));
        assert_eq!(program[3].jump, Some(5));
        assert_eq!(program[5].jump, Some(2));
    }

    #[test]
    fn loop_at_origin_has_negative_back_target() {
        let program = parse("[]").unwrap();
        assert_eq!(program[0].jump, Some(1));
        assert_eq!(program[1].jump, Some(-1));
    }

    #[test]
    fn non_opcode_chars_are_skipped() {
        let program = parse("+ hello [world] -").unwrap();
        let code: String = program.iter().map(|i| i.op.symbol()).collect();
        assert_eq!(code, "+[]-");
    }

    #[test]
    fn plain_opcodes_have_no_jump() {
        for instr in parse("+-><.,").unwrap() {
            assert_eq!(instr.jump, None);
        }
    }
}
