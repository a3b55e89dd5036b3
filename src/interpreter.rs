use std::io::Read;
use std::io::Write;

use thiserror::Error;

use crate::parser::Instruction;
use crate::tape::SparseTape;
use crate::types::cell_to_byte;
use crate::Cell;
use crate::Opcode;
use crate::TapeAddr;

/// Error type for execution
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// The byte source ran dry while executing `,`. Fatal to the run;
    /// output already written stays written.
    #[error("Input exhausted while executing ',' at instruction {0}")]
    EndOfInput(usize),
    /// Io error during program execution.
    #[error("Unexpected IO Error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PartialEq for ExecutionError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::EndOfInput(l0), Self::EndOfInput(r0)) => l0 == r0,
            (Self::IoError(l0), Self::IoError(r0)) => l0.kind() == r0.kind(),
            _ => false,
        }
    }
}

/// Run a parsed program to completion against the given byte source and
/// sink.
///
/// A fresh zeroed tape is created for the run, so a program can be executed
/// repeatedly without state leaking between runs. Dispatch is an exhaustive
/// match over the closed opcode set; the instruction pointer walking past
/// the end of the program is the one normal exit.
pub fn execute(
    program: &[Instruction],
    input: &mut impl Read,
    output: &mut impl Write,
) -> Result<(), ExecutionError> {
    let mut tape = SparseTape::new();
    let mut ptr: TapeAddr = 0.into();
    // Signed: a `]` whose `[` sits at instruction 0 jumps to -1, and the
    // advance below brings us back to 0.
    let mut pos: isize = 0;
    loop {
        let Some(instr) = usize::try_from(pos).ok().and_then(|i| program.get(i)) else {
            return Ok(());
        };
        match instr.op {
            Opcode::Increment => tape.modify(ptr, 1),
            Opcode::Decrement => tape.modify(ptr, -1),
            Opcode::MoveRight => ptr += 1.into(),
            Opcode::MoveLeft => ptr -= 1.into(),
            Opcode::Output => {
                let tmp = [cell_to_byte(tape.get(ptr))];
                output.write_all(&tmp)?;
            }
            Opcode::Input => {
                // We may need to flush output here if there wasn't a newline.
                output.flush()?;
                let mut tmp: [u8; 1] = [0; 1];
                if input.read(&mut tmp)? == 0 {
                    return Err(ExecutionError::EndOfInput(pos as usize));
                }
                tape.set(ptr, tmp[0] as Cell);
            }
            Opcode::LoopStart => {
                if tape.get(ptr) == 0 {
                    // Land on the matching `]`; the advance below skips
                    // past the loop body.
                    pos = instr.jump.expect("parser resolves loop jumps");
                }
            }
            Opcode::LoopEnd => {
                // Back to just before the matching `[`, which re-checks the
                // condition after the advance below.
                pos = instr.jump.expect("parser resolves loop jumps");
            }
        }
        pos += 1;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::execute;
    use super::ExecutionError;
    use crate::parser::parse;

    fn run(code: &str, input: &[u8]) -> (Result<(), ExecutionError>, Vec<u8>) {
        let program = parse(code).unwrap();
        let mut input: VecDeque<u8> = input.iter().copied().collect();
        let mut output: Vec<u8> = Vec::new();
        let result = execute(&program, &mut input, &mut output);
        (result, output)
    }

    #[test]
    fn echo_one_byte() {
        let (result, output) = run(",.", &[0x41]);
        assert_eq!(result, Ok(()));
        assert_eq!(output, vec![0x41]);
    }

    #[test]
    fn zeroing_loop_halts() {
        let (result, output) = run("+++++[-].", &[]);
        assert_eq!(result, Ok(()));
        assert_eq!(output, vec![0]);
    }

    #[test]
    fn loop_skipped_when_cell_is_zero() {
        let (result, output) = run("[,].", &[]);
        assert_eq!(result, Ok(()));
        assert_eq!(output, vec![0]);
    }

    #[test]
    fn loop_at_origin() {
        let (result, _) = run("[-]", &[]);
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn output_truncates_to_low_byte() {
        let code = "+".repeat(256) + ".";
        let (result, output) = run(&code, &[]);
        assert_eq!(result, Ok(()));
        assert_eq!(output, vec![0]);
    }

    #[test]
    fn negative_cells_emit_wrapped_bytes() {
        let (result, output) = run("-.", &[]);
        assert_eq!(result, Ok(()));
        assert_eq!(output, vec![0xff]);
    }

    #[test]
    fn tape_extends_left_of_origin() {
        let (result, output) = run("<+++.>.", &[]);
        assert_eq!(result, Ok(()));
        assert_eq!(output, vec![3, 0]);
    }

    #[test]
    fn end_of_input_aborts_run() {
        let (result, output) = run(",.,.", &[0x41]);
        assert_eq!(result, Err(ExecutionError::EndOfInput(2)));
        // The first byte was already echoed and stays written.
        assert_eq!(output, vec![0x41]);
    }

    #[test]
    fn empty_source_aborts_immediately() {
        let (result, output) = run(",", &[]);
        assert_eq!(result, Err(ExecutionError::EndOfInput(0)));
        assert_eq!(output, Vec::<u8>::new());
    }

    #[test]
    fn counting_loop() {
        // 8 * 8 + 1 = 65 = 'A'
        let (result, output) = run("++++++++[>++++++++<-]>+.", &[]);
        assert_eq!(result, Ok(()));
        assert_eq!(output, vec![b'A']);
    }
}
