//! Helpers for running programs against in-memory I/O in tests.

use std::collections::VecDeque;

use crate::{execute, parse, ExecutionError};

#[derive(Debug, Default, PartialEq)]
pub struct ExecutionState {
    pub result: Option<Result<(), ExecutionError>>,
    pub output: Vec<u8>,
}

/// Parse and execute a canonical opcode string with `input` as the byte
/// source, collecting output in memory.
///
/// Panics on parse errors: callers hand in known-good programs.
pub fn test_execute(code: &str, input: &[u8]) -> ExecutionState {
    let program = parse(code).expect("test program should parse");
    let mut exec = ExecutionState::default();
    let mut input: VecDeque<u8> = input.iter().copied().collect();
    exec.result = Some(execute(&program, &mut input, &mut exec.output));
    exec
}
