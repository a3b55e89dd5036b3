#![no_main]

use libfuzzer_sys::fuzz_target;

use braindog::{parse, Opcode, ParseError};

fn check_loop_balance(code: &str) -> Option<ParseError> {
    let loop_counts = code.chars().filter_map(|c| match c {
        '[' => Some(1),
        ']' => Some(-1),
        _ => None,
    });
    let mut acc = 0;
    for e in loop_counts {
        acc += e;
        if acc < 0 {
            return Some(ParseError::TooManyEndLoop);
        }
    }
    if acc != 0 {
        return Some(ParseError::TooManyStartLoop);
    }
    None
}

fuzz_target!(|data: &[u8]| {
    let Ok(code) = std::str::from_utf8(data) else {
        return;
    };
    match parse(code) {
        Ok(program) => {
            assert_eq!(check_loop_balance(code), None);
            // Jump reciprocity for every bracket pair.
            for (idx, instr) in program.iter().enumerate() {
                if let Some(jump) = instr.jump {
                    match instr.op {
                        Opcode::LoopStart => {
                            assert_eq!(program[jump as usize].jump, Some(idx as isize - 1));
                        }
                        Opcode::LoopEnd => {
                            assert_eq!(program[(jump + 1) as usize].jump, Some(idx as isize));
                        }
                        _ => panic!("jump on non-bracket opcode"),
                    }
                }
            }
        }
        Err(e @ ParseError::TooManyStartLoop) | Err(e @ ParseError::TooManyEndLoop) => {
            assert_eq!(check_loop_balance(code), Some(e));
        }
    }
});
