//! # BrainDog - An interpreter/transpiler for phonetic Brainfuck dialects
//!
//! Brainfuck variants whose surface syntax is spoken-word tokens rather
//! than punctuation. The engine is parametric over a [`Dialect`]: phonetic
//! text is decoded to the canonical `+ - > < . , [ ]` alphabet, parsed into
//! a jump-resolved instruction sequence, and executed against a sparse,
//! bidirectionally unbounded tape. The encoder goes the other way, turning
//! canonical opcodes back into phonetic text.
//!
//! ```no_run
//! use braindog::{run, Dialect};
//!
//! // Prints a 0x03 byte: three barks and a bow.
//! run("わんわんわんばう", &Dialect::bark()).unwrap();
//! ```

// Re-export some symbols.
pub use decoder::decode;
pub use decoder::DecodeError;
pub use dialect::Dialect;
pub use dialect::EncodePolicy;
pub use encoder::encode;
pub use encoder::EncodeError;
pub use interpreter::execute;
pub use interpreter::ExecutionError;
pub use parser::parse;
pub use parser::Instruction;
pub use parser::ParseError;
pub use types::cell_to_byte;
pub use types::Cell;
pub use types::Opcode;
pub use types::TapeAddr;

mod decoder;
pub mod dialect;
mod encoder;
mod interpreter;
pub mod kana;
mod parser;
pub mod tape;
#[doc(hidden)]
pub mod test_utils;
pub mod types;

use std::io::{self, Read};

use thiserror::Error;

/// Error type for the whole decode → parse → execute pipeline.
#[derive(Debug, Error, PartialEq)]
pub enum RunError {
    /// The decoder rejected the phonetic text.
    #[error("Decoding error: {0}")]
    Decode(#[from] DecodeError),
    /// The decoded opcode string had unbalanced brackets.
    #[error("Parsing error: {0}")]
    Parse(#[from] ParseError),
    /// The program failed while running.
    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),
}

/// Decode, parse and execute phonetic `source` against the process
/// standard streams.
///
/// Convenience wrapper; use the individual stages for custom I/O.
pub fn run(source: &str, dialect: &Dialect) -> Result<(), RunError> {
    let program = parse(&decode(source, dialect)?)?;
    execute(
        &program,
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
    )?;
    Ok(())
}

/// Like [`run`], but reads from the given byte source and returns the
/// produced output instead of streaming it to stdout.
pub fn run_captured(
    source: &str,
    dialect: &Dialect,
    input: &mut impl Read,
) -> Result<Vec<u8>, RunError> {
    let program = parse(&decode(source, dialect)?)?;
    let mut output: Vec<u8> = Vec::new();
    execute(&program, input, &mut output)?;
    Ok(output)
}
