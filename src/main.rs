use std::{io, path::PathBuf};

use thiserror::Error;

use braindog::{
    decode, encode, execute, parse, DecodeError, Dialect, EncodeError, ExecutionError, ParseError,
};
use clap::{Parser, ValueEnum};

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Decoding error: {0}")]
    DecodeError(#[from] DecodeError),
    #[error("Parsing error: {0}")]
    ParserError(#[from] ParseError),
    #[error("Execution error: {0}")]
    ExecutionError(#[from] ExecutionError),
    #[error("Encoding error: {0}")]
    EncodeError(#[from] EncodeError),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Mode {
    /// Decode and interpret the program
    Run,
    /// Print the canonical opcode form of the program
    Decode,
    /// Translate canonical opcodes into phonetic text
    Encode,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum DialectName {
    /// Dog-bark vocabulary, permissive
    Bark,
    /// Door-announcement vocabulary, strict
    Kq,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input source file
    input_file: PathBuf,

    /// Select program mode
    #[arg(short, long, value_name = "MODE")]
    mode: Option<Mode>,

    /// Select dialect
    #[arg(short, long, value_name = "DIALECT")]
    dialect: Option<DialectName>,
}

fn main() -> Result<(), ProgramError> {
    let args = Args::parse();

    let source = std::fs::read_to_string(&args.input_file)?;

    let dialect = match args.dialect.unwrap_or(DialectName::Bark) {
        DialectName::Bark => Dialect::bark(),
        DialectName::Kq => Dialect::kq(),
    };

    match args.mode.unwrap_or(Mode::Run) {
        Mode::Run => {
            let program = parse(&decode(&source, &dialect)?)?;
            execute(
                &program,
                &mut io::stdin().lock(),
                &mut io::stdout().lock(),
            )?;
        }
        Mode::Decode => {
            println!("{}", decode(&source, &dialect)?);
        }
        Mode::Encode => {
            println!("{}", encode(source.trim_end(), &dialect)?);
        }
    }

    Ok(())
}
