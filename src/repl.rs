//! Line-oriented read/print loop over the scanner and parser.

use std::io::{self, BufRead, Write};

use crate::{lexer::lexer::Lexer, parser::parser::parse};

pub const PROMPT: &str = "> ";

/// What the loop prints for each line read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One token per line
    Tokens,
    /// The rendered program, or the diagnostics if there were any
    Ast,
}

/// Writes the banner shown before the first prompt.
pub fn greet<W: Write>(output: &mut W, user: &str) -> io::Result<()> {
    writeln!(output, "Hello {}, this is the Monkey REPL!", user)
}

/// Runs the loop until `input` is exhausted.
pub fn start<R: BufRead, W: Write>(input: R, output: &mut W, mode: Mode) -> io::Result<()> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        match mode {
            Mode::Tokens => print_tokens(&line, output)?,
            Mode::Ast => print_program(&line, output)?,
        }
        write!(output, "{}", PROMPT)?;
        output.flush()?;
    }

    Ok(())
}

fn print_tokens<W: Write>(line: &str, output: &mut W) -> io::Result<()> {
    for token in Lexer::new(line) {
        writeln!(output, "{}", token)?;
    }
    Ok(())
}

fn print_program<W: Write>(line: &str, output: &mut W) -> io::Result<()> {
    let (program, errors) = parse(line);

    if errors.is_empty() {
        writeln!(output, "{}", program.render())
    } else {
        print_errors(&errors, output)
    }
}

pub fn print_errors<W: Write>(errors: &[String], output: &mut W) -> io::Result<()> {
    writeln!(output, "parser errors:")?;
    for error in errors {
        writeln!(output, "\t{}", error)?;
    }
    Ok(())
}
