use std::fs;
use std::path::PathBuf;

use calc_lexer::{tokenize, tokenize_strict, Token};
use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};

/// Tokenize a calc source file and print the token stream.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Source file to tokenize
    file: PathBuf,

    /// Fail on the first unrecognized character instead of printing the
    /// tokens scanned before it
    #[arg(long)]
    strict: bool,
}

fn print_tokens(tokens: &[Token<'_>]) {
    for token in tokens {
        println!("{} {:?}", token.kind, token.text);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let source = fs::read_to_string(&args.file)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", args.file.display()))?;

    if args.strict {
        let tokens = tokenize_strict(&source).into_diagnostic()?;
        print_tokens(&tokens);
        return Ok(());
    }

    let result = tokenize(&source);
    print_tokens(&result.tokens);
    for err in &result.errors {
        eprintln!("warning: {} at byte {}", err, err.span().start);
    }
    Ok(())
}
