pub mod diagnostics;
pub mod lexer;
pub mod span;
pub mod token;

pub use diagnostics::LexError;
pub use lexer::{Lexer, Token};
pub use span::Span;
pub use token::TokenKind;

pub struct TokenizeResult<'src> {
    pub tokens: Vec<Token<'src>>,
    pub errors: Vec<LexError>,
}

/// Tokenize `source`, scanning left to right until the end of input or the
/// first unrecognized character. An unrecognized character stops the scan
/// and is recorded in `errors`; the tokens produced before it are returned
/// as-is.
pub fn tokenize(source: &str) -> TokenizeResult<'_> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token() {
        tokens.push(token);
    }
    TokenizeResult {
        tokens,
        errors: lexer.errors,
    }
}

/// Like [`tokenize`], but surfaces an unrecognized character as an error
/// instead of silently truncating the token stream.
pub fn tokenize_strict(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let TokenizeResult { tokens, errors } = tokenize(source);
    match errors.into_iter().next() {
        Some(err) => Err(err),
        None => Ok(tokens),
    }
}
