use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Maximal run of ASCII digits
    Number,

    // Letter followed by letters or digits (keywords resolved from these)
    Identifier,

    Equals,

    OpenParen,
    CloseParen,

    // One of `+ - * /`. The four share a kind; the operator itself is
    // recoverable from the token text.
    BinaryOperator,

    // --- Keywords ---
    Let,
}

/// Resolve a keyword from an identifier string. Returns the keyword TokenKind
/// if the string is a keyword, or None if it's a plain identifier.
pub fn resolve_keyword(text: &str) -> Option<TokenKind> {
    // calc keywords are case-sensitive
    match text {
        "let" => Some(TokenKind::Let),
        _ => None,
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Number => write!(f, "number"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Equals => write!(f, "'='"),
            TokenKind::OpenParen => write!(f, "'('"),
            TokenKind::CloseParen => write!(f, "')'"),
            TokenKind::BinaryOperator => write!(f, "binary operator"),
            TokenKind::Let => write!(f, "'let'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_keyword() {
        assert_eq!(resolve_keyword("let"), Some(TokenKind::Let));
        assert_eq!(resolve_keyword("Let"), None);
        assert_eq!(resolve_keyword("LET"), None);
        assert_eq!(resolve_keyword("lets"), None);
        assert_eq!(resolve_keyword("x"), None);
        assert_eq!(resolve_keyword(""), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(TokenKind::Number.to_string(), "number");
        assert_eq!(TokenKind::Identifier.to_string(), "identifier");
        assert_eq!(TokenKind::Equals.to_string(), "'='");
        assert_eq!(TokenKind::OpenParen.to_string(), "'('");
        assert_eq!(TokenKind::CloseParen.to_string(), "')'");
        assert_eq!(TokenKind::BinaryOperator.to_string(), "binary operator");
        assert_eq!(TokenKind::Let.to_string(), "'let'");
    }
}
