use logos::Logos;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Besides the tokens of the accepted grammar, the lexer also recognizes the
/// tokens that introduce disallowed constructs (strings, attribute dots,
/// comparisons, keywords, ...). The parser uses them to name the construct it
/// rejects instead of reporting a bare syntax error.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\f\r\n]+")]
#[logos(skip r"#[^\n]*")]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5`, `2.`, `2.0` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_float)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Identifier tokens; variable or function names such as `x` or `sqrt`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// String literals. Never accepted by the parser.
    #[regex(r#""([^"\\\n]|\\.)*""#, |lex| lex.slice().to_string())]
    #[regex(r#"'([^'\\\n]|\\.)*'"#, |lex| lex.slice().to_string())]
    String(String),

    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `/`
    #[token("/")]
    Slash,
    /// `//`
    #[token("//")]
    DoubleSlash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,

    /// `.`
    #[token(".")]
    Dot,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:=`
    #[token(":=")]
    Walrus,
    /// `@`
    #[token("@")]
    At,
    /// `+=`, `-=`, `**=`, `//=`, `>>=`, ...
    #[regex(r"(\+|-|\*\*?|//?|%|@|&|\||\^|<<|>>)=", |lex| lex.slice().to_string())]
    AugmentedAssign(String),
    /// `==`, `!=`, `<`, `>`, `<=`, `>=`
    #[regex(r"==|!=|<=|>=|<|>", |lex| lex.slice().to_string())]
    Comparison(String),
    /// `&`, `|`, `^`, `~`, `<<`, `>>`
    #[regex(r"&|\||\^|~|<<|>>", |lex| lex.slice().to_string())]
    Bitwise(String),

    /// `lambda`
    #[token("lambda")]
    Lambda,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `for`
    #[token("for")]
    For,
    /// `in`
    #[token("in")]
    In,
    /// `is`
    #[token("is")]
    Is,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,
    /// Keywords that only begin or belong to statements, such as `import`.
    #[token("import", keyword)]
    #[token("from", keyword)]
    #[token("as", keyword)]
    #[token("def", keyword)]
    #[token("class", keyword)]
    #[token("return", keyword)]
    #[token("del", keyword)]
    #[token("global", keyword)]
    #[token("nonlocal", keyword)]
    #[token("pass", keyword)]
    #[token("break", keyword)]
    #[token("continue", keyword)]
    #[token("raise", keyword)]
    #[token("try", keyword)]
    #[token("except", keyword)]
    #[token("finally", keyword)]
    #[token("while", keyword)]
    #[token("with", keyword)]
    #[token("assert", keyword)]
    #[token("yield", keyword)]
    #[token("async", keyword)]
    #[token("await", keyword)]
    StatementKeyword(String),
}

/// Errors produced while tokenizing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LexError {
    /// The input contains a character that starts no token.
    #[default]
    UnrecognizedCharacter,
    /// An integer literal does not fit into an `i64`.
    IntegerTooLarge,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Real(r) => return write!(f, "{r:?}"),
            Self::Integer(n) => return write!(f, "{n}"),
            Self::Identifier(s)
            | Self::String(s)
            | Self::AugmentedAssign(s)
            | Self::Comparison(s)
            | Self::Bitwise(s)
            | Self::StatementKeyword(s) => s.as_str(),
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::DoubleStar => "**",
            Self::Slash => "/",
            Self::DoubleSlash => "//",
            Self::Percent => "%",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Comma => ",",
            Self::Equals => "=",
            Self::Dot => ".",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Colon => ":",
            Self::Semicolon => ";",
            Self::Walrus => ":=",
            Self::At => "@",
            Self::Lambda => "lambda",
            Self::If => "if",
            Self::Else => "else",
            Self::For => "for",
            Self::In => "in",
            Self::Is => "is",
            Self::And => "and",
            Self::Or => "or",
            Self::Not => "not",
        };
        write!(f, "{text}")
    }
}

/// Returns `true` if `name` lexes as exactly one identifier.
///
/// Keywords such as `lambda` or `import` are not identifiers.
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::is_identifier;
///
/// assert!(is_identifier("rate_2"));
/// assert!(!is_identifier("2rate"));
/// assert!(!is_identifier("lambda"));
/// assert!(!is_identifier(" x"));
/// ```
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut lexer = Token::lexer(name);
    matches!(lexer.next(), Some(Ok(Token::Identifier(_))))
    && lexer.span() == (0..name.len())
    && lexer.next().is_none()
}

/// Parses a floating-point literal from the current token slice.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// # Errors
/// Returns [`LexError::IntegerTooLarge`] when the literal does not fit into an
/// `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexError> {
    lex.slice().parse().map_err(|_| LexError::IntegerTooLarge)
}

/// Captures the text of a statement keyword.
fn keyword(lex: &logos::Lexer<Token>) -> String {
    lex.slice().to_string()
}

#[cfg(test)]
mod tests {
    use logos::Logos;
    use pretty_assertions::assert_eq;

    use super::{LexError, Token};

    fn lex(source: &str) -> Vec<Result<Token, LexError>> {
        Token::lexer(source).collect()
    }

    #[test]
    fn numbers_and_operators() {
        assert_eq!(lex("2 ** 10 // 3"),
                   vec![Ok(Token::Integer(2)),
                        Ok(Token::DoubleStar),
                        Ok(Token::Integer(10)),
                        Ok(Token::DoubleSlash),
                        Ok(Token::Integer(3))]);
        assert_eq!(lex("1.5e3 .5 2."),
                   vec![Ok(Token::Real(1500.0)), Ok(Token::Real(0.5)), Ok(Token::Real(2.0))]);
    }

    #[test]
    fn keywords_take_priority_over_identifiers() {
        assert_eq!(lex("lambda lambdas"),
                   vec![Ok(Token::Lambda), Ok(Token::Identifier("lambdas".to_string()))]);
        assert_eq!(lex("import"),
                   vec![Ok(Token::StatementKeyword("import".to_string()))]);
    }

    #[test]
    fn comparison_and_assignment_tokens_are_distinct() {
        assert_eq!(lex("= == += <="),
                   vec![Ok(Token::Equals),
                        Ok(Token::Comparison("==".to_string())),
                        Ok(Token::AugmentedAssign("+=".to_string())),
                        Ok(Token::Comparison("<=".to_string()))]);
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(lex("1 # one"), vec![Ok(Token::Integer(1))]);
    }

    #[test]
    fn oversized_integer_is_an_error() {
        assert_eq!(lex("99999999999999999999"), vec![Err(LexError::IntegerTooLarge)]);
    }

    #[test]
    fn strings_are_tokens() {
        assert_eq!(lex("'os'"), vec![Ok(Token::String("'os'".to_string()))]);
    }
}
