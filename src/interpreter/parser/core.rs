use std::iter::Peekable;

use logos::Logos;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{LexError, Token},
        parser::{binary::parse_additive, utils::unexpected},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum bracket nesting accepted before parsing starts.
///
/// Brackets are the only construct the parser handles by recursion, so this
/// bound keeps the parser's stack usage fixed.
pub const MAX_NESTING: usize = 100;

/// Maximum number of tokens in a single input.
pub const MAX_TOKENS: usize = 10_000;

/// Splits the source into `(token, column)` pairs.
///
/// Columns are 1-based byte offsets into `source`.
///
/// # Errors
/// - `LiteralTooLarge` for integer literals that do not fit into an `i64`.
/// - `UnexpectedToken` for characters that start no token.
/// - `TooManyTokens` when the input exceeds [`MAX_TOKENS`].
///
/// # Example
/// ```
/// use reckon::interpreter::{lexer::Token, parser::core::tokenize};
///
/// let tokens = tokenize("x + 1").unwrap();
/// assert_eq!(tokens[1], (Token::Plus, 3));
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let column = lexer.span().start + 1;
        match token {
            Ok(tok) => tokens.push((tok, column)),
            Err(LexError::IntegerTooLarge) => {
                return Err(ParseError::LiteralTooLarge { literal: lexer.slice().to_string(),
                                                         column });
            },
            Err(LexError::UnrecognizedCharacter) => {
                return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                         column });
            },
        }
        if tokens.len() > MAX_TOKENS {
            return Err(ParseError::TooManyTokens { limit: MAX_TOKENS });
        }
    }

    Ok(tokens)
}

/// Parses a complete expression.
///
/// This is the entry point for expression parsing. The whole input must be
/// consumed; a top-level comma-separated list such as `1, 2` yields a tuple.
///
/// # Errors
/// Returns a syntax error for malformed input and a `Rejected` error naming
/// the construct when the input uses anything outside the allow-list.
///
/// # Example
/// ```
/// use reckon::{
///     error::{Construct, ParseError},
///     interpreter::parser::core::parse,
/// };
///
/// assert!(parse("2 + 3 * 4").is_ok());
/// assert!(matches!(parse("__import__('os')"),
///                  Err(ParseError::Rejected { construct: Construct::StringLiteral,
///                                             .. })));
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    check_nesting(&tokens)?;

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression_list(&mut iter)?;
    expect_end(&mut iter)?;

    Ok(expr)
}

/// Parses a single expression (no top-level commas).
///
/// Grammar: `expression := additive`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens)
}

/// Parses an expression list.
///
/// A single expression without a comma is returned as-is. One or more commas
/// produce an [`Expr::Tuple`]; a trailing comma is allowed, so `1,` is a
/// one-element tuple.
///
/// Grammar: `expression_list := expression ("," expression)* ","?`
pub fn parse_expression_list<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let column = tokens.peek().map_or(0, |(_, c)| *c);
    let first = parse_expression(tokens)?;

    if !matches!(tokens.peek(), Some((Token::Comma, _))) {
        return Ok(first);
    }

    let mut elements = vec![first];
    while let Some((Token::Comma, _)) = tokens.peek() {
        tokens.next();
        match tokens.peek() {
            Some((tok, _)) if starts_expression(tok) => elements.push(parse_expression(tokens)?),
            _ => break,
        }
    }

    Ok(Expr::Tuple { elements, column })
}

/// Returns `true` if `token` can begin an expression.
pub(crate) const fn starts_expression(token: &Token) -> bool {
    matches!(token,
             Token::Integer(_)
             | Token::Real(_)
             | Token::Identifier(_)
             | Token::LParen
             | Token::LBracket
             | Token::Plus
             | Token::Minus)
}

/// Fails if any token is left in the stream.
pub(crate) fn expect_end<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        None => Ok(()),
        Some((tok, column)) => Err(unexpected(tok, *column)),
    }
}

/// Rejects inputs whose brackets nest deeper than [`MAX_NESTING`].
pub(crate) fn check_nesting(tokens: &[(Token, usize)]) -> ParseResult<()> {
    let mut depth = 0usize;
    for (token, _) in tokens {
        match token {
            Token::LParen | Token::LBracket | Token::LBrace => {
                depth += 1;
                if depth > MAX_NESTING {
                    return Err(ParseError::TooDeep { limit: MAX_NESTING });
                }
            },
            Token::RParen | Token::RBracket | Token::RBrace => depth = depth.saturating_sub(1),
            _ => {},
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{MAX_NESTING, parse, tokenize};
    use crate::{
        ast::{BinaryOperator, Expr, LiteralValue, UnaryOperator},
        error::{Construct, ErrorKind, ParseError},
    };

    fn int(value: i64, column: usize) -> Expr {
        Expr::Literal { value: LiteralValue::Integer(value),
                        column }
    }

    fn binary(left: Expr, op: BinaryOperator, right: Expr, column: usize) -> Expr {
        Expr::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         column }
    }

    fn rejected(source: &str) -> Construct {
        match parse(source) {
            Err(ParseError::Rejected { construct, .. }) => construct,
            other => panic!("expected {source:?} to be rejected, got {other:?}"),
        }
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(parse("2 + 3 * 4").unwrap(),
                   binary(int(2, 1),
                          BinaryOperator::Add,
                          binary(int(3, 5), BinaryOperator::Mul, int(4, 9), 7),
                          3));
    }

    #[test]
    fn power_is_right_associative() {
        assert_eq!(parse("2**3**2").unwrap(),
                   binary(int(2, 1),
                          BinaryOperator::Pow,
                          binary(int(3, 4), BinaryOperator::Pow, int(2, 7), 5),
                          2));
    }

    #[test]
    fn power_binds_tighter_than_leading_sign() {
        assert_eq!(parse("-2**2").unwrap(),
                   Expr::UnaryOp { op:     UnaryOperator::Negate,
                                   expr:   Box::new(binary(int(2, 2),
                                                           BinaryOperator::Pow,
                                                           int(2, 5),
                                                           3)),
                                   column: 1, });
    }

    #[test]
    fn signed_exponent() {
        assert_eq!(parse("2**-1").unwrap(),
                   binary(int(2, 1),
                          BinaryOperator::Pow,
                          Expr::UnaryOp { op:     UnaryOperator::Negate,
                                          expr:   Box::new(int(1, 5)),
                                          column: 4, },
                          2));
    }

    #[test]
    fn tuples_and_grouping() {
        assert_eq!(parse("(1)").unwrap(), int(1, 2));
        assert_eq!(parse("(1,)").unwrap(),
                   Expr::Tuple { elements: vec![int(1, 2)],
                                 column:   2, });
        assert_eq!(parse("()").unwrap(),
                   Expr::Tuple { elements: vec![],
                                 column:   1, });
        assert_eq!(parse("1, 2").unwrap(),
                   Expr::Tuple { elements: vec![int(1, 1), int(2, 4)],
                                 column:   1, });
    }

    #[test]
    fn lists() {
        assert_eq!(parse("[1, 2,]").unwrap(),
                   Expr::List { elements: vec![int(1, 2), int(2, 5)],
                                column:   1, });
    }

    #[test]
    fn malformed_input_is_a_syntax_error() {
        for source in ["", "1 +", "(1", "2 3", "f(1,,2)", "1 $ 2", "f(x=1, 2)", "f(x=1, x=2)"] {
            let err = parse(source).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Syntax, "{source:?} gave {err:?}");
        }
    }

    #[test]
    fn oversized_literal() {
        assert!(matches!(parse("1 + 123456789012345678901234567890"),
                         Err(ParseError::LiteralTooLarge { column: 5, .. })));
    }

    #[test]
    fn disallowed_constructs_are_named() {
        assert_eq!(rejected("__import__('os')"), Construct::StringLiteral);
        assert_eq!(rejected("x.real"), Construct::AttributeAccess);
        assert_eq!(rejected("xs[0]"), Construct::Subscript);
        assert_eq!(rejected("lambda: 1"), Construct::Lambda);
        assert_eq!(rejected("[x for x in xs]"), Construct::Comprehension);
        assert_eq!(rejected("sum(x for x in xs)"), Construct::Comprehension);
        assert_eq!(rejected("1 < 2"), Construct::Comparison);
        assert_eq!(rejected("1 == 2"), Construct::Comparison);
        assert_eq!(rejected("1 and 2"), Construct::BooleanOperator);
        assert_eq!(rejected("not 1"), Construct::BooleanOperator);
        assert_eq!(rejected("1 if 2 else 3"), Construct::ConditionalExpression);
        assert_eq!(rejected("1 ^ 2"), Construct::BitwiseOperator);
        assert_eq!(rejected("a @ b"), Construct::MatrixMultiplication);
        assert_eq!(rejected("(y := 2)"), Construct::Assignment);
        assert_eq!(rejected("f(*xs)"), Construct::Starred);
        assert_eq!(rejected("{1: 2}"), Construct::DictOrSet);
        assert_eq!(rejected("import os"), Construct::Statement);
        assert_eq!(rejected("1; 2"), Construct::Statement);
    }

    #[test]
    fn rejection_reports_the_construct_column() {
        assert_eq!(parse("1 + x.y").unwrap_err(),
                   ParseError::Rejected { construct: Construct::AttributeAccess,
                                          column:    6, });
    }

    #[test]
    fn deep_nesting_is_rejected_before_parsing() {
        let source = format!("{}1{}", "(".repeat(MAX_NESTING + 1), ")".repeat(MAX_NESTING + 1));
        assert_eq!(parse(&source).unwrap_err(),
                   ParseError::TooDeep { limit: MAX_NESTING });
    }

    #[test]
    fn long_sign_chains_do_not_recurse() {
        let source = format!("{}1", "-".repeat(5_000));
        assert!(parse(&source).is_ok());
    }

    #[test]
    fn columns_are_one_based() {
        let tokens = tokenize("  pi").unwrap();
        assert_eq!(tokens[0].1, 3);
    }
}
