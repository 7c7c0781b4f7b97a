use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, KeywordArgument, UnaryOperator},
    error::{Construct, ParseError},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression, parse_expression_list},
            utils::{parse_comma_separated, unexpected},
        },
    },
};

/// A `**` whose right operand is still being parsed.
struct PendingPower {
    prefixes: Vec<(UnaryOperator, usize)>,
    base:     Expr,
    column:   usize,
}

/// Parses a unary expression together with any `**` chain that follows it.
///
/// Prefix operators:
/// - `-`  (numeric negation)
/// - `+`  (numeric identity)
///
/// The power operator binds tighter than a prefix operator on its left and is
/// right-associative, while its right operand may itself carry prefixes:
/// `-2 ** 2` is `-(2 ** 2)` and `2 ** -1` is `2 ** (-1)`.
///
/// Both prefix runs and power chains are collected in a loop and folded
/// afterwards, so a chain of any length is parsed without recursion.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+")* power
///     power := postfix ("**" unary)?
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`], an [`Expr::BinaryOp`] with [`BinaryOperator::Pow`],
/// or a postfix expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut pending: Vec<PendingPower> = Vec::new();

    loop {
        let mut prefixes = Vec::new();
        while let Some((token, column)) = tokens.peek() {
            let op = match token {
                Token::Minus => UnaryOperator::Negate,
                Token::Plus => UnaryOperator::Plus,
                _ => break,
            };
            prefixes.push((op, *column));
            tokens.next();
        }

        let primary = parse_primary(tokens)?;
        let base = parse_postfix(tokens, primary)?;

        if let Some((Token::DoubleStar, column)) = tokens.peek() {
            tokens.next();
            pending.push(PendingPower { prefixes,
                                        base,
                                        column: *column });
            continue;
        }

        let mut node = apply_prefixes(prefixes, base);
        while let Some(PendingPower { prefixes, base, column }) = pending.pop() {
            let power = Expr::BinaryOp { left: Box::new(base),
                                         op: BinaryOperator::Pow,
                                         right: Box::new(node),
                                         column };
            node = apply_prefixes(prefixes, power);
        }
        return Ok(node);
    }
}

/// Wraps `node` in the collected prefix operators, innermost last.
fn apply_prefixes(prefixes: Vec<(UnaryOperator, usize)>, node: Expr) -> Expr {
    prefixes.into_iter()
            .rev()
            .fold(node, |expr, (op, column)| Expr::UnaryOp { op,
                                                              expr: Box::new(expr),
                                                              column })
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - numeric literals
/// - identifiers
/// - parenthesized expressions and tuples
/// - list displays
///
/// Any other token is an error. Tokens that introduce a disallowed construct
/// (`lambda`, `{`, `not`, a string, a statement keyword, ...) produce
/// [`ParseError::Rejected`].
///
/// Grammar (simplified):
/// ```text
///     primary := INTEGER | REAL | IDENTIFIER
///              | "(" ")"
///              | "(" expression_list ")"
///              | "[" (expression ("," expression)* ","?)? "]"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, column) = tokens.next().ok_or(ParseError::UnexpectedEndOfInput)?;
    let column = *column;

    match token {
        Token::Integer(n) => Ok(Expr::Literal { value: n.into(),
                                                column }),
        Token::Real(r) => Ok(Expr::Literal { value: r.into(),
                                             column }),
        Token::Identifier(name) => Ok(Expr::Variable { name: name.clone(),
                                                       column }),
        Token::LParen => parse_grouping(tokens, column),
        Token::LBracket => {
            let elements =
                parse_comma_separated(tokens, parse_expression, &Token::RBracket, ']', column)?;
            Ok(Expr::List { elements,
                            column })
        },
        Token::Star | Token::DoubleStar => Err(ParseError::Rejected { construct: Construct::Starred,
                                                                       column }),
        tok => Err(unexpected(tok, column)),
    }
}

/// Parses the rest of a parenthesized expression after its `(`.
///
/// `()` is the empty tuple, `(x)` is plain grouping and returns `x` as-is,
/// and any comma inside the parentheses makes a tuple.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, column: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();
        return Ok(Expr::Tuple { elements: Vec::new(),
                                column });
    }

    let expr = parse_expression_list(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some((tok, col)) => Err(unexpected(tok, *col)),
        None => Err(ParseError::ExpectedClosing { delimiter: ')',
                                                  column }),
    }
}

/// Parses call suffixes applied to an expression.
///
/// Calls may be chained, so `f(1)(2)` calls the result of `f(1)`. The callee
/// can be any primary expression; whether it is callable is decided at
/// evaluation time.
///
/// Grammar:
/// ```text
///     postfix   := primary ("(" arguments? ")")*
///     arguments := argument ("," argument)* ","?
///     argument  := IDENTIFIER "=" expression | expression
/// ```
/// # Errors
/// Returns a `ParseError` if:
/// - a positional argument follows a keyword argument,
/// - a keyword is passed twice,
/// - the closing `)` is missing,
/// - an argument fails to parse.
fn parse_postfix<'a, I>(tokens: &mut Peekable<I>, mut node: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    while let Some((Token::LParen, column)) = tokens.peek() {
        let column = *column;
        tokens.next();

        let mut arguments = Vec::new();
        let mut keywords: Vec<KeywordArgument> = Vec::new();
        loop {
            if let Some((Token::RParen, _)) = tokens.peek() {
                tokens.next();
                break;
            }

            let mut lookahead = tokens.clone();
            if let Some((Token::Identifier(name), name_column)) = lookahead.next()
               && let Some((Token::Equals, _)) = lookahead.next()
            {
                tokens.next();
                tokens.next();
                if keywords.iter().any(|k| k.name == *name) {
                    return Err(ParseError::DuplicateKeyword { name:   name.clone(),
                                                              column: *name_column, });
                }
                let value = parse_expression(tokens)?;
                keywords.push(KeywordArgument { name: name.clone(),
                                                value,
                                                column: *name_column });
            } else {
                if !keywords.is_empty() {
                    let position = tokens.peek().map_or(column, |(_, c)| *c);
                    return Err(ParseError::PositionalAfterKeyword { column: position });
                }
                arguments.push(parse_expression(tokens)?);
            }

            match tokens.next() {
                Some((Token::Comma, _)) => {},
                Some((Token::RParen, _)) => break,
                Some((tok, col)) => return Err(unexpected(tok, *col)),
                None => return Err(ParseError::ExpectedClosing { delimiter: ')',
                                                                 column }),
            }
        }

        node = Expr::Call { callee: Box::new(node),
                            arguments,
                            keywords,
                            column };
    }
    Ok(node)
}
