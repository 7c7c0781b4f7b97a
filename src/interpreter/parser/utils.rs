use std::iter::Peekable;

use crate::{
    error::{Construct, ParseError},
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is used by list displays. It repeatedly calls `parse_item` to
/// parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list, and a
/// trailing comma before the closing token is allowed.
///
/// Grammar (simplified): `list := (item ("," item)* ","?)?`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the opening token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g., `]`).
/// - `delimiter`: The closing character, for error reporting.
/// - `column`: Column of the opening token, for error reporting.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered (classified by [`unexpected`]),
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token,
    delimiter: char,
    column: usize)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    loop {
        if let Some((tok, _)) = tokens.peek()
           && tok == closing
        {
            tokens.next();
            break;
        }
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => break,
            Some((tok, col)) => return Err(unexpected(tok, *col)),
            None => return Err(ParseError::ExpectedClosing { delimiter, column }),
        }
    }
    Ok(items)
}

/// Builds the error for a token that cannot appear at the current position.
///
/// If the token introduces a disallowed construct the error is
/// [`ParseError::Rejected`] naming it; otherwise it is a plain
/// [`ParseError::UnexpectedToken`].
///
/// # Example
/// ```
/// use reckon::{
///     error::{Construct, ParseError},
///     interpreter::{lexer::Token, parser::utils::unexpected},
/// };
///
/// assert_eq!(unexpected(&Token::Dot, 4),
///            ParseError::Rejected { construct: Construct::AttributeAccess,
///                                   column:    4, });
/// assert_eq!(unexpected(&Token::RParen, 2),
///            ParseError::UnexpectedToken { token:  ")".to_string(),
///                                          column: 2, });
/// ```
#[must_use]
pub fn unexpected(token: &Token, column: usize) -> ParseError {
    disallowed_construct(token).map_or_else(|| ParseError::UnexpectedToken { token: token.to_string(),
                                                                             column },
                                            |construct| ParseError::Rejected { construct,
                                                                               column })
}

/// Returns the construct a token introduces when it appears after a complete
/// operand, or `None` if the token belongs to no disallowed construct.
#[must_use]
pub const fn disallowed_construct(token: &Token) -> Option<Construct> {
    let construct = match token {
        Token::String(_) => Construct::StringLiteral,
        Token::Dot => Construct::AttributeAccess,
        Token::LBracket => Construct::Subscript,
        Token::Lambda => Construct::Lambda,
        Token::For => Construct::Comprehension,
        Token::Comparison(_) | Token::In | Token::Is => Construct::Comparison,
        Token::And | Token::Or | Token::Not => Construct::BooleanOperator,
        Token::If | Token::Else => Construct::ConditionalExpression,
        Token::Bitwise(_) => Construct::BitwiseOperator,
        Token::At => Construct::MatrixMultiplication,
        Token::Equals | Token::Walrus | Token::AugmentedAssign(_) => Construct::Assignment,
        Token::LBrace | Token::RBrace => Construct::DictOrSet,
        Token::StatementKeyword(_) | Token::Colon | Token::Semicolon => Construct::Statement,
        _ => return None,
    };
    Some(construct)
}
