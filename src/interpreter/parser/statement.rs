use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, check_nesting, expect_end, parse_expression_list, tokenize},
    },
};

/// Parses a single statement.
///
/// A statement is either an assignment `name = expression_list` or a bare
/// expression list. Assignment is recognised only when the very first two
/// tokens are an identifier and a single `=`; anywhere else an `=` is a
/// rejected construct, and `==` is always a comparison.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, column)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    if let Some((Token::Identifier(name), column)) = lookahead.next()
       && let Some((Token::Equals, _)) = lookahead.next()
    {
        tokens.next();
        tokens.next();
        let value_column = tokens.peek().map_or(0, |(_, c)| *c);
        let value = parse_expression_list(tokens)?;
        return Ok(Statement::Assignment { name: name.clone(),
                                          value,
                                          value_column,
                                          column: *column });
    }

    let column = tokens.peek().map_or(0, |(_, c)| *c);
    let expr = parse_expression_list(tokens)?;

    Ok(Statement::Expression { expr, column })
}

/// Parses one input line into a [`Statement`].
///
/// # Errors
/// The same errors as [`parse`](crate::interpreter::parser::core::parse).
///
/// # Example
/// ```
/// use reckon::{ast::Statement, interpreter::parser::statement::parse_line};
///
/// assert!(matches!(parse_line("rate = 0.2").unwrap(), Statement::Assignment { .. }));
/// assert!(matches!(parse_line("rate * 2").unwrap(), Statement::Expression { .. }));
/// assert!(parse_line("rate == 2").is_err());
/// ```
pub fn parse_line(source: &str) -> ParseResult<Statement> {
    let tokens = tokenize(source)?;
    check_nesting(&tokens)?;

    let mut iter = tokens.iter().peekable();
    let statement = parse_statement(&mut iter)?;
    expect_end(&mut iter)?;

    Ok(statement)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::parse_line;
    use crate::{
        ast::{Expr, LiteralValue, Statement},
        error::{Construct, ParseError},
    };

    #[test]
    fn assignment_is_its_own_production() {
        assert_eq!(parse_line("x = 42").unwrap(),
                   Statement::Assignment { name:         "x".to_string(),
                                           value:        Expr::Literal { value:  LiteralValue::Integer(42),
                                                                         column: 5, },
                                           value_column: 5,
                                           column:       1, });
    }

    #[test]
    fn value_column_skips_comments_and_newlines() {
        let Statement::Assignment { value_column, .. } = parse_line("x # a = b\n=  2 + 3").unwrap()
        else {
            panic!("expected an assignment");
        };
        assert_eq!(value_column, 14);
    }

    #[test]
    fn chained_assignment_is_rejected() {
        assert_eq!(parse_line("x = y = 1").unwrap_err(),
                   ParseError::Rejected { construct: Construct::Assignment,
                                          column:    7, });
    }

    #[test]
    fn augmented_assignment_is_rejected() {
        assert!(matches!(parse_line("x += 1"),
                         Err(ParseError::Rejected { construct: Construct::Assignment,
                                                    .. })));
    }

    #[test]
    fn keyword_target_is_rejected() {
        assert!(matches!(parse_line("lambda = 1"),
                         Err(ParseError::Rejected { construct: Construct::Lambda,
                                                    .. })));
    }
}
