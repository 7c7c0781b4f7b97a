/// The evaluator module reduces syntax trees to values.
///
/// The evaluator traverses the AST, applies the arithmetic and sequence
/// operators and calls builtins. It reads names from an [`Environment`]
/// but never modifies it.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Dispatches calls to the closed set of builtin functions.
/// - Reports runtime errors such as division by zero or unknown names.
///
/// [`Environment`]: environment::Environment
pub mod evaluator;
/// The environment module holds the names an expression can see.
///
/// User variables live in an [`Environment`](environment::Environment);
/// constants and builtins are static globals.
pub mod environment;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a meaningful language element such as a number, an
/// identifier, an operator or a keyword. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their column.
/// - Recognizes the tokens of disallowed constructs so they can be named.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the structure of an expression or an assignment.
/// Only allow-listed constructs can be represented; everything else is
/// rejected here, before anything is evaluated.
///
/// # Responsibilities
/// - Converts tokens into AST nodes.
/// - Reports syntax errors and rejected constructs with their column.
/// - Validates tree size against configurable limits.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Integers, reals, tuples, lists and builtin functions, together with their
/// display and storage forms.
pub mod value;
