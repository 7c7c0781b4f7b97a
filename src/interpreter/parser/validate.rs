use crate::{ast::Expr, error::ParseError, interpreter::parser::core::ParseResult};

/// Default maximum depth of a syntax tree.
pub const MAX_DEPTH: usize = 128;

/// Default maximum number of nodes in a syntax tree.
pub const MAX_NODES: usize = 10_000;

/// Size limits a tree must satisfy before it is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum nesting depth; the root is at depth 1.
    pub max_depth: usize,
    /// Maximum number of nodes, keyword argument values included.
    pub max_nodes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_depth: MAX_DEPTH,
               max_nodes: MAX_NODES, }
    }
}

/// Checks every node of `tree` against `limits`.
///
/// The traversal is pre-order and uses an explicit stack, so validating a
/// tree never recurses regardless of its shape. A tree that passes can be
/// evaluated with recursion bounded by `limits.max_depth`.
///
/// # Errors
/// - [`ParseError::TooDeep`] if any node lies deeper than `max_depth`.
/// - [`ParseError::TooManyNodes`] if the tree has more than `max_nodes` nodes.
///
/// # Example
/// ```
/// use reckon::interpreter::parser::{
///     core::parse,
///     validate::{Limits, validate},
/// };
///
/// let tree = parse("1 + 2 * 3").unwrap();
/// assert!(validate(&tree, Limits::default()).is_ok());
///
/// let tight = Limits { max_depth: 2,
///                      max_nodes: 100, };
/// assert!(validate(&tree, tight).is_err());
/// ```
pub fn validate(tree: &Expr, limits: Limits) -> ParseResult<()> {
    let mut stack = vec![(tree, 1usize)];
    let mut nodes = 0usize;

    while let Some((node, depth)) = stack.pop() {
        nodes += 1;
        if nodes > limits.max_nodes {
            return Err(ParseError::TooManyNodes { limit: limits.max_nodes });
        }
        if depth > limits.max_depth {
            return Err(ParseError::TooDeep { limit: limits.max_depth });
        }

        let child = depth + 1;
        match node {
            Expr::Literal { .. } | Expr::Variable { .. } => {},
            Expr::UnaryOp { expr, .. } => stack.push((expr, child)),
            Expr::BinaryOp { left, right, .. } => {
                stack.push((right, child));
                stack.push((left, child));
            },
            Expr::Call { callee,
                         arguments,
                         keywords,
                         .. } => {
                stack.extend(keywords.iter().rev().map(|k| (&k.value, child)));
                stack.extend(arguments.iter().rev().map(|a| (a, child)));
                stack.push((callee, child));
            },
            Expr::Tuple { elements, .. } | Expr::List { elements, .. } => {
                stack.extend(elements.iter().rev().map(|e| (e, child)));
            },
        }
    }

    Ok(())
}
