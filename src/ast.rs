/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw numeric constants that can appear directly in
/// source code. Integer literals keep integer semantics until an operation
/// forces promotion to a real.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
}

impl<T: Into<Self> + Clone> From<&T> for LiteralValue {
    fn from(v: &T) -> Self {
        v.clone().into()
    }
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` is closed over the allow-listed syntactic forms: literals, names,
/// unary and binary arithmetic, calls, tuples and lists. Constructs such as
/// attribute access, subscripts, lambdas or comprehensions have no variant, so
/// a tree that exists is a tree that may be evaluated.
///
/// Every node carries the 1-based column of the token that introduced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value:  LiteralValue,
        /// Column in the source text.
        column: usize,
    },
    /// Reference to a variable, constant or builtin by name.
    Variable {
        /// Name being looked up.
        name:   String,
        /// Column in the source text.
        column: usize,
    },
    /// A prefix unary operation (`+x`, `-x`).
    UnaryOp {
        /// The unary operator to apply.
        op:     UnaryOperator,
        /// The operand expression.
        expr:   Box<Self>,
        /// Column in the source text.
        column: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Column of the operator in the source text.
        column: usize,
    },
    /// Call expression (e.g. `hypot(3, 4)` or `log(x, base=2)`).
    Call {
        /// Expression producing the callee, usually a [`Expr::Variable`].
        callee:    Box<Self>,
        /// Positional arguments in source order.
        arguments: Vec<Self>,
        /// Keyword arguments in source order.
        keywords:  Vec<KeywordArgument>,
        /// Column of the opening parenthesis.
        column:    usize,
    },
    /// Tuple display, e.g. `(1, 2)`, `(1,)` or `()`.
    Tuple {
        /// Elements of the tuple.
        elements: Vec<Self>,
        /// Column in the source text.
        column:   usize,
    },
    /// List display, e.g. `[1, 2, 3]`.
    List {
        /// Elements of the list.
        elements: Vec<Self>,
        /// Column in the source text.
        column:   usize,
    },
}

impl Expr {
    /// Gets the column number from `self`.
    /// ## Example
    /// ```
    /// use reckon::ast::Expr;
    ///
    /// let expr = Expr::Variable { name:   "x".to_string(),
    ///                             column: 5, };
    ///
    /// assert_eq!(expr.column(), 5);
    /// ```
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Literal { column, .. }
            | Self::Variable { column, .. }
            | Self::UnaryOp { column, .. }
            | Self::BinaryOp { column, .. }
            | Self::Call { column, .. }
            | Self::Tuple { column, .. }
            | Self::List { column, .. } => *column,
        }
    }
}

/// A `name=value` argument of a call.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordArgument {
    /// The keyword.
    pub name:   String,
    /// The argument expression.
    pub value:  Expr,
    /// Column of the keyword in the source text.
    pub column: usize,
}

/// Represents a single input line.
///
/// A line is either a bare expression or an assignment `name = expression`.
/// Assignment is a grammar production of its own and never appears inside an
/// expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr:   Expr,
        /// Column of the first token.
        column: usize,
    },
    /// A variable assignment binding a name to an expression.
    Assignment {
        /// The name of the variable.
        name:   String,
        /// The value which is being assigned.
        value:        Expr,
        /// Column of the first token of the value.
        value_column: usize,
        /// Column of the assigned name.
        column:       usize,
    },
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// True division (`/`)
    Div,
    /// Floor division (`//`)
    FloorDiv,
    /// Modulo with the sign of the divisor (`%`)
    Mod,
    /// Exponentiation (`**`)
    Pow,
}

/// Represents a prefix unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Pow, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            FloorDiv => "//",
            Mod => "%",
            Pow => "**",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Negate => write!(f, "-"),
        }
    }
}
