use crate::{
    ast::{Expr, KeywordArgument},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::EvalResult,
            function::{aggregate, builtin, factorial, log, number_theory, sqrt},
            utils::describe_counts,
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the column of
/// the call, and returns the computed value.
type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
/// - `Variadic` accepts any number of arguments, including none.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
    Variadic,
}

/// Defines the builtin functions.
///
/// Each entry provides:
/// - the enum variant,
/// - the name under which the builtin is looked up,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces the [`Builtin`] enum, its name, arity and
/// implementation lookups, and `BUILTIN_FUNCTIONS` (the list of names).
macro_rules! builtin_functions {
    (
        $(
            $variant:ident => {
                name: $name:literal,
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// A builtin function.
        ///
        /// The set of builtins is closed: a [`Value::Function`] can only hold
        /// one of these variants, so a call can never reach anything that is
        /// not listed here.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Builtin {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )*
        }

        /// Names of all builtin functions, in declaration order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];

        impl Builtin {
            /// All builtins, in declaration order.
            pub const ALL: &'static [Self] = &[
                $(Self::$variant,)*
            ];

            /// Returns the name the builtin is looked up by.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            const fn arity(self) -> Arity {
                match self {
                    $(Self::$variant => $arity,)*
                }
            }

            fn func(self) -> BuiltinFn {
                match self {
                    $(Self::$variant => $func,)*
                }
            }
        }
    };
}

builtin_functions! {
    Sin       => { name: "sin",       arity: Arity::Exact(1),        func: builtin::sin },
    Cos       => { name: "cos",       arity: Arity::Exact(1),        func: builtin::cos },
    Tan       => { name: "tan",       arity: Arity::Exact(1),        func: builtin::tan },
    Asin      => { name: "asin",      arity: Arity::Exact(1),        func: builtin::asin },
    Acos      => { name: "acos",      arity: Arity::Exact(1),        func: builtin::acos },
    Atan      => { name: "atan",      arity: Arity::Exact(1),        func: builtin::atan },
    Log       => { name: "log",       arity: Arity::OneOf(&[1, 2]),  func: |args, column| log::log("log", args, column) },
    Ln        => { name: "ln",        arity: Arity::OneOf(&[1, 2]),  func: |args, column| log::log("ln", args, column) },
    Log10     => { name: "log10",     arity: Arity::Exact(1),        func: log::log10 },
    Sqrt      => { name: "sqrt",      arity: Arity::Exact(1),        func: sqrt::sqrt },
    Exp       => { name: "exp",       arity: Arity::Exact(1),        func: builtin::exp },
    Factorial => { name: "factorial", arity: Arity::Exact(1),        func: factorial::factorial },
    Degrees   => { name: "degrees",   arity: Arity::Exact(1),        func: builtin::degrees },
    Radians   => { name: "radians",   arity: Arity::Exact(1),        func: builtin::radians },
    Comb      => { name: "comb",      arity: Arity::Exact(2),        func: factorial::comb },
    Perm      => { name: "perm",      arity: Arity::OneOf(&[1, 2]),  func: factorial::perm },
    Gcd       => { name: "gcd",       arity: Arity::Variadic,        func: number_theory::gcd },
    Lcm       => { name: "lcm",       arity: Arity::Variadic,        func: number_theory::lcm },
    Hypot     => { name: "hypot",     arity: Arity::Variadic,        func: aggregate::hypot },
    Avg       => { name: "avg",       arity: Arity::Variadic,        func: aggregate::avg },
    Sum       => { name: "sum",       arity: Arity::Variadic,        func: aggregate::sum },
    Min       => { name: "min",       arity: Arity::Variadic,        func: |args, column| aggregate::min_max("min", args, column) },
    Max       => { name: "max",       arity: Arity::Variadic,        func: |args, column| aggregate::min_max("max", args, column) },
    Pct       => { name: "pct",       arity: Arity::Exact(2),        func: aggregate::pct },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
            Self::Variadic => true,
        }
    }

    /// Describes the accepted counts for error messages.
    fn describe(&self) -> String {
        match self {
            Self::Exact(m) => describe_counts(std::slice::from_ref(m)),
            Self::OneOf(arr) => describe_counts(arr),
            Self::Variadic => "any number of".to_string(),
        }
    }
}

impl Builtin {
    /// Finds a builtin by name.
    ///
    /// Names are case-sensitive.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::evaluator::function::core::Builtin;
    ///
    /// assert_eq!(Builtin::from_name("hypot"), Some(Builtin::Hypot));
    /// assert_eq!(Builtin::from_name("Hypot"), None);
    /// assert_eq!(Builtin::from_name("eval"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|b| b.name() == name)
    }

    /// Calls the builtin with positional arguments.
    ///
    /// # Errors
    /// Returns `ArgumentCountMismatch` if the number of arguments does not fit
    /// the builtin's arity, and otherwise whatever the builtin reports.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{evaluator::function::core::Builtin, value::core::Value};
    ///
    /// let r = Builtin::Hypot.call(&[Value::Integer(3), Value::Integer(4)], 1).unwrap();
    /// assert_eq!(r, Value::Real(5.0));
    /// assert!(Builtin::Sin.call(&[], 1).is_err());
    /// ```
    pub fn call(self, args: &[Value], column: usize) -> EvalResult<Value> {
        let arity = self.arity();
        if !arity.check(args.len()) {
            return Err(RuntimeError::ArgumentCountMismatch { function: self.name(),
                                                             expected: arity.describe(),
                                                             found: args.len(),
                                                             column });
        }
        (self.func())(args, column)
    }
}

impl Environment {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then the positional arguments and the
    /// keyword argument values, all from left to right. Only then is the
    /// callee checked:
    /// - a value that is not a function is a `NotCallable` error,
    /// - builtins take no keyword arguments,
    /// - otherwise the builtin is invoked with the positional values.
    ///
    /// # Parameters
    /// - `callee`: Expression producing the function.
    /// - `arguments`: Positional argument expressions.
    /// - `keywords`: Keyword arguments.
    /// - `column`: Column of the call for error reporting.
    ///
    /// # Returns
    /// The function result or an error if evaluation or the call fails.
    pub(crate) fn eval_call(&self,
                            callee: &Expr,
                            arguments: &[Expr],
                            keywords: &[KeywordArgument],
                            column: usize)
                            -> EvalResult<Value> {
        let function = self.eval(callee)?;
        let args = arguments.iter()
                            .map(|argument| self.eval(argument))
                            .collect::<EvalResult<Vec<_>>>()?;
        for keyword in keywords {
            self.eval(&keyword.value)?;
        }

        let Value::Function(builtin) = function else {
            return Err(RuntimeError::NotCallable { type_name: function.type_name(),
                                                   column });
        };
        if let Some(keyword) = keywords.first() {
            return Err(RuntimeError::UnexpectedKeyword { function: builtin.name(),
                                                         keyword:  keyword.name.clone(),
                                                         column:   keyword.column, });
        }

        builtin.call(&args, column)
    }
}

#[cfg(test)]
mod tests {
    use super::{BUILTIN_FUNCTIONS, Builtin};
    use crate::{error::RuntimeError, interpreter::value::core::Value};

    #[test]
    fn names_round_trip() {
        for name in BUILTIN_FUNCTIONS {
            assert_eq!(Builtin::from_name(name).map(Builtin::name), Some(*name));
        }
        assert_eq!(BUILTIN_FUNCTIONS.len(), Builtin::ALL.len());
    }

    #[test]
    fn arity_is_checked_before_dispatch() {
        let err = Builtin::Comb.call(&[Value::Integer(1)], 7).unwrap_err();
        assert_eq!(err,
                   RuntimeError::ArgumentCountMismatch { function: "comb",
                                                         expected: "exactly 2".to_string(),
                                                         found:    1,
                                                         column:   7, });

        let err = Builtin::Log.call(&[], 1).unwrap_err();
        assert!(matches!(err, RuntimeError::ArgumentCountMismatch { ref expected, .. } if expected == "1 or 2"));
    }
}
