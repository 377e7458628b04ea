/// An abstract syntax tree (AST) node representing an expression on a single
/// line.
///
/// `Expr` covers every construct the line grammar can produce: numeric
/// literals, variable lookups, references to earlier lines and binary
/// arithmetic. Every node records the column of the token it was built from so
/// that errors can point back into the line.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `42` or `.5`.
    Literal {
        /// The constant value.
        value:  f64,
        /// Column of the literal in the source line.
        column: usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable, exactly as written.
        name:   String,
        /// Column of the identifier in the source line.
        column: usize,
    },
    /// Reference to the computed value of an earlier line, written `#N`.
    LineRef {
        /// The 1-based number of the referenced line.
        line_number: usize,
        /// Column of the reference in the source line.
        column:      usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Column of the operator in the source line.
        column: usize,
    },
}

/// A complete line.
///
/// Every non-empty line parses to exactly one statement: either an assignment
/// that binds a variable for the following lines, or a bare expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `name = expression`
    Assignment {
        /// The variable being assigned.
        name:   String,
        /// The assigned expression.
        value:  Expr,
        /// Column of the variable name.
        column: usize,
    },
    /// An expression whose value is the line's result.
    Expression {
        /// The expression.
        expr:   Expr,
        /// Column where the expression starts.
        column: usize,
    },
}

/// The arithmetic operators understood by the line grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
