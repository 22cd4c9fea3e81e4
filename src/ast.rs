/// A node in the expression tree built by the parser.
///
/// Arity is a property of the variant tag: a leaf carries no children, a
/// unary application exactly one, a binary application exactly two. Tokens
/// stay plain strings rather than a closed enum because the operator and
/// function vocabularies are extensible at runtime; whether a token has a
/// registered handler is only decided at evaluation time.
///
/// Trees are immutable once built and owned by the evaluation call; there is
/// no sharing between nodes and no cycles.
///
/// # Examples
/// ```
/// use numex::ast::Expr;
///
/// // The tree for "2 + 3".
/// let tree = Expr::binary("+", Expr::literal("2"), Expr::literal("3"));
/// assert_eq!(tree,
///            Expr::Binary { op:    "+".to_string(),
///                           left:  Box::new(Expr::Literal("2".to_string())),
///                           right: Box::new(Expr::Literal("3".to_string())), });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A leaf holding a numeric-literal lexeme (digits and at most one
    /// decimal point).
    Literal(String),
    /// A unary prefix application: a function name and its single operand.
    Unary {
        /// The function token, e.g. `sin` or `-`.
        op:      String,
        /// The operand subtree.
        operand: Box<Expr>,
    },
    /// A binary application: an operator and its two operands, in
    /// left-to-right order.
    Binary {
        /// The operator token, e.g. `+`.
        op:    String,
        /// The left operand subtree.
        left:  Box<Expr>,
        /// The right operand subtree.
        right: Box<Expr>,
    },
}

impl Expr {
    /// Builds a leaf node from a numeric-literal lexeme.
    #[must_use]
    pub fn literal(lexeme: impl Into<String>) -> Self {
        Self::Literal(lexeme.into())
    }

    /// Builds a unary application node.
    #[must_use]
    pub fn unary(op: impl Into<String>, operand: Self) -> Self {
        Self::Unary { op:      op.into(),
                      operand: Box::new(operand), }
    }

    /// Builds a binary application node.
    #[must_use]
    pub fn binary(op: impl Into<String>, left: Self, right: Self) -> Self {
        Self::Binary { op:    op.into(),
                       left:  Box::new(left),
                       right: Box::new(right), }
    }
}
