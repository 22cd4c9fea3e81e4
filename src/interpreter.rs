use crate::{
    ast::Expr,
    error::Error,
    interpreter::{
        evaluator::Evaluator,
        lexer::Lexer,
        registry::{AngleUnit, Registry},
    },
};

/// Reduces expression trees to numeric values.
///
/// The evaluator walks a tree in post-order, dispatching on the node
/// variant and resolving operator and function tokens through the
/// registry.
pub mod evaluator;
/// Splits an input line into tokens.
///
/// The lexer owns the cursor into the immutable input and performs greedy
/// longest-match scanning against the registry's token list, including the
/// textual substitution of constants.
pub mod lexer;
/// Builds expression trees from the token stream.
///
/// A precedence-climbing recursive-descent parser: simple expressions
/// (literals, parenthesized groups, unary prefixes) and binary chains
/// driven by per-operator priorities.
pub mod parser;
/// The extensible symbol tables.
///
/// Maps token texts to binary-operator handlers, unary-function handlers,
/// and constant substitutions, and maintains the longest-first token list
/// the lexer scans.
pub mod registry;

/// An evaluation session: a registry plus the entry points that run the
/// tokenize/parse/evaluate pipeline over it.
///
/// A `Context` owns its registry, so independent sessions with different
/// extensions can coexist. Registration requires `&mut self` and is
/// expected during setup; evaluation takes `&self` and holds no mutable
/// state, so a set-up `Context` can be shared across threads.
///
/// # Examples
/// ```
/// use numex::{AngleUnit, Context};
///
/// let mut context = Context::new();
/// context.register_function("sq", |x| x * x);
///
/// assert_eq!(context.eval("sq 4", AngleUnit::Radians).unwrap(), 16.0);
/// assert_eq!(context.eval("sq 2 + 1", AngleUnit::Radians).unwrap(), 5.0);
/// ```
pub struct Context {
    registry: Registry,
}

impl Context {
    /// Creates a session with the built-in operators, functions, and
    /// constants pre-registered.
    #[must_use]
    pub fn new() -> Self {
        Self { registry: Registry::with_builtins() }
    }

    /// Registers a binary operator under `text` with the given parse
    /// priority (1 binds loosest, like `+`; 3 binds tightest, like `^`).
    /// Re-registration overwrites; last write wins.
    pub fn register_operator(&mut self,
                             text: &str,
                             priority: u8,
                             handler: impl Fn(f64, f64) -> f64 + Send + Sync + 'static) {
        self.registry.add_operator(text, priority, handler);
    }

    /// Registers a unary prefix function under `text`. Re-registration
    /// overwrites; last write wins.
    pub fn register_function(&mut self,
                             text: &str,
                             handler: impl Fn(f64) -> f64 + Send + Sync + 'static) {
        self.registry.add_function(text, handler);
    }

    /// Registers a constant under `text`; its decimal expansion is
    /// substituted wherever the name appears in input.
    pub fn register_constant(&mut self, text: &str, value: f64) {
        self.registry.add_constant(text, value);
    }

    /// Evaluates one line of input under the given angle unit.
    ///
    /// The line is folded to lowercase, tokenized, parsed into a tree, and
    /// reduced to an `f64`. No state carries across calls: evaluating the
    /// same input twice always yields the same result.
    ///
    /// # Errors
    /// Returns an [`Error`] classifying the most specific failure; see
    /// [`crate::ErrorKind`].
    pub fn eval(&self, input: &str, unit: AngleUnit) -> Result<f64, Error> {
        let source = input.to_lowercase();
        let mut lexer = Lexer::new(&source);

        let expr = parser::parse(&mut lexer, &self.registry)?;
        let value = Evaluator::new(&self.registry, unit).eval(&expr)?;
        Ok(value)
    }

    /// Evaluates a caller-built expression tree against this session's
    /// registry.
    ///
    /// # Errors
    /// Returns an [`Error`] if a token in the tree has no registered
    /// handler for its arity, or a leaf is not a numeric literal.
    pub fn eval_expr(&self, expr: &Expr, unit: AngleUnit) -> Result<f64, Error> {
        let value = Evaluator::new(&self.registry, unit).eval(expr)?;
        Ok(value)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
