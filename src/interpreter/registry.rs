use std::collections::HashMap;

use crate::util::gamma;

/// Signature of a binary operator handler.
pub type BinaryFn = dyn Fn(f64, f64) -> f64 + Send + Sync;
/// Signature of a unary function handler.
pub type UnaryFn = dyn Fn(f64) -> f64 + Send + Sync;

/// The angle unit a single evaluation runs under.
///
/// Angle-sensitive builtins consult this unit: in degree mode `sin`, `cos`,
/// and `tan` convert their argument from degrees to radians before applying
/// the function, and `asin`, `acos`, and `atan` convert their radian result
/// to degrees afterwards. All other handlers ignore the unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    /// Trigonometric arguments and results are radians.
    #[default]
    Radians,
    /// Trigonometric arguments and results are degrees.
    Degrees,
}

impl AngleUnit {
    /// Converts a user-supplied angle into radians.
    pub(crate) fn angle_in(self, x: f64) -> f64 {
        match self {
            Self::Radians => x,
            Self::Degrees => x.to_radians(),
        }
    }

    /// Converts a radian result into the user's unit.
    pub(crate) fn angle_out(self, x: f64) -> f64 {
        match self {
            Self::Radians => x,
            Self::Degrees => x.to_degrees(),
        }
    }
}

/// A registered binary operator: its parse priority and its handler.
///
/// Higher priorities bind tighter; all operators are left-associative.
pub struct BinaryOp {
    priority: u8,
    handler:  Box<BinaryFn>,
}

impl BinaryOp {
    pub(crate) fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        (self.handler)(lhs, rhs)
    }

    pub(crate) const fn priority(&self) -> u8 {
        self.priority
    }
}

/// A registered unary function and its angle policy.
pub enum UnaryHandler {
    /// The handler is angle-agnostic.
    Plain(Box<UnaryFn>),
    /// The argument is an angle; it is converted to radians first.
    AngleIn(Box<UnaryFn>),
    /// The result is an angle in radians; it is converted afterwards.
    AngleOut(Box<UnaryFn>),
}

impl UnaryHandler {
    pub(crate) fn apply(&self, x: f64, unit: AngleUnit) -> f64 {
        match self {
            Self::Plain(f) => f(x),
            Self::AngleIn(f) => f(unit.angle_in(x)),
            Self::AngleOut(f) => unit.angle_out(f(x)),
        }
    }
}

/// The symbol tables backing one evaluation session.
///
/// Three independent mappings keyed by token text (binary operators, unary
/// functions, constants) plus the token list: every recognized token text,
/// kept sorted longest-first so the tokenizer's greedy scan matches `asin`
/// before `sin` regardless of registration order.
///
/// A `Registry` is a plain owned value; it is never global state. It is
/// mutated only by registration calls, which the session type exposes as
/// `&mut self` methods, so a shared registry can serve concurrent
/// evaluations without internal synchronization.
pub struct Registry {
    operators: HashMap<String, BinaryOp>,
    functions: HashMap<String, UnaryHandler>,
    constants: HashMap<String, String>,
    tokens:    Vec<String>,
}

impl Registry {
    /// Creates a registry holding only the structural parentheses tokens.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self { operators: HashMap::new(),
                                  functions: HashMap::new(),
                                  constants: HashMap::new(),
                                  tokens:    Vec::new(), };
        registry.add_token("(");
        registry.add_token(")");
        registry
    }

    /// Creates a registry pre-populated with the built-in vocabulary.
    ///
    /// Binary: `+ - * / ^ %`, with `+` and `-` at priority 1, `*` and `/`
    /// at 2, `%` and `^` at 3. The `%` builtin truncates both operands
    /// toward zero before taking the remainder, so `7.9 % 3.9` is `1` and
    /// `x % 0` is NaN.
    ///
    /// Unary: `+ - abs log2 lg ln sqrt !` (factorial via the gamma
    /// function), plus the angle-sensitive `sin cos tan asin acos atan`.
    ///
    /// Constants: `pi` and `e`, stored as decimal-string expansions.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();

        registry.add_operator("+", 1, |a, b| a + b);
        registry.add_operator("-", 1, |a, b| a - b);
        registry.add_operator("*", 2, |a, b| a * b);
        registry.add_operator("/", 2, |a, b| a / b);
        registry.add_operator("%", 3, |a: f64, b: f64| a.trunc() % b.trunc());
        registry.add_operator("^", 3, f64::powf);

        registry.add_function("+", |a| a);
        registry.add_function("-", |a| -a);
        registry.add_function("abs", f64::abs);
        registry.add_function("log2", f64::log2);
        registry.add_function("lg", f64::log10);
        registry.add_function("ln", f64::ln);
        registry.add_function("sqrt", f64::sqrt);
        registry.add_function("!", |a| gamma(a + 1.0));

        registry.add_angle_in("sin", f64::sin);
        registry.add_angle_in("cos", f64::cos);
        registry.add_angle_in("tan", f64::tan);
        registry.add_angle_out("asin", f64::asin);
        registry.add_angle_out("acos", f64::acos);
        registry.add_angle_out("atan", f64::atan);

        registry.add_constant("pi", std::f64::consts::PI);
        registry.add_constant("e", std::f64::consts::E);

        registry
    }

    /// Registers a binary operator.
    ///
    /// Re-registering an existing text overwrites its handler; last write
    /// wins. A priority of 0 is clamped to 1, since the parser treats
    /// priority 0 as "not a binary operator" and would never apply it.
    pub fn add_operator(&mut self,
                        text: &str,
                        priority: u8,
                        handler: impl Fn(f64, f64) -> f64 + Send + Sync + 'static) {
        self.operators.insert(text.to_string(),
                              BinaryOp { priority: priority.max(1),
                                         handler:  Box::new(handler), });
        self.add_token(text);
    }

    /// Registers a unary function, applied by prefixing its single operand.
    ///
    /// Re-registering an existing text overwrites its handler; last write
    /// wins.
    pub fn add_function(&mut self, text: &str, handler: impl Fn(f64) -> f64 + Send + Sync + 'static) {
        self.functions.insert(text.to_string(), UnaryHandler::Plain(Box::new(handler)));
        self.add_token(text);
    }

    /// Registers a constant under `text`.
    ///
    /// The value is stored as its decimal-string expansion and substituted
    /// textually by the tokenizer, so to the parser a constant is
    /// indistinguishable from a typed literal. Values whose expansion is not
    /// a plain literal (negative numbers, infinities, NaN) fail at
    /// evaluation time as a malformed leaf.
    pub fn add_constant(&mut self, text: &str, value: f64) {
        self.constants.insert(text.to_string(), value.to_string());
        self.add_token(text);
    }

    fn add_angle_in(&mut self, text: &str, handler: impl Fn(f64) -> f64 + Send + Sync + 'static) {
        self.functions.insert(text.to_string(), UnaryHandler::AngleIn(Box::new(handler)));
        self.add_token(text);
    }

    fn add_angle_out(&mut self, text: &str, handler: impl Fn(f64) -> f64 + Send + Sync + 'static) {
        self.functions.insert(text.to_string(), UnaryHandler::AngleOut(Box::new(handler)));
        self.add_token(text);
    }

    /// Looks up the handler for a binary operator token.
    pub(crate) fn operator(&self, text: &str) -> Option<&BinaryOp> {
        self.operators.get(text)
    }

    /// Looks up the handler for a unary function token.
    pub(crate) fn function(&self, text: &str) -> Option<&UnaryHandler> {
        self.functions.get(text)
    }

    /// Looks up the substitution text for a constant token.
    pub(crate) fn constant(&self, text: &str) -> Option<&str> {
        self.constants.get(text).map(String::as_str)
    }

    /// Returns the binary priority of a token: the registered priority for
    /// operators, 0 for everything else.
    pub(crate) fn priority(&self, text: &str) -> u8 {
        self.operators.get(text).map_or(0, BinaryOp::priority)
    }

    /// Every recognized token text, longest first.
    pub(crate) fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Inserts `text` into the token list, keeping it sorted by descending
    /// length so the greedy scan prefers longer matches. Duplicate texts
    /// (e.g. `-` registered as both operator and function) are kept once.
    fn add_token(&mut self, text: &str) {
        if self.tokens.iter().any(|t| t == text) {
            return;
        }
        let position = self.tokens
                           .iter()
                           .position(|t| t.len() < text.len())
                           .unwrap_or(self.tokens.len());
        self.tokens.insert(position, text.to_string());
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
