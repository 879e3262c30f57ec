use logos::Logos;

use crate::{
    engine::{
        backend::core::{BackendKind, StackBackend},
        lexer::Token,
        number::Number,
    },
    error::EvalError,
};

/// Result type used by the evaluation engine.
///
/// All evaluation functions return either a value of type `T` or an
/// [`EvalError`] describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Observer notified after every reduction step.
///
/// The per-reduction trace is an injectable hook instead of a direct
/// console write, so shells can enable it and tests can leave it out.
/// Implementations must not influence evaluation; the observer sees
/// finished work only.
pub trait ReduceObserver {
    /// Called once per reduction with both operands, the operator, and the
    /// value pushed back on the stack.
    fn reduced(&mut self, left: &Number, op: char, right: &Number, result: &Number);
}

/// Returns the binding strength of a pending operator.
///
/// `+` and `-` bind at 1, `*`, `/` and `%` at 2; anything else — notably an
/// open parenthesis sitting on the operator stack — is lowest.
#[must_use]
pub const fn precedence(op: char) -> u8 {
    match op {
        '+' | '-' => 1,
        '*' | '/' | '%' => 2,
        _ => 0,
    }
}

/// Rewrites implicit multiplication into explicit form.
///
/// Every `(` immediately preceded by a digit or `)` gains a `*` in a single
/// left-to-right pass, so `2(3+4)` becomes `2*(3+4)` and `(1)(2)` becomes
/// `(1)*(2)`.
///
/// # Example
/// ```
/// use infixa::engine::eval::insert_implicit_multiplication;
///
/// assert_eq!(insert_implicit_multiplication("2(3+4)"), "2*(3+4)");
/// assert_eq!(insert_implicit_multiplication("(1)(2)"), "(1)*(2)");
/// assert_eq!(insert_implicit_multiplication("2*(3)"), "2*(3)");
/// ```
#[must_use]
pub fn insert_implicit_multiplication(expression: &str) -> String {
    let mut out = String::with_capacity(expression.len());
    let mut prev: Option<char> = None;

    for ch in expression.chars() {
        if ch == '(' && prev.is_some_and(|p| p.is_ascii_digit() || p == ')') {
            out.push('*');
        }
        out.push(ch);
        prev = Some(ch);
    }

    out
}

/// Evaluates infix expressions over a pluggable pair of stacks.
///
/// The engine owns one [`StackBackend`] chosen at construction and reuses it
/// across calls. Both stacks are cleared at the start of every call, so no
/// state survives between evaluations; an engine instance is single-threaded
/// and an `evaluate` call runs to completion or failure with no suspension
/// points.
///
/// The algorithm is a single left-to-right scan with classic precedence
/// climbing: literals go on the value stack, operators wait on the operator
/// stack until an incoming operator of lower or equal precedence (or a
/// closing parenthesis, or the end of input) forces them to reduce.
pub struct Engine {
    backend:  Box<dyn StackBackend>,
    observer: Option<Box<dyn ReduceObserver>>,
}

impl Engine {
    /// Creates an engine backed by the given storage strategy.
    #[must_use]
    pub fn new(kind: BackendKind) -> Self {
        Self::with_backend(kind.create())
    }
    /// Creates an engine over an explicit backend instance.
    #[must_use]
    pub fn with_backend(backend: Box<dyn StackBackend>) -> Self {
        Self { backend, observer: None }
    }
    /// Installs an observer notified after every reduction step.
    #[must_use]
    pub fn with_observer(mut self, observer: Box<dyn ReduceObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Evaluates an expression to a single [`Number`].
    ///
    /// The expression is expected to have passed
    /// [`validate`](crate::engine::validate::validate); the engine still
    /// fails with typed errors rather than panicking when handed something
    /// the checks let through.
    ///
    /// # Parameters
    /// - `expression`: The expression text, whitespace already stripped.
    ///
    /// # Returns
    /// - `Ok(Number)`: The single value left after the final reduction.
    /// - `Err(EvalError)`: Any evaluation failure; see [`EvalError`] for the
    ///   kinds.
    ///
    /// # Example
    /// ```
    /// use infixa::engine::{backend::core::BackendKind, eval::Engine};
    ///
    /// let mut engine = Engine::new(BackendKind::Array);
    ///
    /// let result = engine.evaluate("2+3*4").unwrap();
    /// assert_eq!(result.to_string(), "14");
    ///
    /// // The same engine can be reused; stacks reset on every call.
    /// let result = engine.evaluate("(2+3)*4").unwrap();
    /// assert_eq!(result.to_string(), "20");
    /// ```
    pub fn evaluate(&mut self, expression: &str) -> EvalResult<Number> {
        let expression = insert_implicit_multiplication(expression);
        self.backend.clear();

        let mut lexer = Token::lexer(&expression);
        while let Some(token) = lexer.next() {
            let Ok(token) = token else {
                let character = lexer.slice().chars().next().unwrap_or(' ');
                return Err(EvalError::UnexpectedCharacter { character });
            };

            match token {
                Token::Literal(raw) => {
                    let number = Number::parse(&raw)?;
                    self.backend.push_value(number)?;
                },

                Token::LParen => self.backend.push_op('(')?,

                Token::RParen => {
                    while !self.backend.is_op_empty() && self.backend.peek_op() != Some('(') {
                        self.reduce_top()?;
                    }
                    // The matching `(` is discarded; its absence means the
                    // aggregate balance check was fooled.
                    if self.backend.pop_op().is_none() {
                        return Err(EvalError::MismatchedParentheses);
                    }
                },

                other => {
                    let Some(op) = other.op_char() else {
                        return Err(EvalError::Internal { details: format!("unhandled token {other:?}") });
                    };
                    while self.backend
                              .peek_op()
                              .is_some_and(|top| top != '(' && precedence(top) >= precedence(op))
                    {
                        self.reduce_top()?;
                    }
                    self.backend.push_op(op)?;
                },
            }
        }

        while !self.backend.is_op_empty() {
            if matches!(self.backend.peek_op(), Some('(' | ')')) {
                return Err(EvalError::MismatchedParentheses);
            }
            self.reduce_top()?;
        }

        let result = self.backend.pop_value().ok_or_else(|| {
                         EvalError::Internal { details: "value stack empty after evaluation".to_string() }
                     })?;
        if self.backend.pop_value().is_some() {
            return Err(EvalError::Internal { details: "value stack not reduced to a single result".to_string() });
        }

        Ok(result)
    }

    /// Pops one operator and two values, applies, notifies the observer and
    /// pushes the result back.
    ///
    /// Underflow here means the expression slipped past validation with
    /// operators and operands out of balance; it is reported as an internal
    /// error rather than a user-facing one.
    fn reduce_top(&mut self) -> EvalResult<()> {
        let op = self.backend
                     .pop_op()
                     .ok_or_else(|| EvalError::Internal { details: "operator stack underflow".to_string() })?;
        let right = self.backend
                        .pop_value()
                        .ok_or_else(|| EvalError::Internal { details: "value stack underflow".to_string() })?;
        let left = self.backend
                       .pop_value()
                       .ok_or_else(|| EvalError::Internal { details: "value stack underflow".to_string() })?;

        let result = left.apply(op, right)?;

        if let Some(observer) = self.observer.as_mut() {
            observer.reduced(&left, op, &right, &result);
        }

        self.backend.push_value(result)
    }
}
