use crate::{engine::eval::EvalResult, error::EvalError, util::num::truncate_to_i64};

/// A tagged numeric value produced by literal parsing and reduction steps.
///
/// `Number` models the calculator's only runtime type: a 64-bit magnitude
/// together with a flag recording whether the value must be treated as
/// floating-point. The flag is set when a literal contains a decimal point
/// and propagates through arithmetic: a result is float-tagged whenever
/// either operand is.
///
/// Values are immutable once constructed; every reduction step builds a new
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Number {
    value:    f64,
    is_float: bool,
}

impl Number {
    /// Creates a value from an explicit magnitude and float tag.
    #[must_use]
    pub const fn new(value: f64, is_float: bool) -> Self {
        Self { value, is_float }
    }
    /// Parses a numeric token into a tagged value.
    ///
    /// The token must be a maximal run of digits with at most one decimal
    /// point. A token containing a decimal point produces a float-tagged
    /// value; any other token produces an integer-tagged one.
    ///
    /// # Parameters
    /// - `token`: The raw literal text.
    ///
    /// # Returns
    /// - `Ok(Number)`: The parsed value.
    /// - `Err(EvalError::MalformedLiteral)`: If the token is empty after
    ///   trimming, contains more than one decimal point, or does not parse
    ///   as a number. Validation normally guarantees this cannot happen.
    ///
    /// # Example
    /// ```
    /// use infixa::engine::number::Number;
    ///
    /// let n = Number::parse("3.14").unwrap();
    /// assert!(n.is_float());
    /// assert_eq!(n.value(), 3.14);
    ///
    /// let n = Number::parse("42").unwrap();
    /// assert!(n.is_integer());
    ///
    /// assert!(Number::parse("1.2.3").is_err());
    /// assert!(Number::parse("").is_err());
    /// ```
    pub fn parse(token: &str) -> EvalResult<Self> {
        let token = token.trim();

        if token.is_empty() || token.chars().filter(|&c| c == '.').count() > 1 {
            return Err(EvalError::MalformedLiteral { literal: token.to_string() });
        }

        let value = token.parse::<f64>()
                         .map_err(|_| EvalError::MalformedLiteral { literal: token.to_string() })?;

        Ok(Self { value,
                  is_float: token.contains('.') })
    }
    /// Applies a binary operator to two values.
    ///
    /// The result carries the float tag if either operand does. Division and
    /// modulo check the divisor's magnitude for exact zero, independent of
    /// its tag.
    ///
    /// # Parameters
    /// - `op`: One of `+ - * / %`.
    /// - `rhs`: The right-hand operand.
    ///
    /// # Returns
    /// - `Ok(Number)`: The computed value.
    /// - `Err(EvalError::DivisionByZero | ModuloByZero)`: If the divisor is
    ///   exactly zero.
    /// - `Err(EvalError::Internal)`: If `op` is not a supported operator.
    ///
    /// # Example
    /// ```
    /// use infixa::engine::number::Number;
    ///
    /// let a = Number::parse("3").unwrap();
    /// let b = Number::parse("4.0").unwrap();
    ///
    /// let sum = a.apply('+', b).unwrap();
    /// assert!(sum.is_float());
    /// assert_eq!(sum.to_string(), "7.00");
    ///
    /// assert!(a.apply('/', Number::parse("0").unwrap()).is_err());
    /// ```
    pub fn apply(self, op: char, rhs: Self) -> EvalResult<Self> {
        let is_float = self.is_float || rhs.is_float;

        let value = match op {
            '+' => self.value + rhs.value,
            '-' => self.value - rhs.value,
            '*' => self.value * rhs.value,
            '/' => {
                if rhs.value == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                self.value / rhs.value
            },
            '%' => {
                if rhs.value == 0.0 {
                    return Err(EvalError::ModuloByZero);
                }
                self.value % rhs.value
            },
            _ => {
                return Err(EvalError::Internal { details: format!("unknown operator '{op}'") });
            },
        };

        Ok(Self { value, is_float })
    }
    /// The raw 64-bit magnitude.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }
    /// Returns `true` if the value must be displayed as floating-point.
    #[must_use]
    pub const fn is_float(&self) -> bool {
        self.is_float
    }
    /// Returns `true` if the value is integer-tagged.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        !self.is_float
    }
}

impl From<i64> for Number {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self { value:    value as f64,
               is_float: false, }
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self { value, is_float: true }
    }
}

impl std::fmt::Display for Number {
    /// Integer-tagged values render as truncated integers; float-tagged
    /// values render with exactly two fractional digits.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_float {
            write!(f, "{:.2}", self.value)
        } else {
            write!(f, "{}", truncate_to_i64(self.value))
        }
    }
}
