use crate::lang::token::Combining;

pub struct Operation {}

impl Operation {
    pub fn negate(val: f64) -> f64 {
        -val
    }

    /// Folds an operand into the accumulator. Division by zero is not
    /// guarded and follows IEEE-754 (signed infinity or NaN). Modulus is
    /// accepted by the lexer but has no evaluation rule; it leaves the
    /// accumulator unchanged.
    pub fn combine(op: Combining, lhs: f64, rhs: f64) -> f64 {
        use Combining::*;
        match op {
            Plus => lhs + rhs,
            Minus => lhs - rhs,
            Multiply => lhs * rhs,
            Divide => lhs / rhs,
            Modulus => lhs,
        }
    }
}
