/// An operator character, classified by how it consumes values.
///
/// Combining operators are binary and need an operand to the right of the
/// accumulator. In-place operators act on the accumulator alone.
#[derive(Debug, PartialEq, Clone)]
pub enum Operator {
    Combining(Combining),
    InPlace(InPlace),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Combining {
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulus,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum InPlace {
    Equal,
    Negate,
    Clear,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Operator> {
        use Combining::*;
        use InPlace::*;
        match ch {
            '+' => Some(Operator::Combining(Plus)),
            '-' => Some(Operator::Combining(Minus)),
            '*' => Some(Operator::Combining(Multiply)),
            '/' => Some(Operator::Combining(Divide)),
            '%' => Some(Operator::Combining(Modulus)),
            '=' => Some(Operator::InPlace(Equal)),
            '!' => Some(Operator::InPlace(Negate)),
            'c' => Some(Operator::InPlace(Clear)),
            _ => None,
        }
    }

    pub fn is_in_place(&self) -> bool {
        match self {
            Operator::InPlace(_) => true,
            Operator::Combining(_) => false,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Operator::Combining(op) => write!(f, "{}", op),
            Operator::InPlace(op) => write!(f, "{}", op),
        }
    }
}

impl std::fmt::Display for Combining {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Combining::*;
        match self {
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Modulus => write!(f, "%"),
        }
    }
}

impl std::fmt::Display for InPlace {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use InPlace::*;
        match self {
            Equal => write!(f, "="),
            Negate => write!(f, "!"),
            Clear => write!(f, "c"),
        }
    }
}

/// A tokenized input fragment.
///
/// Operands and operators interleave: two operands are always separated by at
/// least one operator, so the counts differ by at most one, as dictated by
/// the boundary flags.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct TokenStream {
    pub operands: Vec<f64>,
    pub operators: Vec<Operator>,
    pub starts_with_operand: bool,
    pub ends_with_operand: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char() {
        let t = Operator::from_char('+');
        assert_eq!(t, Some(Operator::Combining(Combining::Plus)));
        let t = Operator::from_char('c');
        assert_eq!(t, Some(Operator::InPlace(InPlace::Clear)));
        let t = Operator::from_char('?');
        assert_eq!(t, None);
    }
}
