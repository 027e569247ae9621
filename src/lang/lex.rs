use super::{token::*, Error};
use crate::error;

pub fn tokenize(s: &str) -> Result<TokenStream, Error> {
    CalcLexer::tokenize(s)
}

fn is_calc_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_calc_operator(c: char) -> bool {
    Operator::from_char(c).is_some()
}

struct CalcLexer;

impl CalcLexer {
    fn tokenize(s: &str) -> Result<TokenStream, Error> {
        let cleaned = Self::clean(s)?;
        let mut operands: Vec<f64> = vec![];
        let mut operators: Vec<Operator> = vec![];
        let mut chars = cleaned.chars().peekable();
        while let Some(pk) = chars.peek() {
            if is_calc_digit(*pk) {
                let mut digits = String::new();
                while let Some(pk) = chars.peek() {
                    if !is_calc_digit(*pk) {
                        break;
                    }
                    digits.push(*pk);
                    chars.next();
                }
                match digits.parse::<f64>() {
                    Ok(operand) => operands.push(operand),
                    Err(_) => return Err(error!(InvalidInput)),
                }
            } else {
                let mut run: Vec<Operator> = vec![];
                while let Some(pk) = chars.peek() {
                    match Operator::from_char(*pk) {
                        Some(op) => {
                            run.push(op);
                            chars.next();
                        }
                        None => break,
                    }
                }
                Self::flatten(&mut run);
                operators.append(&mut run);
            }
        }
        Ok(TokenStream {
            operands,
            operators,
            starts_with_operand: cleaned.chars().next().map_or(false, is_calc_digit),
            ends_with_operand: cleaned.chars().last().map_or(false, is_calc_digit),
        })
    }

    /// Strips whitespace and validates that every remaining character is a
    /// digit or a known operator.
    fn clean(s: &str) -> Result<String, Error> {
        let mut cleaned = String::new();
        let mut matched = 0;
        for (index, ch) in s.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            if !is_calc_digit(ch) && !is_calc_operator(ch) {
                return Err(error!(InvalidInput, ..&(index..index + 1)));
            }
            matched += 1;
            cleaned.push(ch);
        }
        if matched != cleaned.chars().count() {
            return Err(error!(InvalidInput));
        }
        Ok(cleaned)
    }

    /// Collapses a stacked run of adjacent operator characters, e.g. a user
    /// typing `+!` with no space. In-place operators survive, as does the
    /// final character of the run; combining operators anywhere else are
    /// dead, having been overridden before an operand arrived. `+!/+-c*`
    /// flattens to `!`, `c`, `*`.
    fn flatten(run: &mut Vec<Operator>) {
        let mut dead: Vec<usize> = vec![];
        for (index, op) in run.iter().enumerate() {
            if !op.is_in_place() && index + 1 != run.len() {
                dead.push(index);
            }
        }
        while let Some(index) = dead.pop() {
            run.remove(index);
        }
    }
}
