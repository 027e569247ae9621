use super::Operation;
use crate::lang::token::{InPlace, Operator, TokenStream};
use crate::lang::{tokenize, Error};

/// An operator left unresolved at the end of a prior fragment because no
/// operand followed it.
#[derive(Debug, PartialEq, Clone)]
pub enum Pending {
    Idle,
    Awaiting(Operator),
}

/// The calculator state machine.
///
/// Holds the accumulator carried across input fragments, the last value
/// meant for output, and any operator still awaiting its operand. One
/// instance per session; calls to [`Evaluator::evaluate`] must be
/// serialized by the caller.
#[derive(Debug, PartialEq, Clone)]
pub struct Evaluator {
    previous: f64,
    display: f64,
    pending: Pending,
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator {
            previous: 0.0,
            display: 0.0,
            pending: Pending::Idle,
        }
    }
}

impl Evaluator {
    pub fn new() -> Evaluator {
        Evaluator::default()
    }

    /// The accumulator after the last successful call.
    pub fn previous(&self) -> f64 {
        self.previous
    }

    /// The last value meant for output.
    pub fn display(&self) -> f64 {
        self.display
    }

    pub fn pending(&self) -> &Pending {
        &self.pending
    }

    /// Evaluates one input fragment against the retained state and returns
    /// the new display value. On invalid input the state is left untouched.
    pub fn evaluate(&mut self, raw: &str) -> Result<f64, Error> {
        let mut stream = tokenize(raw)?;
        let mid_combination = self.resolve_carryover(&mut stream);
        let mut working = self.previous;
        let mut operands = stream.operands.iter();
        if stream.starts_with_operand && !mid_combination {
            if let Some(first) = operands.next() {
                working = *first;
                self.display = *first;
            }
        }
        for operator in stream.operators.iter() {
            match operator {
                Operator::InPlace(op) => self.in_place(*op, &mut working),
                Operator::Combining(op) => match operands.next() {
                    Some(operand) => {
                        working = Operation::combine(*op, working, *operand);
                        self.display = working;
                    }
                    // Dangling operator, no operand arrived yet.
                    None => break,
                },
            }
        }
        if !stream.ends_with_operand {
            if let Some(last) = stream.operators.last() {
                self.pending = Pending::Awaiting(last.clone());
                self.display = working;
            }
        }
        self.previous = working;
        Ok(self.display)
    }

    /// Moves a pending combining operator back to the front of the stream.
    /// A pending in-place operator needed no operand and was already
    /// applied, so it is dropped.
    fn resolve_carryover(&mut self, stream: &mut TokenStream) -> bool {
        match std::mem::replace(&mut self.pending, Pending::Idle) {
            Pending::Awaiting(Operator::Combining(op)) => {
                stream.operators.insert(0, Operator::Combining(op));
                true
            }
            Pending::Awaiting(Operator::InPlace(_)) | Pending::Idle => false,
        }
    }

    fn in_place(&mut self, op: InPlace, working: &mut f64) {
        use InPlace::*;
        match op {
            Equal => self.display = *working,
            Negate => *working = Operation::negate(*working),
            Clear => {
                *working = 0.0;
                self.display = 0.0;
            }
        }
    }
}
