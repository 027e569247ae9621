/*!
## Machine Module

This module holds the calculator state machine and its arithmetic.

*/

mod evaluate;
mod operation;

pub use evaluate::Evaluator;
pub use evaluate::Pending;
pub use operation::Operation;
