//! # Calc
//!
//! A four-function desk calculator with a persistent accumulator.
//!
//! Begin by opening a terminal and running the executable. Each line is
//! evaluated against the running value and the result is printed back.
//! Enter `q` to quit.
//! ```text
//! > 5+3
//! 8
//! > *2
//! 16
//! ```

pub mod lang;
pub mod mach;
pub mod term;
